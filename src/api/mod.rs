mod types;

pub use types::*;

use crate::config::Config;
use crate::core::{ComposedPrompt, CreatorError};
use crate::credentials::CredentialSource;
use crate::http_client::HTTP_CLIENT;

/// Platform requirement: partner ads are vertical stories
pub const AD_ASPECT_RATIO: &str = "9:16";
/// Platform requirement: standard resolution tier
pub const AD_IMAGE_SIZE: &str = "1K";

/// Gemini API client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client. The credential is obtained up front, so a missing
    /// key fails here, before any network I/O.
    pub fn new(credentials: &dyn CredentialSource, config: &Config) -> Result<Self, CreatorError> {
        let api_key = credentials.obtain()?;

        Ok(Self {
            api_key,
            base_url: config.api.base_url.clone(),
            model: config.api.model.clone(),
        })
    }

    /// Send one composed prompt and return the generated ad as a PNG data URI
    pub async fn generate(&self, composed: &ComposedPrompt) -> Result<String, CreatorError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = build_generate_request(composed);

        tracing::debug!("Sending generate request to: {}", url);
        tracing::debug!(
            "Prompt length: {} chars, {} embedded image(s)",
            composed.text.len(),
            composed.images.len()
        );

        let response = HTTP_CLIENT.post(&url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            let error: ApiErrorResponse =
                serde_json::from_str(&body).unwrap_or_else(|_| ApiErrorResponse {
                    error: ApiError {
                        code: status.as_u16() as i32,
                        message: body.clone(),
                        status: status.to_string(),
                    },
                });
            return Err(CreatorError::ApiError {
                message: error.error.message,
                source: None,
            });
        }

        let response: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| CreatorError::InvalidResponse(format!("Failed to parse Gemini API response: {e}")))?;

        extract_image(response)
    }
}

/// Build the API request body: the composed text first, then the embedded
/// images in composer order. Aspect ratio and size are fixed by the platform.
fn build_generate_request(composed: &ComposedPrompt) -> GenerateRequest {
    let mut parts = vec![ContentPart::Text {
        text: composed.text.clone(),
    }];

    for image in &composed.images {
        parts.push(ContentPart::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        });
    }

    GenerateRequest {
        contents: vec![Content { parts, role: None }],
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            image_config: Some(ImageConfig {
                aspect_ratio: Some(AD_ASPECT_RATIO.to_string()),
                image_size: Some(AD_IMAGE_SIZE.to_string()),
            }),
        }),
        safety_settings: None,
    }
}

/// Take the first inline-image part across candidates, re-wrapped as a data
/// URI. A response without one is a definitive failure, not retried.
fn extract_image(response: GenerateResponse) -> Result<String, CreatorError> {
    for candidate in response.candidates.unwrap_or_default() {
        // Refusal/recitation surfaces the service's message
        if let Some(reason) = &candidate.finish_reason {
            if reason != "STOP" && reason != "MAX_TOKENS" {
                let message = candidate
                    .finish_message
                    .as_deref()
                    .unwrap_or("Image generation was refused by the API");
                tracing::warn!("Generation refused: {} - {}", reason, message);
                return Err(CreatorError::ApiError {
                    message: message.to_string(),
                    source: None,
                });
            }
        }

        if let Some(content) = candidate.content {
            for part in content.parts {
                match part {
                    ContentPart::InlineData { inline_data } => {
                        return Ok(format!("data:image/png;base64,{}", inline_data.data));
                    }
                    ContentPart::Text { text } => {
                        tracing::debug!("Response text: {}", text);
                    }
                }
            }
        }
    }

    Err(CreatorError::NoImageGenerated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{compose, AdRequest, ImageData};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse_response(value: serde_json::Value) -> GenerateResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_body_is_text_then_images_with_fixed_config() {
        let request = AdRequest::product("Base prompt.", "Buy one get one free")
            .with_product_image(ImageData::from_bytes(b"product", "image/jpeg"))
            .with_logo(ImageData::from_base64("data:image/png;base64,AAAA"));
        let composed = compose(&request).unwrap();

        let body = serde_json::to_value(build_generate_request(&composed)).unwrap();
        let parts = body["contents"][0]["parts"].as_array().unwrap();

        assert_eq!(parts.len(), 3);
        assert!(parts[0]["text"].as_str().unwrap().starts_with("Base prompt."));
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[2]["inlineData"]["data"], "AAAA");

        let image_config = &body["generation_config"]["image_config"];
        assert_eq!(image_config["aspect_ratio"], "9:16");
        assert_eq!(image_config["image_size"], "1K");
    }

    #[test]
    fn text_only_request_sends_a_single_part() {
        let request = AdRequest::text("Base prompt.", "Friseur / Barbershop", "20% off");
        let composed = compose(&request).unwrap();

        let body = serde_json::to_value(build_generate_request(&composed)).unwrap();
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn first_inline_image_is_rewrapped_as_png_data_uri() {
        let response = parse_response(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is your ad"},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                    ]
                },
                "finishReason": "STOP"
            }]
        }));

        let uri = extract_image(response).unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn text_only_candidates_fail_with_no_image_generated() {
        let response = parse_response(json!({
            "candidates": [{
                "content": {"parts": [{"text": "sorry, words only"}]},
                "finishReason": "STOP"
            }]
        }));

        assert!(matches!(
            extract_image(response),
            Err(CreatorError::NoImageGenerated)
        ));
    }

    #[test]
    fn empty_candidate_list_fails_with_no_image_generated() {
        let response = parse_response(json!({"candidates": []}));
        assert!(matches!(
            extract_image(response),
            Err(CreatorError::NoImageGenerated)
        ));

        let response = parse_response(json!({}));
        assert!(matches!(
            extract_image(response),
            Err(CreatorError::NoImageGenerated)
        ));
    }

    #[test]
    fn refusals_surface_the_service_message() {
        let response = parse_response(json!({
            "candidates": [{
                "finishReason": "SAFETY",
                "finishMessage": "blocked by policy"
            }]
        }));

        match extract_image(response) {
            Err(CreatorError::ApiError { message, .. }) => assert_eq!(message, "blocked by policy"),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }
}
