use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use super::error::CreatorError;

/// Which form the partner filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Describe the ad in free text, anchored to a business type
    Text,
    /// Build the ad around an uploaded product photo
    Product,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Text => write!(f, "text"),
            GenerationMode::Product => write!(f, "product"),
        }
    }
}

/// An image attachment: raw base64 payload plus MIME type.
///
/// Only the bare payload is ever sent on the wire; data-URI prefixes are
/// stripped on ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub data: String,
    pub mime_type: String,
}

impl ImageData {
    /// Accepts either a bare base64 payload or a full `data:<mime>;base64,`
    /// URI.
    pub fn from_base64(value: &str) -> Self {
        if let Some(rest) = value.strip_prefix("data:") {
            if let Some((mime, payload)) = rest.split_once(";base64,") {
                return Self {
                    data: payload.to_string(),
                    mime_type: mime.to_string(),
                };
            }
        }
        Self {
            data: value.to_string(),
            mime_type: "image/jpeg".to_string(),
        }
    }

    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            data: BASE64.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Load an image file and encode as base64
    pub async fn from_file(path: &Path) -> Result<Self, CreatorError> {
        let bytes = fs::read(path).await?;
        Ok(Self::from_bytes(&bytes, mime_from_extension(path)))
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}

/// One ad submission, built fresh per generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdRequest {
    pub mode: GenerationMode,

    /// The partner's free-text input
    pub user_prompt: String,

    /// Platform style prompt prepended to every request
    pub base_prompt: String,

    /// Business type, present in text mode
    pub location_type: Option<String>,

    /// Product photo (required in product mode)
    pub product_image: Option<ImageData>,

    /// Business logo to incorporate into the design
    pub logo_image: Option<ImageData>,

    /// Photo of the actual store, used as a style reference
    pub store_image: Option<ImageData>,
}

impl AdRequest {
    pub fn text(
        base_prompt: impl Into<String>,
        location_type: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        Self {
            mode: GenerationMode::Text,
            user_prompt: user_prompt.into(),
            base_prompt: base_prompt.into(),
            location_type: Some(location_type.into()),
            product_image: None,
            logo_image: None,
            store_image: None,
        }
    }

    pub fn product(base_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            mode: GenerationMode::Product,
            user_prompt: user_prompt.into(),
            base_prompt: base_prompt.into(),
            location_type: None,
            product_image: None,
            logo_image: None,
            store_image: None,
        }
    }

    pub fn with_product_image(mut self, image: ImageData) -> Self {
        self.product_image = Some(image);
        self
    }

    pub fn with_logo(mut self, image: ImageData) -> Self {
        self.logo_image = Some(image);
        self
    }

    pub fn with_store_photo(mut self, image: ImageData) -> Self {
        self.store_image = Some(image);
        self
    }

    /// Check the per-mode required fields. Runs before composition, so an
    /// invalid submission never reaches the network.
    pub fn validate(&self) -> Result<(), CreatorError> {
        match self.mode {
            GenerationMode::Text => {
                if self.user_prompt.trim().is_empty() {
                    return Err(CreatorError::InvalidInput(
                        "Describe the ad before generating".to_string(),
                    ));
                }
            }
            GenerationMode::Product => {
                if self.product_image.is_none() {
                    return Err(CreatorError::InvalidInput(
                        "A product photo is required in product mode".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn data_uri_prefix_is_stripped() {
        let image = ImageData::from_base64("data:image/png;base64,AAAA");
        assert_eq!(image.data, "AAAA");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn bare_payload_passes_through() {
        let image = ImageData::from_base64("iVBORw0KGgo=");
        assert_eq!(image.data, "iVBORw0KGgo=");
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn data_uri_round_trip() {
        let image = ImageData::from_bytes(b"pixels", "image/png");
        let rewrapped = ImageData::from_base64(&image.to_data_uri());
        assert_eq!(rewrapped, image);
    }

    #[test]
    fn text_mode_requires_a_description() {
        let request = AdRequest::text("base", "Friseur / Barbershop", "   ");
        let err = request.validate().unwrap_err();
        assert!(matches!(err, CreatorError::InvalidInput(_)));
    }

    #[test]
    fn product_mode_requires_a_product_photo() {
        let request = AdRequest::product("base", "Buy one get one free");
        let err = request.validate().unwrap_err();
        assert!(matches!(err, CreatorError::InvalidInput(_)));

        let request = request.with_product_image(ImageData::from_bytes(b"img", "image/jpeg"));
        assert!(request.validate().is_ok());
    }
}
