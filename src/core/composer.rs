use serde::{Deserialize, Serialize};

use super::error::CreatorError;
use super::request::{AdRequest, GenerationMode, ImageData};

const LOGO_NOTE: &str = "\n\nREFERENCE - LOGO: The following image is the business logo. Incorporate it naturally into the ad design.";

const STORE_NOTE: &str = "\n\nREFERENCE - STORE PHOTO: The following image shows the actual store/location. Use it as visual reference for the style and atmosphere.";

/// Final prompt text plus the images embedded alongside it, in the order the
/// annotations refer to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposedPrompt {
    pub text: String,
    pub images: Vec<ImageData>,
}

/// Assemble the full prompt from an ad request.
///
/// The annotations are positional ("the following image..."), so text and
/// attachments are built from a single ordered list of (annotation, image)
/// pairs rather than appended field by field.
pub fn compose(request: &AdRequest) -> Result<ComposedPrompt, CreatorError> {
    request.validate()?;

    let mut text = request.base_prompt.clone();

    if let Some(location) = &request.location_type {
        text.push_str(&format!(
            "\n\nIMPORTANT CONTEXT - BUSINESS TYPE: {location}. The visual setting and objects should match a {location}, not a generic kiosk if they differ."
        ));
    }

    text.push_str(&format!(
        "\n\nAdditional details from partner: {}",
        request.user_prompt
    ));

    let mut attachments: Vec<(Option<&str>, &ImageData)> = Vec::new();

    if request.mode == GenerationMode::Product {
        if let Some(product) = &request.product_image {
            attachments.push((None, product));
        }
    }
    if let Some(logo) = &request.logo_image {
        attachments.push((Some(LOGO_NOTE), logo));
    }
    if let Some(store) = &request.store_image {
        attachments.push((Some(STORE_NOTE), store));
    }

    let mut images = Vec::with_capacity(attachments.len());
    for (note, image) in attachments {
        if let Some(note) = note {
            text.push_str(note);
        }
        images.push(image.clone());
    }

    Ok(ComposedPrompt { text, images })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "Create a high-quality, energetic social media advertisement.";

    #[test]
    fn text_mode_prompt_carries_business_type_and_details() {
        let request = AdRequest::text(BASE, "Friseur / Barbershop", "20% off first haircut");
        let composed = compose(&request).unwrap();

        assert!(composed.text.starts_with(BASE));
        assert!(composed
            .text
            .contains("IMPORTANT CONTEXT - BUSINESS TYPE: Friseur / Barbershop."));
        assert!(composed
            .text
            .contains("Additional details from partner: 20% off first haircut"));
        assert!(composed.images.is_empty());
    }

    #[test]
    fn product_mode_without_photo_never_composes() {
        let request = AdRequest::product(BASE, "Buy one get one free");
        assert!(matches!(
            compose(&request),
            Err(CreatorError::InvalidInput(_))
        ));
    }

    #[test]
    fn attachment_order_is_product_logo_store() {
        let product = ImageData::from_bytes(b"product", "image/jpeg");
        let logo = ImageData::from_bytes(b"logo", "image/png");
        let store = ImageData::from_bytes(b"store", "image/jpeg");

        let request = AdRequest::product(BASE, "Buy one get one free")
            .with_product_image(product.clone())
            .with_logo(logo.clone())
            .with_store_photo(store.clone());
        let composed = compose(&request).unwrap();

        assert_eq!(composed.images, vec![product, logo, store]);

        // Annotations appear after the partner details, in attachment order.
        let details = composed
            .text
            .find("Additional details from partner:")
            .unwrap();
        let logo_note = composed.text.find("REFERENCE - LOGO").unwrap();
        let store_note = composed.text.find("REFERENCE - STORE PHOTO").unwrap();
        assert!(details < logo_note);
        assert!(logo_note < store_note);
    }

    #[test]
    fn product_photo_is_not_annotated() {
        let request = AdRequest::product(BASE, "2 for 1")
            .with_product_image(ImageData::from_bytes(b"product", "image/jpeg"));
        let composed = compose(&request).unwrap();

        assert_eq!(composed.images.len(), 1);
        assert!(!composed.text.contains("REFERENCE"));
    }

    #[test]
    fn product_photo_is_ignored_in_text_mode() {
        let mut request = AdRequest::text(BASE, "Spätkauf / Kiosk", "Late night snacks");
        request.product_image = Some(ImageData::from_bytes(b"product", "image/jpeg"));
        let composed = compose(&request).unwrap();
        assert!(composed.images.is_empty());
    }

    #[test]
    fn data_uri_images_are_embedded_without_prefix() {
        let request = AdRequest::product(BASE, "50% off until midnight")
            .with_product_image(ImageData::from_base64("data:image/png;base64,AAAA"));
        let composed = compose(&request).unwrap();
        assert_eq!(composed.images[0].data, "AAAA");
    }

    #[test]
    fn logo_in_text_mode_is_annotated_and_embedded() {
        let logo = ImageData::from_bytes(b"logo", "image/png");
        let request = AdRequest::text(BASE, "Friseur / Barbershop", "New opening")
            .with_logo(logo.clone());
        let composed = compose(&request).unwrap();

        assert_eq!(composed.images, vec![logo]);
        assert!(composed.text.contains("REFERENCE - LOGO"));
        assert!(!composed.text.contains("REFERENCE - STORE PHOTO"));
    }
}
