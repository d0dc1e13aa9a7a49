use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::{AdRequest, ImageData};

#[derive(Args)]
pub struct BoostArgs {
    /// Path to the product photo the ad is built around
    #[arg(required = true)]
    pub image: PathBuf,

    /// The offer (e.g., "2 for 1", "50% off until midnight")
    #[arg(required = true)]
    pub prompt: String,

    /// Business logo to incorporate into the design (image file)
    #[arg(short, long)]
    pub logo: Option<PathBuf>,

    /// Photo of the actual store/location, used as a style reference
    #[arg(long)]
    pub store_photo: Option<PathBuf>,

    /// Output directory for the generated ad
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Don't save the image automatically
    #[arg(long)]
    pub no_save: bool,

    /// Output format (text, json, quiet)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub async fn run(args: BoostArgs, config: &Config) -> Result<()> {
    let image_path = args.image.canonicalize().context("Product photo not found")?;

    let product = ImageData::from_file(&image_path)
        .await
        .context("Failed to load product photo")?;

    let mut request = AdRequest::product(config.branding.effective_base_prompt(), &args.prompt)
        .with_product_image(product);

    if let Some(path) = &args.logo {
        let image = ImageData::from_file(path)
            .await
            .context("Failed to load logo image")?;
        request = request.with_logo(image);
    }

    if let Some(path) = &args.store_photo {
        let image = ImageData::from_file(path)
            .await
            .context("Failed to load store photo")?;
        request = request.with_store_photo(image);
    }

    super::run_generation(request, config, args.output, args.no_save, &args.format).await
}
