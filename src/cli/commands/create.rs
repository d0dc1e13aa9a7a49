use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::{AdRequest, ImageData, LOCATION_TYPES};

#[derive(Args)]
pub struct CreateArgs {
    /// What the ad should be about
    #[arg(required_unless_present = "list_businesses")]
    pub prompt: Option<String>,

    /// Business type for the visual setting (defaults to the first preset)
    #[arg(short, long)]
    pub business: Option<String>,

    /// Business logo to incorporate into the design (image file)
    #[arg(short, long)]
    pub logo: Option<PathBuf>,

    /// Photo of the actual store/location, used as a style reference
    #[arg(long)]
    pub store_photo: Option<PathBuf>,

    /// List the business type presets and exit
    #[arg(long)]
    pub list_businesses: bool,

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

pub async fn run(args: CreateArgs, config: &Config) -> Result<()> {
    if args.list_businesses {
        for business in LOCATION_TYPES {
            println!("{business}");
        }
        return Ok(());
    }

    let business = args
        .business
        .clone()
        .unwrap_or_else(|| LOCATION_TYPES[0].to_string());

    let mut request = AdRequest::text(
        config.branding.effective_base_prompt(),
        business,
        args.prompt.clone().unwrap_or_default(),
    );

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
