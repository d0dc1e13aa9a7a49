pub mod boost;
pub mod config;
pub mod create;
pub mod prompts;

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::api::GeminiClient;
use crate::config::{Config, DisplayMode};
use crate::core::{compose, AdRequest, GeneratedAd};
use crate::credentials::StoredCredentials;

/// Shared flow for the one-shot generation commands: validate and compose,
/// call the API once, save per config, print per format.
pub(crate) async fn run_generation(
    request: AdRequest,
    config: &Config,
    output: Option<PathBuf>,
    no_save: bool,
    format: &str,
) -> Result<()> {
    // Both of these fail before any network call
    let composed = compose(&request)?;
    let client = GeminiClient::new(&StoredCredentials::new(config), config)?;

    let pb = if format == "text" {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.yellow} {msg}")
                .unwrap(),
        );
        pb.set_message(format!(
            "Generating ad: {}...",
            preview(&request.user_prompt, 40)
        ));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let data_uri = match client.generate(&composed).await {
        Ok(uri) => uri,
        Err(e) => {
            if let Some(pb) = pb {
                pb.finish_with_message(format!("{} Generation failed", "✗".red()));
            }
            if format != "quiet" {
                eprintln!("{}: {}", "Error".red().bold(), e);
            }
            return Err(e.into());
        }
    };

    let ad = GeneratedAd::new(data_uri, request.user_prompt.clone());

    let output_dir = output.unwrap_or_else(|| PathBuf::from(&config.output.directory));
    let saved_path = if !no_save && config.output.auto_save {
        Some(ad.save_to(&output_dir).await?)
    } else {
        None
    };

    if let Some(pb) = &pb {
        pb.finish_with_message(match &saved_path {
            Some(path) => format!("{} Ad generated: {}", "✓".green(), path.display()),
            None => format!("{} Ad generated (not saved)", "✓".green()),
        });
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&ad)?);
        }
        "quiet" => {
            if let Some(path) = &saved_path {
                println!("{}", path.display());
            }
        }
        _ => {
            println!();
            println!("{}: {}", "Mode".cyan().bold(), request.mode);
            if let Some(business) = &request.location_type {
                println!("{}: {}", "Business".cyan().bold(), business);
            }
            println!("{}: {}", "Prompt".cyan().bold(), request.user_prompt);
            println!(
                "{}: {}",
                "Created".cyan().bold(),
                ad.created_at.format("%Y-%m-%d %H:%M:%S")
            );

            if let Some(path) = &saved_path {
                println!("{}: {}", "Saved".cyan().bold(), path.display());

                if config.output.display == DisplayMode::Terminal {
                    println!();
                    display_image_terminal(&path.to_string_lossy());
                }
            }
        }
    }

    Ok(())
}

fn preview(prompt: &str, max_len: usize) -> String {
    if prompt.chars().count() <= max_len {
        prompt.to_string()
    } else {
        let truncated: String = prompt.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Display an image in the terminal using viuer
fn display_image_terminal(path: &str) {
    let conf = viuer::Config {
        width: Some(40),
        height: Some(35),
        absolute_offset: false,
        ..Default::default()
    };

    if let Err(e) = viuer::print_from_file(path, &conf) {
        tracing::debug!("Failed to display image in terminal: {}", e);
    }
}
