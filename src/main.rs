use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod cli;
mod config;
mod core;
mod credentials;
mod http_client;
mod tui;

use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load_or_create()?;

    match cli.command {
        Some(Commands::Create(args)) => {
            cli::commands::create::run(args, &config).await?;
        }
        Some(Commands::Boost(args)) => {
            cli::commands::boost::run(args, &config).await?;
        }
        Some(Commands::Prompts(args)) => {
            cli::commands::prompts::run(args, &mut config)?;
        }
        Some(Commands::Config(args)) => {
            cli::commands::config::run(args, &mut config)?;
        }
        None => {
            // Launch the interactive form
            tui::run(&mut config).await?;
        }
    }

    Ok(())
}
