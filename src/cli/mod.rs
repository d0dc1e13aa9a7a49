pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "adcraft",
    author = "Christian Weinmayr",
    version,
    about = "Adcraft - Generate 9:16 partner ads with Google Gemini",
    long_about = r#"Adcraft - Generate 9:16 partner ads with Google Gemini

Create vertical story-format advertisements for local business partners from
a short description or a product photo. Run without arguments to launch the
interactive form.

SETUP:
  Set your API key via environment variable or config:
    export GEMINI_API_KEY=your-key-here
    adcraft config set api.key your-key-here

EXAMPLES:
  Create an ad from a description:
    adcraft create "Late night snacks, party drinks"
    adcraft create "20% off first haircut" --business "Friseur / Barbershop"
    adcraft create "New opening" -b "Beauty / Nagelstudio" --logo logo.png

  Build an ad around a product photo:
    adcraft boost product.jpg "2 for 1 until midnight"
    adcraft boost doener.png "Buy one get one free" --store-photo store.jpg

  Manage the prompt library:
    adcraft prompts
    adcraft prompts save neon "Neon-drenched late night look..."
    adcraft prompts use sp_ab12cd34

  Manage configuration:
    adcraft config show
    adcraft config set branding.base_prompt "Clean daylight studio style..."

  Launch the interactive form:
    adcraft

OUTPUT FORMATS:
  --format text   Human-readable output (default)
  --format json   Machine-readable JSON for AI agents
  --format quiet  Minimal output, just the saved file path

Ads are always generated in a 9:16 vertical format at the standard resolution
tier; both are fixed platform requirements."#,
    after_help = r#"CONFIGURATION:
  Config file: ~/.config/adcraft-cli/config.toml (macOS/Linux)

  Available models:
    - gemini-3-pro-image-preview (default)
    - gemini-2.5-flash-image (fast)

MORE INFO:
  GitHub: https://github.com/christianweinmayr/adcraft-cli"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an ad from a free-text description
    ///
    /// Text mode: the visual setting follows the business type, and optional
    /// logo/store-photo references are embedded alongside the prompt.
    #[command(
        alias = "g",
        after_help = r#"EXAMPLES:
  Basic ad:
    adcraft create "Late night snacks, party drinks"

  With a business type:
    adcraft create "20% off first haircut" --business "Friseur / Barbershop"

  With brand references:
    adcraft create "New opening" --logo logo.png --store-photo store.jpg

  List the business type presets:
    adcraft create --list-businesses

  JSON output for AI agents:
    adcraft create "Fresh coffee deals" --format json"#
    )]
    Create(commands::create::CreateArgs),

    /// Build an ad around a product photo
    ///
    /// Product mode: the photo is embedded as the first image and the prompt
    /// describes the offer.
    #[command(
        alias = "b",
        after_help = r#"EXAMPLES:
  Promote a product:
    adcraft boost product.jpg "2 for 1 until midnight"

  With brand references:
    adcraft boost doener.png "Buy one get one free" --logo logo.png"#
    )]
    Boost(commands::boost::BoostArgs),

    /// Manage the saved prompt library
    ///
    /// Up to five named base prompts; the active one replaces the default
    /// base prompt for subsequent generations.
    #[command(
        alias = "p",
        after_help = r#"EXAMPLES:
  List saved prompts:
    adcraft prompts

  Save and activate a prompt:
    adcraft prompts save neon "Neon-drenched late night look..."
    adcraft prompts use sp_ab12cd34

  Back to the default:
    adcraft prompts clear"#
    )]
    Prompts(commands::prompts::PromptsArgs),

    /// View or modify configuration
    ///
    /// Manage the API key, model, base prompt and output settings.
    /// Changes are saved to the config file immediately.
    #[command(
        alias = "c",
        after_help = r#"EXAMPLES:
  Show all settings:
    adcraft config show

  Set values:
    adcraft config set api.key YOUR_API_KEY
    adcraft config set branding.base_prompt "Clean daylight studio style..."
    adcraft config set output.directory ~/Pictures/partner-ads

AVAILABLE SETTINGS:
  api.key              - Gemini API key
  api.model            - Model to use
  api.base_url         - API base URL
  branding.base_prompt - Base prompt prepended to every request
  output.directory     - Where to save generated ads
  output.auto_save     - Save ads automatically (true/false)
  output.display       - Display mode (terminal/viewer/none)
  tui.show_images      - Show previews in the interactive form (true/false)
  tui.theme            - TUI theme (dark/light)"#
    )]
    Config(commands::config::ConfigArgs),
}
