use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::config::Config;
use crate::core::MAX_SAVED_PROMPTS;

#[derive(Args)]
pub struct PromptsArgs {
    #[command(subcommand)]
    pub command: Option<PromptsCommand>,
}

#[derive(Subcommand)]
pub enum PromptsCommand {
    /// List saved prompts
    List,

    /// Save a named base prompt (up to 5)
    Save {
        /// Short name for the prompt
        name: String,
        /// The base prompt text
        prompt: String,
    },

    /// Use a saved prompt for subsequent generations
    Use {
        /// Saved prompt id (e.g., sp_ab12cd34)
        id: String,
    },

    /// Delete a saved prompt
    Delete {
        /// Saved prompt id
        id: String,
    },

    /// Go back to the default base prompt
    Clear,
}

pub fn run(args: PromptsArgs, config: &mut Config) -> Result<()> {
    match args.command {
        Some(PromptsCommand::List) | None => list_prompts(config),
        Some(PromptsCommand::Save { name, prompt }) => save_prompt(&name, &prompt, config),
        Some(PromptsCommand::Use { id }) => use_prompt(&id, config),
        Some(PromptsCommand::Delete { id }) => delete_prompt(&id, config),
        Some(PromptsCommand::Clear) => clear_active(config),
    }
}

fn list_prompts(config: &Config) -> Result<()> {
    let settings = &config.branding;

    println!(
        "{} ({}/{})",
        "Saved Prompts".cyan().bold(),
        settings.saved_prompts.len(),
        MAX_SAVED_PROMPTS
    );
    println!();

    if settings.saved_prompts.is_empty() {
        println!("{}", "(no saved prompts)".dimmed());
        return Ok(());
    }

    for saved in &settings.saved_prompts {
        let marker = if settings.active_prompt_id.as_deref() == Some(saved.id.as_str()) {
            "●".green()
        } else {
            " ".normal()
        };
        println!(
            "{} {}  {}",
            marker,
            saved.id.cyan(),
            saved.name.bold()
        );
        println!("    {}", saved.prompt.dimmed());
    }

    println!();
    match settings.active_prompt() {
        Some(active) => println!("Active: {}", active.name.green()),
        None => println!("Active: {}", "(default base prompt)".dimmed()),
    }

    Ok(())
}

fn save_prompt(name: &str, prompt: &str, config: &mut Config) -> Result<()> {
    let id = config.branding.save_prompt(name, prompt)?.id.clone();
    config.save()?;

    println!("{} Saved prompt {} ({})", "✓".green(), name.cyan(), id);
    Ok(())
}

fn use_prompt(id: &str, config: &mut Config) -> Result<()> {
    config.branding.set_active(id)?;
    config.save()?;

    let name = config
        .branding
        .active_prompt()
        .map(|p| p.name.clone())
        .unwrap_or_default();
    println!("{} Active prompt: {}", "✓".green(), name.cyan());
    Ok(())
}

fn delete_prompt(id: &str, config: &mut Config) -> Result<()> {
    if config.branding.remove_prompt(id) {
        config.save()?;
        println!("{} Deleted prompt {}", "✓".green(), id.cyan());
    } else {
        eprintln!("{}: Unknown saved prompt '{}'", "Error".red().bold(), id);
    }
    Ok(())
}

fn clear_active(config: &mut Config) -> Result<()> {
    config.branding.clear_active();
    config.save()?;

    println!("{} Using the default base prompt", "✓".green());
    Ok(())
}
