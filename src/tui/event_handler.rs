use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::{Path, PathBuf};

use super::app::{App, AppMode, FormField, SettingsField};
use crate::api::GeminiClient;
use crate::core::{compose, AdRequest, CreatorError, GeneratedAd, GenerationMode, ImageData};
use crate::credentials::{CredentialSource, StoredCredentials};

/// Handle input on the key entry screen
pub fn handle_key_entry(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
        }

        KeyCode::Enter => {
            let value = app.key_input.trim().to_string();
            if value.is_empty() {
                app.set_error("Enter an API key to continue");
                return Ok(());
            }

            app.config.set("api.key", &value)?;
            app.config_changed = true;

            // Re-check instead of assuming the entry worked
            if StoredCredentials::new(&app.config).has_credential() {
                app.key_input.clear();
                app.mode = AppMode::Form;
                app.set_status("API key connected");
            } else {
                app.set_error("API key could not be stored");
            }
        }

        KeyCode::Char(c) => {
            app.key_input.push(c);
        }

        KeyCode::Backspace => {
            app.key_input.pop();
        }

        _ => {}
    }
    Ok(())
}

/// Handle input on the form screen
pub async fn handle_form_input(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.editing {
        match key.code {
            KeyCode::Esc => {
                app.editing = false;
                app.edit_buffer.clear();
            }

            KeyCode::Enter => {
                app.commit_edit();
            }

            KeyCode::Char(c) => {
                app.edit_buffer.push(c);
            }

            KeyCode::Backspace => {
                app.edit_buffer.pop();
            }

            _ => {}
        }
        return Ok(());
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_field(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_field(),

        // Mode switch from anywhere on the form
        KeyCode::Tab => {
            app.toggle_mode();
            app.clear_messages();
        }

        KeyCode::Enter => match app.selected_field() {
            FormField::Mode => {
                app.toggle_mode();
                app.clear_messages();
            }
            FormField::Business => app.cycle_business(),
            FormField::Generate => submit(app).await?,
            field if field.is_text() => app.begin_edit(),
            _ => {}
        },

        // View last result
        KeyCode::Char('r') => {
            if app.result.is_some() {
                app.mode = AppMode::Result;
            }
        }

        // Prompt library
        KeyCode::Char('p') => {
            app.mode = AppMode::Prompts;
            app.prompt_selected = 0;
            app.clear_messages();
        }

        // Open settings
        KeyCode::Char('s') => {
            app.mode = AppMode::Settings;
            app.settings_selected = 0;
            app.settings_editing = false;
            app.clear_messages();
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        _ => {}
    }
    Ok(())
}

/// Handle input on the result screen
pub async fn handle_result_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => {
            app.mode = AppMode::Form;
        }

        // Download
        KeyCode::Char('d') => {
            if let Some(ad) = app.result.clone() {
                let dir = PathBuf::from(&app.config.output.directory);
                match ad.save_to(&dir).await {
                    Ok(path) => app.set_status(format!("Saved: {}", path.display())),
                    Err(e) => app.set_error(e.to_string()),
                }
            }
        }

        _ => {}
    }
    Ok(())
}

/// Handle input on the prompt library screen
pub fn handle_prompts_input(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.naming_prompt {
        match key.code {
            KeyCode::Esc => {
                app.naming_prompt = false;
                app.name_buffer.clear();
            }

            KeyCode::Enter => {
                let name = app.name_buffer.trim().to_string();
                if name.is_empty() {
                    app.set_error("A name is required");
                    return Ok(());
                }

                let prompt_text = app.config.branding.base_prompt.clone();
                match app.config.branding.save_prompt(&name, prompt_text) {
                    Ok(_) => {
                        app.config_changed = true;
                        app.set_status(format!("Saved prompt: {name}"));
                    }
                    Err(e) => app.set_error(e.to_string()),
                }
                app.naming_prompt = false;
                app.name_buffer.clear();
            }

            KeyCode::Char(c) => {
                app.name_buffer.push(c);
            }

            KeyCode::Backspace => {
                app.name_buffer.pop();
            }

            _ => {}
        }
        return Ok(());
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            if app.prompt_selected > 0 {
                app.prompt_selected -= 1;
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.prompt_selected + 1 < app.config.branding.saved_prompts.len() {
                app.prompt_selected += 1;
            }
        }

        // Toggle active prompt
        KeyCode::Enter => {
            if let Some(saved) = app.config.branding.saved_prompts.get(app.prompt_selected) {
                let id = saved.id.clone();
                let name = saved.name.clone();

                if app.config.branding.active_prompt_id.as_deref() == Some(id.as_str()) {
                    app.config.branding.clear_active();
                    app.set_status("Using the default base prompt");
                } else if let Err(e) = app.config.branding.set_active(&id) {
                    app.set_error(e.to_string());
                } else {
                    app.set_status(format!("Active prompt: {name}"));
                }
                app.config_changed = true;
            }
        }

        // Delete prompt
        KeyCode::Char('d') => {
            if let Some(saved) = app.config.branding.saved_prompts.get(app.prompt_selected) {
                let id = saved.id.clone();
                app.config.branding.remove_prompt(&id);
                app.config_changed = true;

                let count = app.config.branding.saved_prompts.len();
                if app.prompt_selected >= count && count > 0 {
                    app.prompt_selected = count - 1;
                }
                app.set_status(format!("Deleted prompt: {id}"));
            }
        }

        // Save the current base prompt under a new name
        KeyCode::Char('n') => {
            if app.config.branding.can_save() {
                app.naming_prompt = true;
            } else {
                app.set_error("Prompt library is full (5 saved prompts max)");
            }
        }

        KeyCode::Esc | KeyCode::Char('q') => {
            app.mode = AppMode::Form;
            app.clear_messages();
        }

        _ => {}
    }
    Ok(())
}

/// Handle input in settings mode
pub fn handle_settings_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let fields = SettingsField::all();

    if app.settings_editing {
        // Editing a text field
        match key.code {
            KeyCode::Esc => {
                app.settings_editing = false;
                app.settings_edit_buffer.clear();
            }

            KeyCode::Enter => {
                let field = fields[app.settings_selected];
                let value = app.settings_edit_buffer.clone();
                if let Err(e) = app.set_settings_value(&field, &value) {
                    app.set_error(e.to_string());
                } else {
                    app.set_status(format!("Updated {}", field.label()));
                }
                app.settings_editing = false;
                app.settings_edit_buffer.clear();
            }

            KeyCode::Char(c) => {
                app.settings_edit_buffer.push(c);
            }

            KeyCode::Backspace => {
                app.settings_edit_buffer.pop();
            }

            _ => {}
        }
    } else {
        // Navigation
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if app.settings_selected > 0 {
                    app.settings_selected -= 1;
                }
            }

            KeyCode::Down | KeyCode::Char('j') => {
                if app.settings_selected < fields.len() - 1 {
                    app.settings_selected += 1;
                }
            }

            KeyCode::Enter | KeyCode::Char(' ') => {
                let field = &fields[app.settings_selected];

                // Check if this field has options to cycle
                if app.get_settings_options(field).is_some() {
                    app.cycle_settings_option(field)?;
                    app.set_status(format!("Updated {}", field.label()));
                } else {
                    // Enter edit mode for text fields
                    app.settings_editing = true;
                    app.settings_edit_buffer = app.get_settings_value(field);
                }
            }

            KeyCode::Esc | KeyCode::Char('q') => {
                app.mode = AppMode::Form;
                app.clear_messages();
            }

            _ => {}
        }
    }
    Ok(())
}

/// Drive one generation from the current form state
async fn submit(app: &mut App) -> Result<()> {
    // One generation in flight; the submit control is a no-op while busy
    if app.generating {
        return Ok(());
    }

    let credentials = StoredCredentials::new(&app.config);
    if !credentials.has_credential() {
        app.mode = AppMode::KeyEntry;
        return Ok(());
    }

    app.clear_messages();
    app.generating = true;

    // A failure clears the busy flag and leaves the previous result intact
    match run_generation(app).await {
        Ok(ad) => {
            app.result = Some(ad);
            app.mode = AppMode::Result;
            app.set_status("Ad generated");
        }
        Err(e) => app.set_error(e.to_string()),
    }

    app.generating = false;
    Ok(())
}

async fn run_generation(app: &App) -> Result<GeneratedAd, CreatorError> {
    let base_prompt = app.config.branding.effective_base_prompt().to_string();

    let mut request = match app.gen_mode {
        GenerationMode::Text => AdRequest::text(base_prompt, app.business(), app.offer.clone()),
        GenerationMode::Product => {
            let mut request = AdRequest::product(base_prompt, app.offer.clone());
            if !app.product_path.trim().is_empty() {
                request = request.with_product_image(load_slot(&app.product_path).await?);
            }
            request
        }
    };

    if app.gen_mode == GenerationMode::Text {
        if !app.logo_path.trim().is_empty() {
            request = request.with_logo(load_slot(&app.logo_path).await?);
        }
        if !app.store_path.trim().is_empty() {
            request = request.with_store_photo(load_slot(&app.store_path).await?);
        }
    }

    // InvalidInput and MissingApiKey both surface before the network call
    let composed = compose(&request)?;
    let client = GeminiClient::new(&StoredCredentials::new(&app.config), &app.config)?;
    let data_uri = client.generate(&composed).await?;

    Ok(GeneratedAd::new(data_uri, request.user_prompt))
}

async fn load_slot(path: &str) -> Result<ImageData, CreatorError> {
    ImageData::from_file(Path::new(path.trim())).await
}
