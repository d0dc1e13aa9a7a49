use crate::config::Config;
use crate::core::{GeneratedAd, GenerationMode, LOCATION_TYPES};
use anyhow::Result;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Connect an API key before anything else
    KeyEntry,
    /// The ad form
    Form,
    /// Viewing the generated ad
    Result,
    /// Saved prompt library
    Prompts,
    /// Settings screen
    Settings,
}

/// A row of the ad form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Mode,
    Business,
    ProductPhoto,
    Logo,
    StorePhoto,
    Offer,
    Generate,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Mode => "Mode",
            FormField::Business => "Business Type",
            FormField::ProductPhoto => "Product Photo",
            FormField::Logo => "Logo (optional)",
            FormField::StorePhoto => "Store Photo (optional)",
            FormField::Offer => "Offer / Description",
            FormField::Generate => "",
        }
    }

    /// Fields edited as free text
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FormField::ProductPhoto | FormField::Logo | FormField::StorePhoto | FormField::Offer
        )
    }
}

/// Settings field being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    BasePrompt,
    Model,
    OutputDirectory,
    AutoSave,
    Display,
    ShowImages,
    Theme,
}

impl SettingsField {
    pub fn all() -> &'static [SettingsField] {
        &[
            SettingsField::BasePrompt,
            SettingsField::Model,
            SettingsField::OutputDirectory,
            SettingsField::AutoSave,
            SettingsField::Display,
            SettingsField::ShowImages,
            SettingsField::Theme,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::BasePrompt => "Base Prompt",
            SettingsField::Model => "Model",
            SettingsField::OutputDirectory => "Output Directory",
            SettingsField::AutoSave => "Auto Save",
            SettingsField::Display => "Display Mode",
            SettingsField::ShowImages => "Show Previews",
            SettingsField::Theme => "Theme",
        }
    }

    pub fn config_key(&self) -> &'static str {
        match self {
            SettingsField::BasePrompt => "branding.base_prompt",
            SettingsField::Model => "api.model",
            SettingsField::OutputDirectory => "output.directory",
            SettingsField::AutoSave => "output.auto_save",
            SettingsField::Display => "output.display",
            SettingsField::ShowImages => "tui.show_images",
            SettingsField::Theme => "tui.theme",
        }
    }
}

/// TUI application state.
///
/// Single-writer: only the handler driving the current submission mutates
/// these fields, and `generating` gates resubmission while a call is in
/// flight.
pub struct App {
    /// Current mode
    pub mode: AppMode,

    /// Configuration
    pub config: Config,

    /// Selected generation mode
    pub gen_mode: GenerationMode,

    /// Index into the business type presets
    pub business_index: usize,

    /// The partner's free-text input
    pub offer: String,

    /// Image slot: product photo path
    pub product_path: String,

    /// Image slot: logo path
    pub logo_path: String,

    /// Image slot: store photo path
    pub store_path: String,

    /// Selected form row
    pub form_selected: usize,

    /// Editing a text field
    pub editing: bool,

    /// Edit buffer for the field being edited
    pub edit_buffer: String,

    /// Key entry buffer
    pub key_input: String,

    /// Last generated ad, replaced by the next generation
    pub result: Option<GeneratedAd>,

    /// Prompts screen: selected row
    pub prompt_selected: usize,

    /// Prompts screen: naming a new saved prompt
    pub naming_prompt: bool,

    /// Prompts screen: name buffer
    pub name_buffer: String,

    /// Settings: selected field index
    pub settings_selected: usize,

    /// Settings: currently editing
    pub settings_editing: bool,

    /// Settings: edit buffer
    pub settings_edit_buffer: String,

    /// Status message
    pub status_message: Option<String>,

    /// Error message
    pub error_message: Option<String>,

    /// Generation in progress
    pub generating: bool,

    /// Whether to quit
    pub should_quit: bool,

    /// Whether config was changed
    pub config_changed: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            mode: AppMode::Form,
            config,
            gen_mode: GenerationMode::Text,
            business_index: 0,
            offer: String::new(),
            product_path: String::new(),
            logo_path: String::new(),
            store_path: String::new(),
            form_selected: 0,
            editing: false,
            edit_buffer: String::new(),
            key_input: String::new(),
            result: None,
            prompt_selected: 0,
            naming_prompt: false,
            name_buffer: String::new(),
            settings_selected: 0,
            settings_editing: false,
            settings_edit_buffer: String::new(),
            status_message: None,
            error_message: None,
            generating: false,
            should_quit: false,
            config_changed: false,
        }
    }

    /// Form rows for the selected generation mode
    pub fn fields(&self) -> &'static [FormField] {
        match self.gen_mode {
            GenerationMode::Text => &[
                FormField::Mode,
                FormField::Business,
                FormField::Logo,
                FormField::StorePhoto,
                FormField::Offer,
                FormField::Generate,
            ],
            GenerationMode::Product => &[
                FormField::Mode,
                FormField::ProductPhoto,
                FormField::Offer,
                FormField::Generate,
            ],
        }
    }

    pub fn selected_field(&self) -> FormField {
        let fields = self.fields();
        fields[self.form_selected.min(fields.len() - 1)]
    }

    pub fn business(&self) -> &'static str {
        LOCATION_TYPES[self.business_index]
    }

    pub fn select_previous_field(&mut self) {
        if self.form_selected > 0 {
            self.form_selected -= 1;
        }
    }

    pub fn select_next_field(&mut self) {
        if self.form_selected < self.fields().len() - 1 {
            self.form_selected += 1;
        }
    }

    /// Switch between text and product mode. The row sets differ, so the
    /// selection resets.
    pub fn toggle_mode(&mut self) {
        self.gen_mode = match self.gen_mode {
            GenerationMode::Text => GenerationMode::Product,
            GenerationMode::Product => GenerationMode::Text,
        };
        self.form_selected = 0;
    }

    pub fn cycle_business(&mut self) {
        self.business_index = (self.business_index + 1) % LOCATION_TYPES.len();
    }

    /// Display value for a form row
    pub fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Mode => match self.gen_mode {
                GenerationMode::Text => "Creativity".to_string(),
                GenerationMode::Product => "Product Boost".to_string(),
            },
            FormField::Business => self.business().to_string(),
            FormField::ProductPhoto => placeholder(&self.product_path),
            FormField::Logo => placeholder(&self.logo_path),
            FormField::StorePhoto => placeholder(&self.store_path),
            FormField::Offer => placeholder(&self.offer),
            FormField::Generate => {
                if self.generating {
                    "Generating...".to_string()
                } else {
                    "▶ Create Ad".to_string()
                }
            }
        }
    }

    /// Raw value behind a text field
    fn text_field_value(&self, field: FormField) -> &str {
        match field {
            FormField::ProductPhoto => &self.product_path,
            FormField::Logo => &self.logo_path,
            FormField::StorePhoto => &self.store_path,
            FormField::Offer => &self.offer,
            _ => "",
        }
    }

    pub fn begin_edit(&mut self) {
        let field = self.selected_field();
        if field.is_text() {
            self.edit_buffer = self.text_field_value(field).to_string();
            self.editing = true;
        }
    }

    pub fn commit_edit(&mut self) {
        let value = self.edit_buffer.clone();
        match self.selected_field() {
            FormField::ProductPhoto => self.product_path = value,
            FormField::Logo => self.logo_path = value,
            FormField::StorePhoto => self.store_path = value,
            FormField::Offer => self.offer = value,
            _ => {}
        }
        self.editing = false;
        self.edit_buffer.clear();
    }

    /// Set status message
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
        self.status_message = None;
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }

    /// Get current settings value
    pub fn get_settings_value(&self, field: &SettingsField) -> String {
        self.config
            .get(field.config_key())
            .unwrap_or_default()
    }

    /// Set settings value
    pub fn set_settings_value(&mut self, field: &SettingsField, value: &str) -> Result<()> {
        self.config.set(field.config_key(), value)?;
        self.config_changed = true;
        Ok(())
    }

    /// Get options for a settings field (if applicable)
    pub fn get_settings_options(&self, field: &SettingsField) -> Option<Vec<&'static str>> {
        match field {
            SettingsField::Model => Some(Config::models().to_vec()),
            SettingsField::AutoSave => Some(vec!["true", "false"]),
            SettingsField::Display => Some(crate::config::DisplayMode::variants().to_vec()),
            SettingsField::ShowImages => Some(vec!["true", "false"]),
            SettingsField::Theme => Some(vec!["dark", "light"]),
            _ => None,
        }
    }

    /// Cycle to next option for a settings field
    pub fn cycle_settings_option(&mut self, field: &SettingsField) -> Result<()> {
        if let Some(options) = self.get_settings_options(field) {
            let current = self.get_settings_value(field);
            let current_idx = options.iter().position(|&o| o == current).unwrap_or(0);
            let next_idx = (current_idx + 1) % options.len();
            self.set_settings_value(field, options[next_idx])?;
        }
        Ok(())
    }
}

fn placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        "(none)".to_string()
    } else {
        value.to_string()
    }
}
