use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::CreatorError;

/// Prepended to every request to keep the platform style consistent
pub const DEFAULT_BASE_PROMPT: &str = "Create a high-quality, energetic social media advertisement for a local business partner. The image should be in a 9:16 vertical format suitable for stories. Make it look professional, appealing, and authentic to the business type.";

/// Business type presets offered by the form
pub const LOCATION_TYPES: &[&str] = &[
    "Spätkauf / Kiosk",
    "Gastronomie (Imbiss, Café)",
    "Paketshop (DPD/DHL/Hermes)",
    "Schlüsseldienst",
    "Friseur / Barbershop",
    "Beauty / Nagelstudio",
    "Handy-Reparatur",
    "Sonstiges",
];

pub const MAX_SAVED_PROMPTS: usize = 5;

/// A named base prompt kept in the prompt library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPrompt {
    /// Unique token (e.g., "sp_ab12cd34")
    pub id: String,
    pub name: String,
    pub prompt: String,
}

impl SavedPrompt {
    fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        let uuid = Uuid::new_v4();
        Self {
            id: format!("sp_{}", &uuid.to_string()[..8]),
            name: name.into(),
            prompt: prompt.into(),
        }
    }
}

/// Admin settings for ad generation.
///
/// `active_prompt_id`, when set, always references an element of
/// `saved_prompts`; every mutation that invalidates the reference clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSettings {
    #[serde(default = "default_base_prompt")]
    pub base_prompt: String,

    #[serde(default)]
    pub active_prompt_id: Option<String>,

    #[serde(default)]
    pub saved_prompts: Vec<SavedPrompt>,
}

fn default_base_prompt() -> String {
    DEFAULT_BASE_PROMPT.to_string()
}

impl Default for AdSettings {
    fn default() -> Self {
        Self {
            base_prompt: default_base_prompt(),
            active_prompt_id: None,
            saved_prompts: Vec::new(),
        }
    }
}

impl AdSettings {
    pub fn can_save(&self) -> bool {
        self.saved_prompts.len() < MAX_SAVED_PROMPTS
    }

    /// Add a prompt to the library. Fails once the cap of five is reached.
    pub fn save_prompt(
        &mut self,
        name: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<&SavedPrompt, CreatorError> {
        if !self.can_save() {
            return Err(CreatorError::InvalidInput(format!(
                "Prompt library is full ({MAX_SAVED_PROMPTS} saved prompts max)"
            )));
        }
        self.saved_prompts.push(SavedPrompt::new(name, prompt));
        Ok(self.saved_prompts.last().unwrap())
    }

    /// Remove a prompt by id, clearing the active selection if it pointed at
    /// the removed entry. Returns false if the id is unknown.
    pub fn remove_prompt(&mut self, id: &str) -> bool {
        let before = self.saved_prompts.len();
        self.saved_prompts.retain(|p| p.id != id);
        let removed = self.saved_prompts.len() < before;
        if removed && self.active_prompt_id.as_deref() == Some(id) {
            self.active_prompt_id = None;
        }
        removed
    }

    /// Rewrite a saved prompt in place. Editing invalidates an active
    /// selection of that entry.
    pub fn update_prompt(
        &mut self,
        id: &str,
        name: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<(), CreatorError> {
        let entry = self
            .saved_prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CreatorError::InvalidInput(format!("Unknown saved prompt: {id}")))?;
        entry.name = name.into();
        entry.prompt = prompt.into();
        if self.active_prompt_id.as_deref() == Some(id) {
            self.active_prompt_id = None;
        }
        Ok(())
    }

    pub fn set_active(&mut self, id: &str) -> Result<(), CreatorError> {
        if !self.saved_prompts.iter().any(|p| p.id == id) {
            return Err(CreatorError::InvalidInput(format!(
                "Unknown saved prompt: {id}"
            )));
        }
        self.active_prompt_id = Some(id.to_string());
        Ok(())
    }

    pub fn clear_active(&mut self) {
        self.active_prompt_id = None;
    }

    pub fn get(&self, id: &str) -> Option<&SavedPrompt> {
        self.saved_prompts.iter().find(|p| p.id == id)
    }

    pub fn active_prompt(&self) -> Option<&SavedPrompt> {
        self.active_prompt_id
            .as_deref()
            .and_then(|id| self.get(id))
    }

    /// Base prompt for the next generation: the active saved prompt when one
    /// is selected, the default otherwise.
    pub fn effective_base_prompt(&self) -> &str {
        self.active_prompt()
            .map(|p| p.prompt.as_str())
            .unwrap_or(&self.base_prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn library_is_capped_at_five() {
        let mut settings = AdSettings::default();
        for i in 0..MAX_SAVED_PROMPTS {
            settings.save_prompt(format!("p{i}"), "prompt").unwrap();
        }
        assert!(!settings.can_save());

        let err = settings.save_prompt("p6", "prompt").unwrap_err();
        assert!(matches!(err, CreatorError::InvalidInput(_)));
        assert_eq!(settings.saved_prompts.len(), MAX_SAVED_PROMPTS);
    }

    #[test]
    fn removing_the_active_prompt_clears_the_selection() {
        let mut settings = AdSettings::default();
        let id = settings.save_prompt("summer", "sunny vibes").unwrap().id.clone();
        settings.set_active(&id).unwrap();
        assert!(settings.active_prompt().is_some());

        assert!(settings.remove_prompt(&id));
        assert_eq!(settings.active_prompt_id, None);
    }

    #[test]
    fn removing_another_prompt_keeps_the_selection() {
        let mut settings = AdSettings::default();
        let first = settings.save_prompt("a", "one").unwrap().id.clone();
        let second = settings.save_prompt("b", "two").unwrap().id.clone();
        settings.set_active(&first).unwrap();

        assert!(settings.remove_prompt(&second));
        assert_eq!(settings.active_prompt_id.as_deref(), Some(first.as_str()));
    }

    #[test]
    fn editing_the_active_prompt_clears_the_selection() {
        let mut settings = AdSettings::default();
        let id = settings.save_prompt("winter", "snowy vibes").unwrap().id.clone();
        settings.set_active(&id).unwrap();

        settings.update_prompt(&id, "winter", "icy vibes").unwrap();
        assert_eq!(settings.active_prompt_id, None);
        assert_eq!(settings.get(&id).unwrap().prompt, "icy vibes");
    }

    #[test]
    fn active_prompt_overrides_the_base_prompt() {
        let mut settings = AdSettings::default();
        assert_eq!(settings.effective_base_prompt(), DEFAULT_BASE_PROMPT);

        let id = settings.save_prompt("neon", "neon style ads").unwrap().id.clone();
        settings.set_active(&id).unwrap();
        assert_eq!(settings.effective_base_prompt(), "neon style ads");

        settings.clear_active();
        assert_eq!(settings.effective_base_prompt(), DEFAULT_BASE_PROMPT);
    }

    #[test]
    fn activating_an_unknown_id_fails() {
        let mut settings = AdSettings::default();
        assert!(settings.set_active("sp_missing").is_err());
    }
}
