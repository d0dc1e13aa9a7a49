use crate::config::Config;
use crate::core::CreatorError;

/// Capability interface for sourcing the Gemini API key.
///
/// The generation client only needs "a credential is obtainable before send";
/// where the key actually comes from (config file, environment, interactive
/// entry) stays behind this trait.
pub trait CredentialSource {
    fn has_credential(&self) -> bool;

    /// Return the key, failing fast before any network I/O is attempted
    fn obtain(&self) -> Result<String, CreatorError>;
}

/// Key from the config file, with `GEMINI_API_KEY` taking precedence at load
/// time.
pub struct StoredCredentials<'a> {
    config: &'a Config,
}

impl<'a> StoredCredentials<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl CredentialSource for StoredCredentials<'_> {
    fn has_credential(&self) -> bool {
        self.config
            .api_key()
            .is_some_and(|key| !key.trim().is_empty())
    }

    fn obtain(&self) -> Result<String, CreatorError> {
        self.config
            .api_key()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or(CreatorError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_key_fails_before_any_network_call() {
        let config = Config::default();
        let credentials = StoredCredentials::new(&config);

        assert!(!credentials.has_credential());
        assert!(matches!(
            credentials.obtain(),
            Err(CreatorError::MissingApiKey)
        ));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let mut config = Config::default();
        config.api.key = Some("   ".to_string());
        let credentials = StoredCredentials::new(&config);
        assert!(!credentials.has_credential());
    }

    #[test]
    fn stored_key_is_returned() {
        let mut config = Config::default();
        config.api.key = Some("test-key".to_string());
        let credentials = StoredCredentials::new(&config);

        assert!(credentials.has_credential());
        assert_eq!(credentials.obtain().unwrap(), "test-key");
    }
}
