use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use super::error::CreatorError;

/// A finished ad, held in memory until the next generation replaces it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAd {
    /// `data:image/png;base64,...` URI as returned by the client
    pub data_uri: String,

    /// The partner input that produced this ad
    pub prompt_used: String,

    /// When the ad was generated
    pub created_at: DateTime<Utc>,
}

impl GeneratedAd {
    pub fn new(data_uri: impl Into<String>, prompt_used: impl Into<String>) -> Self {
        Self {
            data_uri: data_uri.into(),
            prompt_used: prompt_used.into(),
            created_at: Utc::now(),
        }
    }

    /// Download file name, stamped with the generation time
    pub fn file_name(&self) -> String {
        format!("partner-ad-{}.png", self.created_at.timestamp_millis())
    }

    /// Decode the image and write it into `dir`, returning the full path
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, CreatorError> {
        let payload = self
            .data_uri
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .unwrap_or(&self.data_uri);

        let bytes = BASE64
            .decode(payload)
            .map_err(|e| CreatorError::InvalidResponse(format!("Failed to decode image: {e}")))?;

        fs::create_dir_all(dir).await?;
        let path = dir.join(self.file_name());
        fs::write(&path, &bytes).await?;

        tracing::info!("Saved ad to: {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_name_is_stamped_with_generation_time() {
        let ad = GeneratedAd::new("data:image/png;base64,AAAA", "late night snacks");
        let expected = format!("partner-ad-{}.png", ad.created_at.timestamp_millis());
        assert_eq!(ad.file_name(), expected);
    }

    #[tokio::test]
    async fn save_writes_the_decoded_payload() {
        let encoded = BASE64.encode(b"not really a png");
        let ad = GeneratedAd::new(format!("data:image/png;base64,{encoded}"), "offer");

        let dir = tempfile::tempdir().unwrap();
        let path = ad.save_to(dir.path()).await.unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, b"not really a png");
        assert!(path.ends_with(ad.file_name()));
    }
}
