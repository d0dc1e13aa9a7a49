use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreatorError {
    #[error("API key not configured. Set GEMINI_API_KEY environment variable or run: adcraft config set api.key <your-key>")]
    MissingApiKey,

    #[error("{0}")]
    InvalidInput(String),

    #[error("No image generated in response")]
    NoImageGenerated,

    #[error("API error: {message}")]
    ApiError {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for CreatorError {
    fn from(err: reqwest::Error) -> Self {
        CreatorError::ApiError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
