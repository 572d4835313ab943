//! Error types for PicSearch
//!
//! Every failure from the spelling or image services ends up here. Payloads
//! are plain strings so errors can ride inside UI messages (which must be
//! `Clone`).

use thiserror::Error;

/// Text shown to the user for any failed request
pub const NOTICE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Service returned HTTP {0}")]
    Status(u16),

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Spell checker returned no candidates for '{0}'")]
    NoCandidates(String),

    #[error("No Pixabay API key configured (set PIXABAY_API_KEY)")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for PicSearch operations
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Status(status.as_u16())
        } else {
            AppError::Http(err.to_string())
        }
    }
}

impl AppError {
    /// Message shown in the notice banner. Causes are logged, not displayed.
    pub fn user_message(&self) -> &'static str {
        NOTICE
    }
}
