use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkfeedError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Input errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    // Extraction errors
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("parse error: {0}")]
    Parse(String),

    // Storage errors
    #[error("Failed to read feed {path}: {reason}")]
    FeedRead { path: String, reason: String },

    #[error("Failed to write feed {path}: {reason}")]
    FeedWrite { path: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LinkfeedResult<T> = Result<T, LinkfeedError>;
