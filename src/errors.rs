// ABOUTME: Error types for the ds-slides application
// ABOUTME: Provides structured error handling for the deck, page, asset and server layers

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlidesError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to fetch remote asset: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Invalid asset path: {0}")]
    InvalidAssetPath(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Page generation error: {0}")]
    PageError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Navigation sync error: {0}")]
    SyncError(String),

    #[error("Watch error: {0}")]
    WatchError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our SlidesError
impl From<anyhow::Error> for SlidesError {
    fn from(err: anyhow::Error) -> Self {
        SlidesError::UnknownError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SlidesError>;
