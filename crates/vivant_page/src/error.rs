//! Page error types

use thiserror::Error;
use vivant_core::error::CoreError;

/// Errors raised while building a page
#[derive(Error, Debug)]
pub enum PageError {
    /// Engine configuration was rejected
    #[error(transparent)]
    Config(#[from] CoreError),

    /// Site content could not be parsed
    #[error("Failed to parse site content: {0}")]
    Content(#[from] toml::de::Error),

    /// A theme color is not `#rrggbb`
    #[error("Invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;
