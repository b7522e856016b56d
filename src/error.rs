use thiserror::Error;

/// Errors that can occur while serving recipes and the pantry
#[derive(Error, Debug)]
pub enum MealMindError {
    /// Failed to read or write a data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file did not contain the expected JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to set up the HTTP client
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The recipe catalog is not usable
    #[error("Invalid recipe catalog: {0}")]
    RecipeCatalog(String),
}

pub type Result<T> = std::result::Result<T, MealMindError>;
