use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing the recipe dataset
#[derive(Error, Debug)]
pub enum PreprocessError {
    /// Failed to write the output file
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize recipes to JSON
    #[error("Failed to serialize recipes: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}
