//! Error types for scenerig

use thiserror::Error;

/// Main error type for scene setup
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid node path '{0}'")]
    InvalidPath(String),

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Config error: {0}")]
    Config(String),
}
