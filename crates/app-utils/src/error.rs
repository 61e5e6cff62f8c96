use core_permissions::AnalysisError;
use thiserror::Error;

/// Main errors for the `app-utils` crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed session payload or JSON configuration
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML configuration
    #[error("YAML parsing failed: {0}")]
    YamlParseError(String),

    /// Malformed TOML configuration
    #[error("TOML parsing failed: {0}")]
    TomlParseError(String),

    /// Configuration file extension is not one of yaml, yml, toml or json
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// The loaded data violates an analysis limit
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
