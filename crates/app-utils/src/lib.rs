//! # app-utils
//!
//! Utility modules for configuration loading and session ingestion.
//!
//! This crate provides non-core features:
//! - `AnalysisConfig` parsing from YAML, TOML or JSON
//! - Session payload decoding with cell normalization
//!
//! Everything here touches the filesystem or a serialization format, which
//! keeps `core-permissions` free of both.

#![forbid(unsafe_code)]

pub mod error;
pub mod session;

pub mod config {
    //! Analysis configuration documents

    use super::error::{Error, Result};
    use core_permissions::AnalysisConfig;
    use std::path::Path;
    use tracing::debug;

    /// Trait for configuration parsers (extensible to other formats)
    pub trait ConfigParser {
        /// Parse and validate a configuration from a string
        fn parse(&self, input: &str) -> Result<AnalysisConfig>;
    }

    /// YAML parser implementation
    pub struct YamlParser;

    impl ConfigParser for YamlParser {
        fn parse(&self, input: &str) -> Result<AnalysisConfig> {
            let config: AnalysisConfig =
                serde_yaml::from_str(input).map_err(|e| Error::YamlParseError(e.to_string()))?;
            config.validate()?;
            Ok(config)
        }
    }

    /// TOML parser implementation
    pub struct TomlParser;

    impl ConfigParser for TomlParser {
        fn parse(&self, input: &str) -> Result<AnalysisConfig> {
            let config: AnalysisConfig =
                toml::from_str(input).map_err(|e| Error::TomlParseError(e.to_string()))?;
            config.validate()?;
            Ok(config)
        }
    }

    /// JSON parser implementation
    pub struct JsonParser;

    impl ConfigParser for JsonParser {
        fn parse(&self, input: &str) -> Result<AnalysisConfig> {
            let config: AnalysisConfig = serde_json::from_str(input)?;
            config.validate()?;
            Ok(config)
        }
    }

    /// Pick a parser from a file extension (case-insensitive)
    pub fn parser_for(path: &Path) -> Result<Box<dyn ConfigParser>> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Box::new(YamlParser)),
            "toml" => Ok(Box::new(TomlParser)),
            "json" => Ok(Box::new(JsonParser)),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Read, parse and validate a configuration file
    pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
        let parser = parser_for(path)?;
        let input = std::fs::read_to_string(path)?;
        let config = parser.parse(&input)?;
        debug!(path = %path.display(), ?config, "loaded analysis config");
        Ok(config)
    }
}

/// Re-export commonly used types
pub use config::{load_config, ConfigParser, JsonParser, TomlParser, YamlParser};
pub use error::{Error, Result};
pub use session::{load_session, normalize_cell, parse_session, SessionMeta, SessionPayload};
