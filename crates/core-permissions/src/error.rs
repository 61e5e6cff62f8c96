//! Error types for core-permissions
//!
//! Classification, decoding and aggregation never fail. Errors only arise
//! when building a [`Dataset`](crate::Dataset) or validating an
//! [`AnalysisConfig`](crate::AnalysisConfig).

use alloc::string::String;
use core::fmt;

/// Result type alias for analysis operations
pub type Result<T> = core::result::Result<T, AnalysisError>;

/// Errors that can occur while preparing an analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A configuration value is out of range
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The same column name appears twice in the headers
    DuplicateHeader(String),

    // ===== Resource limits =====
    /// Dataset exceeds the maximum number of rows
    TooManyRows {
        /// Maximum allowed rows
        max: usize,
        /// Attempted number of rows
        attempted: usize,
    },

    /// Dataset exceeds the maximum number of columns
    TooManyColumns {
        /// Maximum allowed columns
        max: usize,
        /// Attempted number of columns
        attempted: usize,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "Invalid configuration for `{}`: {}", field, reason)
            }
            Self::DuplicateHeader(name) => write!(f, "Duplicate column header: {}", name),
            Self::TooManyRows { max, attempted } => write!(
                f,
                "Dataset exceeds maximum {} rows (attempted: {})",
                max, attempted
            ),
            Self::TooManyColumns { max, attempted } => write!(
                f,
                "Dataset exceeds maximum {} columns (attempted: {})",
                max, attempted
            ),
        }
    }
}

impl core::error::Error for AnalysisError {}
