//! Tunable report limits

use crate::error::{AnalysisError, Result};
use crate::{
    DEFAULT_PAGE_SIZE, DEFAULT_PROPERTY_SAMPLE_SIZE, DEFAULT_PROPERTY_TOP_VALUES,
    DEFAULT_ROLE_FEATURE_LIMIT, DEFAULT_SERIES_ROWS, DEFAULT_TOP_PERMISSIONS,
};
use alloc::string::ToString;
use serde::{Deserialize, Serialize};

/// Limits applied when building reports
///
/// The defaults reproduce the stock dashboard: top 15 permissions, 20
/// role-feature pairs, 5 values per property key, key discovery over the
/// first 50 rows, 10 table rows per page and 20 rows per property series.
/// Missing fields fall back to these defaults when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Entries in the top permissions ranking
    pub top_permissions: usize,
    /// Entries kept in the role x feature matrix
    pub role_feature_limit: usize,
    /// Values reported per property key
    pub property_top_values: usize,
    /// Leading rows sampled for property key discovery
    pub property_sample_size: usize,
    /// Rows per table page
    pub page_size: usize,
    /// Rows plotted in per-row property series
    pub series_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_permissions: DEFAULT_TOP_PERMISSIONS,
            role_feature_limit: DEFAULT_ROLE_FEATURE_LIMIT,
            property_top_values: DEFAULT_PROPERTY_TOP_VALUES,
            property_sample_size: DEFAULT_PROPERTY_SAMPLE_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            series_rows: DEFAULT_SERIES_ROWS,
        }
    }
}

impl AnalysisConfig {
    /// Check that every limit is usable
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidConfig` naming the first field set to
    /// zero.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("top_permissions", self.top_permissions),
            ("role_feature_limit", self.role_feature_limit),
            ("property_top_values", self.property_top_values),
            ("property_sample_size", self.property_sample_size),
            ("page_size", self.page_size),
            ("series_rows", self.series_rows),
        ];

        match fields.into_iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(AnalysisError::InvalidConfig {
                field,
                reason: "must be greater than zero".to_string(),
            }),
            None => Ok(()),
        }
    }
}
