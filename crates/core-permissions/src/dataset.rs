//! Header-ordered row sets and dataset-level views

use crate::aggregate::Partition;
use crate::error::{AnalysisError, Result};
use crate::record::{PermissionRecord, Row, PERMISSION_COLUMNS, ROLE_COLUMN};
use crate::{MAX_COLUMNS, MAX_ROWS};
use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Rows of a permissions export with their column headers
///
/// Headers keep the order of the source file. A dataset is never mutated;
/// filtering produces a new one sharing the same headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `AnalysisError::TooManyColumns` if there are more than `MAX_COLUMNS` headers
    /// - `AnalysisError::TooManyRows` if there are more than `MAX_ROWS` rows
    /// - `AnalysisError::DuplicateHeader` if a header repeats
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        if headers.len() > MAX_COLUMNS {
            return Err(AnalysisError::TooManyColumns {
                max: MAX_COLUMNS,
                attempted: headers.len(),
            });
        }

        if rows.len() > MAX_ROWS {
            return Err(AnalysisError::TooManyRows {
                max: MAX_ROWS,
                attempted: rows.len(),
            });
        }

        let mut seen = BTreeSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(AnalysisError::DuplicateHeader(header.clone()));
            }
        }

        Ok(Self { headers, rows })
    }

    /// Column headers in source order
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All rows
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Permission record view of every row
    #[must_use]
    pub fn records(&self) -> Vec<PermissionRecord<'_>> {
        self.rows.iter().map(PermissionRecord::from_row).collect()
    }

    /// Required permission columns missing from the headers
    #[must_use]
    pub fn missing_permission_columns(&self) -> Vec<&'static str> {
        PERMISSION_COLUMNS
            .into_iter()
            .filter(|column| !self.headers.iter().any(|h| h.as_str() == *column))
            .collect()
    }

    /// Whether `RoleName`, `Feature`, `Permission` and `Value` are all present
    ///
    /// Role, feature and permission reports only apply when this holds.
    #[must_use]
    pub fn has_permission_columns(&self) -> bool {
        self.missing_permission_columns().is_empty()
    }

    /// Rows selected by a role filter
    #[must_use]
    pub fn filter_by_role(&self, filter: &RoleFilter) -> Self {
        let rows = match filter {
            RoleFilter::All => self.rows.clone(),
            RoleFilter::Role(role) => self
                .rows
                .iter()
                .filter(|row| row.get(ROLE_COLUMN) == Some(role))
                .cloned()
                .collect(),
        };

        Self {
            headers: self.headers.clone(),
            rows,
        }
    }
}

/// Role selection applied before aggregating
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleFilter {
    /// Every row
    #[default]
    All,
    /// Rows of one role
    Role(String),
}

impl RoleFilter {
    /// Parse a selector, `"all"` meaning every role
    #[must_use]
    pub fn parse(selector: &str) -> Self {
        if selector == "all" {
            Self::All
        } else {
            Self::Role(selector.to_string())
        }
    }
}

/// Headline numbers of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overview {
    /// Distinct role names
    pub roles: usize,
    /// Distinct features
    pub features: usize,
    /// Distinct permission names
    pub permissions: usize,
    /// Rows
    pub entries: usize,
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Partition<'a, ()> = Partition::new();
    for value in values.filter(|v| !v.is_empty()) {
        seen.entry(value);
    }
    seen.into_entries().into_iter().map(|(value, ())| value).collect()
}

/// Distinct non-empty role names, in order of first appearance
#[must_use]
pub fn unique_roles<'a>(records: &[PermissionRecord<'a>]) -> Vec<&'a str> {
    distinct(records.iter().map(|r| r.role_name))
}

/// Distinct non-empty features, in order of first appearance
#[must_use]
pub fn unique_features<'a>(records: &[PermissionRecord<'a>]) -> Vec<&'a str> {
    distinct(records.iter().map(|r| r.feature))
}

/// Headline numbers for the overview cards
#[must_use]
pub fn overview(records: &[PermissionRecord<'_>]) -> Overview {
    Overview {
        roles: unique_roles(records).len(),
        features: unique_features(records).len(),
        permissions: distinct(records.iter().map(|r| r.permission)).len(),
        entries: records.len(),
    }
}
