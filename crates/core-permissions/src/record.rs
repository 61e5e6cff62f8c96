//! Rows and the permission record view over them

use crate::classifier::classify;
use crate::group::PermissionGroup;
use crate::value::is_enabled;
use alloc::collections::BTreeMap;
use alloc::string::String;
use serde::Serialize;

/// One input row: trimmed column name to trimmed cell value
///
/// A column missing from the map is an absent cell, which is distinct from
/// an empty one in summaries and badges.
pub type Row = BTreeMap<String, String>;

/// Column carrying the role name
pub const ROLE_COLUMN: &str = "RoleName";
/// Column carrying the feature name
pub const FEATURE_COLUMN: &str = "Feature";
/// Column carrying the permission identifier
pub const PERMISSION_COLUMN: &str = "Permission";
/// Column carrying the raw value
pub const VALUE_COLUMN: &str = "Value";
/// Optional column used to label per-row series
pub const NAME_COLUMN: &str = "Name";

/// Columns required for role, feature and permission reports
pub const PERMISSION_COLUMNS: [&str; 4] =
    [ROLE_COLUMN, FEATURE_COLUMN, PERMISSION_COLUMN, VALUE_COLUMN];

/// Cell of `column`, empty when absent
pub(crate) fn cell<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).map_or("", String::as_str)
}

/// One permission entry borrowed from a row
///
/// Absent columns read as empty strings. Records with an empty
/// `permission` or `role_name` are skipped by the aggregations that need
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PermissionRecord<'a> {
    /// Access role this entry describes
    #[serde(rename = "RoleName")]
    pub role_name: &'a str,
    /// Product feature the permission applies to
    #[serde(rename = "Feature")]
    pub feature: &'a str,
    /// Raw permission identifier
    #[serde(rename = "Permission")]
    pub permission: &'a str,
    /// Raw encoded value
    #[serde(rename = "Value")]
    pub value: &'a str,
}

impl<'a> PermissionRecord<'a> {
    /// Create a record from its four fields
    #[must_use]
    pub const fn new(role_name: &'a str, feature: &'a str, permission: &'a str, value: &'a str) -> Self {
        Self {
            role_name,
            feature,
            permission,
            value,
        }
    }

    /// Read the permission columns of a row
    #[must_use]
    pub fn from_row(row: &'a Row) -> Self {
        Self {
            role_name: cell(row, ROLE_COLUMN),
            feature: cell(row, FEATURE_COLUMN),
            permission: cell(row, PERMISSION_COLUMN),
            value: cell(row, VALUE_COLUMN),
        }
    }

    /// Group of this record's permission
    #[must_use]
    pub fn group(&self) -> PermissionGroup {
        classify(Some(self.permission))
    }

    /// Whether this record's value means enabled
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        is_enabled(Some(self.value))
    }

    /// Whether the record takes part in permission aggregations
    #[must_use]
    pub fn has_permission(&self) -> bool {
        !self.permission.is_empty()
    }
}
