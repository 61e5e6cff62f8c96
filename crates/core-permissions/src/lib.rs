// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Permlens Team

//! # core-permissions
//!
//! Pure classification and aggregation engine for permission exports, with
//! zero dependencies on rendering, storage or network layers.
//!
//! This crate provides the domain logic behind every permissions report:
//! - Permission classification into semantic groups
//! - Interpretation of raw permission values
//! - Decoding of embedded `@{key=value;...}` property bags
//! - Aggregation by group, role, feature and role x feature
//! - Dataset summaries, table search/paging/export and chart shaping
//!
//! Every function here is total: malformed input degrades to a documented
//! default (`Other`, not enabled, `"N/A"`, an empty bag) instead of failing.
//!
//! ## Limits
//!
//! Dataset construction is bounded to prevent resource exhaustion:
//!   - MAX_ROWS = 1_000_000
//!   - MAX_COLUMNS = 512

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod aggregate;
pub mod chart;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod group;
pub mod property_bag;
pub mod record;
pub mod summary;
pub mod table;
pub mod value;

pub use aggregate::{
    by_feature, by_group, by_role, by_role_feature, group_members, property_distribution,
    role_group_counts, top_permissions, Breakdown, PermissionUsage, RoleFeatureEntry, ValueCount,
};
pub use chart::{color_for, group_series, palette, stacked_rows, ChartPoint, GroupStyle};
pub use classifier::{classify, PERMISSION_TABLE};
pub use config::AnalysisConfig;
pub use dataset::{overview, unique_features, unique_roles, Dataset, Overview, RoleFilter};
/// Re-export commonly used types
pub use error::{AnalysisError, Result};
pub use group::{GroupCounts, PermissionGroup, ALL_GROUPS};
pub use property_bag::{decode, discover_keys, has_envelope, Property, PropertyBag, NOT_AVAILABLE};
pub use record::{PermissionRecord, Row};
pub use summary::{
    property_groups, property_series, property_value_counts, summarize, HeaderSummary,
    PropertyGroup, PropertyStat, SeriesRow, SeriesValue,
};
pub use table::{export_csv, paginate, permission_badge, search, value_badge, Page};
pub use value::is_enabled;

/// Maximum number of rows accepted in a dataset
pub const MAX_ROWS: usize = 1_000_000;

/// Maximum number of columns accepted in a dataset
pub const MAX_COLUMNS: usize = 512;

/// Default number of entries in the top permissions ranking
pub const DEFAULT_TOP_PERMISSIONS: usize = 15;

/// Default number of entries kept in the role x feature matrix
pub const DEFAULT_ROLE_FEATURE_LIMIT: usize = 20;

/// Default number of values reported per property key
pub const DEFAULT_PROPERTY_TOP_VALUES: usize = 5;

/// Default number of leading rows sampled when discovering property keys
pub const DEFAULT_PROPERTY_SAMPLE_SIZE: usize = 50;

/// Default number of rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of rows plotted in per-row property series
pub const DEFAULT_SERIES_ROWS: usize = 20;
