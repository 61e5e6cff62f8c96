//! Chart series shaping and the group palette

use crate::aggregate::{Breakdown, RoleFeatureEntry};
use crate::group::{GroupCounts, PermissionGroup, ALL_GROUPS};
use alloc::vec::Vec;
use serde::Serialize;

/// Color used for a series that is not a permission group
pub const FALLBACK_COLOR: &str = "#777777";

/// Point of a single-series chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint<'a> {
    /// Display label
    pub name: &'a str,
    /// Plotted value
    pub value: u32,
}

/// Legend entry of a permission group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupStyle {
    /// The group
    pub group: PermissionGroup,
    /// Hex fill color
    pub color: &'static str,
    /// Legend text
    pub description: &'static str,
}

static PALETTE: [GroupStyle; 6] = [
    GroupStyle {
        group: PermissionGroup::View,
        color: "#4ade80",
        description: "Permissions related to viewing or reading data",
    },
    GroupStyle {
        group: PermissionGroup::Edit,
        color: "#f97316",
        description: "Permissions related to editing, modifying, or configuring",
    },
    GroupStyle {
        group: PermissionGroup::Export,
        color: "#3b82f6",
        description: "Permissions related to exporting or downloading data",
    },
    GroupStyle {
        group: PermissionGroup::Manage,
        color: "#8b5cf6",
        description: "Permissions related to managing resources or users",
    },
    GroupStyle {
        group: PermissionGroup::FullAccess,
        color: "#ef4444",
        description: "Permissions granting extensive control or critical operations",
    },
    GroupStyle {
        group: PermissionGroup::Other,
        color: "#94a3b8",
        description: "Permissions that match no known pattern",
    },
];

/// Legend entries in display order
#[must_use]
pub fn palette() -> &'static [GroupStyle] {
    &PALETTE
}

/// Fill color of a series name
///
/// Group names get their palette color, anything else [`FALLBACK_COLOR`].
#[must_use]
pub fn color_for(name: &str) -> &'static str {
    PALETTE
        .iter()
        .find(|style| style.group.as_str() == name)
        .map_or(FALLBACK_COLOR, |style| style.color)
}

/// Pie/bar series of group counts, empty groups left out
#[must_use]
pub fn group_series(counts: &GroupCounts) -> Vec<ChartPoint<'static>> {
    ALL_GROUPS
        .into_iter()
        .filter(|group| counts.get(*group) > 0)
        .map(|group| ChartPoint {
            name: group.as_str(),
            value: counts.get(group),
        })
        .collect()
}

/// Stacked-bar rows of a role x feature matrix
///
/// Each row is named by the entry label and carries every group key.
#[must_use]
pub fn stacked_rows<'r>(entries: &'r [RoleFeatureEntry<'_>]) -> Vec<Breakdown<'r>> {
    entries
        .iter()
        .map(|entry| Breakdown {
            name: &entry.name,
            counts: entry.counts,
        })
        .collect()
}
