//! Semantic permission groups and per-group counters

use core::fmt;
use core::ops::Index;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Number of permission groups, `Other` included
pub const GROUP_COUNT: usize = 6;

/// Semantic category of a permission
///
/// The declaration order is the display order used by every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PermissionGroup {
    /// Viewing or reading data
    View,
    /// Editing, modifying or configuring
    Edit,
    /// Exporting or downloading data
    Export,
    /// Managing resources or users
    Manage,
    /// Extensive control or critical operations
    FullAccess,
    /// Anything not recognized
    Other,
}

/// Every group in display order, `Other` last
pub const ALL_GROUPS: [PermissionGroup; GROUP_COUNT] = [
    PermissionGroup::View,
    PermissionGroup::Edit,
    PermissionGroup::Export,
    PermissionGroup::Manage,
    PermissionGroup::FullAccess,
    PermissionGroup::Other,
];

impl PermissionGroup {
    /// Display name, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Export => "Export",
            Self::Manage => "Manage",
            Self::FullAccess => "FullAccess",
            Self::Other => "Other",
        }
    }

    /// Parse a group from its display name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_GROUPS.into_iter().find(|group| group.as_str() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PermissionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count per permission group
///
/// Always holds all six groups; a fresh value has every group at zero so
/// consumers never miss a category. Serializes as an object keyed by group
/// name in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GroupCounts([u32; GROUP_COUNT]);

impl GroupCounts {
    /// Create counters with every group at zero
    #[must_use]
    pub const fn new() -> Self {
        Self([0; GROUP_COUNT])
    }

    /// Count for one group
    #[must_use]
    pub const fn get(&self, group: PermissionGroup) -> u32 {
        self.0[group.index()]
    }

    /// Add one to a group
    pub fn increment(&mut self, group: PermissionGroup) {
        self.0[group.index()] = self.0[group.index()].saturating_add(1);
    }

    /// Sum across all groups
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    /// `(group, count)` pairs in display order, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (PermissionGroup, u32)> + '_ {
        ALL_GROUPS.into_iter().map(move |group| (group, self.get(group)))
    }
}

impl Index<PermissionGroup> for GroupCounts {
    type Output = u32;

    fn index(&self, group: PermissionGroup) -> &u32 {
        &self.0[group.index()]
    }
}

impl Serialize for GroupCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(GROUP_COUNT))?;
        for (group, count) in self.iter() {
            map.serialize_entry(group.as_str(), &count)?;
        }
        map.end()
    }
}
