//! Aggregation of permission records into report datasets
//!
//! All functions borrow the record slice immutably and are pure: running
//! one twice over the same input yields the same output.
//!
//! Shared rules:
//! - only records with a non-empty `permission` participate;
//! - role-scoped folds also need a non-empty `role_name`, feature-scoped
//!   folds a non-empty `feature`;
//! - partitions are reported in order of first appearance;
//! - every [`GroupCounts`] starts with all six groups at zero.

use crate::classifier::classify;
use crate::group::{GroupCounts, PermissionGroup};
use crate::property_bag::{decode, has_envelope};
use crate::record::{PermissionRecord, Row};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

/// Group counts for one role or feature
///
/// Serializes as `{name, View, Edit, Export, Manage, FullAccess, Other}`,
/// the shape stacked bar charts consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown<'a> {
    /// Role or feature name
    pub name: &'a str,
    /// Enabled permissions per group
    #[serde(flatten)]
    pub counts: GroupCounts,
}

/// Group counts for one role and feature pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleFeatureEntry<'a> {
    /// Display label `"{role} - {feature}"`
    pub name: String,
    /// Role name
    pub role: &'a str,
    /// Feature name
    pub feature: &'a str,
    /// Enabled permissions per group
    #[serde(flatten)]
    pub counts: GroupCounts,
}

impl RoleFeatureEntry<'_> {
    /// Enabled permissions across all groups
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.total()
    }
}

/// Usage of one permission name across the records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionUsage<'a> {
    /// Permission name
    pub name: &'a str,
    /// Group of the permission
    pub group: PermissionGroup,
    /// Records with an enabled value
    pub enabled: u32,
    /// Records with any other value
    pub disabled: u32,
}

/// Occurrences of one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueCount<'a> {
    /// The value
    pub value: &'a str,
    /// How often it occurred
    pub count: u32,
}

/// Insertion-ordered fold keyed by borrowed strings
pub(crate) struct Partition<'a, V> {
    index: BTreeMap<&'a str, usize>,
    entries: Vec<(&'a str, V)>,
}

impl<V> Default for Partition<'_, V> {
    fn default() -> Self {
        Self {
            index: BTreeMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<'a, V: Default> Partition<'a, V> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn entry(&mut self, key: &'a str) -> &mut V {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.entries.push((key, V::default()));
                self.index.insert(key, position);
                position
            }
        };
        &mut self.entries[position].1
    }

    pub(crate) fn into_entries(self) -> Vec<(&'a str, V)> {
        self.entries
    }
}

/// Count enabled records per group
///
/// Records without a permission are skipped.
#[must_use]
pub fn by_group(records: &[PermissionRecord<'_>]) -> GroupCounts {
    let mut counts = GroupCounts::new();
    for record in records.iter().filter(|r| r.has_permission()) {
        if record.is_enabled() {
            counts.increment(record.group());
        }
    }
    counts
}

/// Group counts of the records belonging to `role`
///
/// Drives the single-role charts; a role with no enabled permission yields
/// all-zero counts.
#[must_use]
pub fn role_group_counts(records: &[PermissionRecord<'_>], role: &str) -> GroupCounts {
    let mut counts = GroupCounts::new();
    for record in records
        .iter()
        .filter(|r| r.role_name == role && r.has_permission())
    {
        if record.is_enabled() {
            counts.increment(record.group());
        }
    }
    counts
}

fn partition_by<'a>(
    records: &[PermissionRecord<'a>],
    key: impl Fn(&PermissionRecord<'a>) -> &'a str,
) -> Vec<Breakdown<'a>> {
    let mut partition: Partition<'a, GroupCounts> = Partition::new();

    for record in records {
        let name = key(record);
        if name.is_empty() || !record.has_permission() {
            continue;
        }
        let counts = partition.entry(name);
        if record.is_enabled() {
            counts.increment(record.group());
        }
    }

    partition
        .into_entries()
        .into_iter()
        .map(|(name, counts)| Breakdown { name, counts })
        .collect()
}

/// Group counts per role, roles in order of first appearance
#[must_use]
pub fn by_role<'a>(records: &[PermissionRecord<'a>]) -> Vec<Breakdown<'a>> {
    partition_by(records, |record| record.role_name)
}

/// Group counts per feature, features in order of first appearance
#[must_use]
pub fn by_feature<'a>(records: &[PermissionRecord<'a>]) -> Vec<Breakdown<'a>> {
    partition_by(records, |record| record.feature)
}

/// Group counts per role and feature pair
///
/// Pairs without any enabled permission are dropped. The result is sorted by
/// role name ascending, then by total descending within a role (stable),
/// and truncated to `limit` entries overall.
#[must_use]
pub fn by_role_feature<'a>(records: &[PermissionRecord<'a>], limit: usize) -> Vec<RoleFeatureEntry<'a>> {
    let mut roles: Partition<'a, Partition<'a, GroupCounts>> = Partition::new();

    for record in records {
        if record.role_name.is_empty() || record.feature.is_empty() || !record.has_permission() {
            continue;
        }
        let counts = roles.entry(record.role_name).entry(record.feature);
        if record.is_enabled() {
            counts.increment(record.group());
        }
    }

    let mut entries: Vec<RoleFeatureEntry<'a>> = roles
        .into_entries()
        .into_iter()
        .flat_map(|(role, features)| {
            features
                .into_entries()
                .into_iter()
                .filter(|(_, counts)| counts.total() > 0)
                .map(move |(feature, counts)| RoleFeatureEntry {
                    name: format!("{} - {}", role, feature),
                    role,
                    feature,
                    counts,
                })
        })
        .collect();

    entries.sort_by(|a, b| a.role.cmp(b.role).then_with(|| b.total().cmp(&a.total())));
    entries.truncate(limit);
    entries
}

/// The `n` permissions enabled most often
///
/// Sorted by enabled count descending; ties keep first-appearance order.
#[must_use]
pub fn top_permissions<'a>(records: &[PermissionRecord<'a>], n: usize) -> Vec<PermissionUsage<'a>> {
    // (enabled, total)
    let mut usage: Partition<'a, (u32, u32)> = Partition::new();

    for record in records.iter().filter(|r| r.has_permission()) {
        let (enabled, total) = usage.entry(record.permission);
        *total += 1;
        if record.is_enabled() {
            *enabled += 1;
        }
    }

    let mut ranking: Vec<PermissionUsage<'a>> = usage
        .into_entries()
        .into_iter()
        .map(|(name, (enabled, total))| PermissionUsage {
            name,
            group: classify(Some(name)),
            enabled,
            disabled: total - enabled,
        })
        .collect();

    ranking.sort_by(|a, b| b.enabled.cmp(&a.enabled));
    ranking.truncate(n);
    ranking
}

/// Enabled records of `role` whose permission falls in `group`
///
/// Backs the drill-down list shown when a group is picked in a role chart.
#[must_use]
pub fn group_members<'r, 'a>(
    records: &'r [PermissionRecord<'a>],
    role: &str,
    group: PermissionGroup,
) -> Vec<&'r PermissionRecord<'a>> {
    records
        .iter()
        .filter(|r| r.role_name == role && r.group() == group && r.is_enabled())
        .collect()
}

/// Tally of one property key across the bags of a column
///
/// Only cells carrying the `@{...}` envelope take part. Each contributes the
/// value of `key` (or `"N/A"` when the bag lacks it). The most frequent
/// `limit` values are returned, ties in first-seen order.
#[must_use]
pub fn property_distribution<'a>(
    rows: &'a [Row],
    header: &str,
    key: &str,
    limit: usize,
) -> Vec<ValueCount<'a>> {
    let mut tally: Partition<'a, u32> = Partition::new();

    for cell in rows.iter().filter_map(|row| row.get(header)) {
        if !has_envelope(cell) {
            continue;
        }
        *tally.entry(decode(cell).get(key)) += 1;
    }

    rank(tally, limit)
}

pub(crate) fn rank<'a>(tally: Partition<'a, u32>, limit: usize) -> Vec<ValueCount<'a>> {
    let mut counts: Vec<ValueCount<'a>> = tally
        .into_entries()
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
