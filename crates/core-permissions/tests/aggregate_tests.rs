//! Aggregation engine tests
//!
//! Exercises every fold over permission records, including the skipping
//! rules for incomplete records and the ordering guarantees of each report.

use core_permissions::{
    by_feature, by_group, by_role, by_role_feature, group_members, property_distribution,
    role_group_counts, top_permissions, GroupCounts, PermissionGroup, PermissionRecord, Row,
    ValueCount, ALL_GROUPS, DEFAULT_ROLE_FEATURE_LIMIT,
};

fn rec<'a>(role: &'a str, feature: &'a str, permission: &'a str, value: &'a str) -> PermissionRecord<'a> {
    PermissionRecord::new(role, feature, permission, value)
}

fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn counts(pairs: &[(PermissionGroup, u32)]) -> GroupCounts {
    let mut counts = GroupCounts::new();
    for (group, n) in pairs {
        for _ in 0..*n {
            counts.increment(*group);
        }
    }
    counts
}

// =============================================================================
// GROUP TOTALS
// =============================================================================

#[test]
fn test_by_group_empty_has_all_groups_at_zero() {
    let counts = by_group(&[]);
    assert_eq!(counts.iter().count(), ALL_GROUPS.len());
    assert!(counts.iter().all(|(_, n)| n == 0));
    assert_eq!(counts.total(), 0);
}

#[test]
fn test_by_group_counts_enabled_only() {
    let records = [
        rec("Admin", "X", "view", "1"),
        rec("Admin", "X", "viewPolicy", "true"),
        rec("Admin", "X", "edit", "0"),
        rec("Admin", "X", "isolateEndpoint", "1"),
        rec("Admin", "X", "mystery", "1"),
        rec("Admin", "X", "", "1"),
    ];
    let counts = by_group(&records);
    assert_eq!(counts[PermissionGroup::View], 2);
    assert_eq!(counts[PermissionGroup::Edit], 0);
    assert_eq!(counts[PermissionGroup::FullAccess], 1);
    assert_eq!(counts[PermissionGroup::Other], 1);
    assert_eq!(counts.total(), 4);
}

#[test]
fn test_role_group_counts_scopes_to_role() {
    let records = [
        rec("Admin", "X", "view", "1"),
        rec("Auditor", "X", "view", "1"),
        rec("Auditor", "X", "export", "1"),
    ];
    assert_eq!(
        role_group_counts(&records, "Auditor"),
        counts(&[(PermissionGroup::View, 1), (PermissionGroup::Export, 1)])
    );
    assert_eq!(role_group_counts(&records, "Nobody"), GroupCounts::new());
}

// =============================================================================
// PARTITIONS
// =============================================================================

#[test]
fn test_by_role_admin_example() {
    let records = [
        rec("Admin", "X", "view", "1"),
        rec("Admin", "X", "edit", "0"),
    ];
    let roles = by_role(&records);
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "Admin");
    assert_eq!(roles[0].counts, counts(&[(PermissionGroup::View, 1)]));
}

#[test]
fn test_by_role_keeps_roles_without_enabled_permissions() {
    let records = [
        rec("Admin", "X", "view", "1"),
        rec("Guest", "X", "view", "0"),
        rec("", "X", "view", "1"),
        rec("Ghost", "X", "", "1"),
    ];
    let names: Vec<_> = by_role(&records).iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["Admin", "Guest"]);
    assert_eq!(by_role(&records)[1].counts.total(), 0);
}

#[test]
fn test_by_feature_first_appearance_order() {
    let records = [
        rec("A", "Search", "view", "1"),
        rec("A", "Alerts", "edit", "1"),
        rec("B", "Search", "export", "1"),
        rec("B", "", "export", "1"),
    ];
    let features = by_feature(&records);
    assert_eq!(
        features.iter().map(|b| b.name).collect::<Vec<_>>(),
        vec!["Search", "Alerts"]
    );
    assert_eq!(
        features[0].counts,
        counts(&[(PermissionGroup::View, 1), (PermissionGroup::Export, 1)])
    );
}

// =============================================================================
// ROLE x FEATURE
// =============================================================================

#[test]
fn test_by_role_feature_sorting_and_labels() {
    let records = [
        rec("Zed", "F1", "view", "1"),
        rec("Admin", "Small", "view", "1"),
        rec("Admin", "Big", "view", "1"),
        rec("Admin", "Big", "edit", "1"),
        rec("Admin", "Big", "export", "1"),
        rec("Admin", "Off", "view", "0"),
    ];
    let entries = by_role_feature(&records, DEFAULT_ROLE_FEATURE_LIMIT);

    let labels: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(labels, vec!["Admin - Big", "Admin - Small", "Zed - F1"]);
    assert_eq!(entries[0].role, "Admin");
    assert_eq!(entries[0].feature, "Big");
    assert_eq!(entries[0].total(), 3);
}

#[test]
fn test_by_role_feature_truncates_overall() {
    let features: Vec<String> = (0..30).map(|i| format!("F{}", i)).collect();
    let records: Vec<_> = features
        .iter()
        .map(|feature| rec("Admin", feature, "view", "1"))
        .collect();

    let entries = by_role_feature(&records, 20);
    assert_eq!(entries.len(), 20);
    assert!(entries.iter().all(|e| e.total() > 0));
    // equal totals keep first-appearance order
    assert_eq!(entries[0].feature, "F0");
    assert_eq!(entries[19].feature, "F19");
}

#[test]
fn test_by_role_feature_skips_unnamed_pairs_only() {
    let records = [rec("Admin", "", "view", "1"), rec("", "X", "view", "1")];

    assert!(by_role_feature(&records, DEFAULT_ROLE_FEATURE_LIMIT).is_empty());

    let roles = by_role(&records);
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "Admin");
    assert_eq!(roles[0].counts, counts(&[(PermissionGroup::View, 1)]));

    let features = by_feature(&records);
    assert_eq!(features.len(), 1);
    assert_eq!(features[0].name, "X");
    assert_eq!(features[0].counts, counts(&[(PermissionGroup::View, 1)]));

    assert_eq!(by_group(&records).get(PermissionGroup::View), 2);
}

// =============================================================================
// TOP PERMISSIONS
// =============================================================================

#[test]
fn test_top_permissions_counts_and_groups() {
    let records = [
        rec("A", "X", "view", "1"),
        rec("B", "X", "view", "0"),
        rec("C", "X", "export", "1"),
        rec("D", "X", "export", "1"),
        rec("E", "X", "", "1"),
    ];
    let top = top_permissions(&records, 15);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "export");
    assert_eq!(top[0].group, PermissionGroup::Export);
    assert_eq!((top[0].enabled, top[0].disabled), (2, 0));
    assert_eq!(top[1].name, "view");
    assert_eq!((top[1].enabled, top[1].disabled), (1, 1));
}

#[test]
fn test_top_permissions_truncates_and_keeps_ties_stable() {
    let records = [
        rec("A", "X", "p1", "1"),
        rec("A", "X", "p2", "1"),
        rec("A", "X", "p3", "1"),
        rec("A", "X", "p3", "1"),
    ];
    let top = top_permissions(&records, 2);
    assert_eq!(top.iter().map(|u| u.name).collect::<Vec<_>>(), vec!["p3", "p1"]);
    assert!(top_permissions(&records, 0).is_empty());
}

// =============================================================================
// DRILL-DOWN AND PROPERTIES
// =============================================================================

#[test]
fn test_group_members_lists_enabled_records_of_role() {
    let records = [
        rec("Admin", "X", "view", "1"),
        rec("Admin", "Y", "viewPolicy", "0"),
        rec("Admin", "Z", "edit", "1"),
        rec("Guest", "X", "view", "1"),
    ];
    let members = group_members(&records, "Admin", PermissionGroup::View);
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].feature, "X");
    assert!(group_members(&records, "Admin", PermissionGroup::Manage).is_empty());
}

#[test]
fn test_property_distribution_ranks_values() {
    let rows = vec![
        row(&[("Flags", "@{mode=on}")]),
        row(&[("Flags", "@{mode=off}")]),
        row(&[("Flags", "@{mode=on;mode=off}")]),
        row(&[("Flags", "@{other=1}")]),
        row(&[("Flags", "plain")]),
        row(&[]),
    ];
    let dist = property_distribution(&rows, "Flags", "mode", 5);
    assert_eq!(
        dist,
        vec![
            ValueCount { value: "off", count: 2 },
            ValueCount { value: "on", count: 1 },
            ValueCount { value: "N/A", count: 1 },
        ]
    );
    assert_eq!(property_distribution(&rows, "Flags", "mode", 1).len(), 1);
}

// =============================================================================
// SHAPE AND PURITY
// =============================================================================

#[test]
fn test_breakdown_serializes_flat_with_every_group() {
    let records = [rec("Admin", "X", "view", "1")];
    let json = serde_json::to_value(&by_role(&records)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "name": "Admin",
            "View": 1, "Edit": 0, "Export": 0, "Manage": 0, "FullAccess": 0, "Other": 0
        }])
    );
}

#[test]
fn test_aggregations_are_idempotent() {
    let records = [
        rec("Admin", "X", "view", "1"),
        rec("Admin", "Y", "edit", "1"),
        rec("Guest", "X", "download", "true"),
    ];
    assert_eq!(by_group(&records), by_group(&records));
    assert_eq!(by_role(&records), by_role(&records));
    assert_eq!(by_role_feature(&records, 20), by_role_feature(&records, 20));
    assert_eq!(top_permissions(&records, 15), top_permissions(&records, 15));
}
