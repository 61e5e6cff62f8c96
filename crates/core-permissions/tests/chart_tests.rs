//! Chart shaping and palette tests

use core_permissions::chart::FALLBACK_COLOR;
use core_permissions::{
    by_role_feature, color_for, group_series, palette, stacked_rows, ChartPoint, GroupCounts,
    PermissionGroup, PermissionRecord, ALL_GROUPS,
};

#[test]
fn test_palette_covers_every_group_in_order() {
    let groups: Vec<_> = palette().iter().map(|style| style.group).collect();
    assert_eq!(groups, ALL_GROUPS.to_vec());
}

#[test]
fn test_colors() {
    assert_eq!(color_for("View"), "#4ade80");
    assert_eq!(color_for("Edit"), "#f97316");
    assert_eq!(color_for("Export"), "#3b82f6");
    assert_eq!(color_for("Manage"), "#8b5cf6");
    assert_eq!(color_for("FullAccess"), "#ef4444");
    assert_eq!(color_for("Other"), "#94a3b8");
    assert_eq!(color_for("view"), FALLBACK_COLOR);
    assert_eq!(color_for(""), "#777777");
}

#[test]
fn test_group_series_skips_empty_groups() {
    let mut counts = GroupCounts::new();
    counts.increment(PermissionGroup::Manage);
    counts.increment(PermissionGroup::View);
    counts.increment(PermissionGroup::View);

    assert_eq!(
        group_series(&counts),
        vec![
            ChartPoint { name: "View", value: 2 },
            ChartPoint { name: "Manage", value: 1 },
        ]
    );
    assert!(group_series(&GroupCounts::new()).is_empty());
}

#[test]
fn test_stacked_rows_use_matrix_labels() {
    let records = [
        PermissionRecord::new("Admin", "Search", "view", "1"),
        PermissionRecord::new("Admin", "Search", "exportResults", "1"),
    ];
    let entries = by_role_feature(&records, 20);
    let rows = stacked_rows(&entries);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Admin - Search");
    assert_eq!(rows[0].counts.total(), 2);
}
