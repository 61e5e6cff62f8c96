//! Dataset construction, role filtering and overview tests

use core_permissions::{
    overview, unique_features, unique_roles, AnalysisError, Dataset, Overview, RoleFilter, Row,
    MAX_COLUMNS,
};

fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn sample() -> Dataset {
    Dataset::new(
        headers(&["RoleName", "Feature", "Permission", "Value"]),
        vec![
            row(&[("RoleName", "Admin"), ("Feature", "Search"), ("Permission", "view"), ("Value", "1")]),
            row(&[("RoleName", "Admin"), ("Feature", "Alerts"), ("Permission", "edit"), ("Value", "0")]),
            row(&[("RoleName", "Auditor"), ("Feature", "Search"), ("Permission", "view"), ("Value", "1")]),
            row(&[("RoleName", ""), ("Feature", "Search"), ("Permission", ""), ("Value", "")]),
        ],
    )
    .unwrap()
}

#[test]
fn test_new_keeps_header_order() {
    let dataset = sample();
    assert_eq!(dataset.headers(), &["RoleName", "Feature", "Permission", "Value"]);
    assert_eq!(dataset.row_count(), 4);
    assert_eq!(dataset.column_count(), 4);
}

#[test]
fn test_new_rejects_duplicate_headers() {
    let result = Dataset::new(headers(&["A", "B", "A"]), vec![]);
    assert_eq!(result, Err(AnalysisError::DuplicateHeader("A".to_string())));
}

#[test]
fn test_new_rejects_too_many_columns() {
    let names: Vec<String> = (0..=MAX_COLUMNS).map(|i| format!("c{}", i)).collect();
    match Dataset::new(names, vec![]) {
        Err(AnalysisError::TooManyColumns { max, attempted }) => {
            assert_eq!(max, MAX_COLUMNS);
            assert_eq!(attempted, MAX_COLUMNS + 1);
        }
        other => panic!("expected TooManyColumns, got {:?}", other),
    }
}

#[test]
fn test_missing_permission_columns() {
    let dataset = Dataset::new(headers(&["Name", "Value", "RoleName"]), vec![]).unwrap();
    assert_eq!(dataset.missing_permission_columns(), vec!["Feature", "Permission"]);
    assert!(!dataset.has_permission_columns());
    assert!(sample().has_permission_columns());
}

#[test]
fn test_filter_by_role() {
    let dataset = sample();

    let all = dataset.filter_by_role(&RoleFilter::All);
    assert_eq!(all, dataset);

    let admin = dataset.filter_by_role(&RoleFilter::parse("Admin"));
    assert_eq!(admin.row_count(), 2);
    assert_eq!(admin.headers(), dataset.headers());

    let nobody = dataset.filter_by_role(&RoleFilter::parse("Nobody"));
    assert_eq!(nobody.row_count(), 0);
}

#[test]
fn test_role_filter_parse() {
    assert_eq!(RoleFilter::parse("all"), RoleFilter::All);
    assert_eq!(RoleFilter::parse("All"), RoleFilter::Role("All".to_string()));
    assert_eq!(RoleFilter::default(), RoleFilter::All);
}

#[test]
fn test_records_read_absent_columns_as_empty() {
    let dataset = Dataset::new(headers(&["RoleName"]), vec![row(&[("RoleName", "Admin")])]).unwrap();
    let records = dataset.records();
    assert_eq!(records[0].role_name, "Admin");
    assert_eq!(records[0].permission, "");
    assert!(!records[0].has_permission());
}

#[test]
fn test_overview_and_unique_values() {
    let dataset = sample();
    let records = dataset.records();

    assert_eq!(unique_roles(&records), vec!["Admin", "Auditor"]);
    assert_eq!(unique_features(&records), vec!["Search", "Alerts"]);
    assert_eq!(
        overview(&records),
        Overview {
            roles: 2,
            features: 2,
            permissions: 2,
            entries: 4,
        }
    );
}
