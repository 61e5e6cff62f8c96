#![cfg(target_arch = "wasm32")]

use permlens_engine::{
    classify_permission, decode_property_bag, group_palette, is_permission_enabled,
    validate_dataset, PermissionExplorer,
};
use serde::de::IgnoredAny;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const SESSION: &str = r#"{
  "data": [
    {"RoleName": "Admin", "Feature": "Search", "Permission": "viewPolicy", "Value": "1", "Flags": "@{view=1;edit=0}"},
    {"RoleName": "Admin", "Feature": "Alerts", "Permission": "isolateEndpoint", "Value": "1", "Flags": "@{view=0}"},
    {"RoleName": "Auditor", "Feature": "Search", "Permission": "exportResults", "Value": "0", "Flags": "n/a"}
  ],
  "meta": {"filename": "roles.csv", "rowCount": 3, "columnCount": 5,
           "headers": ["RoleName", "Feature", "Permission", "Value", "Flags"]}
}"#;

fn explorer() -> PermissionExplorer {
    PermissionExplorer::from_json(SESSION).unwrap()
}

#[derive(Deserialize)]
struct Slice {
    name: String,
    value: u32,
}

fn length(value: &JsValue) -> usize {
    let items: Vec<IgnoredAny> = serde_wasm_bindgen::from_value(value.clone()).unwrap();
    items.len()
}

#[wasm_bindgen_test]
fn test_free_functions() {
    assert_eq!(classify_permission(Some("viewPolicy".to_string())), "View");
    assert_eq!(classify_permission(None), "Other");
    assert!(is_permission_enabled(Some("TRUE".to_string())));
    assert!(!is_permission_enabled(None));
    assert_eq!(length(&decode_property_bag("@{a=1;b=2}").unwrap()), 2);
    assert_eq!(length(&group_palette().unwrap()), 6);
}

#[wasm_bindgen_test]
fn test_reports_are_js_values() {
    let explorer = explorer();
    assert!(explorer.overview().unwrap().is_object());
    assert_eq!(length(&explorer.by_role().unwrap()), 2);
    assert_eq!(length(&explorer.by_feature().unwrap()), 2);
    assert_eq!(length(&explorer.group_series().unwrap()), 2);
    assert_eq!(length(&explorer.role_feature_matrix().unwrap()), 2);
    assert_eq!(length(&explorer.top_permissions(Some(1)).unwrap()), 1);
    assert_eq!(length(&explorer.group_members("Admin", "View").unwrap()), 1);
    assert!(explorer.group_members("Admin", "Nope").is_err());
}

#[wasm_bindgen_test]
fn test_property_reports() {
    let explorer = explorer();
    assert_eq!(length(&explorer.property_keys("Flags").unwrap()), 2);
    assert_eq!(length(&explorer.property_distribution("Flags", "view").unwrap()), 2);
    let slices: Vec<Slice> =
        serde_wasm_bindgen::from_value(explorer.property_value_counts("Flags", "view").unwrap()).unwrap();
    let slices: Vec<_> = slices.iter().map(|s| (s.name.as_str(), s.value)).collect();
    assert_eq!(slices, vec![("1", 1), ("0", 1), ("n/a", 1)]);
    assert_eq!(length(&explorer.summarize(JsValue::UNDEFINED).unwrap()), 5);
    assert_eq!(length(&explorer.property_series(JsValue::UNDEFINED, "view").unwrap()), 3);
}

#[wasm_bindgen_test]
fn test_role_filter_changes_reports() {
    let mut explorer = explorer();
    explorer.set_role_filter("Auditor");
    assert_eq!(explorer.row_count(), 1);
    assert_eq!(length(&explorer.by_role().unwrap()), 1);
    assert_eq!(length(&explorer.roles().unwrap()), 2);
}

#[wasm_bindgen_test]
fn test_search_page_is_object() {
    let explorer = explorer();
    let page = explorer.search("admin", 1).unwrap();
    assert!(page.is_object());
}

#[wasm_bindgen_test]
fn test_validate_dataset_never_throws() {
    assert!(validate_dataset(JsValue::from_str("garbage")).unwrap().is_object());
}
