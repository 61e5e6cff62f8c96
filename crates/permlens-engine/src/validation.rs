use crate::types::DatasetDiagnostic;
use crate::utils::to_js;
use app_utils::session::SessionPayload;
use core_permissions::Dataset;
use tracing::debug;
use wasm_bindgen::prelude::*;

/// Validates a session payload with a detailed diagnostic
///
/// Never fails on a malformed payload: the problem is reported in the
/// diagnostic instead.
#[wasm_bindgen(js_name = validateDataset)]
pub fn validate_dataset(payload: JsValue) -> Result<JsValue, JsValue> {
    let diagnostic = match serde_wasm_bindgen::from_value::<SessionPayload>(payload) {
        Ok(payload) => match payload.into_dataset() {
            Ok(dataset) => diagnose(&dataset),
            Err(e) => rejected(e.to_string()),
        },
        Err(e) => rejected(format!("Invalid session payload: {}", e)),
    };

    to_js(&diagnostic)
}

fn rejected(message: String) -> DatasetDiagnostic {
    DatasetDiagnostic {
        valid: false,
        message: Some(message),
        missing_columns: Vec::new(),
        row_count: 0,
        non_aggregable_rows: 0,
    }
}

/// Check that a dataset can drive the role and permission reports
pub fn diagnose(dataset: &Dataset) -> DatasetDiagnostic {
    let missing: Vec<String> = dataset
        .missing_permission_columns()
        .into_iter()
        .map(String::from)
        .collect();

    let non_aggregable_rows = dataset
        .records()
        .iter()
        .filter(|r| r.role_name.is_empty() || !r.has_permission())
        .count();

    debug!(
        rows = dataset.row_count(),
        missing = missing.len(),
        non_aggregable_rows,
        "dataset diagnosed"
    );

    let message = if !missing.is_empty() {
        Some(format!("Missing required columns: {}", missing.join(", ")))
    } else if dataset.row_count() == 0 {
        Some("Dataset has no rows".to_string())
    } else {
        None
    };

    DatasetDiagnostic {
        valid: message.is_none(),
        message,
        missing_columns: missing,
        row_count: dataset.row_count(),
        non_aggregable_rows,
    }
}
