//! Session payload ingestion
//!
//! The upload layer hands over the parsed export as JSON:
//!
//! ```json
//! {
//!   "data": [{"RoleName": "Admin", "Permission": "view", "Value": "1"}],
//!   "meta": {"filename": "roles.csv", "rowCount": 1, "columnCount": 3,
//!            "headers": ["RoleName", "Permission", "Value"]}
//! }
//! ```
//!
//! Column names and cell values are normalized on the way in: surrounding
//! whitespace is trimmed, then one leading and one trailing quote (`"` or
//! `'`) is removed.

use crate::error::Result;
use core_permissions::{Dataset, Row};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

/// Metadata recorded by the upload layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionMeta {
    /// Name of the uploaded file
    pub filename: String,
    /// Row count as reported by the parser
    pub row_count: usize,
    /// Column count as reported by the parser
    pub column_count: usize,
    /// Column headers in file order
    pub headers: Vec<String>,
}

/// A parsed export as stored for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    /// One object per row
    pub data: Vec<Map<String, Value>>,
    /// Upload metadata
    #[serde(default)]
    pub meta: SessionMeta,
}

/// Trim a raw cell and drop one pair of surrounding quotes
///
/// Each end is stripped independently, so `"abc` becomes `abc`.
pub fn normalize_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix(['"', '\''])
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(['"', '\'']).unwrap_or(trimmed);
    trimmed.to_string()
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(normalize_cell(s)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

impl SessionPayload {
    /// Column headers, normalized
    ///
    /// Falls back to the union of row keys (sorted) when the metadata
    /// carries no headers. Headers that collide after normalization keep
    /// their first occurrence.
    pub fn headers(&self) -> Vec<String> {
        if !self.meta.headers.is_empty() {
            let mut headers: Vec<String> = Vec::with_capacity(self.meta.headers.len());
            for raw in &self.meta.headers {
                let header = normalize_cell(raw);
                if headers.contains(&header) {
                    warn!(header = %header, raw = %raw, "dropping repeated column header");
                } else {
                    headers.push(header);
                }
            }
            return headers;
        }

        let mut headers: Vec<String> = Vec::new();
        for row in &self.data {
            for key in row.keys() {
                let key = normalize_cell(key);
                if !headers.contains(&key) {
                    headers.push(key);
                }
            }
        }
        headers.sort();
        headers
    }

    /// Build the dataset the analysis runs on
    ///
    /// # Errors
    ///
    /// Returns `Error::Analysis` when the dataset exceeds a limit.
    pub fn into_dataset(self) -> Result<Dataset> {
        let headers = self.headers();

        if self.meta.row_count != 0 && self.meta.row_count != self.data.len() {
            warn!(
                reported = self.meta.row_count,
                actual = self.data.len(),
                "session row count does not match its data"
            );
        }

        let rows: Vec<Row> = self
            .data
            .iter()
            .map(|object| {
                let mut row = Row::new();
                for (key, value) in object {
                    if let Some(cell) = cell_text(value) {
                        row.entry(normalize_cell(key)).or_insert(cell);
                    }
                }
                row
            })
            .collect();

        debug!(
            filename = %self.meta.filename,
            rows = rows.len(),
            columns = headers.len(),
            "session decoded"
        );

        Ok(Dataset::new(headers, rows)?)
    }
}

/// Decode a session payload from JSON text
pub fn parse_session(input: &str) -> Result<Dataset> {
    let payload: SessionPayload = serde_json::from_str(input)?;
    payload.into_dataset()
}

/// Read and decode a session payload file
pub fn load_session(path: &Path) -> Result<Dataset> {
    let input = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = input.len(), "reading session");
    parse_session(&input)
}
