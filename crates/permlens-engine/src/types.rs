use core_permissions::{Page, PermissionGroup, Row};
use serde::Serialize;

/// Dataset validation diagnostic
///
/// Returned by `validateDataset` so the upload screen can explain why a
/// file cannot drive the role and permission reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetDiagnostic {
    /// Whether every report can run on the dataset
    pub valid: bool,
    /// Human-readable problem description, None if valid
    pub message: Option<String>,
    /// Required permission columns absent from the headers
    pub missing_columns: Vec<String>,
    /// Rows in the dataset, zero when it could not be built
    pub row_count: usize,
    /// Rows without a role or permission, skipped by the role reports
    pub non_aggregable_rows: usize,
}

/// One table row with its badges
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow<'a> {
    /// Raw cells by column
    pub cells: &'a Row,
    /// Group badge, None renders as `N/A`
    pub group: Option<PermissionGroup>,
    /// Enabled badge, None renders as `N/A`
    pub enabled: Option<bool>,
}

/// One page of the searchable table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage<'a> {
    /// 1-based page shown
    pub page: usize,
    /// Number of pages
    pub total_pages: usize,
    /// Matching rows across all pages
    pub total: usize,
    /// 1-based index of the first row shown, zero when empty
    pub first: usize,
    /// 1-based index of the last row shown, zero when empty
    pub last: usize,
    /// Rows of this page
    pub rows: Vec<TableRow<'a>>,
}

impl<'a> From<Page<'_, &'a Row>> for TablePage<'a> {
    fn from(page: Page<'_, &'a Row>) -> Self {
        let rows = page
            .items
            .iter()
            .map(|&cells| TableRow {
                cells,
                group: core_permissions::permission_badge(cells),
                enabled: core_permissions::value_badge(cells),
            })
            .collect();

        Self {
            page: page.page,
            total_pages: page.total_pages,
            total: page.total,
            first: page.first,
            last: page.last,
            rows,
        }
    }
}
