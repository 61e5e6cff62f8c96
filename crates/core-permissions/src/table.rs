//! Searchable, paged table view and CSV export

use crate::classifier::classify;
use crate::group::PermissionGroup;
use crate::record::{Row, PERMISSION_COLUMN, VALUE_COLUMN};
use crate::value::is_enabled;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

/// Rows where any of `headers` contains `term`, ignoring case
///
/// A blank term (empty or whitespace only) matches every row.
#[must_use]
pub fn search<'a, H: AsRef<str>>(rows: &'a [Row], headers: &[H], term: &str) -> Vec<&'a Row> {
    if term.trim().is_empty() {
        return rows.iter().collect();
    }

    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| {
            headers.iter().any(|header| {
                row.get(header.as_ref())
                    .is_some_and(|cell| cell.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

/// One page of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    /// 1-based page number actually shown
    pub page: usize,
    /// Number of pages, zero when there is nothing to show
    pub total_pages: usize,
    /// Number of items across all pages
    pub total: usize,
    /// 1-based index of the first item shown, zero when empty
    pub first: usize,
    /// 1-based index of the last item shown, zero when empty
    pub last: usize,
    /// Items on this page
    pub items: &'a [T],
}

/// Cut one page out of `items`
///
/// `page` is 1-based and clamped to the available range. A `page_size` of
/// zero is treated as one.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    let (first, last) = if start < end { (start + 1, end) } else { (0, 0) };

    Page {
        page,
        total_pages,
        total,
        first,
        last,
        items: &items[start..end],
    }
}

/// Render rows as CSV
///
/// Values containing a comma are wrapped in double quotes; absent cells are
/// empty. Lines are joined by `\n` without a trailing newline.
#[must_use]
pub fn export_csv<H: AsRef<str>>(headers: &[H], rows: &[&Row]) -> String {
    let mut out = String::new();

    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(header.as_ref());
    }

    for row in rows {
        out.push('\n');
        for (i, header) in headers.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let cell = row.get(header.as_ref()).map_or("", String::as_str);
            if cell.contains(',') {
                out.push('"');
                out.push_str(cell);
                out.push('"');
            } else {
                out.push_str(cell);
            }
        }
    }

    out
}

/// Group badge for the `Permission` cell, `None` when it is missing or empty
#[must_use]
pub fn permission_badge(row: &Row) -> Option<PermissionGroup> {
    row.get(PERMISSION_COLUMN)
        .filter(|permission| !permission.is_empty())
        .map(|permission| classify(Some(permission.as_str())))
}

/// Enabled badge for the `Value` cell, `None` when the cell is absent
#[must_use]
pub fn value_badge(row: &Row) -> Option<bool> {
    row.get(VALUE_COLUMN).map(|value| is_enabled(Some(value.as_str())))
}
