//! Per-column statistics and property-bag views of arbitrary columns
//!
//! These work on raw rows rather than permission records, so they apply to
//! any column of the export, not only the permission ones.

use crate::aggregate::{rank, Partition, ValueCount};
use crate::chart::ChartPoint;
use crate::property_bag::{decode, discover_keys, has_envelope, NOT_AVAILABLE};
use crate::record::{Row, NAME_COLUMN};
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Value distribution of one property key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyStat<'a> {
    /// Property key
    pub key: &'a str,
    /// Most frequent values of the key
    pub values: Vec<ValueCount<'a>>,
}

/// Statistics of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSummary<'a> {
    /// Column name
    pub header: &'a str,
    /// Rows with a non-empty cell
    pub count: usize,
    /// Distinct cell values, an absent cell counting as its own value
    pub unique_values: usize,
    /// Most frequent value; absent and empty cells both count as `""`
    pub most_common: ValueCount<'a>,
    /// Per-key distributions when the column holds property bags
    pub property_stats: Vec<PropertyStat<'a>>,
}

/// Summarize the given columns
///
/// Every key found in any enveloped cell of a column gets its top
/// `top_values` distribution.
#[must_use]
pub fn summarize<'a>(rows: &'a [Row], headers: &[&'a str], top_values: usize) -> Vec<HeaderSummary<'a>> {
    headers
        .iter()
        .map(|&header| summarize_column(rows, header, top_values))
        .collect()
}

fn summarize_column<'a>(rows: &'a [Row], header: &'a str, top_values: usize) -> HeaderSummary<'a> {
    let cells = || rows.iter().map(move |row| row.get(header).map(String::as_str));

    let count = cells().filter(|cell| matches!(cell, Some(v) if !v.is_empty())).count();
    let unique_values = cells().collect::<BTreeSet<_>>().len();

    let mut tally: Partition<'a, u32> = Partition::new();
    for cell in cells() {
        *tally.entry(cell.unwrap_or("")) += 1;
    }
    let mut most_common = ValueCount { value: "", count: 0 };
    for (value, count) in tally.into_entries() {
        if count > most_common.count {
            most_common = ValueCount { value, count };
        }
    }

    let bags: Vec<&'a str> = cells().flatten().filter(|cell| has_envelope(cell)).collect();
    let mut keys: Partition<'a, ()> = Partition::new();
    for &bag in &bags {
        for key in decode(bag).keys() {
            keys.entry(key);
        }
    }

    let property_stats = keys
        .into_entries()
        .into_iter()
        .map(|(key, ())| {
            let mut values: Partition<'a, u32> = Partition::new();
            for &bag in &bags {
                *values.entry(decode(bag).get(key)) += 1;
            }
            PropertyStat {
                key,
                values: rank(values, top_values),
            }
        })
        .collect();

    HeaderSummary {
        header,
        count,
        unique_values,
        most_common,
        property_stats,
    }
}

/// A property key shared by several columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyGroup<'a> {
    /// Property key
    pub key: &'a str,
    /// Columns whose bags carry the key
    pub headers: Vec<&'a str>,
}

/// Property keys that appear in more than one column
///
/// Keys are discovered over the first `sample` rows of each column. Groups
/// are sorted by number of columns, largest first; equal sizes keep the
/// order in which keys were first seen.
#[must_use]
pub fn property_groups<'a>(rows: &'a [Row], headers: &[&'a str], sample: usize) -> Vec<PropertyGroup<'a>> {
    let mut by_key: Partition<'a, Vec<&'a str>> = Partition::new();

    for &header in headers {
        for key in discover_keys(rows, header, sample) {
            by_key.entry(key).push(header);
        }
    }

    let mut groups: Vec<PropertyGroup<'a>> = by_key
        .into_entries()
        .into_iter()
        .filter(|(_, headers)| headers.len() > 1)
        .map(|(key, headers)| PropertyGroup { key, headers })
        .collect();

    groups.sort_by(|a, b| b.headers.len().cmp(&a.headers.len()));
    groups
}

/// Pie slices `{name, value}` of one property key over a column
///
/// Enveloped cells contribute the value of `key`; other cells contribute
/// their raw text, or `"N/A"` when empty or absent. Slices are named by the
/// value, sized by its count and listed in order of first appearance.
#[must_use]
pub fn property_value_counts<'a>(rows: &'a [Row], header: &str, key: &str) -> Vec<ChartPoint<'a>> {
    let mut tally: Partition<'a, u32> = Partition::new();

    for row in rows {
        let value = match row.get(header).map(String::as_str) {
            Some(cell) if has_envelope(cell) => decode(cell).get(key),
            Some(cell) if !cell.is_empty() => cell,
            _ => NOT_AVAILABLE,
        };
        *tally.entry(value) += 1;
    }

    tally
        .into_entries()
        .into_iter()
        .map(|(name, value)| ChartPoint { name, value })
        .collect()
}

/// Cell value plotted in a per-row series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SeriesValue<'a> {
    /// A bag flag of `"1"` or `"0"`
    Flag(u8),
    /// Anything else, verbatim
    Text(&'a str),
}

/// One row of a per-row series
///
/// Serializes as `{name, <header>: value, ...}`; absent cells are omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRow<'a> {
    /// Row label
    pub name: String,
    /// Plotted cells in header order
    pub values: Vec<(&'a str, SeriesValue<'a>)>,
}

impl Serialize for SeriesRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("name", &self.name)?;
        for (header, value) in &self.values {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

/// Per-row series of one property key over several columns
///
/// Covers the first `limit` rows. Each row is labelled by its `Name` cell or
/// `Item {n}` (1-based). Enveloped cells contribute the value of `key`, with
/// `"1"`/`"0"` turned into numbers; other cells pass through unchanged.
#[must_use]
pub fn property_series<'a>(
    rows: &'a [Row],
    headers: &[&'a str],
    key: &str,
    limit: usize,
) -> Vec<SeriesRow<'a>> {
    rows.iter()
        .take(limit)
        .enumerate()
        .map(|(index, row)| {
            let name = match row.get(NAME_COLUMN) {
                Some(name) if !name.is_empty() => name.clone(),
                _ => format!("Item {}", index + 1),
            };

            let values = headers
                .iter()
                .filter_map(|header| {
                    let cell = row.get(*header)?;
                    let value = if has_envelope(cell) {
                        match decode(cell).get(key) {
                            "1" => SeriesValue::Flag(1),
                            "0" => SeriesValue::Flag(0),
                            other => SeriesValue::Text(other),
                        }
                    } else {
                        SeriesValue::Text(cell.as_str())
                    };
                    Some((*header, value))
                })
                .collect();

            SeriesRow { name, values }
        })
        .collect()
}
