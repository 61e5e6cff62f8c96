//! Property-bag decoding
//!
//! Vendor exports embed several flags in a single cell using the envelope
//! `@{key1=value1;key2=value2}`. The format has no escaping:
//!
//! - the value must start with `@{` and end with `}`, otherwise it decodes
//!   to an empty bag;
//! - the interior is split on `;` and every token is trimmed;
//! - a token without `=` is dropped;
//! - key and value are the trimmed halves around the first `=`.
//!
//! Keys may repeat. [`PropertyBag::get`] returns the last occurrence.

use crate::record::Row;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::Serialize;

/// Placeholder reported when a key is absent from a bag
pub const NOT_AVAILABLE: &str = "N/A";

/// One decoded `key=value` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Property<'a> {
    /// Text before the first `=`
    pub key: &'a str,
    /// Text after the first `=`
    pub value: &'a str,
}

/// Ordered pairs decoded from one envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyBag<'a> {
    pairs: Vec<Property<'a>>,
}

impl<'a> PropertyBag<'a> {
    /// Decoded pairs in input order, repeated keys included
    #[must_use]
    pub fn pairs(&self) -> &[Property<'a>] {
        &self.pairs
    }

    /// Number of pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the bag holds no pairs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value of `key`, the last occurrence winning
    ///
    /// Returns [`NOT_AVAILABLE`] when the key is absent.
    #[must_use]
    pub fn get(&self, key: &str) -> &'a str {
        let mut found = NOT_AVAILABLE;
        for pair in &self.pairs {
            if pair.key == key {
                found = pair.value;
            }
        }
        found
    }

    /// Keys in input order (repeats included)
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.pairs.iter().map(|pair| pair.key)
    }
}

/// Whether `raw` carries the `@{...}` envelope
#[must_use]
pub fn has_envelope(raw: &str) -> bool {
    envelope_body(raw).is_some()
}

fn envelope_body(raw: &str) -> Option<&str> {
    raw.strip_prefix("@{")?.strip_suffix('}')
}

/// Decode a property-bag value
///
/// ## Example
///
/// ```
/// use core_permissions::property_bag::decode;
///
/// let bag = decode("@{view=1; edit = 0;a=2;a=3}");
/// assert_eq!(bag.get("view"), "1");
/// assert_eq!(bag.get("edit"), "0");
/// assert_eq!(bag.get("a"), "3");
/// assert_eq!(bag.get("missing"), "N/A");
/// assert!(decode("1").is_empty());
/// ```
#[must_use]
pub fn decode(raw: &str) -> PropertyBag<'_> {
    let Some(body) = envelope_body(raw) else {
        return PropertyBag::default();
    };

    let pairs = body
        .split(';')
        .map(str::trim)
        .filter_map(|token| token.split_once('='))
        .map(|(key, value)| Property {
            key: key.trim(),
            value: value.trim(),
        })
        .collect();

    PropertyBag { pairs }
}

/// Keys appearing in the bags of one column
///
/// Only the first `sample` rows are inspected. Keys are returned once each,
/// in the order they are first seen.
#[must_use]
pub fn discover_keys<'a>(rows: &'a [Row], header: &str, sample: usize) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    let mut keys = Vec::new();

    for row in rows.iter().take(sample) {
        let Some(cell) = row.get(header) else {
            continue;
        };
        for key in decode(cell).keys() {
            if seen.insert(key) {
                keys.push(key);
            }
        }
    }

    keys
}
