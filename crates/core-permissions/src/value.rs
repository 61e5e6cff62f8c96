//! Interpretation of raw permission values

/// Whether a raw permission value means "enabled"
///
/// Only the literal `"1"` and a case-insensitive `"true"` are enabled.
/// A property-bag value such as `@{view=1}` is not; per-key state inside a
/// bag is read with [`PropertyBag::get`](crate::PropertyBag::get).
#[must_use]
pub fn is_enabled(value: Option<&str>) -> bool {
    match value {
        Some(value) => value == "1" || value.eq_ignore_ascii_case("true"),
        None => false,
    }
}
