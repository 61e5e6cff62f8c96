//! Property-based tests for cell normalization

use app_utils::normalize_cell;
use proptest::prelude::*;

proptest! {
    /// Property: normalizing an already clean value leaves it alone
    #[test]
    fn prop_clean_values_unchanged(value in "[A-Za-z0-9_@{}=;-][A-Za-z0-9 _@{}=;-]{0,30}[A-Za-z0-9_@{}=;-]") {
        prop_assert_eq!(normalize_cell(&value), value);
    }

    /// Property: quoting and padding a clean value is undone
    #[test]
    fn prop_quotes_and_padding_removed(
        value in "[A-Za-z0-9_]{0,20}",
        quote in prop_oneof![Just('"'), Just('\'')],
        pad in " {0,3}",
    ) {
        let raw = format!("{pad}{quote}{value}{quote}{pad}");
        prop_assert_eq!(normalize_cell(&raw), value);
    }

    /// Property: the result never grows
    #[test]
    fn prop_never_longer(raw in any::<String>()) {
        prop_assert!(normalize_cell(&raw).len() <= raw.len());
    }
}
