//! Fuzz target for property-bag decoding
//!
//! Decoding must accept any string without panicking, and every decoded key
//! must be retrievable from the bag it came from.

#![no_main]

use libfuzzer_sys::fuzz_target;
use core_permissions::{decode, has_envelope};

fuzz_target!(|data: &str| {
    let bag = decode(data);

    if !has_envelope(data) {
        assert!(bag.is_empty());
    }

    for pair in bag.pairs() {
        // last-wins lookup always finds some value for a present key
        let _ = bag.get(pair.key);
        assert!(!pair.key.starts_with(' ') && !pair.value.ends_with(' '));
    }
});
