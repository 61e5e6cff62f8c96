//! Fuzz target for session payload decoding
//!
//! Arbitrary text must either be rejected with an error or produce a dataset
//! that the whole report pipeline can run over without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use app_utils::parse_session;
use core_permissions::{by_group, by_role_feature, summarize, top_permissions, MAX_COLUMNS};

fuzz_target!(|data: &str| {
    let Ok(dataset) = parse_session(data) else {
        return;
    };

    assert!(dataset.column_count() <= MAX_COLUMNS);

    let records = dataset.records();
    let _ = by_group(&records);
    let _ = top_permissions(&records, 15);
    assert!(by_role_feature(&records, 20).len() <= 20);

    let headers: Vec<&str> = dataset.headers().iter().map(String::as_str).collect();
    let _ = summarize(dataset.rows(), &headers, 5);
});
