// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Permlens Team

//! # permlens-engine
//!
//! Browser engine for permlens: holds one uploaded permissions export and
//! answers every report the dashboard renders.
//!
//! This crate is designed to be used as a library (rlib) by WASM wrappers.
//! All outputs are plain JS objects shaped for the charting layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod explorer;
mod types;
mod utils;
mod validation;

#[allow(unused_imports)]
use wasm_bindgen::prelude::*;

// Re-export main types
pub use explorer::PermissionExplorer;
pub use types::{DatasetDiagnostic, TablePage, TableRow};
pub use utils::{classify_permission, decode_property_bag, group_palette, is_permission_enabled};
pub use validation::{diagnose, validate_dataset};

// Set panic hook for better error messages in browser console
#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

/// Initialize the engine (sets panic hook for debugging).
/// This should be called by the WASM wrapper, not directly.
pub fn init_engine() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();
}
