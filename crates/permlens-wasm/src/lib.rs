// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Permlens Team

//! # permlens-wasm
//!
//! WASM bindings for the permlens dashboard.
//! This is the public cdylib wrapper around permlens-engine.

#![forbid(unsafe_code)]

use wasm_bindgen::prelude::*;

// Re-export all public APIs from the engine
pub use permlens_engine::*;

/// Initialize the WASM module (sets panic hook for debugging)
#[wasm_bindgen(start)]
pub fn init() {
    permlens_engine::init_engine();
}
