// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Permlens Team

//! # permlens
//!
//! Classification and aggregation of permission exports for access-control
//! audits.
//!
//! This crate provides a unified API over the permlens workspace:
//!
//! - **Analysis**: Permission classification, property-bag decoding and
//!   report aggregation without external dependencies
//! - **Ingestion**: Session payload loading and configuration files
//! - **WASM Engine**: The session object behind the browser dashboard
//!
//! ## Quick Start
//!
//! ```rust
//! use permlens::analysis::{by_role, classify, PermissionGroup, PermissionRecord};
//!
//! assert_eq!(classify(Some("viewPolicy")), PermissionGroup::View);
//!
//! let records = [
//!     PermissionRecord::new("Admin", "X", "view", "1"),
//!     PermissionRecord::new("Admin", "X", "edit", "0"),
//! ];
//! let roles = by_role(&records);
//! assert_eq!(roles[0].counts[PermissionGroup::View], 1);
//! assert_eq!(roles[0].counts.total(), 1);
//! ```
//!
//! ## Architecture
//!
//! This facade crate re-exports the following modules:
//!
//! - [`analysis`] - Pure classification and aggregation (from `core-permissions`)
//! - [`utils`] - Session and configuration loading (from `app-utils`)
//! - [`engine`] - WASM-ready session engine (from `permlens-engine`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Analysis module.
///
/// Re-exports `core_permissions` for classification and aggregation.
pub mod analysis {
    pub use core_permissions::*;
}

/// Ingestion utilities module.
///
/// Re-exports `app_utils` for session payloads and configuration files.
pub mod utils {
    pub use app_utils::*;
}

/// Session engine module.
///
/// Re-exports `permlens_engine` for the browser dashboard.
pub mod engine {
    pub use permlens_engine::*;
}

// Convenience re-exports at root level
pub use core_permissions::{classify, decode, is_enabled, AnalysisConfig, Dataset, PermissionGroup};
