// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # locator-observability
//!
//! Logging setup shared by the locator crates, with per-crate debug flags
//! (`--debug-locator-regions`, `--debug-all`, or `LOCATOR_DEBUG=...`).

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Known locator crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &["locator-regions", "locator-config", "locator"];
