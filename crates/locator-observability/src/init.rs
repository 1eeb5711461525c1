// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Installs a human-readable console layer filtered by the debug flags.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;

/// Initialize console logging
///
/// # Arguments
/// * `debug_flags` - Per-crate debug flags
/// * `default_level` - Level for everything not raised by a flag (e.g. `"info"`)
///
/// # Errors
///
/// Fails if the filter directives are malformed or a global subscriber is
/// already installed.
pub fn init_logging(debug_flags: &CrateDebugFlags, default_level: &str) -> Result<()> {
    let filter = debug_flags.to_filter_string(default_level);
    let env_filter = EnvFilter::try_new(&filter)
        .with_context(|| format!("Invalid log filter: {}", filter))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_filter(env_filter);

    Registry::default()
        .with(console_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::debug!("Logging initialized with filter '{}'", filter);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let flags = CrateDebugFlags::default();
        // Another test binary thread may have won the race; either way the
        // second call must fail instead of panicking.
        let _ = init_logging(&flags, "info");
        assert!(init_logging(&flags, "info").is_err());
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let flags = CrateDebugFlags::default();
        assert!(init_logging(&flags, "locator_regions=loudest").is_err());
    }
}
