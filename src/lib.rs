// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Locator - anatomical locations for intracranial contact pairs
//!
//! Given a recording session's bipolar contact pairs, `locator` picks the
//! best-available anatomical label for every pair from several annotation
//! sources and answers region-membership questions as boolean masks aligned
//! with pair order.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! locator = "0.1"
//! ```
//!
//! ```rust,no_run
//! use locator::prelude::*;
//!
//! let config = load_config(None)?;
//! locator::init_logging_from_config(&config)?;
//!
//! let resolver = locator::open_session(&config, "R1001P_0")?;
//! let in_left_mtl = resolver.left_mtl();
//! let labels = resolver.all();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crates
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  locator-config                                         │
//! │  (locator_configuration.toml + LOCATOR_* overrides)     │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  locator-regions                                        │
//! │  (session readers, resolution, taxonomy, masks)         │
//! └─────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────┐
//! │  locator-observability                                  │
//! │  (tracing subscriber, --debug-<crate> flags)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

pub use locator_config as config;
pub use locator_observability as observability;
pub use locator_regions as regions;

use locator_config::LocatorConfig;
use locator_regions::{JsonSessionReader, LocatorResult, RegionResolver};

/// Build a resolver for `session` under the configured data directory
///
/// # Errors
///
/// Fails when the session's pairs file cannot be read or parsed. A missing
/// or malformed localization file only disables whole-brain co-localization.
pub fn open_session(config: &LocatorConfig, session: &str) -> LocatorResult<RegionResolver> {
    let reader = JsonSessionReader::from_config(&config.reader, session);
    tracing::debug!(
        target: "locator",
        "Opening session {} from {}",
        session,
        reader.pairs_path().display()
    );
    RegionResolver::from_reader(&reader)
}

/// Install the global subscriber using `--debug-*` args and the configured level
pub fn init_logging_from_config(config: &LocatorConfig) -> anyhow::Result<()> {
    let flags = locator_observability::parse_debug_flags();
    locator_observability::init_logging(&flags, &config.logging.level)
}

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use locator_config::{load_config, LocatorConfig};
    pub use locator_regions::{
        IntoAliases, JsonSessionReader, LocationSource, RegionGroup, RegionResolver, SessionReader,
        Side, StaticSessionReader,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_open_session_missing_pairs_fails() {
        let mut config = LocatorConfig::default();
        config.reader.data_dir = PathBuf::from("/nonexistent/locator/data");

        assert!(matches!(
            open_session(&config, "R1_0"),
            Err(locator_regions::LocatorError::PairsUnavailable(_))
        ));
    }
}
