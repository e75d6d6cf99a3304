// SPDX-License-Identifier: MPL-2.0
//! Developer-facing logging.
//!
//! Everything in the crate reports through `tracing` macros; this module only
//! installs the subscriber that prints them.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--loglevel` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "label_desk=info";

/// Builds the filter from an explicit directive, `RUST_LOG`, or the default.
///
/// An unparsable explicit directive falls through to the environment so a
/// typo on the command line never silences logging.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    if let Some(directive) = directive {
        if let Ok(filter) = EnvFilter::try_new(directive) {
            return filter;
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber. Subsequent calls are no-ops.
pub fn init(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_target(true)
        .try_init();
}
