// SPDX-License-Identifier: MPL-2.0
//! Startup preparation: configuration, overrides, validation and the
//! initial page.
//!
//! Everything that can fail before the window opens happens here, so `main`
//! can report the error and exit with a non-zero status.

use super::config::{self, Config, PrinterOverrides};
use super::Flags;
use crate::catalog::PrinterCatalog;
use crate::error::Result;
use crate::sync::Page;
use std::path::PathBuf;

/// Everything the application needs to boot.
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: Config,
    pub page: Page,
    pub lang: Option<String>,
    pub config_dir: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Loads and validates the configuration and builds the first page.
///
/// A missing or unreadable config file falls back to defaults. Colliding
/// printer values and an unknown default label size are errors.
pub fn prepare(flags: &Flags) -> Result<Startup> {
    let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
    let data_dir = flags.data_dir.as_ref().map(PathBuf::from);

    let (mut config, warning) = config::load_with_override(config_dir.clone());
    if let Some(error) = warning {
        tracing::warn!(%error, "could not read settings, using defaults");
    }

    config.apply_overrides(&PrinterOverrides {
        device: flags.printer.clone(),
        model: flags.model.clone(),
        default_label_size: flags.default_label_size.clone(),
    });
    config.validate()?;

    let page = build_page(&config);
    tracing::info!(
        printers = page.printer_select.catalog().len(),
        label_sizes = page.label_size_select.options().len(),
        "configuration loaded"
    );

    Ok(Startup {
        config,
        page,
        lang: flags.lang.clone(),
        config_dir,
        data_dir,
    })
}

/// Builds the page as first rendered from a configuration.
pub fn build_page(config: &Config) -> Page {
    let entries = config.printer_entries();
    let default_index = config.default_printer_index();
    let catalog = PrinterCatalog::from_entries(&entries, default_index);
    let initial_label_size = entries
        .get(default_index)
        .and_then(|entry| entry.default_label.clone());

    Page::new(catalog, config.label_sizes(), initial_label_size.as_deref())
}
