// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences and the printer list to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `default_printer` - position of the printer selected before restoration
//! - `[general]` - Language and theme mode
//! - `[label]` - Default label size and an optional label-size list
//! - `[printer]` - Legacy single-printer description
//! - `[[printers]]` - Printers offered by the selector
//!
//! # Legacy Configuration
//!
//! Files without any `[[printers]]` entry describe one printer through
//! `[printer]` and `[label]`. [`Config::printer_entries`] turns that into a
//! single `Default Printer`, so the rest of the application only ever sees a
//! printer list.
//!
//! # Examples
//!
//! ```no_run
//! use label_desk::app::config;
//!
//! let (mut config, _warning) = config::load_with_override(None);
//! config.general.language = Some("fr".to_string());
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::catalog::{default_label_sizes, LabelSizeOption};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Label settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabelConfig {
    /// Label size selected by the page markup, and the legacy printer's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_size: Option<String>,

    /// Replaces the built-in label-size list when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<LabelSizeOption>,
}

/// Legacy single printer, used only when `[[printers]]` is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LegacyPrinterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

/// One configured printer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrinterEntry {
    /// Stable identifier; defaults to the entry's position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    /// Group label, e.g. "East" or "Main".
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub model: String,

    /// Device descriptor such as `tcp://192.168.0.23:9100`.
    #[serde(default)]
    pub device: String,

    /// Label size this printer is usually loaded with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_label: Option<String>,
}

impl PrinterEntry {
    /// Value of the printer option: the `id`, or the entry's position.
    pub fn value(&self, position: usize) -> String {
        self.id.clone().unwrap_or_else(|| position.to_string())
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Position in `printers` of the printer selected before restoration.
    #[serde(default)]
    pub default_printer: usize,

    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub label: LabelConfig,

    #[serde(default)]
    pub printer: LegacyPrinterConfig,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub printers: Vec<PrinterEntry>,
}

/// Command-line adjustments to the printer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterOverrides {
    /// Device of the synthesized printer when none is configured.
    pub device: Option<String>,
    /// Model of the default printer.
    pub model: Option<String>,
    /// Default label size of the default printer.
    pub default_label_size: Option<String>,
}

impl Config {
    /// Printers offered by the selector, synthesizing the legacy printer if needed.
    pub fn printer_entries(&self) -> Vec<PrinterEntry> {
        if !self.printers.is_empty() {
            return self.printers.clone();
        }

        vec![PrinterEntry {
            id: None,
            name: DEFAULT_PRINTER_NAME.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            model: self
                .printer
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            device: self
                .printer
                .device
                .clone()
                .unwrap_or_else(|| DEFAULT_DEVICE.to_string()),
            default_label: Some(
                self.label
                    .default_size
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LABEL_SIZE.to_string()),
            ),
        }]
    }

    /// Position of the default printer within [`printer_entries`](Self::printer_entries).
    pub fn default_printer_index(&self) -> usize {
        if self.printers.is_empty() || self.default_printer >= self.printers.len() {
            0
        } else {
            self.default_printer
        }
    }

    /// Options of the label-size selector.
    pub fn label_sizes(&self) -> Vec<LabelSizeOption> {
        if self.label.sizes.is_empty() {
            default_label_sizes()
        } else {
            self.label.sizes.clone()
        }
    }

    /// Applies command-line overrides the same way for legacy and listed printers.
    pub fn apply_overrides(&mut self, overrides: &PrinterOverrides) {
        if let Some(device) = &overrides.device {
            if self.printers.is_empty() {
                self.printer.device = Some(device.clone());
            } else {
                tracing::debug!(%device, "printers are configured, ignoring device argument");
            }
        }

        let index = self.default_printer_index();
        if let Some(model) = &overrides.model {
            match self.printers.get_mut(index) {
                Some(entry) => entry.model = model.clone(),
                None => self.printer.model = Some(model.clone()),
            }
        }

        if let Some(size) = &overrides.default_label_size {
            match self.printers.get_mut(index) {
                Some(entry) => entry.default_label = Some(size.clone()),
                None => self.label.default_size = Some(size.clone()),
            }
        }
    }

    /// Checks that printer values are unique and that the default printer's
    /// label size is offered by the label-size list.
    pub fn validate(&self) -> Result<()> {
        let entries = self.printer_entries();

        let mut seen = HashSet::new();
        for (position, entry) in entries.iter().enumerate() {
            let value = entry.value(position);
            if !seen.insert(value.clone()) {
                return Err(Error::DuplicatePrinter { value });
            }
        }

        let Some(size) = entries
            .get(self.default_printer_index())
            .and_then(|entry| entry.default_label.clone())
        else {
            return Ok(());
        };

        let known: Vec<String> = self.label_sizes().into_iter().map(|s| s.value).collect();
        if known.contains(&size) {
            Ok(())
        } else {
            Err(Error::InvalidLabelSize { size, known })
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from `base_dir`, or the resolved config directory.
///
/// Returns a tuple of (config, optional_error). If loading fails, returns
/// default config together with the error that caused the fallback.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(error) => (Config::default(), Some(error)),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to `base_dir`, or the resolved config directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
