// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Preferences are written back to the file as it is on disk, so command-line
//! overrides applied at startup never leak into `settings.toml`.

use super::config::{self, Config};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Stores the theme mode chosen from the navbar.
pub fn persist_theme_mode(theme_mode: ThemeMode, config_dir: Option<PathBuf>) -> Result<()> {
    update_config(config_dir, |cfg| cfg.general.theme_mode = theme_mode)
}

/// Switches the UI locale and stores it as the configured language.
///
/// A locale without a bundle leaves the current one in place.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    config_dir: Option<PathBuf>,
) -> Result<()> {
    i18n.set_locale(locale);
    let current = i18n.current_locale().to_string();
    update_config(config_dir, |cfg| cfg.general.language = Some(current))
}

/// Reloads the file, applies `change` and writes it back.
///
/// A config file that cannot be parsed is left untouched.
fn update_config(config_dir: Option<PathBuf>, change: impl FnOnce(&mut Config)) -> Result<()> {
    let (mut cfg, error) = config::load_with_override(config_dir.clone());
    if let Some(error) = error {
        return Err(error);
    }

    change(&mut cfg);
    config::save_with_override(&cfg, config_dir)
}
