// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - the `--data-dir` / `--config-dir` flags, or a
//!    test directory, passed to the `_with_override()` functions
//! 2. **Environment variables** (`LABEL_DESK_DATA_DIR`, `LABEL_DESK_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "LabelDesk";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "LABEL_DESK_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LABEL_DESK_CONFIG_DIR";

/// Returns the application data directory path (selection state lives here).
///
/// Returns `None` if no override is given and the platform directory cannot
/// be determined.
///
/// Platform defaults:
/// - Linux: `~/.local/share/LabelDesk/`
/// - macOS: `~/Library/Application Support/LabelDesk/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\LabelDesk\`
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the application config directory path (`settings.toml` lives here).
///
/// Platform defaults:
/// - Linux: `~/.config/LabelDesk/`
/// - macOS: `~/Library/Application Support/LabelDesk/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\LabelDesk\`
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_CONFIG_DIR, dirs::config_dir)
}

fn resolve(
    override_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
