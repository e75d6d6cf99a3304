// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::printer_panel;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    PrinterPanel(printer_panel::Message),
    Navbar(navbar::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LABEL_DESK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `LABEL_DESK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Tracing filter directive, e.g. `label_desk=debug`.
    pub loglevel: Option<String>,
    /// Model of the default printer.
    pub model: Option<String>,
    /// Default label size of the default printer.
    pub default_label_size: Option<String>,
    /// Device descriptor of the legacy single printer.
    pub printer: Option<String>,
}
