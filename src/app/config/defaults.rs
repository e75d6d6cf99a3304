// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

// ==========================================================================
// Legacy single-printer defaults
// ==========================================================================

/// Label size assumed when neither a printer nor `[label]` names one.
pub const DEFAULT_LABEL_SIZE: &str = "62";

/// Printer model assumed by the legacy `[printer]` section.
pub const DEFAULT_MODEL: &str = "QL-500";

/// Device descriptor assumed by the legacy `[printer]` section.
pub const DEFAULT_DEVICE: &str = "file:///dev/usb/lp0";

/// Name of the printer synthesized from the legacy section.
pub const DEFAULT_PRINTER_NAME: &str = "Default Printer";

/// Category of the printer synthesized from the legacy section.
pub const DEFAULT_CATEGORY: &str = "Main";
