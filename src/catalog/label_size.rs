// SPDX-License-Identifier: MPL-2.0
//! Label sizes offered by the label-size selector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the label-size selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSizeOption {
    /// Identifier matched against a printer's default label size.
    pub value: String,
    /// Human readable name shown in the dropdown.
    #[serde(default)]
    pub name: String,
}

impl LabelSizeOption {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for LabelSizeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.value)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Brother QL media, in the order the printer driver lists them.
const BROTHER_QL_SIZES: &[(&str, &str)] = &[
    ("12", "12mm endless"),
    ("29", "29mm endless"),
    ("38", "38mm endless"),
    ("50", "50mm endless"),
    ("54", "54mm endless"),
    ("62", "62mm endless"),
    ("62red", "62mm endless (black/red/white)"),
    ("102", "102mm endless"),
    ("17x54", "17mm x 54mm die-cut"),
    ("17x87", "17mm x 87mm die-cut"),
    ("23x23", "23mm x 23mm die-cut"),
    ("29x42", "29mm x 42mm die-cut"),
    ("29x90", "29mm x 90mm die-cut"),
    ("39x90", "38mm x 90mm die-cut"),
    ("39x48", "39mm x 48mm die-cut"),
    ("52x29", "52mm x 29mm die-cut"),
    ("62x29", "62mm x 29mm die-cut"),
    ("62x100", "62mm x 100mm die-cut"),
    ("102x51", "102mm x 51mm die-cut"),
    ("102x152", "102mm x 153mm die-cut"),
    ("d12", "12mm round die-cut"),
    ("d24", "24mm round die-cut"),
    ("d58", "58mm round die-cut"),
];

/// The built-in label-size list used when the config does not override it.
pub fn default_label_sizes() -> Vec<LabelSizeOption> {
    BROTHER_QL_SIZES
        .iter()
        .map(|(value, name)| LabelSizeOption::new(*value, *name))
        .collect()
}

/// Position of the first option whose value equals `value`, in document order.
pub fn position_of(options: &[LabelSizeOption], value: &str) -> Option<usize> {
    options.iter().position(|option| option.value == value)
}
