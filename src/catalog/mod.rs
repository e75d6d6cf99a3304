// SPDX-License-Identifier: MPL-2.0
//! Printer and label-size options as presented by the page.
//!
//! Printers are grouped by category the way an `<optgroup>` groups options:
//! groups appear in order of the first printer of each category, and printers
//! keep their configured order inside their group. The flat "document order"
//! used for selection indices walks the groups in that order.

pub mod label_size;

pub use label_size::{default_label_sizes, LabelSizeOption};

use crate::app::config::PrinterEntry;
use std::fmt;

/// One selectable printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterOption {
    /// Unique identifier, persisted as the last selected printer.
    pub value: String,
    /// Human label shown in the selector.
    pub display_text: String,
    /// Label size this printer is usually loaded with.
    pub default_label_size: Option<String>,
    /// Label of the group the printer belongs to, e.g. "East" or "Main".
    pub category: String,
    /// Printer model, informational.
    pub model: String,
    /// Device descriptor such as `tcp://192.168.0.23:9100`, informational.
    pub device: String,
}

impl PrinterOption {
    pub fn new(
        value: impl Into<String>,
        display_text: impl Into<String>,
        category: impl Into<String>,
        default_label_size: Option<&str>,
    ) -> Self {
        Self {
            value: value.into(),
            display_text: display_text.into(),
            default_label_size: default_label_size.map(str::to_owned),
            category: category.into(),
            model: String::new(),
            device: String::new(),
        }
    }
}

impl fmt::Display for PrinterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text)
    }
}

/// Printers sharing a category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterGroup {
    pub category: String,
    pub options: Vec<PrinterOption>,
}

/// All printers of the page plus the one the markup marks as selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrinterCatalog {
    groups: Vec<PrinterGroup>,
    default_index: Option<usize>,
}

impl PrinterCatalog {
    /// Groups `options` by category and records the markup default.
    ///
    /// `default_value` names the printer selected before any restoration. An
    /// unknown or missing value selects the first printer in document order.
    pub fn from_options(options: Vec<PrinterOption>, default_value: Option<&str>) -> Self {
        let mut groups: Vec<PrinterGroup> = Vec::new();
        for option in options {
            match groups.iter_mut().find(|g| g.category == option.category) {
                Some(group) => group.options.push(option),
                None => groups.push(PrinterGroup {
                    category: option.category.clone(),
                    options: vec![option],
                }),
            }
        }

        let mut catalog = Self {
            groups,
            default_index: None,
        };
        catalog.default_index = default_value
            .and_then(|value| catalog.position_of(value))
            .or(if catalog.is_empty() { None } else { Some(0) });
        catalog
    }

    /// Builds the catalog from configured printers.
    ///
    /// Entries without an explicit id are identified by their configured
    /// position, which is also how `default_printer` refers to them.
    pub fn from_entries(entries: &[PrinterEntry], default_printer: usize) -> Self {
        let options: Vec<PrinterOption> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| PrinterOption {
                value: entry.value(index),
                display_text: entry.name.clone(),
                default_label_size: entry.default_label.clone(),
                category: entry.category.clone(),
                model: entry.model.clone(),
                device: entry.device.clone(),
            })
            .collect();

        let default_value = options.get(default_printer).map(|o| o.value.clone());
        Self::from_options(options, default_value.as_deref())
    }

    pub fn groups(&self) -> &[PrinterGroup] {
        &self.groups
    }

    /// Printers in document order.
    pub fn options(&self) -> impl Iterator<Item = &PrinterOption> {
        self.groups.iter().flat_map(|group| group.options.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.options.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Printer at a document-order index.
    pub fn get(&self, index: usize) -> Option<&PrinterOption> {
        self.options().nth(index)
    }

    /// Document-order index of the printer whose value is exactly `value`.
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.options().position(|option| option.value == value)
    }

    /// Index selected by the markup before any restoration.
    pub fn default_index(&self) -> Option<usize> {
        self.default_index
    }
}
