// SPDX-License-Identifier: MPL-2.0
//! Pure computation of everything the page derives from the selected printer.

use crate::catalog::{label_size, LabelSizeOption, PrinterOption};

/// Categories that carry a colour. Any other category is shown unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStyle {
    East,
    Main,
}

impl CategoryStyle {
    pub const ALL: [CategoryStyle; 2] = [CategoryStyle::East, CategoryStyle::Main];

    /// Exact, case-sensitive match on the group label.
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "East" => Some(CategoryStyle::East),
            "Main" => Some(CategoryStyle::Main),
            _ => None,
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            CategoryStyle::East => "btn-category-east",
            CategoryStyle::Main => "btn-category-main",
        }
    }

    pub fn navbar_class(self) -> &'static str {
        match self {
            CategoryStyle::East => "navbar-category-east",
            CategoryStyle::Main => "navbar-category-main",
        }
    }

    /// Reverse lookup used by the view to colour a class list.
    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.button_class() == class || style.navbar_class() == class)
    }
}

/// Derived page state for one printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Text of the selected-printer display.
    pub display_text: String,
    /// Text of the print button, without its icon.
    pub button_text: String,
    pub style: Option<CategoryStyle>,
    /// Label size to select; `None` keeps the current selection.
    pub label_size_index: Option<usize>,
}

/// Computes the derived page state for `printer` without touching the page.
pub fn reconcile(printer: &PrinterOption, label_sizes: &[LabelSizeOption]) -> Reconciliation {
    let category = printer.category.as_str();

    Reconciliation {
        display_text: format!("{category} - {}", printer.display_text),
        button_text: format!("Print {category}"),
        style: CategoryStyle::from_category(category),
        label_size_index: printer
            .default_label_size
            .as_deref()
            .and_then(|value| label_size::position_of(label_sizes, value)),
    }
}
