// SPDX-License-Identifier: MPL-2.0
//! Explicit page state mirrored by the view.
//!
//! The page holds exactly what a rendered form would: the two selectors with
//! their current selection, the selected-printer display, the print button's
//! child nodes and class list, and the navbar's class list. Selection state
//! lives in the selectors only; nothing else keeps a copy of it.

use super::reconcile::{CategoryStyle, Reconciliation};
use crate::catalog::{label_size, LabelSizeOption, PrinterCatalog, PrinterOption};

/// Class present on the print button before any category is applied.
pub const PRINT_BUTTON_BASE_CLASS: &str = "btn-print";
/// Class present on the navbar before any category is applied.
pub const NAVBAR_BASE_CLASS: &str = "navbar";
/// Button text rendered by the markup before the first reconciliation.
pub const PRINT_BUTTON_INITIAL_TEXT: &str = "Print";

/// Ordered set of class names, like an element's `classList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for class in classes {
            list.add(class);
        }
        list
    }

    /// Adds `class` unless already present.
    pub fn add(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.contains(&class) {
            self.0.push(class);
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.0.retain(|c| c != class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// First category style found in the list, if any.
    pub fn category_style(&self) -> Option<CategoryStyle> {
        self.iter().find_map(CategoryStyle::from_class)
    }
}

/// Icons that can appear inside the print button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Printer,
}

/// Child node of the print button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonNode {
    Icon(Icon),
    Text(String),
}

/// The print action button: an icon followed by a caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintButton {
    children: Vec<ButtonNode>,
    pub classes: ClassList,
}

impl Default for PrintButton {
    fn default() -> Self {
        Self {
            children: vec![
                ButtonNode::Icon(Icon::Printer),
                ButtonNode::Text(PRINT_BUTTON_INITIAL_TEXT.to_string()),
            ],
            classes: ClassList::new([PRINT_BUTTON_BASE_CLASS]),
        }
    }
}

impl PrintButton {
    pub fn children(&self) -> &[ButtonNode] {
        &self.children
    }

    /// Replaces every child, the icon included, with a single text node.
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.children = vec![ButtonNode::Text(text.into())];
    }

    /// Inserts `node` before the current first child.
    pub fn prepend(&mut self, node: ButtonNode) {
        self.children.insert(0, node);
    }

    /// First icon child, if the button still has one.
    pub fn icon(&self) -> Option<Icon> {
        self.children.iter().find_map(|node| match node {
            ButtonNode::Icon(icon) => Some(*icon),
            ButtonNode::Text(_) => None,
        })
    }

    /// Concatenated text of all text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                ButtonNode::Text(text) => Some(text.as_str()),
                ButtonNode::Icon(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navbar {
    pub classes: ClassList,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            classes: ClassList::new([NAVBAR_BASE_CLASS]),
        }
    }
}

/// The printer selector control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterSelect {
    catalog: PrinterCatalog,
    selected: Option<usize>,
}

impl PrinterSelect {
    pub fn new(catalog: PrinterCatalog) -> Self {
        let selected = catalog.default_index();
        Self { catalog, selected }
    }

    pub fn catalog(&self) -> &PrinterCatalog {
        &self.catalog
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&PrinterOption> {
        self.selected.and_then(|index| self.catalog.get(index))
    }

    /// Selects the printer at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.catalog.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Selects the printer whose value is exactly `value`.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.catalog.position_of(value) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.catalog.position_of(value).is_some()
    }
}

/// The label-size selector control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSizeSelect {
    options: Vec<LabelSizeOption>,
    selected: Option<usize>,
}

impl LabelSizeSelect {
    /// Starts on `initial` when listed, otherwise on the first option.
    pub fn new(options: Vec<LabelSizeOption>, initial: Option<&str>) -> Self {
        let selected = initial
            .and_then(|value| label_size::position_of(&options, value))
            .or(if options.is_empty() { None } else { Some(0) });
        Self { options, selected }
    }

    pub fn options(&self) -> &[LabelSizeOption] {
        &self.options
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&LabelSizeOption> {
        self.selected.and_then(|index| self.options.get(index))
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }
}

/// Everything the selection handler reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub printer_select: PrinterSelect,
    pub label_size_select: LabelSizeSelect,
    /// Text of the selected-printer display element.
    pub selected_printer_name: String,
    pub print_button: PrintButton,
    pub navbar: Navbar,
}

impl Page {
    /// Builds the page as first rendered, before any handler has run.
    pub fn new(
        catalog: PrinterCatalog,
        label_sizes: Vec<LabelSizeOption>,
        initial_label_size: Option<&str>,
    ) -> Self {
        Self {
            printer_select: PrinterSelect::new(catalog),
            label_size_select: LabelSizeSelect::new(label_sizes, initial_label_size),
            selected_printer_name: String::new(),
            print_button: PrintButton::default(),
            navbar: Navbar::default(),
        }
    }

    /// Writes a reconciliation into the page.
    pub fn apply(&mut self, derived: &Reconciliation) {
        self.selected_printer_name = derived.display_text.clone();

        // Setting the caption drops the icon; put it back in front.
        let icon = self.print_button.icon();
        self.print_button.set_text_content(derived.button_text.clone());
        if let Some(icon) = icon {
            self.print_button.prepend(ButtonNode::Icon(icon));
        }

        for style in CategoryStyle::ALL {
            self.print_button.classes.remove(style.button_class());
            self.navbar.classes.remove(style.navbar_class());
        }
        if let Some(style) = derived.style {
            self.print_button.classes.add(style.button_class());
            self.navbar.classes.add(style.navbar_class());
        }

        if let Some(index) = derived.label_size_index {
            self.label_size_select.select(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let catalog = PrinterCatalog::from_options(
            vec![
                PrinterOption::new("P1", "Front desk", "Main", Some("4x6")),
                PrinterOption::new("P2", "Dock", "East", Some("2x1")),
            ],
            None,
        );
        let sizes = vec![
            LabelSizeOption::new("4x6", ""),
            LabelSizeOption::new("2x1", ""),
        ];
        Page::new(catalog, sizes, None)
    }

    #[test]
    fn markup_defaults_select_first_entries() {
        let page = page();
        assert_eq!(page.printer_select.selected_index(), Some(0));
        assert_eq!(page.label_size_select.selected_index(), Some(0));
        assert_eq!(page.print_button.icon(), Some(Icon::Printer));
        assert_eq!(page.print_button.text(), PRINT_BUTTON_INITIAL_TEXT);
    }

    #[test]
    fn set_text_content_drops_icon() {
        let mut button = PrintButton::default();
        button.set_text_content("Print East");
        assert_eq!(button.icon(), None);
        assert_eq!(button.children(), &[ButtonNode::Text("Print East".into())]);
    }

    #[test]
    fn apply_keeps_icon_first() {
        let mut page = page();
        page.apply(&Reconciliation {
            display_text: "East - Dock".into(),
            button_text: "Print East".into(),
            style: Some(CategoryStyle::East),
            label_size_index: Some(1),
        });

        assert_eq!(
            page.print_button.children(),
            &[
                ButtonNode::Icon(Icon::Printer),
                ButtonNode::Text("Print East".into())
            ]
        );
    }

    #[test]
    fn apply_swaps_category_classes_and_keeps_base_classes() {
        let mut page = page();
        page.print_button.classes.add("btn-category-main");
        page.navbar.classes.add("navbar-category-main");

        page.apply(&Reconciliation {
            display_text: String::new(),
            button_text: String::new(),
            style: Some(CategoryStyle::East),
            label_size_index: None,
        });

        assert!(page.print_button.classes.contains(PRINT_BUTTON_BASE_CLASS));
        assert!(page.print_button.classes.contains("btn-category-east"));
        assert!(!page.print_button.classes.contains("btn-category-main"));
        assert!(page.navbar.classes.contains(NAVBAR_BASE_CLASS));
        assert_eq!(page.navbar.classes.category_style(), Some(CategoryStyle::East));
    }

    #[test]
    fn apply_without_style_clears_category_classes() {
        let mut page = page();
        page.navbar.classes.add("navbar-category-east");
        page.apply(&Reconciliation {
            display_text: String::new(),
            button_text: String::new(),
            style: None,
            label_size_index: None,
        });
        assert_eq!(page.navbar.classes.category_style(), None);
    }

    #[test]
    fn label_size_initial_value_is_honoured() {
        let select = LabelSizeSelect::new(
            vec![LabelSizeOption::new("62", ""), LabelSizeOption::new("29", "")],
            Some("29"),
        );
        assert_eq!(select.selected_index(), Some(1));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut page = page();
        assert!(!page.printer_select.select(5));
        assert!(!page.label_size_select.select(5));
        assert_eq!(page.printer_select.selected_index(), Some(0));
        assert!(page.printer_select.select_value("P2"));
        assert!(!page.printer_select.select_value("P3"));
        assert_eq!(page.printer_select.selected_index(), Some(1));
    }

    #[test]
    fn class_list_ignores_duplicates() {
        let mut classes = ClassList::new(["a", "a", "b"]);
        classes.add("b");
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        classes.remove("a");
        assert!(!classes.contains("a"));
    }
}
