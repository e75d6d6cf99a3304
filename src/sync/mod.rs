// SPDX-License-Identifier: MPL-2.0
//! Keeps the page consistent with the selected printer.
//!
//! [`SelectionSyncHandler`] has two entry points:
//!
//! - [`on_printer_change`](SelectionSyncHandler::on_printer_change) runs after
//!   every printer selection and re-derives the display text, the print
//!   button, the category colours and the label size. It also remembers the
//!   selection.
//! - [`on_page_load`](SelectionSyncHandler::on_page_load) runs once after the
//!   page is built, restores the remembered printer when it still exists, and
//!   then reconciles.
//!
//! Neither entry point fails. Unknown categories, unmatched label sizes and
//! stale remembered printers all degrade to "leave it as it is".
//!
//! The derived values come from the pure [`reconcile`] function; [`Page::apply`]
//! is the only code that writes them into the page.

pub mod page;
pub mod reconcile;

pub use page::{ButtonNode, ClassList, Icon, Page};
pub use reconcile::{reconcile, CategoryStyle, Reconciliation};

use std::collections::HashMap;

/// Key under which the last selected printer value is stored.
pub const LAST_PRINTER_KEY: &str = "lastSelectedPrinter";

/// String key-value storage that survives restarts.
///
/// Writes are best effort: implementations report their own failures and
/// never hand them back to the caller.
pub trait SelectionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Store kept in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Refreshes the label preview. Its result is never consumed.
pub trait Preview {
    fn preview(&mut self);
}

impl<F: FnMut()> Preview for F {
    fn preview(&mut self) {
        self()
    }
}

/// Binds a page to its selection store and preview collaborator.
#[derive(Debug)]
pub struct SelectionSyncHandler<S, P> {
    store: S,
    preview: P,
}

impl<S: SelectionStore, P: Preview> SelectionSyncHandler<S, P> {
    pub fn new(store: S, preview: P) -> Self {
        Self { store, preview }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn preview_hook(&self) -> &P {
        &self.preview
    }

    /// Reconciles the page with the selected printer and remembers it.
    pub fn on_printer_change(&mut self, page: &mut Page) {
        if let Some(printer) = page.printer_select.selected_option() {
            let derived = reconcile(printer, page.label_size_select.options());
            self.store.set(LAST_PRINTER_KEY, &printer.value);
            page.apply(&derived);
        } else {
            tracing::debug!("no printer selected, page left as rendered");
        }

        self.preview.preview();
    }

    /// Restores the remembered printer, if it still exists, then reconciles.
    ///
    /// A remembered value that matches no printer is only reported; it stays
    /// in the store and the markup default remains selected.
    pub fn on_page_load(&mut self, page: &mut Page) {
        if let Some(saved) = self.store.get(LAST_PRINTER_KEY) {
            if page.printer_select.contains_value(&saved) {
                page.printer_select.select_value(&saved);
            } else {
                tracing::warn!(
                    printer = %saved,
                    "saved printer no longer exists, keeping default selection"
                );
            }
        }

        self.on_printer_change(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LabelSizeOption, PrinterCatalog, PrinterOption};

    fn page() -> Page {
        let catalog = PrinterCatalog::from_options(
            vec![
                PrinterOption::new("P1", "Front desk", "Main", Some("4x6")),
                PrinterOption::new("P2", "Dock", "East", Some("2x1")),
                PrinterOption::new("P3", "Lab", "West", Some("9x9")),
            ],
            None,
        );
        Page::new(
            catalog,
            vec![
                LabelSizeOption::new("4x6", ""),
                LabelSizeOption::new("2x1", ""),
            ],
            None,
        )
    }

    #[derive(Default)]
    struct Counter(u32);

    impl Preview for Counter {
        fn preview(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn change_persists_value_and_previews() {
        let mut handler = SelectionSyncHandler::new(MemoryStore::new(), Counter::default());
        let mut page = page();
        page.printer_select.select(2);

        handler.on_printer_change(&mut page);

        assert_eq!(handler.store().get(LAST_PRINTER_KEY).as_deref(), Some("P3"));
        assert_eq!(handler.preview_hook().0, 1);
    }

    #[test]
    fn unmatched_label_size_keeps_previous_selection() {
        let mut handler = SelectionSyncHandler::new(MemoryStore::new(), || {});
        let mut page = page();

        page.printer_select.select_value("P2");
        handler.on_printer_change(&mut page);
        assert_eq!(page.label_size_select.selected_index(), Some(1));

        page.printer_select.select_value("P3");
        handler.on_printer_change(&mut page);
        assert_eq!(page.label_size_select.selected_index(), Some(1));
        assert_eq!(page.navbar.classes.category_style(), None);
    }

    #[test]
    fn load_restores_saved_printer_before_reconciling() {
        let mut store = MemoryStore::new();
        store.set(LAST_PRINTER_KEY, "P2");
        let mut handler = SelectionSyncHandler::new(store, || {});
        let mut page = page();

        handler.on_page_load(&mut page);

        assert_eq!(page.printer_select.selected_index(), Some(1));
        assert_eq!(page.selected_printer_name, "East - Dock");
    }

    #[test]
    fn load_with_stale_value_keeps_default_and_entry() {
        let mut store = MemoryStore::new();
        store.set(LAST_PRINTER_KEY, "gone");
        let mut handler = SelectionSyncHandler::new(store, || {});
        let mut page = page();

        handler.on_page_load(&mut page);

        assert_eq!(page.printer_select.selected_index(), Some(0));
        assert_eq!(page.selected_printer_name, "Main - Front desk");
        // The reconcile pass overwrites the entry with the default's value.
        assert_eq!(handler.store().get(LAST_PRINTER_KEY).as_deref(), Some("P1"));
    }

    /// Collects formatted log output for the scoped subscriber below.
    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn load_with_saved(value: &str) -> String {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::WARN)
            .finish();

        let mut store = MemoryStore::new();
        store.set(LAST_PRINTER_KEY, value);
        let mut handler = SelectionSyncHandler::new(store, || {});
        let mut page = page();
        tracing::subscriber::with_default(subscriber, || handler.on_page_load(&mut page));

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn stale_value_is_logged_as_warning() {
        let output = load_with_saved("P9");

        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("saved printer no longer exists"), "{output}");
        assert!(output.contains("printer=P9"), "{output}");
    }

    #[test]
    fn known_value_logs_no_warning() {
        let output = load_with_saved("P2");

        assert!(output.is_empty(), "{output}");
    }

    #[test]
    fn empty_page_is_left_untouched_but_previewed() {
        let mut handler = SelectionSyncHandler::new(MemoryStore::new(), Counter::default());
        let mut page = Page::new(PrinterCatalog::default(), Vec::new(), None);
        let before = page.clone();

        handler.on_page_load(&mut page);

        assert_eq!(page, before);
        assert_eq!(handler.store().get(LAST_PRINTER_KEY), None);
        assert_eq!(handler.preview_hook().0, 1);
    }

    #[test]
    fn closures_act_as_preview() {
        let mut calls = 0;
        {
            let mut handler = SelectionSyncHandler::new(MemoryStore::new(), || calls += 1);
            let mut page = page();
            handler.on_printer_change(&mut page);
            handler.on_printer_change(&mut page);
        }
        assert_eq!(calls, 2);
    }
}
