// SPDX-License-Identifier: MPL-2.0
use label_desk::app::config::{self, Config, PrinterEntry};
use label_desk::app::persisted_state::LocalStorage;
use label_desk::catalog::{LabelSizeOption, PrinterCatalog, PrinterOption};
use label_desk::error::Error;
use label_desk::i18n::fluent::I18n;
use label_desk::sync::{
    ButtonNode, CategoryStyle, Icon, MemoryStore, Page, SelectionStore, SelectionSyncHandler,
    LAST_PRINTER_KEY,
};
use tempfile::tempdir;

fn two_printer_page() -> Page {
    let catalog = PrinterCatalog::from_options(
        vec![
            PrinterOption::new("P1", "Front desk", "Main", Some("4x6")),
            PrinterOption::new("P2", "Dock", "East", Some("2x1")),
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

fn handler() -> SelectionSyncHandler<MemoryStore, impl FnMut()> {
    SelectionSyncHandler::new(MemoryStore::new(), || {})
}

fn classes(page: &Page) -> (Vec<String>, Vec<String>) {
    (
        page.print_button.classes.iter().map(String::from).collect(),
        page.navbar.classes.iter().map(String::from).collect(),
    )
}

#[test]
fn selecting_east_printer_syncs_the_whole_page() {
    let mut page = two_printer_page();
    let mut handler = handler();

    assert!(page.printer_select.select_value("P2"));
    handler.on_printer_change(&mut page);

    assert_eq!(page.selected_printer_name, "East - Dock");
    assert_eq!(page.print_button.text(), "Print East");
    assert_eq!(
        page.print_button.children().first(),
        Some(&ButtonNode::Icon(Icon::Printer))
    );
    assert!(page.print_button.classes.contains("btn-category-east"));
    assert!(!page.print_button.classes.contains("btn-category-main"));
    assert!(page.navbar.classes.contains("navbar-category-east"));
    assert!(!page.navbar.classes.contains("navbar-category-main"));
    assert_eq!(
        page.label_size_select
            .selected_option()
            .map(|o| o.value.as_str()),
        Some("2x1")
    );
    assert_eq!(handler.store().get(LAST_PRINTER_KEY).as_deref(), Some("P2"));
}

#[test]
fn switching_category_replaces_the_class_pair() {
    let mut page = two_printer_page();
    let mut handler = handler();

    page.printer_select.select_value("P2");
    handler.on_printer_change(&mut page);
    page.printer_select.select_value("P1");
    handler.on_printer_change(&mut page);

    assert_eq!(
        page.print_button.classes.category_style(),
        Some(CategoryStyle::Main)
    );
    assert!(!page.print_button.classes.contains("btn-category-east"));
    assert!(!page.navbar.classes.contains("navbar-category-east"));
    assert!(page.navbar.classes.contains("navbar-category-main"));
    assert_eq!(page.print_button.text(), "Print Main");
}

#[test]
fn unmatched_label_size_leaves_selection_alone() {
    let catalog = PrinterCatalog::from_options(
        vec![
            PrinterOption::new("P1", "Front desk", "Main", Some("4x6")),
            PrinterOption::new("P3", "Lab", "West", Some("9x9")),
        ],
        None,
    );
    let mut page = Page::new(
        catalog,
        vec![
            LabelSizeOption::new("4x6", ""),
            LabelSizeOption::new("2x1", ""),
        ],
        Some("2x1"),
    );
    let mut handler = handler();

    page.printer_select.select_value("P3");
    handler.on_printer_change(&mut page);

    assert_eq!(page.label_size_select.selected_index(), Some(1));
    assert_eq!(page.selected_printer_name, "West - Lab");
    assert_eq!(page.print_button.text(), "Print West");
    assert_eq!(page.print_button.classes.category_style(), None);
    assert_eq!(page.navbar.classes.category_style(), None);
}

#[test]
fn repeated_change_is_idempotent() {
    let mut page = two_printer_page();
    let mut handler = handler();
    page.printer_select.select_value("P2");

    handler.on_printer_change(&mut page);
    let once = page.clone();
    let once_classes = classes(&page);
    handler.on_printer_change(&mut page);

    assert_eq!(page, once);
    assert_eq!(classes(&page), once_classes);
    assert_eq!(
        page.print_button
            .children()
            .iter()
            .filter(|node| matches!(node, ButtonNode::Icon(_)))
            .count(),
        1
    );
}

#[test]
fn selection_survives_a_fresh_page_load() {
    let dir = tempdir().expect("create temp dir");
    let data_dir = Some(dir.path().to_path_buf());

    let mut page = two_printer_page();
    let mut first = SelectionSyncHandler::new(LocalStorage::open(data_dir.clone()), || {});
    first.on_page_load(&mut page);
    page.printer_select.select_value("P2");
    first.on_printer_change(&mut page);

    let mut reloaded = two_printer_page();
    let mut second = SelectionSyncHandler::new(LocalStorage::open(data_dir), || {});
    second.on_page_load(&mut reloaded);

    assert_eq!(
        reloaded
            .printer_select
            .selected_option()
            .map(|o| o.value.as_str()),
        Some("P2")
    );
    assert_eq!(reloaded.selected_printer_name, "East - Dock");
}

#[test]
fn stale_saved_printer_falls_back_to_default() {
    let dir = tempdir().expect("create temp dir");
    let data_dir = Some(dir.path().to_path_buf());
    LocalStorage::open(data_dir.clone()).set(LAST_PRINTER_KEY, "P3");

    let mut page = two_printer_page();
    let mut previews = 0;
    let mut handler = SelectionSyncHandler::new(LocalStorage::open(data_dir), || previews += 1);
    handler.on_page_load(&mut page);

    assert_eq!(
        page.printer_select
            .selected_option()
            .map(|o| o.value.as_str()),
        Some("P1")
    );
    assert_eq!(page.selected_printer_name, "Main - Front desk");
    drop(handler);
    assert_eq!(previews, 1);
}

#[test]
fn empty_page_still_previews() {
    let mut page = Page::new(PrinterCatalog::default(), Vec::new(), None);
    let before = page.clone();
    let mut previews = 0;
    let mut handler = SelectionSyncHandler::new(MemoryStore::new(), || previews += 1);

    handler.on_page_load(&mut page);

    assert_eq!(page, before);
    assert_eq!(handler.store().get(LAST_PRINTER_KEY), None);
    drop(handler);
    assert_eq!(previews, 1);
}

#[test]
fn legacy_config_round_trip_and_validation() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.printer.device = Some("tcp://10.0.0.9:9100".to_string());
    cfg.label.default_size = Some("29".to_string());
    config::save_to_path(&cfg, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    let entries = loaded.printer_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Default Printer");
    assert_eq!(entries[0].device, "tcp://10.0.0.9:9100");
    assert!(loaded.validate().is_ok());

    let mut bad = loaded;
    bad.printers.push(PrinterEntry {
        id: Some("P1".to_string()),
        name: "Front desk".to_string(),
        category: "Main".to_string(),
        model: "QL-820NWB".to_string(),
        device: "tcp://10.0.0.10:9100".to_string(),
        default_label: Some("99x99".to_string()),
    });
    let error = bad.validate().expect_err("unknown size");
    assert!(matches!(error, Error::InvalidLabelSize { .. }));
    assert!(error.to_string().contains("99x99"));
}

#[test]
fn language_follows_config() {
    let mut cfg = Config::default();
    cfg.general.language = Some("fr".to_string());
    let i18n = I18n::new(None, &cfg);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("label-size-heading"), "Format d'étiquette");

    let i18n = I18n::new(Some("en-US".to_string()), &cfg);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}
