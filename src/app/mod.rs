// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the printer form and the
//! navbar.
//!
//! The `App` struct owns the [`Page`] and the [`SelectionSyncHandler`] bound
//! to it, and translates component events into handler calls or config
//! persistence.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
pub mod startup;
mod view;

pub use message::{Flags, Message};
pub use startup::{prepare, Startup};

use crate::i18n::fluent::I18n;
use crate::sync::{Page, Preview, SelectionSyncHandler};
use crate::ui::navbar;
use crate::ui::printer_panel;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use persisted_state::LocalStorage;
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Preview collaborator of the desktop shell.
///
/// Rendering a label is out of scope here; each request bumps a revision
/// that a renderer can poll.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTrigger {
    revision: u64,
}

impl PreviewTrigger {
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Preview for PreviewTrigger {
    fn preview(&mut self) {
        self.revision += 1;
        tracing::debug!(revision = self.revision, "label preview requested");
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    page: Page,
    selection: SelectionSyncHandler<LocalStorage, PreviewTrigger>,
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field(
                "selected_printer",
                &self.page.printer_select.selected_option().map(|o| &o.value),
            )
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(startup: Startup) -> iced::Result {
    // iced 0.14 requires a `Fn` boot function.
    let boot = move || App::new(startup.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Opens the selection store and runs the page-load restoration before
    /// the first frame.
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            config,
            mut page,
            lang,
            config_dir,
            data_dir,
        } = startup;

        let i18n = I18n::new(lang, &config);
        let store = LocalStorage::open(data_dir);
        let mut selection = SelectionSyncHandler::new(store, PreviewTrigger::default());
        selection.on_page_load(&mut page);

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            page,
            selection,
            config_dir,
        };
        (app, Task::none())
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn preview_revision(&self) -> u64 {
        self.selection.preview_hook().revision()
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.page.selected_printer_name.is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.page.selected_printer_name)
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PrinterPanel(message) => {
                match printer_panel::update(message, &mut self.page) {
                    printer_panel::Event::None => {}
                    printer_panel::Event::PrinterChanged => {
                        self.selection.on_printer_change(&mut self.page);
                    }
                    printer_panel::Event::PrintRequested => {
                        tracing::info!(
                            printer = ?self.page.printer_select.selected_option().map(|o| &o.value),
                            label_size = ?self.page.label_size_select.selected_option().map(|o| &o.value),
                            "print requested"
                        );
                    }
                }
            }
            Message::Navbar(message) => match navbar::update(message, &mut self.theme_mode) {
                navbar::Event::ThemeModeChanged(mode) => {
                    if let Err(error) =
                        persistence::persist_theme_mode(mode, self.config_dir.clone())
                    {
                        tracing::warn!(%error, "could not save theme mode");
                    }
                }
                navbar::Event::LanguageChanged(locale) => {
                    if let Err(error) = persistence::apply_language_change(
                        &mut self.i18n,
                        locale,
                        self.config_dir.clone(),
                    ) {
                        tracing::warn!(%error, "could not save language");
                    }
                }
            },
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: &self.page,
            theme_mode: self.theme_mode,
        })
    }
}
