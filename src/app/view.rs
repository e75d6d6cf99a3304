// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::sync::Page;
use crate::ui::design_tokens::spacing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::printer_panel::{self, ViewContext as PanelViewContext};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
    pub theme_mode: ThemeMode,
}

/// Renders the navbar above the printer form.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        style: ctx.page.navbar.classes.category_style(),
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let panel = printer_panel::view(PanelViewContext {
        i18n: ctx.i18n,
        page: ctx.page,
    })
    .map(Message::PrinterPanel);

    let body = Container::new(scrollable(
        Container::new(panel)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(spacing::LG),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(body)
        .into()
}
