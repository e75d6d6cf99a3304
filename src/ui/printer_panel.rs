// SPDX-License-Identifier: MPL-2.0
//! Printer form: grouped printer selector, label-size dropdown, selected
//! printer display and print button.
//!
//! The panel renders the [`Page`] as-is. Printer changes are reported to the
//! application, which runs the selection handler before the next frame.

use crate::catalog::label_size;
use crate::catalog::LabelSizeOption;
use crate::i18n::fluent::I18n;
use crate::sync::{ButtonNode, Page};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
}

/// Messages emitted by the panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// A printer was picked, by its index in document order.
    PrinterSelected(usize),
    LabelSizeSelected(LabelSizeOption),
    PrintRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The printer selection changed; the selection handler must run.
    PrinterChanged,
    PrintRequested,
}

/// Process a panel message against the page.
///
/// Picking the printer that is already selected is not a change.
pub fn update(message: Message, page: &mut Page) -> Event {
    match message {
        Message::PrinterSelected(index) => {
            if page.printer_select.selected_index() == Some(index) {
                return Event::None;
            }
            if page.printer_select.select(index) {
                Event::PrinterChanged
            } else {
                Event::None
            }
        }
        Message::LabelSizeSelected(option) => {
            if let Some(index) =
                label_size::position_of(page.label_size_select.options(), &option.value)
            {
                page.label_size_select.select(index);
            }
            Event::None
        }
        Message::PrintRequested => Event::PrintRequested,
    }
}

/// Render the panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(build_printer_section(&ctx))
        .push(build_label_size_section(&ctx))
        .push(build_selection_section(&ctx))
        .push(build_print_button(&ctx));

    Container::new(content).style(styles::container::panel).into()
}

fn heading<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::TITLE_SM)
}

/// Printers grouped under their category, in document order.
fn build_printer_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let select = &ctx.page.printer_select;
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(heading(ctx.i18n.tr("printer-heading")));

    if select.catalog().is_empty() {
        return column
            .push(Text::new(ctx.i18n.tr("printer-none-configured")).size(typography::BODY))
            .into();
    }

    let mut index = 0;
    for group in select.catalog().groups() {
        column = column.push(
            Text::new(group.category.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
        for option in &group.options {
            let selected = select.selected_index() == Some(index);

            let mut entry = Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(option.display_text.as_str()).size(typography::BODY));
            if !option.model.is_empty() || !option.device.is_empty() {
                entry = entry.push(
                    Text::new(format!("{} {}", option.model, option.device).trim().to_string())
                        .size(typography::CAPTION),
                );
            }

            column = column.push(
                button(entry)
                    .on_press(Message::PrinterSelected(index))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::printer_option(selected)),
            );
            index += 1;
        }
    }

    column.into()
}

fn build_label_size_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let select = &ctx.page.label_size_select;
    let picker = pick_list(
        select.options().to_vec(),
        select.selected_option().cloned(),
        Message::LabelSizeSelected,
    )
    .placeholder(ctx.i18n.tr("label-size-placeholder"))
    .padding(spacing::XS)
    .width(Length::Fill);

    Column::new()
        .spacing(spacing::XS)
        .push(heading(ctx.i18n.tr("label-size-heading")))
        .push(picker)
        .into()
}

fn build_selection_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(heading(ctx.i18n.tr("selected-printer-heading")))
        .push(Text::new(ctx.page.selected_printer_name.as_str()).size(typography::BODY))
        .into()
}

/// The print button renders its children in order, icon included.
fn build_print_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let print_button = &ctx.page.print_button;

    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for node in print_button.children() {
        row = match node {
            ButtonNode::Icon(icon) => row.push(icons::tinted(
                icons::sized(icons::for_icon(*icon), sizing::ICON_SM),
                palette::WHITE,
            )),
            ButtonNode::Text(text) => row.push(Text::new(text.as_str()).size(typography::BODY)),
        };
    }

    button(row)
        .on_press(Message::PrintRequested)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::print(print_button.classes.category_style()))
        .into()
}
