// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::sync::CategoryStyle;
use crate::ui::design_tokens::{palette, radius};
use crate::ui::styles::button::category_colors;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Navbar surface, tinted with the selected printer's category.
///
/// Before any category is applied the navbar uses a neutral dark strip so the
/// white text stays readable in both light and dark modes.
pub fn navbar(style: Option<CategoryStyle>) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let background = match style {
            Some(style) => category_colors(style).0,
            None => palette::GRAY_700,
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(palette::WHITE),
            ..Default::default()
        }
    }
}

/// Card holding the printer form.
pub fn panel(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(ext.background.weak.color)),
        border: Border {
            color: ext.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
