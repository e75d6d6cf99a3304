// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::sync::CategoryStyle;
use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Base and hover colors for a printer category.
pub fn category_colors(style: CategoryStyle) -> (Color, Color) {
    match style {
        CategoryStyle::East => (palette::CATEGORY_EAST, palette::CATEGORY_EAST_HOVER),
        CategoryStyle::Main => (palette::CATEGORY_MAIN, palette::CATEGORY_MAIN_HOVER),
    }
}

/// Print action button, colored by the printer's category.
///
/// Without a category the button falls back to the theme's primary color.
pub fn print(style: Option<CategoryStyle>) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let (base, hover) = match style {
            Some(style) => category_colors(style),
            None => {
                let primary = theme.extended_palette().primary;
                (primary.base.color, primary.strong.color)
            }
        };

        let (background, shadow) = match status {
            button::Status::Hovered => (hover, shadow::SM),
            button::Status::Disabled => (palette::GRAY_200, shadow::NONE),
            button::Status::Active | button::Status::Pressed => (base, shadow::SM),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: base,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Entry of the printer selector; the selected entry is highlighted.
pub fn printer_option(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ext = theme.extended_palette();

        let (background, text_color) = match (selected, status) {
            (true, _) => (Some(ext.primary.weak.color), ext.primary.weak.text),
            (false, button::Status::Hovered) => {
                (Some(ext.background.strong.color), ext.background.base.text)
            }
            (false, _) => (None, ext.background.base.text),
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Flat button placed on the navbar.
pub fn navbar_action(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.2,
        _ => 0.0,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
