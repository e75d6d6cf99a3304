// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are embedded as static SVG documents and handles are cached using
//! `OnceLock`, so each one is parsed once per process.

use crate::sync::Icon;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

const PRINTER_SVG: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M6 9V2h12v7"/><path d="M6 18H4a2 2 0 0 1-2-2v-5a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v5a2 2 0 0 1-2 2h-2"/><rect x="6" y="14" width="12" height="8"/></svg>"#;

/// Printer glyph shown at the start of the print button.
pub fn printer<'a>() -> Svg<'a> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    let handle = HANDLE.get_or_init(|| Handle::from_memory(PRINTER_SVG));
    Svg::new(handle.clone())
}

/// Renders a page icon.
pub fn for_icon<'a>(icon: Icon) -> Svg<'a> {
    match icon {
        Icon::Printer => printer(),
    }
}

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors a monochrome icon, e.g. white on a colored button.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
