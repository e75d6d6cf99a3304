// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `ViewContext`, a `Message`, an `Event` for its parent and an
//! `update` function.
//!
//! # Components
//!
//! - [`navbar`] - Title bar tinted by the selected printer's category
//! - [`printer_panel`] - Printer selector, label-size dropdown and print button
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod printer_panel;
pub mod styles;
pub mod theming;
