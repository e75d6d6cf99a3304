// SPDX-License-Identifier: MPL-2.0
//! `label_desk` is the printer-selection shell of a label designer, built with
//! the Iced GUI framework.
//!
//! Choosing a printer keeps the rest of the form in sync: the label-size
//! dropdown follows the printer's default size, the print button and navbar
//! take the printer's category style, and the choice is remembered for the
//! next session.

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod sync;
pub mod ui;
