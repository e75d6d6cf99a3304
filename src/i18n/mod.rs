// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! Only chrome strings (headings, navbar, placeholders) are translated. Text
//! derived from the printer selection is built from configured data as-is.

pub mod fluent;
