// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown at the top of the window.
//!
//! The bar carries the application title, the language picker and the
//! theme toggle. Its
//! background follows the category of the selected printer, read from the
//! navbar's class list on the page.

use crate::i18n::fluent::I18n;
use crate::sync::CategoryStyle;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Container, Row, Space, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Category derived from the navbar's classes, if any.
    pub style: Option<CategoryStyle>,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleTheme,
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ThemeModeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, theme_mode: &mut ThemeMode) -> Event {
    match message {
        Message::ToggleTheme => {
            *theme_mode = theme_mode.next();
            Event::ThemeModeChanged(*theme_mode)
        }
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("navbar-title")).size(typography::TITLE_MD);

    let theme_label = format!(
        "{}: {}",
        ctx.i18n.tr("navbar-theme-button"),
        ctx.i18n.tr(ctx.theme_mode.i18n_key())
    );
    let theme_button = button(Text::new(theme_label).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::navbar_action);

    let language_picker = pick_list(
        ctx.i18n.available_locales().to_vec(),
        Some(ctx.i18n.current_locale().clone()),
        Message::LanguageSelected,
    )
    .text_size(typography::BODY)
    .padding([spacing::XXS, spacing::SM]);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(language_picker)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.style))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders_for_each_category() {
        let i18n = I18n::default();
        for style in [None, Some(CategoryStyle::East), Some(CategoryStyle::Main)] {
            let ctx = ViewContext {
                i18n: &i18n,
                style,
                theme_mode: ThemeMode::Light,
            };
            let _element = view(ctx);
        }
    }

    #[test]
    fn toggle_theme_cycles_and_emits_event() {
        let mut mode = ThemeMode::Light;

        let event = update(Message::ToggleTheme, &mut mode);
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(event, Event::ThemeModeChanged(ThemeMode::Dark));

        let event = update(Message::ToggleTheme, &mut mode);
        assert_eq!(mode, ThemeMode::System);
        assert_eq!(event, Event::ThemeModeChanged(ThemeMode::System));
    }

    #[test]
    fn language_selection_is_forwarded() {
        let mut mode = ThemeMode::Light;
        let locale: LanguageIdentifier = "fr".parse().expect("valid locale");

        let event = update(Message::LanguageSelected(locale.clone()), &mut mode);

        assert_eq!(event, Event::LanguageChanged(locale));
        assert_eq!(mode, ThemeMode::Light);
    }
}
