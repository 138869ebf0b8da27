// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar spanning the top of the page.
//!
//! Shows the visitor's name on the left and one link per page section on
//! the right, with the entry for the currently visible section highlighted.
//! A trailing button toggles light/dark theme.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::Section;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub brand: &'a str,
    /// Section currently considered visible; its link is highlighted.
    pub active: Section,
    pub is_dark: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SectionClicked(Section),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    /// Scroll the page so the given section's top lands under the navbar.
    ScrollTo(Section),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SectionClicked(section) => Event::ScrollTo(section),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand.to_owned()).size(typography::TITLE_MD);

    let mut links = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center);

    for section in Section::ALL {
        let label = ctx.i18n.tr(section.label_key());
        let link = button(Text::new(label).size(typography::BODY))
            .on_press(Message::SectionClicked(section))
            .padding([spacing::XXS, spacing::SM]);

        let link = if section == ctx.active {
            link.style(styles::button::selected)
        } else {
            link.style(styles::button::unselected)
        };

        links = links.push(link);
    }

    let theme_glyph = if ctx.is_dark { "☀" } else { "☾" };
    let theme_button = button(Text::new(theme_glyph).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(links)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            brand: "Jane Doe",
            active: Section::Home,
            is_dark: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn section_click_requests_scroll() {
        let event = update(Message::SectionClicked(Section::Projects));
        assert!(matches!(event, Event::ScrollTo(Section::Projects)));
    }

    #[test]
    fn theme_toggle_propagates() {
        let event = update(Message::ToggleTheme);
        assert!(matches!(event, Event::ToggleTheme));
    }
}
