// SPDX-License-Identifier: MPL-2.0
//! Page view composition.
//!
//! One vertical scrollable holds all six sections at their design-time
//! heights. Every other section sits on a muted band so the boundaries read
//! without chrome.

mod about;
mod contact;
mod hero;
mod projects;
mod skills;
mod timeline;

use crate::ui::design_tokens::sizing;
use crate::ui::state::Section;
use crate::ui::styles;
use iced::widget::scrollable::{Scrollable, Viewport};
use iced::widget::{Column, Container};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

use super::{layout, scroll_id, Message, State, ViewContext};

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .push(band(Section::Home, false, hero::view(state, &ctx)))
        .push(band(Section::About, true, about::view(&ctx)))
        .push(band(Section::Skills, false, skills::view(&ctx)))
        .push(band(Section::Education, true, timeline::view(state, &ctx)))
        .push(band(Section::Projects, false, projects::view(state, &ctx)))
        .push(band(Section::Contact, true, contact::view(state, &ctx)));

    Scrollable::new(column)
        .id(scroll_id())
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y))
        .into()
}

/// Wraps a section's content in its fixed-height band, centered to the
/// content column width.
fn band(section: Section, muted: bool, content: Element<'_, Message>) -> Element<'_, Message> {
    let inner = Container::new(content)
        .width(Length::Fixed(sizing::CONTENT_WIDTH))
        .height(Length::Fill);

    let outer = Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(layout::height_of(section)))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    if muted {
        outer.style(styles::container::section_muted).into()
    } else {
        outer.into()
    }
}
