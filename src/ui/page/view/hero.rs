// SPDX-License-Identifier: MPL-2.0
//! Hero section: typed greeting, name, title, resume button, portrait.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{HEADLINE_TILT_FACTOR, PORTRAIT_TILT_FACTOR};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length, Padding,
};

use super::super::{Message, State, ViewContext};

/// Largest pixel shift the tilt parallax may apply to an element.
const PARALLAX_RANGE: f32 = 12.0;

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let greeting = if state.typing_running() {
        format!("{}▌", state.typed_greeting())
    } else {
        state.typed_greeting().to_owned()
    };

    let headline = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(greeting).size(typography::DISPLAY))
        .push(Text::new(ctx.profile.name.clone()).size(typography::TITLE_LG))
        .push(Text::new(ctx.profile.title.clone()).size(typography::TITLE_SM));

    let resume_button = button(Text::new(ctx.i18n.tr("hero-resume-button")).size(typography::BODY))
        .on_press(Message::CopyLink(ctx.profile.resume_url.clone()))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let (head_x, head_y) = state.tilt().rotation(HEADLINE_TILT_FACTOR);
    let left = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(headline)
            .push(resume_button),
    )
    .padding(parallax_padding(head_x, head_y));

    let initials: String = ctx
        .profile
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    let (portrait_x, portrait_y) = state.tilt().rotation(PORTRAIT_TILT_FACTOR);
    let portrait = Container::new(
        Container::new(Text::new(initials).size(typography::DISPLAY))
            .width(Length::Fixed(sizing::PORTRAIT))
            .height(Length::Fixed(sizing::PORTRAIT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::card),
    )
    .padding(parallax_padding(portrait_x, portrait_y));

    Row::new()
        .spacing(spacing::XXL)
        .align_y(Vertical::Center)
        .push(left)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(portrait)
        .into()
}

/// Turns a tilt rotation into an asymmetric padding so the element appears
/// to drift with the device. The shift is clamped to `PARALLAX_RANGE`.
fn parallax_padding(rotate_x: f32, rotate_y: f32) -> Padding {
    let dx = rotate_y.clamp(-PARALLAX_RANGE, PARALLAX_RANGE);
    let dy = rotate_x.clamp(-PARALLAX_RANGE, PARALLAX_RANGE);
    Padding {
        top: PARALLAX_RANGE + dy,
        bottom: PARALLAX_RANGE - dy,
        left: PARALLAX_RANGE + dx,
        right: PARALLAX_RANGE - dx,
    }
}
