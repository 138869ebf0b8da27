// SPDX-License-Identifier: MPL-2.0
//! Projects section: one-card carousel with arrows, position badge, and
//! pagination dots.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

use super::super::{Message, State, ViewContext};

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let carousel = state.carousel();

    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(ctx.i18n.tr("projects-heading")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("projects-hint")).size(typography::CAPTION));

    let Some(project) = ctx.profile.projects.get(carousel.index()) else {
        return column.into();
    };

    let badge = Container::new(
        Text::new(format!("{} / {}", carousel.index() + 1, carousel.count()))
            .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::badge);

    let copy_button = button(Text::new(ctx.i18n.tr("project-copy-link")).size(typography::BODY))
        .on_press(Message::CopyLink(project.link.clone()))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Row::new()
                    .align_y(Vertical::Center)
                    .push(Text::new(project.title.clone()).size(typography::TITLE_MD))
                    .push(iced::widget::Space::new().width(Length::Fill))
                    .push(badge),
            )
            .push(Text::new(project.description.clone()).size(typography::BODY))
            .push(copy_button),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card);

    let prev = button(Text::new("‹").size(typography::TITLE_LG))
        .on_press(Message::PrevProject)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);
    let next = button(Text::new("›").size(typography::TITLE_LG))
        .on_press(Message::NextProject)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);

    let carousel_row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(prev)
        .push(card)
        .push(next);

    let mut dots = Row::new().spacing(spacing::XS);
    for i in 0..carousel.count() {
        let dot = button(Text::new("•").size(typography::BODY))
            .on_press(Message::JumpToProject(i))
            .width(Length::Fixed(sizing::PAGINATION_DOT))
            .padding(spacing::XXS);
        let dot = if i == carousel.index() {
            dot.style(styles::button::selected)
        } else {
            dot.style(styles::button::unselected)
        };
        dots = dots.push(dot);
    }

    column = column.push(carousel_row).push(
        Container::new(dots)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    );

    column.into()
}
