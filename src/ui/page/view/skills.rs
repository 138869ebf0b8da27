// SPDX-License-Identifier: MPL-2.0
//! Skills section: categories laid out two cards per row.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Length,
};

use super::super::{Message, ViewContext};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(ctx.i18n.tr("skills-heading")).size(typography::TITLE_LG));

    for pair in ctx.profile.skills.chunks(2) {
        let mut row = Row::new().spacing(spacing::MD);
        for category in pair {
            row = row.push(category_card(category));
        }
        // Odd trailing category keeps half width, aligned with the grid.
        if pair.len() == 1 {
            row = row.push(iced::widget::Space::new().width(Length::FillPortion(1)));
        }
        column = column.push(row);
    }

    column.into()
}

fn category_card(category: &crate::profile::SkillCategory) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(category.name.clone()).size(typography::TITLE_SM))
            .push(Text::new(category.skills.join("  ·  ")).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .width(Length::FillPortion(1))
    .style(styles::container::card)
    .into()
}
