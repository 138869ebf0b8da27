// SPDX-License-Identifier: MPL-2.0
//! About section: objective quote, detail, and interests cards.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

use super::super::{Message, ViewContext};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(ctx.i18n.tr("about-heading")).size(typography::TITLE_LG))
        .push(
            Text::new(format!("\u{201c}{}\u{201d}", ctx.profile.objective_quote))
                .size(typography::TITLE_SM),
        )
        .push(Text::new(ctx.profile.objective_detail.clone()).size(typography::BODY));

    if !ctx.profile.interests.is_empty() {
        let mut cards = Row::new().spacing(spacing::MD);
        for interest in &ctx.profile.interests {
            let card = Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(Text::new(interest.emblem.clone()).size(typography::TITLE_LG))
                    .push(Text::new(interest.title.clone()).size(typography::TITLE_SM))
                    .push(Text::new(interest.description.clone()).size(typography::CAPTION)),
            )
            .padding(spacing::MD)
            .width(Length::FillPortion(1))
            .style(styles::container::card);
            cards = cards.push(card);
        }

        column = column
            .push(Text::new(ctx.i18n.tr("interests-heading")).size(typography::TITLE_MD))
            .push(cards);
    }

    column.into()
}
