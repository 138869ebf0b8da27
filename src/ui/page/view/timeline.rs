// SPDX-License-Identifier: MPL-2.0
//! Education section: tab row switching between three timeline lists.

use crate::profile::TimelineEntry;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::TimelineTab;
use crate::ui::styles;
use iced::{
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

use super::super::{Message, State, ViewContext};

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = state.active_tab();

    let mut tabs = Row::new().spacing(spacing::XS);
    for tab in TimelineTab::ALL {
        let label = Text::new(ctx.i18n.tr(tab.label_key())).size(typography::BODY);
        let entry = button(label)
            .on_press(Message::TabSelected(tab))
            .padding([spacing::XXS, spacing::MD]);
        let entry = if tab == active {
            entry.style(styles::button::selected)
        } else {
            entry.style(styles::button::unselected)
        };
        tabs = tabs.push(entry);
    }

    let entries = match active {
        TimelineTab::Education => &ctx.profile.education,
        TimelineTab::Experience => &ctx.profile.experience,
        TimelineTab::Internships => &ctx.profile.internships,
    };

    let mut list = Column::new().spacing(spacing::MD);
    for entry in entries {
        list = list.push(entry_card(entry));
    }

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(ctx.i18n.tr(active.heading_key())).size(typography::TITLE_LG))
        .push(tabs)
        .push(list)
        .into()
}

fn entry_card(entry: &TimelineEntry) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(entry.period.clone()).size(typography::CAPTION))
            .push(Text::new(entry.title.clone()).size(typography::TITLE_SM))
            .push(Text::new(entry.organization.clone()).size(typography::BODY_LG))
            .push(Text::new(entry.description.clone()).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
