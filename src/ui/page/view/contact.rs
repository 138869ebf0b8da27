// SPDX-License-Identifier: MPL-2.0
//! Contact section: reach-me cards, a non-submitting message form, and the
//! page footer.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length,
};

use super::super::{Message, State, ViewContext};

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let details = Row::new()
        .spacing(spacing::MD)
        .push(detail_card(
            ctx.i18n.tr("contact-phone"),
            ctx.profile.phone.clone(),
            None,
        ))
        .push(detail_card(
            ctx.i18n.tr("contact-email"),
            ctx.profile.email.clone(),
            None,
        ))
        .push(detail_card(
            ctx.i18n.tr("contact-location"),
            ctx.profile.location.clone(),
            None,
        ));

    let links = Row::new()
        .spacing(spacing::MD)
        .push(detail_card(
            ctx.i18n.tr("contact-github"),
            ctx.profile.github.clone(),
            Some((
                ctx.i18n.tr("contact-github-link"),
                ctx.profile.github.clone(),
            )),
        ))
        .push(detail_card(
            ctx.i18n.tr("contact-linkedin"),
            ctx.profile.linkedin.clone(),
            Some((
                ctx.i18n.tr("contact-linkedin-link"),
                ctx.profile.linkedin.clone(),
            )),
        ));

    let form = form(state, ctx);

    let year = chrono::Local::now().year();
    let footer = Container::new(
        Text::new(format!(
            "© {year} {} · {}",
            ctx.profile.name,
            ctx.i18n.tr("footer-rights")
        ))
        .size(typography::CAPTION),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([spacing::MD, 0.0]);

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(ctx.i18n.tr("contact-heading")).size(typography::TITLE_LG))
        .push(details)
        .push(links)
        .push(form)
        .push(footer)
        .into()
}

/// A labelled contact detail, optionally with a copy-link action.
fn detail_card(
    label: String,
    value: String,
    action: Option<(String, String)>,
) -> Element<'static, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(Text::new(value).size(typography::BODY));

    if let Some((action_label, url)) = action {
        column = column.push(
            button(Text::new(action_label).size(typography::CAPTION))
                .on_press(Message::CopyLink(url))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::unselected),
        );
    }

    Container::new(column)
        .padding(spacing::MD)
        .width(Length::FillPortion(1))
        .style(styles::container::card)
        .into()
}

fn form<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name_placeholder = ctx.i18n.tr("contact-form-name");
    let email_placeholder = ctx.i18n.tr("contact-form-email");
    let message_placeholder = ctx.i18n.tr("contact-form-message");

    let name_input = text_input(name_placeholder.as_str(), state.contact_name())
        .on_input(Message::ContactNameChanged)
        .padding(spacing::XS)
        .size(typography::BODY_LG);
    let email_input = text_input(email_placeholder.as_str(), state.contact_email())
        .on_input(Message::ContactEmailChanged)
        .padding(spacing::XS)
        .size(typography::BODY_LG);
    let message_input = text_input(message_placeholder.as_str(), state.contact_message())
        .on_input(Message::ContactMessageChanged)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    // The form has no backend; the send button stays inert.
    let send_button = button(Text::new(ctx.i18n.tr("contact-form-send")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::disabled());

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(ctx.i18n.tr("contact-form-title")).size(typography::TITLE_MD))
            .push(name_input)
            .push(email_input)
            .push(message_input)
            .push(send_button),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
