// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Elevated content card (timeline entries, project card, contact blocks).
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette.background.weak.color
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Alternate band behind every other section, mirroring the page's muted
/// stripes.
pub fn section_muted(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette.background.strong.color
        })),
        ..container::Style::default()
    }
}

/// Fixed top navigation bar surface.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            width: 1.0,
            color: palette.background.strong.color,
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Position badge overlayed on the project card ("k / n").
pub fn badge(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.primary.strong.color)),
        text_color: Some(palette.primary.strong.text),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
