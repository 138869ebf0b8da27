// SPDX-License-Identifier: MPL-2.0
//! Fixed vertical layout of the page sections.
//!
//! Every section renders at a design-time height, so the scroll position of
//! each section top is known up front. The section tracker is seeded from
//! this table; the rendered containers use the same constants, which keeps
//! the highlight in the navbar honest.

use crate::ui::state::{Section, SectionTracker};

pub const HOME_HEIGHT: f32 = 760.0;
pub const ABOUT_HEIGHT: f32 = 560.0;
pub const SKILLS_HEIGHT: f32 = 640.0;
pub const EDUCATION_HEIGHT: f32 = 680.0;
pub const PROJECTS_HEIGHT: f32 = 620.0;
pub const CONTACT_HEIGHT: f32 = 900.0;

/// Sections paired with their heights, top to bottom.
pub fn section_layout() -> [(Section, f32); 6] {
    [
        (Section::Home, HOME_HEIGHT),
        (Section::About, ABOUT_HEIGHT),
        (Section::Skills, SKILLS_HEIGHT),
        (Section::Education, EDUCATION_HEIGHT),
        (Section::Projects, PROJECTS_HEIGHT),
        (Section::Contact, CONTACT_HEIGHT),
    ]
}

/// Height of the section a given enum value renders at.
pub fn height_of(section: Section) -> f32 {
    match section {
        Section::Home => HOME_HEIGHT,
        Section::About => ABOUT_HEIGHT,
        Section::Skills => SKILLS_HEIGHT,
        Section::Education => EDUCATION_HEIGHT,
        Section::Projects => PROJECTS_HEIGHT,
        Section::Contact => CONTACT_HEIGHT,
    }
}

/// Seeds a tracker with the full layout.
pub fn tracker() -> SectionTracker {
    SectionTracker::from_layout(&section_layout())
}
