// SPDX-License-Identifier: MPL-2.0
//! The single-page portfolio itself.
//!
//! This module follows a "state down, messages up" pattern: all interactive
//! state of the page lives in [`State`], interactions arrive as [`Message`]s,
//! and side effects the page cannot perform itself (clipboard access) are
//! reported to the application as [`Event`]s.

use crate::i18n::fluent::I18n;
use crate::profile::Profile;
use crate::ui::state::{
    Carousel, Section, SectionTracker, SwipeDirection, SwipeTracker, TiltState, TimelineTab,
    TypingReveal,
};
use iced::{touch, Element};

pub mod layout;
mod view;

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
}

/// Interactive state of the page.
#[derive(Debug, Clone)]
pub struct State {
    sections: SectionTracker,
    active_tab: TimelineTab,
    carousel: Carousel,
    swipe: SwipeTracker,
    tilt: TiltState,
    typing: TypingReveal,
    contact_name: String,
    contact_email: String,
    contact_message: String,
}

/// Messages emitted by the page.
#[derive(Debug, Clone)]
pub enum Message {
    /// Vertical scroll offset of the page scrollable changed.
    Scrolled(f32),
    TabSelected(TimelineTab),
    NextProject,
    PrevProject,
    JumpToProject(usize),
    /// Raw touch event forwarded from the window event stream.
    Touch(touch::Event),
    /// Orientation sensor sample; either axis may be absent.
    TiltReading {
        beta: Option<f32>,
        gamma: Option<f32>,
    },
    /// One step of the greeting reveal animation.
    TypingTick,
    /// Put a link on the clipboard (resume, project, or contact URL).
    CopyLink(String),
    ContactNameChanged(String),
    ContactEmailChanged(String),
    ContactMessageChanged(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    CopyToClipboard(String),
}

impl State {
    /// Builds the page state from the loaded profile. The carousel length is
    /// fixed to the profile's project count for the whole session.
    pub fn new(profile: &Profile) -> Self {
        Self {
            sections: layout::tracker(),
            active_tab: TimelineTab::default(),
            carousel: Carousel::new(profile.projects.len()),
            swipe: SwipeTracker::default(),
            tilt: TiltState::default(),
            typing: TypingReveal::new(profile.greeting.clone()),
            contact_name: String::new(),
            contact_email: String::new(),
            contact_message: String::new(),
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Scrolled(offset) => {
                self.sections.on_scroll(offset);
                Event::None
            }
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                Event::None
            }
            Message::NextProject => {
                self.carousel.next();
                Event::None
            }
            Message::PrevProject => {
                self.carousel.prev();
                Event::None
            }
            Message::JumpToProject(index) => {
                self.carousel.jump_to(index);
                Event::None
            }
            Message::Touch(event) => {
                self.handle_touch(event);
                Event::None
            }
            Message::TiltReading { beta, gamma } => {
                self.tilt.update(beta, gamma);
                Event::None
            }
            Message::TypingTick => {
                self.typing.tick();
                Event::None
            }
            Message::CopyLink(url) => Event::CopyToClipboard(url),
            Message::ContactNameChanged(value) => {
                self.contact_name = value;
                Event::None
            }
            Message::ContactEmailChanged(value) => {
                self.contact_email = value;
                Event::None
            }
            Message::ContactMessageChanged(value) => {
                self.contact_message = value;
                Event::None
            }
        }
    }

    fn handle_touch(&mut self, event: touch::Event) {
        match event {
            touch::Event::FingerPressed { position, .. } => {
                self.swipe.touch_start(position.x);
            }
            touch::Event::FingerMoved { position, .. } => {
                self.swipe.touch_move(position.x);
            }
            touch::Event::FingerLifted { .. } => match self.swipe.touch_end() {
                Some(SwipeDirection::Left) => self.carousel.next(),
                Some(SwipeDirection::Right) => self.carousel.prev(),
                None => {}
            },
            // A lost finger is a cancelled gesture, not a completed one.
            touch::Event::FingerLost { .. } => {}
        }
    }

    /// Render the page.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }

    /// Section currently highlighted in the navbar.
    pub fn active_section(&self) -> Section {
        self.sections.active()
    }

    /// Scroll offset that puts a section's top at the top of the window.
    pub fn scroll_target(&self, section: Section) -> Option<f32> {
        self.sections.top_of(section)
    }

    /// Whether the greeting reveal still needs its tick subscription.
    pub fn typing_running(&self) -> bool {
        self.typing.is_running()
    }

    pub fn active_tab(&self) -> TimelineTab {
        self.active_tab
    }

    pub fn carousel(&self) -> Carousel {
        self.carousel
    }

    pub(crate) fn tilt(&self) -> TiltState {
        self.tilt
    }

    pub(crate) fn typed_greeting(&self) -> &str {
        self.typing.visible()
    }

    pub(crate) fn contact_name(&self) -> &str {
        &self.contact_name
    }

    pub(crate) fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub(crate) fn contact_message(&self) -> &str {
        &self.contact_message
    }
}

/// Widget id of the page scrollable, shared with the application so it can
/// drive `scroll_to` from navbar events.
pub fn scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("portfolio-page")
}
