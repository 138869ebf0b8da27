// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the page, the navbar, localization, and
//! persisted preferences, and translates component events into side effects
//! like clipboard writes, programmatic scrolling, or config persistence.

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::profile::{self, Profile};
use crate::ui::navbar;
use crate::ui::page;
use crate::ui::state::TICK_INTERVAL;
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::Column;
use iced::{event, time, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Launch options parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    pub lang: Option<String>,
    pub profile_path: Option<PathBuf>,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    profile: Profile,
    page: page::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("profile", &self.profile.name)
            .field("active_section", &self.page.active_section())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Top-level messages routed to the owning component.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load settings: {err}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);

        let profile = match profile::load(flags.profile_path.as_deref()) {
            Ok(profile) => profile,
            Err(err) => {
                eprintln!("Failed to load profile override: {err}");
                Profile::embedded()
            }
        };

        let page = page::State::new(&profile);

        let app = App {
            i18n,
            profile,
            page,
            theme_mode: config.theme_mode,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("{} – {}", self.profile.name, self.i18n.tr("window-title"))
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => match navbar::update(msg) {
                navbar::Event::ScrollTo(section) => {
                    match self.page.scroll_target(section) {
                        Some(top) => iced::widget::operation::scroll_to(
                            page::scroll_id(),
                            AbsoluteOffset { x: 0.0, y: top },
                        ),
                        None => Task::none(),
                    }
                }
                navbar::Event::ToggleTheme => {
                    self.theme_mode = self.theme_mode.toggled();
                    self.persist_preferences();
                    Task::none()
                }
            },
            Message::Page(msg) => match self.page.update(msg) {
                page::Event::None => Task::none(),
                page::Event::CopyToClipboard(url) => iced::clipboard::write(url),
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar = navbar::view(navbar::ViewContext {
            i18n: &self.i18n,
            brand: &self.profile.name,
            active: self.page.active_section(),
            is_dark: self.theme_mode.is_dark(),
        })
        .map(Message::Navbar);

        let page = self
            .page
            .view(page::ViewContext {
                i18n: &self.i18n,
                profile: &self.profile,
            })
            .map(Message::Page);

        Column::new().push(navbar).push(page).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Touch events are delivered window-wide; the page decides whether
        // the gesture amounts to a swipe.
        let touch = event::listen_with(|event, status, _window| match (event, status) {
            (event::Event::Touch(touch_event), event::Status::Ignored) => {
                Some(Message::Page(page::Message::Touch(touch_event)))
            }
            _ => None,
        });

        // The greeting reveal keeps its tick alive only until completion.
        let typing = if self.page.typing_running() {
            time::every(TICK_INTERVAL).map(|_| Message::Page(page::Message::TypingTick))
        } else {
            Subscription::none()
        };

        Subscription::batch([touch, typing])
    }

    fn persist_preferences(&self) {
        // Tests must not touch the real config directory.
        if cfg!(test) {
            return;
        }
        let config = Config {
            language: Some(self.i18n.current_locale().to_string()),
            theme_mode: self.theme_mode,
        };
        if let Err(err) = config::save(&config) {
            eprintln!("Failed to save settings: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::{Section, TimelineTab};

    fn test_app() -> App {
        let (app, _task) = App::new(Flags::default());
        app
    }

    #[test]
    fn new_app_starts_on_home_with_embedded_profile() {
        let app = test_app();
        assert_eq!(app.page.active_section(), Section::Home);
        assert!(!app.profile.name.is_empty());
    }

    #[test]
    fn title_contains_profile_name() {
        let app = test_app();
        assert!(app.title().contains(&app.profile.name));
    }

    #[test]
    fn theme_toggle_flips_effective_theme() {
        let mut app = test_app();
        let before = app.theme_mode.is_dark();
        let _task = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_ne!(app.theme_mode.is_dark(), before);
    }

    #[test]
    fn page_messages_are_routed_to_the_page() {
        let mut app = test_app();
        let _task = app.update(Message::Page(page::Message::TabSelected(
            TimelineTab::Internships,
        )));
        assert_eq!(app.page.active_tab(), TimelineTab::Internships);
    }

    #[test]
    fn navbar_scroll_request_targets_known_geometry() {
        let app = test_app();
        for section in Section::ALL {
            assert!(app.page.scroll_target(section).is_some());
        }
    }

    #[test]
    fn typing_subscription_stops_after_reveal_completes() {
        let mut app = test_app();
        assert!(app.page.typing_running());

        let greeting_len = app.profile.greeting.chars().count();
        for _ in 0..greeting_len {
            let _task = app.update(Message::Page(page::Message::TypingTick));
        }
        assert!(!app.page.typing_running());
    }

    #[test]
    fn app_view_renders() {
        let app = test_app();
        let _element = app.view();
    }
}
