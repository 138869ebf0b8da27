// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows exercised through the library surface.

use iced_folio::config::{self, Config};
use iced_folio::i18n::fluent::I18n;
use iced_folio::profile::Profile;
use iced_folio::ui::page::{self, State};
use iced_folio::ui::state::{Section, SwipeDirection, SwipeTracker, TimelineTab};
use iced_folio::ui::theming::ThemeMode;
use iced::touch;
use iced::Point;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-home"), "Home");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn scrolling_through_the_page_walks_the_sections() {
    let profile = Profile::embedded();
    let mut page = State::new(&profile);

    let mut seen = vec![page.active_section()];
    for section in Section::ALL {
        let top = page.scroll_target(section).expect("section has geometry");
        page.update(page::Message::Scrolled(top));
        if *seen.last().expect("seen is non-empty") != page.active_section() {
            seen.push(page.active_section());
        }
    }

    assert_eq!(seen, Section::ALL.to_vec());
}

#[test]
fn swipe_gesture_drives_the_project_carousel() {
    let profile = Profile::embedded();
    let mut page = State::new(&profile);
    let count = profile.projects.len();
    assert!(count > 1);

    // Swipe left: advance.
    touch_sequence(&mut page, 320.0, 100.0);
    assert_eq!(page.carousel().index(), 1);

    // Swipe right: step back to the start.
    touch_sequence(&mut page, 100.0, 320.0);
    assert_eq!(page.carousel().index(), 0);

    // Swipe right again: wrap to the last project.
    touch_sequence(&mut page, 100.0, 320.0);
    assert_eq!(page.carousel().index(), count - 1);
}

fn touch_sequence(page: &mut State, start_x: f32, end_x: f32) {
    let id = touch::Finger(7);
    page.update(page::Message::Touch(touch::Event::FingerPressed {
        id,
        position: Point::new(start_x, 400.0),
    }));
    page.update(page::Message::Touch(touch::Event::FingerMoved {
        id,
        position: Point::new(end_x, 400.0),
    }));
    page.update(page::Message::Touch(touch::Event::FingerLifted {
        id,
        position: Point::new(end_x, 400.0),
    }));
}

#[test]
fn swipe_tracker_matches_page_behavior_at_the_threshold() {
    let mut tracker = SwipeTracker::default();
    tracker.touch_start(200.0);
    tracker.touch_move(150.0);
    // Exactly 50px of travel stays inside the dead-zone.
    assert_eq!(tracker.touch_end(), None);

    tracker.touch_move(149.0);
    assert_eq!(tracker.touch_end(), Some(SwipeDirection::Left));
}

#[test]
fn tab_switching_and_typing_compose_on_one_page() {
    let profile = Profile::embedded();
    let mut page = State::new(&profile);

    page.update(page::Message::TabSelected(TimelineTab::Experience));
    assert_eq!(page.active_tab(), TimelineTab::Experience);

    // Finish the greeting reveal; the tab selection must survive it.
    while page.typing_running() {
        page.update(page::Message::TypingTick);
    }
    assert_eq!(page.active_tab(), TimelineTab::Experience);
}
