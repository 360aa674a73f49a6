// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config, DEFAULT_BRIEF_TIMEOUT_SECS};
use iced_toasts::ui::notifications::{
    Message, Notification, NotificationArea, NotificationIcon, Timeout, FADE_OUT,
};
use iced_toasts::ui::theming::ThemeMode;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_theme_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        theme: Some(ThemeMode::Light),
        brief_timeout_secs: Some(DEFAULT_BRIEF_TIMEOUT_SECS),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded.theme, Some(ThemeMode::Light));

    let dark_config = Config {
        theme: Some(ThemeMode::Dark),
        brief_timeout_secs: Some(DEFAULT_BRIEF_TIMEOUT_SECS),
    };
    config::save_to_path(&dark_config, &temp_config_file_path)
        .expect("Failed to write dark config file");

    let reloaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load dark config from path");
    assert_eq!(reloaded.theme, Some(ThemeMode::Dark));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_full_lifecycle_timer_then_fade() {
    let mut area = NotificationArea::new();
    let start = Instant::now();

    area.display_at(Notification::success("Project saved"), start);
    assert_eq!(area.visible_count(), 1);

    // Before the brief default expires, nothing happens.
    area.tick(start + Duration::from_millis(1000));
    assert!(!area.visible().next().unwrap().is_closing());

    // Past 1.5 s the entry starts closing; it stays attached while fading.
    let expiry = start + Duration::from_millis(1600);
    area.tick(expiry);
    assert!(area.visible().next().unwrap().is_closing());
    assert_eq!(area.visible_count(), 1);

    // Once the fade completes, the entry is detached.
    area.tick(expiry + FADE_OUT + Duration::from_millis(50));
    assert!(area.is_empty());
}

#[test]
fn test_critical_error_persists_until_handle_dismissal() {
    let mut area = NotificationArea::new();
    let start = Instant::now();

    let handle = area.display_at(Notification::critical_error("Server unreachable"), start);

    area.tick(start + Duration::from_secs(600));
    assert_eq!(area.visible_count(), 1);

    assert!(handle.dismiss(&mut area));
    area.tick(Instant::now() + FADE_OUT + Duration::from_secs(1));
    assert!(area.is_empty());
}

#[test]
fn test_body_press_invokes_action_and_close_press_does_not() {
    let confirmations = Rc::new(Cell::new(0u32));

    let mut area = NotificationArea::new();
    let counter = Rc::clone(&confirmations);
    let clicked = area.display(Notification::info("Click to confirm").on_click(move || {
        counter.set(counter.get() + 1);
    }));
    let counter = Rc::clone(&confirmations);
    let closed = area.display(Notification::info("Close me instead").on_click(move || {
        counter.set(counter.get() + 1);
    }));

    area.handle_message(&Message::BodyPressed(clicked.id()));
    area.handle_message(&Message::ClosePressed(closed.id()));

    assert_eq!(confirmations.get(), 1);
    assert!(area.visible().all(|entry| entry.is_closing()));
}

#[test]
fn test_racing_triggers_detach_exactly_once() {
    let mut area = NotificationArea::new();
    let start = Instant::now();

    // Armed to expire at 1.5 s, but force-dismissed just before.
    let handle = area.display_at(Notification::warning("Racy"), start);
    assert!(handle.dismiss(&mut area));

    // The deadline tick and a late body press are both no-ops now.
    area.handle_message(&Message::BodyPressed(handle.id()));
    area.tick(start + Duration::from_secs(2));

    area.tick(Instant::now() + FADE_OUT + Duration::from_secs(1));
    assert!(area.is_empty());
    assert!(!area.contains(handle.id()));
}

#[test]
fn test_explicit_indefinite_timeout_on_non_critical_icon() {
    let mut area = NotificationArea::new();
    let start = Instant::now();

    area.display_at(
        Notification::new("Sticky note")
            .icon(NotificationIcon::Info)
            .timeout(Timeout::INDEFINITE),
        start,
    );

    area.tick(start + Duration::from_secs(3600));
    assert_eq!(area.visible_count(), 1);
}
