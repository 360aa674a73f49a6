// SPDX-License-Identifier: MPL-2.0
//! Application root state for the demo shell.
//!
//! The `App` struct owns the one notification area for the process
//! lifetime and translates messages into notifications, manual dismissals,
//! and config persistence. It intentionally keeps policy decisions (window
//! sizing, theme persistence, tick cadence) close to the main update loop
//! so user-facing behavior is easy to audit.

use crate::config::{self, Config, TICK_INTERVAL_MS};
use crate::diagnostics::DiagnosticsHandle;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{
    self, Notification, NotificationArea, NotificationIcon, Timeout, Toast,
};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{time, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Root Iced application state owning the notification area.
pub struct App {
    area: NotificationArea,
    theme_mode: ThemeMode,
    scheme: ColorScheme,
    diagnostics: DiagnosticsHandle,
    /// Count of body-press confirmations, incremented by the demo action.
    confirmations: Arc<AtomicU32>,
    /// Handle of the pinned critical notification, if one is showing.
    pinned: Option<notifications::Handle>,
    brief_timeout_secs: Option<f32>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("live_notifications", &self.area.visible_count())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded notification interactions and ticks.
    Area(notifications::Message),
    /// Display a sample notification of the given category.
    Show(NotificationIcon),
    /// Display a notification carrying a body-press action.
    ShowWithAction,
    /// Display a pinned critical notification and keep its handle.
    PinCritical,
    /// Dismiss the pinned notification through its handle.
    DismissPinned,
    /// Switch and persist the theme.
    ThemeSelected(ThemeMode),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional theme override (`light`, `dark`, or `system`).
    pub theme: Option<ThemeMode>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(480.0, 360.0)),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let theme_mode = flags.theme.or(config.theme).unwrap_or_default();
        let brief_timeout_secs = config.brief_timeout_secs;

        let diagnostics = DiagnosticsHandle::new();
        let mut area = NotificationArea::new();
        if let Some(secs) = brief_timeout_secs {
            area = area.with_brief_timeout(Timeout::secs(secs));
        }
        area.set_diagnostics(diagnostics.clone());

        let mut app = App {
            area,
            theme_mode,
            scheme: ColorScheme::for_mode(theme_mode),
            diagnostics,
            confirmations: Arc::new(AtomicU32::new(0)),
            pinned: None,
            brief_timeout_secs,
        };
        app.area.display(Notification::info("Ready"));

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toasts")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Tick only while a deadline is armed or a fade is running
        if self.area.needs_tick() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS))
                .map(|instant| Message::Area(notifications::Message::Tick(instant)))
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Area(area_message) => {
                self.area.handle_message(&area_message);
                if let Some(handle) = self.pinned {
                    if !self.area.contains(handle.id()) {
                        self.pinned = None;
                    }
                }
            }
            Message::Show(icon) => {
                self.area.display(Notification::new(sample_message(icon)).icon(icon));
            }
            Message::ShowWithAction => {
                let counter = Arc::clone(&self.confirmations);
                self.area.display(
                    Notification::info("Press the body of this toast to confirm")
                        .timeout_secs(8.0)
                        .on_click(move || {
                            counter.fetch_add(1, Ordering::Relaxed);
                        }),
                );
            }
            Message::PinCritical => {
                if self.pinned.is_none() {
                    let handle = self
                        .area
                        .display(Notification::critical_error("Pinned until dismissed"));
                    self.pinned = Some(handle);
                }
            }
            Message::DismissPinned => {
                if let Some(handle) = self.pinned.take() {
                    handle.dismiss(&mut self.area);
                }
            }
            Message::ThemeSelected(mode) => {
                self.theme_mode = mode;
                self.scheme = ColorScheme::for_mode(mode);
                let config = Config {
                    theme: Some(mode),
                    brief_timeout_secs: self.brief_timeout_secs,
                };
                if let Err(err) = config::save(&config) {
                    eprintln!("Failed to save config: {err}");
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let category_buttons = NotificationIcon::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, icon| {
                row.push(button(Text::new(category_label(*icon))).on_press(Message::Show(*icon)))
            });

        let lifecycle_buttons = Row::new()
            .spacing(spacing::XS)
            .push(button(Text::new("With action")).on_press(Message::ShowWithAction))
            .push(button(Text::new("Pin critical")).on_press(Message::PinCritical))
            .push(button(Text::new("Dismiss pinned")).on_press(Message::DismissPinned));

        let theme_buttons = Row::new()
            .spacing(spacing::XS)
            .push(button(Text::new("Light")).on_press(Message::ThemeSelected(ThemeMode::Light)))
            .push(button(Text::new("Dark")).on_press(Message::ThemeSelected(ThemeMode::Dark)))
            .push(button(Text::new("System")).on_press(Message::ThemeSelected(ThemeMode::System)));

        let status = Text::new(format!(
            "{} live · {} confirmed · {} events recorded",
            self.area.visible_count(),
            self.confirmations.load(Ordering::Relaxed),
            self.diagnostics.len(),
        ))
        .size(typography::CAPTION);

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(Text::new("Notification playground").size(typography::TITLE))
            .push(category_buttons)
            .push(lifecycle_buttons)
            .push(theme_buttons)
            .push(status);

        let base = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill);

        Stack::new()
            .push(base)
            .push(Toast::view_overlay(&self.area, &self.scheme, Instant::now()).map(Message::Area))
            .into()
    }
}

fn category_label(icon: NotificationIcon) -> &'static str {
    match icon {
        NotificationIcon::Construction => "Construction",
        NotificationIcon::CriticalError => "Critical",
        NotificationIcon::Error => "Error",
        NotificationIcon::Warning => "Warning",
        NotificationIcon::Success => "Success",
        NotificationIcon::Info => "Info",
        NotificationIcon::None => "Plain",
    }
}

fn sample_message(icon: NotificationIcon) -> &'static str {
    match icon {
        NotificationIcon::Construction => "This feature is under construction",
        NotificationIcon::CriticalError => "Could not reach the project server",
        NotificationIcon::Error => "Export failed",
        NotificationIcon::Warning => "Unsaved changes will be lost",
        NotificationIcon::Success => "Project saved",
        NotificationIcon::Info => "Autosave is enabled",
        NotificationIcon::None => "Hello from the notification area",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let diagnostics = DiagnosticsHandle::new();
        let mut area = NotificationArea::new();
        area.set_diagnostics(diagnostics.clone());
        App {
            area,
            theme_mode: ThemeMode::Light,
            scheme: ColorScheme::light(),
            diagnostics,
            confirmations: Arc::new(AtomicU32::new(0)),
            pinned: None,
            brief_timeout_secs: None,
        }
    }

    #[test]
    fn show_message_displays_a_notification() {
        let mut app = app();
        let _ = app.update(Message::Show(NotificationIcon::Success));
        assert_eq!(app.area.visible_count(), 1);
    }

    #[test]
    fn pin_critical_is_idempotent_until_dismissed() {
        let mut app = app();
        let _ = app.update(Message::PinCritical);
        let _ = app.update(Message::PinCritical);
        assert_eq!(app.area.visible_count(), 1);
        assert!(app.pinned.is_some());

        let _ = app.update(Message::DismissPinned);
        assert!(app.pinned.is_none());
        assert!(app.area.visible().next().is_some_and(|e| e.is_closing()));
    }

    #[test]
    fn body_press_through_update_confirms_once() {
        let mut app = app();
        let _ = app.update(Message::ShowWithAction);
        let id = app.area.visible().next().map(|e| e.notification().id());

        let id = id.expect("notification should be live");
        let _ = app.update(Message::Area(notifications::Message::BodyPressed(id)));
        let _ = app.update(Message::Area(notifications::Message::BodyPressed(id)));

        assert_eq!(app.confirmations.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn pinned_handle_is_cleared_after_fade_completes() {
        let mut app = app();
        let _ = app.update(Message::PinCritical);
        let _ = app.update(Message::DismissPinned);

        // DismissPinned already cleared the handle; a tick past the fade
        // detaches the entry itself.
        let past_fade = Instant::now() + notifications::FADE_OUT + Duration::from_secs(1);
        let _ = app.update(Message::Area(notifications::Message::Tick(past_fade)));
        assert!(app.area.is_empty());
        assert!(app.pinned.is_none());
    }
}
