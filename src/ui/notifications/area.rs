// SPDX-License-Identifier: MPL-2.0
//! The shared notification area and its dismissal lifecycle.
//!
//! The area owns every live notification for the lifetime of the
//! application. Each entry moves through an explicit lifecycle:
//! active (optionally with an armed auto-dismiss deadline), closing
//! (interaction disabled, opacity fading toward the floor, deadline
//! disarmed), and removed once the fade completes. Entering the closing
//! phase is idempotent: whichever trigger fires first wins, later triggers
//! are no-ops, and exactly one detachment occurs.

use super::notification::{Notification, NotificationId, Timeout};
use crate::config::FADE_OUT_MS;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::ui::design_tokens::opacity;
use std::time::{Duration, Instant};

/// Duration of the dismissal fade-out.
pub const FADE_OUT: Duration = Duration::from_millis(FADE_OUT_MS);

/// Which dismissal trigger fired first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// The auto-dismiss deadline expired.
    Timer,
    /// The close button was pressed.
    CloseButton,
    /// The notification body was pressed.
    Body,
    /// External code dismissed through a [`Handle`] or by id.
    Handle,
}

impl DismissTrigger {
    /// Stable label used in diagnostic events.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DismissTrigger::Timer => "timer",
            DismissTrigger::CloseButton => "close-button",
            DismissTrigger::Body => "body",
            DismissTrigger::Handle => "handle",
        }
    }
}

/// Handle returned by [`NotificationArea::display`], exposing manual
/// dismissal of that notification.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    id: NotificationId,
}

impl Handle {
    /// Returns the id of the displayed notification.
    #[must_use]
    pub fn id(self) -> NotificationId {
        self.id
    }

    /// Force-dismisses the notification. The body-press action is not
    /// invoked. Returns `true` if this call started the dismissal.
    pub fn dismiss(self, area: &mut NotificationArea) -> bool {
        area.dismiss(self.id)
    }
}

/// Messages for notification interactions and timing.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The notification body was pressed.
    BodyPressed(NotificationId),
    /// The close button was pressed.
    ClosePressed(NotificationId),
    /// Periodic tick advancing deadlines and fades.
    Tick(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active { deadline: Option<Instant> },
    Closing { since: Instant },
}

/// One live notification inside the area.
#[derive(Debug)]
pub struct Entry {
    notification: Notification,
    phase: Phase,
}

impl Entry {
    /// Returns the displayed notification.
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Returns true once dismissal has been triggered; a closing entry no
    /// longer reacts to pointer interaction.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. })
    }

    /// Current opacity: fully opaque while active, then fading linearly to
    /// the near-zero floor while closing.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Active { .. } => opacity::OPAQUE,
            Phase::Closing { since } => {
                let progress = (now.saturating_duration_since(since).as_secs_f32()
                    / FADE_OUT.as_secs_f32())
                .clamp(0.0, 1.0);
                opacity::OPAQUE - (opacity::OPAQUE - opacity::FADE_FLOOR) * progress
            }
        }
    }
}

/// Shared container stacking live notifications in insertion order.
///
/// Created once at application boot and owned by the application root for
/// the whole process lifetime; the collection itself is reachable only
/// through the display/dismiss/tick surface.
#[derive(Debug, Default)]
pub struct NotificationArea {
    entries: Vec<Entry>,
    brief_timeout: Option<Timeout>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl NotificationArea {
    /// Creates a new empty notification area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the brief default timeout applied to non-critical
    /// notifications that don't request one.
    #[must_use]
    pub fn with_brief_timeout(mut self, timeout: Timeout) -> Self {
        self.brief_timeout = Some(timeout);
        self
    }

    /// Sets the diagnostics handle used to record lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Displays a notification: resolves its effective timeout, arms the
    /// deadline if that timeout is positive, and inserts the entry at the
    /// end of the stack. Returns a [`Handle`] for manual dismissal.
    pub fn display(&mut self, notification: Notification) -> Handle {
        self.display_at(notification, Instant::now())
    }

    /// Like [`NotificationArea::display`], with an explicit insertion instant.
    pub fn display_at(&mut self, notification: Notification, now: Instant) -> Handle {
        let id = notification.id();
        let effective = Timeout::resolve(
            notification.requested_timeout(),
            notification.icon_kind(),
            self.brief_timeout.unwrap_or(Timeout::BRIEF),
        );
        let deadline = effective.duration().map(|timeout| now + timeout);

        if let Some(handle) = &self.diagnostics {
            handle.record(DiagnosticEventKind::NotificationDisplayed {
                icon_class: notification.icon_kind().style().class,
            });
        }

        self.entries.push(Entry {
            notification,
            phase: Phase::Active { deadline },
        });

        Handle { id }
    }

    /// Force-dismisses a notification by id, without invoking its
    /// body-press action.
    ///
    /// Returns `true` if this call started the dismissal; `false` if the
    /// id is unknown or the notification is already closing.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.begin_close(id, DismissTrigger::Handle, Instant::now())
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::BodyPressed(id) => {
                self.begin_close(*id, DismissTrigger::Body, Instant::now());
            }
            Message::ClosePressed(id) => {
                self.begin_close(*id, DismissTrigger::CloseButton, Instant::now());
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Advances deadlines and fades: entries whose deadline has passed
    /// begin closing, and entries whose fade has completed are detached.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .entries
            .iter()
            .filter_map(|entry| match entry.phase {
                Phase::Active {
                    deadline: Some(deadline),
                } if now >= deadline => Some(entry.notification.id()),
                _ => None,
            })
            .collect();

        for id in expired {
            self.begin_close(id, DismissTrigger::Timer, now);
        }

        self.entries.retain(|entry| match entry.phase {
            Phase::Closing { since } => now.saturating_duration_since(since) < FADE_OUT,
            Phase::Active { .. } => true,
        });
    }

    /// Returns the live entries in insertion order (closing ones included
    /// until their fade completes).
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Returns the number of live entries.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no notifications are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the given notification is still live.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.notification.id() == id)
    }

    /// Returns true while the area has work for the tick subscription:
    /// an armed deadline or a running fade.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.entries.iter().any(|entry| match entry.phase {
            Phase::Active { deadline } => deadline.is_some(),
            Phase::Closing { .. } => true,
        })
    }

    /// Moves a notification into the closing phase.
    ///
    /// Disarms its deadline, starts the fade, and invokes the body-press
    /// action when (and only when) the body trigger won. Re-entering the
    /// closing phase is a no-op, so racing triggers cannot double-fire the
    /// action, restart the fade, or detach twice.
    fn begin_close(&mut self, id: NotificationId, trigger: DismissTrigger, now: Instant) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.notification.id() == id)
        else {
            return false;
        };

        match entry.phase {
            Phase::Closing { .. } => false,
            Phase::Active { .. } => {
                entry.phase = Phase::Closing { since: now };

                if trigger == DismissTrigger::Body {
                    if let Some(action) = entry.notification.take_click_action() {
                        action();
                    }
                }

                if let Some(handle) = &self.diagnostics {
                    handle.record(DiagnosticEventKind::NotificationDismissed {
                        trigger: trigger.label(),
                    });
                }

                true
            }
        }
    }
}
