// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` builder, its unique id, and the
//! `Timeout` newtype carrying the auto-dismiss policy.

use super::icon::NotificationIcon;
use crate::config::{DEFAULT_BRIEF_TIMEOUT_SECS, INDEFINITE_TIMEOUT_SECS};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Auto-dismiss timeout in seconds.
///
/// Non-positive values (including [`Timeout::INDEFINITE`]) mean "no
/// auto-dismiss deadline".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeout(f32);

impl Timeout {
    /// Sentinel requesting that the notification stay until manually dismissed.
    pub const INDEFINITE: Timeout = Timeout(INDEFINITE_TIMEOUT_SECS);

    /// Default timeout for non-critical notifications.
    pub const BRIEF: Timeout = Timeout(DEFAULT_BRIEF_TIMEOUT_SECS);

    /// Creates a timeout of `secs` seconds.
    #[must_use]
    pub fn secs(secs: f32) -> Self {
        Self(secs)
    }

    /// Returns the raw value in seconds.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Resolves the effective timeout for a notification.
    ///
    /// An unset timeout defaults to indefinite for critical errors and to
    /// `brief_default` otherwise.
    #[must_use]
    pub fn resolve(
        requested: Option<Timeout>,
        icon: NotificationIcon,
        brief_default: Timeout,
    ) -> Self {
        match requested {
            Some(timeout) => timeout,
            None if icon.is_critical() => Timeout::INDEFINITE,
            None => brief_default,
        }
    }

    /// Returns the auto-dismiss duration, or `None` when no deadline
    /// should be armed.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        if self.0 > 0.0 {
            Some(Duration::from_secs_f32(self.0))
        } else {
            None
        }
    }
}

/// A notification to be displayed in the shared area.
///
/// Built with the constructor methods and submitted via
/// [`NotificationArea::display`](super::NotificationArea::display).
pub struct Notification {
    id: NotificationId,
    message: String,
    icon: NotificationIcon,
    timeout: Option<Timeout>,
    on_click: Option<Box<dyn FnOnce()>>,
}

impl Notification {
    /// Creates a new notification with the given message text.
    ///
    /// The message is rendered as plain text, never interpreted as markup.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            icon: NotificationIcon::None,
            timeout: None,
            on_click: None,
        }
    }

    /// Creates a construction notification.
    pub fn construction(message: impl Into<String>) -> Self {
        Self::new(message).icon(NotificationIcon::Construction)
    }

    /// Creates a critical error notification (shown until dismissed).
    pub fn critical_error(message: impl Into<String>) -> Self {
        Self::new(message).icon(NotificationIcon::CriticalError)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).icon(NotificationIcon::Error)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).icon(NotificationIcon::Warning)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).icon(NotificationIcon::Success)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).icon(NotificationIcon::Info)
    }

    /// Sets the icon category.
    #[must_use]
    pub fn icon(mut self, icon: NotificationIcon) -> Self {
        self.icon = icon;
        self
    }

    /// Sets the requested auto-dismiss timeout.
    ///
    /// Unset, the timeout resolves per the category default policy. A
    /// non-positive value disables auto-dismiss.
    #[must_use]
    pub fn timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the requested auto-dismiss timeout in seconds.
    #[must_use]
    pub fn timeout_secs(self, secs: f32) -> Self {
        self.timeout(Timeout::secs(secs))
    }

    /// Sets the action invoked when the user dismisses the notification by
    /// pressing its body (not the close button, not the timer).
    ///
    /// The action runs at most once.
    #[must_use]
    pub fn on_click(mut self, action: impl FnOnce() + 'static) -> Self {
        self.on_click = Some(Box::new(action));
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the icon category.
    #[must_use]
    pub fn icon_kind(&self) -> NotificationIcon {
        self.icon
    }

    /// Returns the requested (unresolved) timeout.
    #[must_use]
    pub fn requested_timeout(&self) -> Option<Timeout> {
        self.timeout
    }

    /// Returns true if a body-press action is attached (and not yet consumed).
    #[must_use]
    pub fn has_click_action(&self) -> bool {
        self.on_click.is_some()
    }

    /// Takes the body-press action out of the notification, if any.
    pub(crate) fn take_click_action(&mut self) -> Option<Box<dyn FnOnce()>> {
        self.on_click.take()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("icon", &self.icon)
            .field("timeout", &self.timeout)
            .field("has_click_action", &self.on_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn constructors_set_correct_icon() {
        assert_eq!(
            Notification::construction("").icon_kind(),
            NotificationIcon::Construction
        );
        assert_eq!(
            Notification::critical_error("").icon_kind(),
            NotificationIcon::CriticalError
        );
        assert_eq!(Notification::error("").icon_kind(), NotificationIcon::Error);
        assert_eq!(Notification::warning("").icon_kind(), NotificationIcon::Warning);
        assert_eq!(Notification::success("").icon_kind(), NotificationIcon::Success);
        assert_eq!(Notification::info("").icon_kind(), NotificationIcon::Info);
        assert_eq!(Notification::new("").icon_kind(), NotificationIcon::None);
    }

    #[test]
    fn unset_timeout_defaults_to_indefinite_for_critical_errors() {
        let resolved = Timeout::resolve(None, NotificationIcon::CriticalError, Timeout::BRIEF);
        assert_eq!(resolved, Timeout::INDEFINITE);
        assert!(resolved.duration().is_none());
    }

    #[test]
    fn unset_timeout_defaults_to_brief_for_non_critical() {
        for icon in [
            NotificationIcon::Construction,
            NotificationIcon::Error,
            NotificationIcon::Warning,
            NotificationIcon::Success,
            NotificationIcon::Info,
            NotificationIcon::None,
        ] {
            let resolved = Timeout::resolve(None, icon, Timeout::BRIEF);
            assert_eq!(resolved, Timeout::BRIEF);
            assert_eq!(resolved.duration(), Some(Duration::from_secs_f32(1.5)));
        }
    }

    #[test]
    fn explicit_timeout_wins_over_category_default() {
        let resolved = Timeout::resolve(
            Some(Timeout::secs(4.0)),
            NotificationIcon::CriticalError,
            Timeout::BRIEF,
        );
        assert_eq!(resolved.duration(), Some(Duration::from_secs_f32(4.0)));
    }

    #[test]
    fn non_positive_timeouts_arm_no_deadline() {
        assert!(Timeout::secs(0.0).duration().is_none());
        assert!(Timeout::secs(-3.0).duration().is_none());
        assert!(Timeout::INDEFINITE.duration().is_none());
    }

    #[test]
    fn click_action_is_taken_at_most_once() {
        let mut notification = Notification::info("test").on_click(|| {});
        assert!(notification.has_click_action());
        assert!(notification.take_click_action().is_some());
        assert!(!notification.has_click_action());
        assert!(notification.take_click_action().is_none());
    }

    #[test]
    fn debug_does_not_require_debug_on_the_action() {
        let notification = Notification::info("test").on_click(|| {});
        let rendered = format!("{:?}", notification);
        assert!(rendered.contains("has_click_action: true"));
    }
}
