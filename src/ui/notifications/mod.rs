// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`icon`] - Registry mapping notification categories to visual styles
//! - [`notification`] - Core `Notification` builder and timeout policy
//! - [`area`] - Shared `NotificationArea` holding every live notification
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{Notification, NotificationArea, Toast};
//!
//! // Create the shared area once, at application boot
//! let mut area = NotificationArea::new();
//!
//! // Display a notification; keep the handle for manual dismissal
//! let handle = area.display(Notification::success("Image saved"));
//!
//! // In your view function, render the overlay
//! let overlay = Toast::view_overlay(&area, &scheme, Instant::now());
//!
//! // Force-dismiss from anywhere that has mutable access to the area
//! handle.dismiss(&mut area);
//! ```
//!
//! # Lifecycle
//!
//! Dismissal can be triggered by the auto-dismiss timer, the close button,
//! a press on the notification body (which additionally invokes the
//! notification's click action, if any), or the returned handle. The first
//! trigger wins: it disarms the timer and starts the fade; the entry is
//! detached once the fade completes, exactly once.

pub mod area;
pub mod icon;
pub mod notification;
pub mod toast;

pub use area::{DismissTrigger, Entry, Handle, Message, NotificationArea, FADE_OUT};
pub use icon::{IconStyle, NotificationIcon};
pub use notification::{Notification, NotificationId, Timeout};
pub use toast::Toast;

/// Style identifier of the shared area, part of the external theming surface.
pub const AREA_CLASS: &str = "sk-notification-area";

/// Style identifier of one toast card.
pub const TOAST_CLASS: &str = "sk-contents sk-notification";

/// Style identifier of the message body region.
pub const BODY_CLASS: &str = "sk-notification-body";
