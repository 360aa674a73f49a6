// SPDX-License-Identifier: MPL-2.0
//! Icon registry for notification categories.
//!
//! Each category maps to an immutable [`IconStyle`]: a style class shared
//! with the host stylesheet, a text glyph used for rendering, and an accent
//! color from the design-token palette. The set is closed and
//! caller-controlled, so lookups have no error path.
//!
//! Glyphs are plain text characters rather than bitmap assets, which keeps
//! rendering consistent across platforms without an asset pipeline.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Semantic category of a notification, determining its icon and accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationIcon {
    /// Feature under construction.
    Construction,
    /// Error that persists until manually dismissed.
    CriticalError,
    /// Recoverable error.
    Error,
    /// Warning that doesn't block operation.
    Warning,
    /// Operation completed successfully.
    Success,
    /// Informational message.
    Info,
    /// No icon; the safe default.
    #[default]
    None,
}

/// Immutable visual style for a notification category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    /// Style class consumed by external theming (empty for [`NotificationIcon::None`]).
    pub class: &'static str,
    /// Text glyph rendered in the icon region (empty for [`NotificationIcon::None`]).
    pub glyph: &'static str,
    /// Accent color for the glyph and toast border.
    pub color: Color,
}

impl NotificationIcon {
    /// Returns the immutable style descriptor for this category.
    #[must_use]
    pub fn style(self) -> IconStyle {
        match self {
            NotificationIcon::Construction => IconStyle {
                class: "bi-box-seam-fill",
                glyph: "⚒",
                color: palette::PRIMARY_500,
            },
            NotificationIcon::CriticalError => IconStyle {
                class: "bi-exclamation-octagon",
                glyph: "⛔",
                color: palette::ERROR_500,
            },
            NotificationIcon::Error => IconStyle {
                class: "bi-exclamation-triangle",
                glyph: "⚠",
                color: palette::ERROR_500,
            },
            NotificationIcon::Warning => IconStyle {
                class: "bi-exclamation-triangle",
                glyph: "⚠",
                color: palette::WARNING_500,
            },
            NotificationIcon::Success => IconStyle {
                class: "bi-patch-check",
                glyph: "✓",
                color: palette::SUCCESS_500,
            },
            NotificationIcon::Info => IconStyle {
                class: "bi-exclamation-circle",
                glyph: "ℹ",
                color: palette::PRIMARY_500,
            },
            NotificationIcon::None => IconStyle {
                class: "",
                glyph: "",
                color: palette::PRIMARY_500,
            },
        }
    }

    /// Returns true for the category that defaults to staying on screen
    /// until manually dismissed.
    #[must_use]
    pub fn is_critical(self) -> bool {
        self == NotificationIcon::CriticalError
    }

    /// All categories, for iteration in tests and galleries.
    pub const ALL: [NotificationIcon; 7] = [
        NotificationIcon::Construction,
        NotificationIcon::CriticalError,
        NotificationIcon::Error,
        NotificationIcon::Warning,
        NotificationIcon::Success,
        NotificationIcon::Info,
        NotificationIcon::None,
    ];
}
