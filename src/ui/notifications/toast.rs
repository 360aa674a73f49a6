// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with an icon region, a message body, and a close button.
//! While an entry is closing, every color is modulated by its fade opacity
//! and its press handlers are withheld, so a fading toast no longer reacts
//! to the pointer.

use super::area::{Entry, Message, NotificationArea};
use super::notification::NotificationId;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, mouse, Color, Element, Length, Theme};
use std::time::Instant;

/// Multiplies a color's alpha by the fade opacity.
fn faded(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(entry: &'a Entry, scheme: &ColorScheme, now: Instant) -> Element<'a, Message> {
        let notification = entry.notification();
        let id = notification.id();
        let icon_style = notification.icon_kind().style();
        let fade = entry.opacity(now);
        let interactive = !entry.is_closing();

        // Icon span styled per descriptor (empty glyph degrades to an empty region)
        let icon_widget = {
            let color = faded(icon_style.color, fade);
            Text::new(icon_style.glyph)
                .size(sizing::ICON_MD)
                .style(move |_theme: &Theme| text::Style { color: Some(color) })
        };

        // Message body
        let message_widget = {
            let color = faded(scheme.text_primary, fade);
            Text::new(notification.message())
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style { color: Some(color) })
        };

        let close_button = Self::close_button(id, scheme, fade, interactive);

        // Layout: [icon] [message] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(close_button);

        let accent = icon_style.color;
        let surface = scheme.surface_primary;
        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(surface, accent, fade));

        // The body press is delivered here; the close button sits inside and
        // captures its own click first, so the two triggers stay distinct.
        let mut body = mouse_area(card);
        if interactive {
            body = body.on_press(Message::BodyPressed(id));
            if notification.has_click_action() {
                body = body.interaction(mouse::Interaction::Pointer);
            }
        }
        body.into()
    }

    /// Renders the toast overlay with all live notifications.
    ///
    /// Stacks toasts in insertion order, anchored to the bottom-right
    /// corner of the window.
    pub fn view_overlay<'a>(
        area: &'a NotificationArea,
        scheme: &ColorScheme,
        now: Instant,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = area
            .visible()
            .map(|entry| Self::view(entry, scheme, now))
            .collect();

        if toasts.is_empty() {
            // An empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }

    fn close_button<'a>(
        id: NotificationId,
        scheme: &ColorScheme,
        fade: f32,
        interactive: bool,
    ) -> Element<'a, Message> {
        let text_color = faded(scheme.text_primary, fade);
        let hover_base = scheme.text_secondary;

        let glyph = Text::new("✕").size(sizing::ICON_SM).style(move |_theme: &Theme| {
            text::Style {
                color: Some(text_color),
            }
        });

        let mut close = button(glyph)
            .padding(spacing::XXS)
            .style(move |_theme: &Theme, status| {
                dismiss_button_style(text_color, hover_base, fade, status)
            });
        if interactive {
            close = close.on_press(Message::ClosePressed(id));
        }
        close.into()
    }
}

/// Style function for the toast container.
fn toast_container_style(surface: Color, accent: Color, fade: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(
            Color {
                a: opacity::SURFACE,
                ..surface
            },
            fade,
        ))),
        border: iced::Border {
            color: faded(accent, fade),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, fade),
            ..shadow::MD
        },
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(
    text_color: Color,
    hover_base: Color,
    fade: f32,
    status: button::Status,
) -> button::Style {
    let hover_background = |a: f32| {
        Some(iced::Background::Color(faded(
            Color { a, ..hover_base },
            fade,
        )))
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(palette::WHITE, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_scales_alpha_only() {
        let color = faded(palette::ERROR_500, 0.5);
        assert_eq!(color.r, palette::ERROR_500.r);
        assert!((color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn fully_faded_container_is_nearly_transparent() {
        let style = toast_container_style(palette::WHITE, palette::ERROR_500, opacity::FADE_FLOOR);
        assert!(style.border.color.a <= opacity::FADE_FLOOR);
    }
}
