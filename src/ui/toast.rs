// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent, an optional title, a
//! dismiss button and, for timed notifications, a countdown bar. Hovering a
//! toast pauses its countdown; leaving resumes it.

use crate::clock::Clock;
use crate::notifications::{Kind, Manager, Message, ToastView};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, container, mouse_area, progress_bar, text, Column, Container, Row, Text,
};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(toast: &ToastView) -> Element<'static, Message> {
        let accent_color = accent_color(toast.kind);
        let id = toast.id;

        let glyph = Text::new(glyph(toast.kind))
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = &toast.title {
            body = body.push(Text::new(title.clone()).size(typography::TITLE_SM));
        }
        body = body.push(
            Text::new(toast.message.clone())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );

        let dismiss_button = button(Text::new("✕").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [glyph] [title / message] [dismiss]
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let mut content = Column::new().spacing(spacing::XS).push(row);
        if let Some(progress) = toast.progress {
            content = content.push(
                progress_bar(0.0..=1.0, progress)
                    .girth(sizing::PROGRESS_GIRTH)
                    .style(move |theme: &Theme| progress_style(theme, accent_color)),
            );
        }

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color));

        mouse_area(card)
            .on_enter(Message::Pause(id))
            .on_exit(Message::Resume(id))
            .into()
    }

    /// Renders the toast overlay with all active notifications.
    ///
    /// Positions toasts in the bottom-right corner, oldest on top.
    pub fn view_overlay<C: Clock>(manager: &Manager<C>) -> Element<'static, Message> {
        let toasts: Vec<Element<'static, Message>> =
            manager.views().iter().map(Self::view).collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
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
}

/// Accent color for the toast border, glyph and countdown bar.
#[must_use]
pub fn accent_color(kind: Kind) -> Color {
    match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Error => palette::ERROR_500,
        Kind::Warning => palette::WARNING_500,
        Kind::Info => palette::INFO_500,
        Kind::Love => palette::LOVE_500,
        Kind::Celebration => palette::CELEBRATION_500,
        Kind::Magic => palette::MAGIC_500,
    }
}

/// Leading glyph identifying the kind.
#[must_use]
pub fn glyph(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "✓",
        Kind::Error => "✕",
        Kind::Warning => "⚠",
        Kind::Info => "ℹ",
        Kind::Love => "♥",
        Kind::Celebration => "★",
        Kind::Magic => "✦",
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn progress_style(theme: &Theme, accent_color: Color) -> progress_bar::Style {
    let track = theme.extended_palette().background.weak.color;

    progress_bar::Style {
        background: iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..track
        }),
        bar: iced::Background::Color(accent_color),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => {
            let alpha = if status == button::Status::Hovered {
                opacity::OVERLAY_SUBTLE
            } else {
                opacity::OVERLAY_MEDIUM
            };
            button::Style {
                background: Some(iced::Background::Color(Color {
                    a: alpha,
                    ..palette::GRAY_400
                })),
                text_color: base.text,
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = accent_color(Kind::Love);
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn progress_bar_fills_with_accent() {
        let style = progress_style(&Theme::Light, palette::MAGIC_500);
        assert_eq!(style.bar, iced::Background::Color(palette::MAGIC_500));
    }

    #[test]
    fn every_kind_has_a_distinct_glyph() {
        let glyphs: HashSet<_> = Kind::ALL.iter().map(|kind| glyph(*kind)).collect();
        assert_eq!(glyphs.len(), Kind::ALL.len());
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let theme = Theme::Dark;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn overlay_builds_for_empty_and_busy_managers() {
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager);

        manager.love("thanks").expect("push");
        manager
            .push(crate::notifications::Notification::warning("offline").persistent())
            .expect("push");
        let _ = Toast::view_overlay(&manager);
    }
}
