// SPDX-License-Identifier: MPL-2.0
//! Button styles for the demo host screen.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Button filled with an accent color, one per alert kind.
pub fn accent(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match status {
            button::Status::Hovered => Color {
                a: opacity::OPAQUE,
                ..color
            },
            button::Status::Pressed => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..color
            },
            button::Status::Active => Color { a: 0.85, ..color },
            button::Status::Disabled => palette::GRAY_200,
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: WHITE,
            border: Border {
                color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::MD
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_button_uses_accent_border() {
        let style = accent(palette::SUCCESS_500)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn hovered_accent_button_is_opaque() {
        let style = accent(palette::ERROR_500)(&Theme::Light, button::Status::Hovered);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }
}
