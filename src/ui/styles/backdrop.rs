// SPDX-License-Identifier: MPL-2.0
//! Translucent backing behind alert content.
//!
//! The renderer has no backdrop blur, so the material is approximated with a
//! theme-tinted translucent surface, a soft shadow and rounded corners.
//! Thicker materials let less of the host screen through.

use crate::config::BlurStyle;
use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Surface alpha for a material before any fade is applied.
#[must_use]
pub fn material_alpha(style: BlurStyle) -> f32 {
    match style {
        BlurStyle::Thin => opacity::BACKDROP_THIN,
        BlurStyle::Regular => opacity::BACKDROP_REGULAR,
        BlurStyle::Thick => opacity::BACKDROP_THICK,
    }
}

/// Container style for the frosted backing, faded by `alpha`.
pub fn frosted(style: BlurStyle, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| frosted_style(theme, style, alpha)
}

fn frosted_style(theme: &Theme, style: BlurStyle, alpha: f32) -> container::Style {
    let palette = theme.extended_palette();
    let alpha = alpha.clamp(0.0, 1.0);
    let surface = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: material_alpha(style) * alpha,
            ..surface
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..palette.background.strong.color
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: Shadow {
            color: Color {
                a: shadow::MD.color.a * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(Color {
            a: alpha,
            ..theme.palette().text
        }),
        ..Default::default()
    }
}
