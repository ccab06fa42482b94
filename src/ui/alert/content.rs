// SPDX-License-Identifier: MPL-2.0
//! Static rendering of an alert: icon above title and subtitle on a frosted,
//! rounded backing.
//!
//! [`ContentLayout`] is the pure part: it decides which regions exist and how
//! they are spaced and constrained. [`view`] turns it into widgets, applying
//! the current transition [`Appearance`] to sizes and alpha.

use super::motion::Appearance;
use super::reveal::StrokeReveal;
use super::spec::{AlertSpec, AlertVariant};
use crate::config::BlurStyle;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles::backdrop;
use crate::ui::symbols;
use iced::font::Weight;
use iced::widget::{image, svg, text, Column, Container, Image, Svg, Text};
use iced::{alignment, Color, ContentFit, Element, Font, Length, Size, Theme};

/// Title/subtitle gap when an icon sits above the text.
pub const TEXT_SPACING_WITH_ICON: f32 = spacing::XXXS;

/// Title/subtitle gap for text-only alerts.
pub const TEXT_SPACING_TEXT_ONLY: f32 = spacing::XS;

/// Edge length of the icon region.
pub const ICON_SIZE: f32 = sizing::ICON_XL;

/// Icon region of an alert.
#[derive(Debug, Clone, PartialEq)]
pub enum IconRegion<'a> {
    Checkmark(Color),
    XMark(Color),
    Symbol { name: &'a str, color: Color },
    Image(&'a str),
}

/// Regions and metrics of an alert, derived from its spec.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLayout<'a> {
    pub icon: Option<IconRegion<'a>>,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    /// Gap between title and subtitle.
    pub spacing: f32,
    /// Maximum size of the block; `None` lets it hug its text.
    pub frame: Option<Size>,
}

impl<'a> ContentLayout<'a> {
    #[must_use]
    pub fn from_spec(spec: &'a AlertSpec) -> Self {
        let icon = match spec.variant() {
            AlertVariant::Complete(color) => Some(IconRegion::Checkmark(*color)),
            AlertVariant::Error(color) => Some(IconRegion::XMark(*color)),
            AlertVariant::SystemIcon { name, color } => Some(IconRegion::Symbol {
                name,
                color: *color,
            }),
            AlertVariant::Image(name) => Some(IconRegion::Image(name)),
            AlertVariant::None => None,
        };
        let has_icon = spec.variant().has_icon();

        Self {
            icon,
            title: spec.title(),
            subtitle: spec.subtitle(),
            spacing: if has_icon {
                TEXT_SPACING_WITH_ICON
            } else {
                TEXT_SPACING_TEXT_ONLY
            },
            frame: has_icon.then(|| Size::new(sizing::ALERT_MAX_FRAME, sizing::ALERT_MAX_FRAME)),
        }
    }
}

/// Renders `spec` with the given transition appearance.
pub fn view<'a, Message: 'a>(
    spec: &'a AlertSpec,
    appearance: Appearance,
    blur: BlurStyle,
) -> Element<'a, Message> {
    let layout = ContentLayout::from_spec(spec);
    let scale = appearance.scale;
    let alpha = appearance.opacity;

    let title = Text::new(layout.title)
        .size(typography::BODY * scale)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .center()
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, alpha)),
        });

    let mut text_block = Column::new()
        .spacing(layout.spacing * scale)
        .align_x(alignment::Horizontal::Center)
        .push(title);

    if let Some(subtitle) = layout.subtitle {
        text_block = text_block.push(
            Text::new(subtitle)
                .size(typography::CAPTION * scale)
                .center()
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(
                        theme.palette().text,
                        alpha * opacity::SECONDARY_TEXT,
                    )),
                }),
        );
    }

    let mut column = Column::new()
        .spacing(spacing::SM * scale)
        .align_x(alignment::Horizontal::Center);
    if let Some(icon) = &layout.icon {
        column = column.push(icon_view(
            icon,
            ICON_SIZE * scale,
            alpha,
            appearance.presentation,
        ));
    }
    column = column.push(text_block);

    let mut block = Container::new(column)
        .padding(spacing::MD * scale)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(backdrop::frosted(blur, alpha));

    if let Some(frame) = layout.frame {
        block = block
            .max_width(frame.width * scale)
            .max_height(frame.height * scale);
    }

    block.into()
}

fn icon_view<'a, Message: 'a>(
    icon: &IconRegion<'a>,
    size: f32,
    alpha: f32,
    presentation: u64,
) -> Element<'a, Message> {
    match icon {
        IconRegion::Checkmark(color) => StrokeReveal::checkmark(*color, size)
            .with_opacity(alpha)
            .with_presentation(presentation)
            .into_element(),
        IconRegion::XMark(color) => StrokeReveal::x_mark(*color, size)
            .with_opacity(alpha)
            .with_presentation(presentation)
            .into_element(),
        IconRegion::Symbol { name, color } => {
            let color = *color;
            Svg::new(symbols::handle(name))
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .opacity(alpha)
                .style(move |_theme: &Theme, _status: svg::Status| svg::Style {
                    color: Some(color),
                })
                .into()
        }
        IconRegion::Image(name) => Image::new(image::Handle::from_path(*name))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Contain)
            .opacity(alpha)
            .into(),
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    fn all_variants() -> Vec<AlertSpec> {
        vec![
            AlertSpec::complete(palette::SUCCESS_500, "Saved"),
            AlertSpec::error(palette::ERROR_500, "Failed"),
            AlertSpec::system_icon("info.circle", palette::INFO_500, "Heads up"),
            AlertSpec::image("logo.png", "Uploaded"),
            AlertSpec::text("Copied to clipboard"),
        ]
    }

    #[test]
    fn every_variant_has_matching_icon_region_and_one_title() {
        for spec in all_variants() {
            let layout = ContentLayout::from_spec(&spec);
            let matches = match (spec.variant(), &layout.icon) {
                (AlertVariant::Complete(c), Some(IconRegion::Checkmark(i))) => c == i,
                (AlertVariant::Error(c), Some(IconRegion::XMark(i))) => c == i,
                (
                    AlertVariant::SystemIcon { name, color },
                    Some(IconRegion::Symbol { name: n, color: c }),
                ) => name.as_str() == *n && color == c,
                (AlertVariant::Image(name), Some(IconRegion::Image(n))) => name.as_str() == *n,
                (AlertVariant::None, None) => true,
                _ => false,
            };
            assert!(matches, "icon region mismatch for {spec:?}");
            assert_eq!(layout.title, spec.title());
        }
    }

    #[test]
    fn text_only_alert_uses_wide_spacing_and_no_frame() {
        let spec = AlertSpec::text("Copied to clipboard");
        let layout = ContentLayout::from_spec(&spec);

        assert!(layout.icon.is_none());
        assert_eq!(layout.spacing, TEXT_SPACING_TEXT_ONLY);
        assert!(layout.frame.is_none());
    }

    #[test]
    fn icon_alert_is_tight_and_framed() {
        let spec = AlertSpec::error(palette::ERROR_500, "Failed")
            .with_subtitle("Check your connection");
        let layout = ContentLayout::from_spec(&spec);

        assert_eq!(layout.spacing, TEXT_SPACING_WITH_ICON);
        assert!(TEXT_SPACING_WITH_ICON < TEXT_SPACING_TEXT_ONLY);
        assert_eq!(
            layout.frame,
            Some(Size::new(sizing::ALERT_MAX_FRAME, sizing::ALERT_MAX_FRAME))
        );
        assert_eq!(layout.subtitle, Some("Check your connection"));
    }

    #[test]
    fn empty_title_still_yields_title_node() {
        let spec = AlertSpec::text("").with_subtitle("");
        let layout = ContentLayout::from_spec(&spec);
        assert_eq!(layout.title, "");
        assert_eq!(layout.subtitle, None);
    }

    #[test]
    fn view_builds_for_every_variant_and_appearance() {
        for spec in all_variants() {
            for appearance in [Appearance::at(0.0), Appearance::at(0.5), Appearance::VISIBLE] {
                let _element: Element<'_, ()> = view(&spec, appearance, BlurStyle::Regular);
            }
        }
    }

    #[test]
    fn faded_scales_alpha() {
        let color = faded(palette::WHITE, 0.5);
        assert_eq!(color.a, 0.5);
        assert_eq!(faded(palette::WHITE, 2.0).a, 1.0);
    }
}
