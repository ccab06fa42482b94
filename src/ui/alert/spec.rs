// SPDX-License-Identifier: MPL-2.0
//! Alert content description.
//!
//! An [`AlertSpec`] is built once per presentation and never mutated; to show
//! something else, the host hands the overlay a new spec.

use iced::Color;

/// Icon shown above the alert text.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertVariant {
    /// Animated checkmark drawn in the given color.
    Complete(Color),
    /// Animated X-mark drawn in the given color.
    Error(Color),
    /// Named vector symbol tinted with the given color.
    SystemIcon { name: String, color: Color },
    /// Named image asset, shown with its own colors.
    Image(String),
    /// Text-only alert.
    None,
}

impl AlertVariant {
    /// Whether this variant reserves an icon region.
    #[must_use]
    pub fn has_icon(&self) -> bool {
        !matches!(self, AlertVariant::None)
    }
}

/// Everything needed to render one alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertSpec {
    variant: AlertVariant,
    title: String,
    subtitle: Option<String>,
}

impl AlertSpec {
    pub fn new(variant: AlertVariant, title: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            subtitle: None,
        }
    }

    /// Success alert with an animated checkmark.
    pub fn complete(color: Color, title: impl Into<String>) -> Self {
        Self::new(AlertVariant::Complete(color), title)
    }

    /// Failure alert with an animated X-mark.
    pub fn error(color: Color, title: impl Into<String>) -> Self {
        Self::new(AlertVariant::Error(color), title)
    }

    pub fn system_icon(name: impl Into<String>, color: Color, title: impl Into<String>) -> Self {
        Self::new(
            AlertVariant::SystemIcon {
                name: name.into(),
                color,
            },
            title,
        )
    }

    pub fn image(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(AlertVariant::Image(name.into()), title)
    }

    /// Text-only alert.
    pub fn text(title: impl Into<String>) -> Self {
        Self::new(AlertVariant::None, title)
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn variant(&self) -> &AlertVariant {
        &self.variant
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Subtitle, if one was given and it is not empty.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.is_empty())
    }
}
