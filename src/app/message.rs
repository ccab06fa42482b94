// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::alert::{self, AlertSpec};
use crate::ui::design_tokens::palette;
use iced::Color;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Present a sample alert of the given kind.
    Show(AlertKind),
    /// Tap or tick forwarded to the presenter.
    Alert(alert::Message),
    /// Save the lifecycle event log as a JSON report.
    ExportDiagnostics,
}

/// Sample alerts offered by the host screen, one per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Complete,
    Error,
    SystemIcon,
    Image,
    Text,
}

impl AlertKind {
    pub const ALL: [AlertKind; 5] = [
        AlertKind::Complete,
        AlertKind::Error,
        AlertKind::SystemIcon,
        AlertKind::Image,
        AlertKind::Text,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Complete => "Complete",
            AlertKind::Error => "Error",
            AlertKind::SystemIcon => "Symbol",
            AlertKind::Image => "Image",
            AlertKind::Text => "Text",
        }
    }

    /// Accent color of the kind's button and icon.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            AlertKind::Complete => palette::SUCCESS_500,
            AlertKind::Error => palette::ERROR_500,
            AlertKind::SystemIcon => palette::INFO_500,
            AlertKind::Image => palette::WARNING_500,
            AlertKind::Text => palette::GRAY_700,
        }
    }

    /// The alert shown for this kind.
    #[must_use]
    pub fn spec(self) -> AlertSpec {
        match self {
            AlertKind::Complete => AlertSpec::complete(self.color(), "Added to Library"),
            AlertKind::Error => AlertSpec::error(self.color(), "Upload Failed")
                .with_subtitle("Check your connection"),
            AlertKind::SystemIcon => {
                AlertSpec::system_icon("wifi.slash", self.color(), "No Connection")
            }
            AlertKind::Image => AlertSpec::image(
                concat!(env!("CARGO_MANIFEST_DIR"), "/assets/logo.png"),
                "Profile Updated",
            ),
            AlertKind::Text => {
                AlertSpec::text("Copied to Clipboard").with_subtitle("3 items")
            }
        }
    }
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional display duration override, in seconds.
    /// Takes precedence over `[alert] display_secs` in settings.toml.
    pub display_secs: Option<f32>,
}
