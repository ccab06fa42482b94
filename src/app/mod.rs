// SPDX-License-Identifier: MPL-2.0
//! Demo application: a host screen with one button per alert kind.
//!
//! The `App` owns the visibility [`Binding`], the [`Presenter`] observing it,
//! the `AlertSpec` currently shown and the diagnostics collector the
//! presenter reports to. Settings come from `settings.toml` with CLI flags
//! taking precedence.

mod message;
pub mod paths;
mod subscription;

pub use message::{AlertKind, Flags, Message};

use crate::config::{self, BlurStyle};
use crate::diagnostics::{
    default_export_directory, generate_default_filename, BufferCapacity, DiagnosticsCollector,
};
use crate::ui::alert::{self, content, overlay, AlertSpec, Binding, Presenter};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root application state.
pub struct App {
    /// Whether an alert is requested; written by the host and the presenter.
    visible: Binding,
    presenter: Presenter,
    /// Alert shown while the presenter is mounted.
    alert: AlertSpec,
    blur_style: BlurStyle,
    diagnostics: DiagnosticsCollector,
    /// One-line status shown under the buttons (config warnings, export result).
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible", &self.visible.get())
            .field("phase", &self.presenter.phase())
            .field("alert", &self.alert)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(
            Duration::from_secs_f32(config::DEFAULT_DISPLAY_SECS),
            BlurStyle::default(),
            BufferCapacity::default(),
        )
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn with_settings(display: Duration, blur_style: BlurStyle, capacity: BufferCapacity) -> Self {
        let diagnostics = DiagnosticsCollector::new(capacity);
        let mut presenter = Presenter::new().with_display_duration(display);
        presenter.set_diagnostics(diagnostics.handle());

        Self {
            visible: Binding::default(),
            presenter,
            alert: AlertSpec::text(""),
            blur_style,
            diagnostics,
            status: None,
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();

        let display = flags
            .display_secs
            .map(|secs| Duration::from_secs_f32(config::clamp_display_secs(secs)))
            .unwrap_or_else(|| config.alert.display_duration());
        let capacity = config
            .diagnostics
            .buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default();

        let mut app = Self::with_settings(
            display,
            config.alert.blur_style.unwrap_or_default(),
            capacity,
        );
        app.status = config_warning;
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toast")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.presenter.needs_tick())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(kind) => self.show(kind.spec(), Instant::now()),
            Message::Alert(message) => {
                self.presenter.update(message, &mut self.visible);
                self.diagnostics.process_pending();
            }
            Message::ExportDiagnostics => self.export_diagnostics(),
        }
        Task::none()
    }

    /// Replaces the alert content and raises the visibility flag.
    ///
    /// While an alert is already up the new content is shown in place; the
    /// presenter does not restart its entry or its timer.
    fn show(&mut self, spec: AlertSpec, now: Instant) {
        self.alert = spec;
        self.visible.set(true);
        self.presenter.sync(&self.visible, now);
        self.diagnostics.process_pending();
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let path = default_export_directory().join(generate_default_filename());
        self.status = Some(match self.diagnostics.export_to_file(&path) {
            Ok(path) => format!("Diagnostics saved to {}", path.display()),
            Err(e) => format!("Diagnostics export failed: {e}"),
        });
    }

    fn view(&self) -> Element<'_, Message> {
        let buttons = AlertKind::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, kind| {
                row.push(
                    button(text(kind.label()).center())
                        .height(sizing::BUTTON_HEIGHT)
                        .on_press(Message::Show(*kind))
                        .style(styles::button::accent(kind.color())),
                )
            });

        let export = button(text("Export diagnostics").center())
            .height(sizing::BUTTON_HEIGHT)
            .on_press(Message::ExportDiagnostics)
            .style(styles::button::accent(palette::GRAY_700));

        let mut column = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("Iced Toast").size(typography::TITLE_MD))
            .push(buttons)
            .push(
                Text::new(format!("{} lifecycle events recorded", self.diagnostics.len()))
                    .size(typography::CAPTION),
            )
            .push(export);

        if let Some(status) = &self.status {
            column = column.push(Text::new(status.as_str()).size(typography::CAPTION));
        }

        let host = Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        overlay::attach(
            host,
            &self.presenter,
            |appearance| content::view(&self.alert, appearance, self.blur_style),
            Message::Alert(alert::Message::Tapped),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{AlertEvent, DismissReason};
    use crate::test_utils::at;

    #[test]
    fn show_mounts_alert_with_requested_content() {
        let mut app = App::default();
        app.show(AlertKind::Error.spec(), Instant::now());

        assert!(app.visible.get());
        assert!(app.presenter.is_showing());
        assert_eq!(app.alert, AlertKind::Error.spec());
    }

    #[test]
    fn showing_again_replaces_content_without_new_presentation() {
        let t0 = Instant::now();
        let mut app = App::default();
        app.show(AlertKind::Complete.spec(), t0);
        app.show(AlertKind::Text.spec(), at(t0, 0.5));

        assert_eq!(app.presenter.epoch(), 1);
        assert_eq!(app.alert, AlertKind::Text.spec());
    }

    #[test]
    fn ticks_dismiss_and_record_events() {
        let t0 = Instant::now();
        let mut app = App::default();
        app.show(AlertKind::Complete.spec(), t0);

        let _ = app.update(Message::Alert(alert::Message::Tick(at(t0, 2.0))));
        assert!(!app.visible.get());
        assert!(app.diagnostics.kinds().any(|event| matches!(
            event,
            AlertEvent::Dismissed {
                reason: DismissReason::Timeout,
                ..
            }
        )));
    }

    #[test]
    fn tapped_message_lowers_binding() {
        let mut app = App::default();
        app.show(AlertKind::SystemIcon.spec(), Instant::now());

        let _ = app.update(Message::Alert(alert::Message::Tapped));
        assert!(!app.visible.get());
        assert!(!app.presenter.is_showing());
    }

    #[test]
    fn subscription_follows_presenter() {
        let mut app = App::default();
        assert!(!app.presenter.needs_tick());
        app.show(AlertKind::Text.spec(), Instant::now());
        assert!(app.presenter.needs_tick());
    }

    #[test]
    fn view_builds_with_and_without_alert() {
        let mut app = App::default();
        let _ = app.view();
        app.show(AlertKind::Image.spec(), Instant::now());
        let _ = app.view();
    }
}
