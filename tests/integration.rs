// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, AlertConfig, BlurStyle, Config, DiagnosticsConfig};
use iced_toast::diagnostics::{
    AlertEvent, BufferCapacity, DiagnosticsCollector, DismissReason, IgnoreReason,
};
use iced_toast::ui::alert::{
    AlertSpec, Binding, ContentLayout, IconRegion, Message, Phase, Presenter,
};
use iced_toast::ui::design_tokens::palette;
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// Comfortably past the end of any exit transition.
const EXIT_DONE: f32 = 1.5;

fn at(base: Instant, secs: f32) -> Instant {
    base + Duration::from_secs_f32(secs)
}

fn logged_presenter() -> (Presenter, DiagnosticsCollector) {
    let collector = DiagnosticsCollector::new(BufferCapacity::default());
    let mut presenter = Presenter::new();
    presenter.set_diagnostics(collector.handle());
    (presenter, collector)
}

fn drain(collector: &mut DiagnosticsCollector) -> Vec<AlertEvent> {
    collector.process_pending();
    collector.kinds().cloned().collect()
}

#[test]
fn complete_alert_dismisses_itself_after_two_seconds() {
    let t0 = Instant::now();
    let spec = AlertSpec::complete(palette::SUCCESS_500, "Added to Library");
    let layout = ContentLayout::from_spec(&spec);
    assert_eq!(layout.icon, Some(IconRegion::Checkmark(palette::SUCCESS_500)));
    assert_eq!(layout.title, "Added to Library");

    let mut visible = Binding::default();
    let (mut presenter, mut log) = logged_presenter();
    visible.set(true);
    presenter.sync(&visible, t0);
    assert!(presenter.is_mounted());

    presenter.update(Message::Tick(at(t0, 1.0)), &mut visible);
    assert!(visible.get());

    presenter.update(Message::Tick(at(t0, 2.0)), &mut visible);
    assert!(!visible.get());

    presenter.update(Message::Tick(at(t0, 2.0 + EXIT_DONE)), &mut visible);
    assert!(!presenter.is_mounted());
    assert!(!presenter.needs_tick());

    assert_eq!(
        drain(&mut log),
        vec![
            AlertEvent::Presented { epoch: 1 },
            AlertEvent::Dismissed {
                epoch: 1,
                reason: DismissReason::Timeout
            },
            AlertEvent::ExitCompleted { epoch: 1 },
        ]
    );
}

#[test]
fn tapped_error_alert_ignores_its_late_timer() {
    let t0 = Instant::now();
    let spec = AlertSpec::error(palette::ERROR_500, "Upload Failed")
        .with_subtitle("Check your connection");
    let layout = ContentLayout::from_spec(&spec);
    assert_eq!(layout.icon, Some(IconRegion::XMark(palette::ERROR_500)));
    assert_eq!(layout.subtitle, Some("Check your connection"));

    let mut visible = Binding::default();
    let (mut presenter, mut log) = logged_presenter();
    visible.set(true);
    presenter.sync(&visible, t0);

    presenter.tap(&mut visible, at(t0, 0.5));
    assert!(!visible.get());
    assert!(matches!(presenter.phase(), Phase::Exiting { .. }));

    presenter.tick(&mut visible, at(t0, 2.0));
    assert!(!visible.get());

    let events = drain(&mut log);
    let dismissals = events
        .iter()
        .filter(|event| matches!(event, AlertEvent::Dismissed { .. }))
        .count();
    assert_eq!(dismissals, 1);
    assert!(events.contains(&AlertEvent::TimerIgnored {
        epoch: 1,
        reason: IgnoreReason::AlreadyHidden
    }));
}

#[test]
fn reshowing_while_up_does_not_restart_presentation() {
    let t0 = Instant::now();
    let mut visible = Binding::default();
    let mut presenter = Presenter::new();

    visible.set(true);
    presenter.sync(&visible, t0);
    let first = presenter.phase();

    // The host swaps its content and raises the already-raised flag.
    assert_eq!(visible.set(true), None);
    presenter.sync(&visible, at(t0, 1.0));

    assert_eq!(presenter.phase(), first);
    assert_eq!(presenter.epoch(), 1);

    // The first timer still governs dismissal.
    presenter.tick(&mut visible, at(t0, 2.0));
    assert!(!visible.get());
}

#[test]
fn text_only_alert_has_no_icon_and_no_frame() {
    let spec = AlertSpec::text("Copied to Clipboard");
    let layout = ContentLayout::from_spec(&spec);

    assert!(layout.icon.is_none());
    assert!(layout.frame.is_none());
    assert_eq!(layout.subtitle, None);
}

#[test]
fn symbol_and_image_alerts_carry_their_names() {
    let symbol = AlertSpec::system_icon("wifi.slash", palette::INFO_500, "No Connection");
    assert_eq!(
        ContentLayout::from_spec(&symbol).icon,
        Some(IconRegion::Symbol {
            name: "wifi.slash",
            color: palette::INFO_500
        })
    );

    let image = AlertSpec::image("logo.png", "Profile Updated");
    assert_eq!(
        ContentLayout::from_spec(&image).icon,
        Some(IconRegion::Image("logo.png"))
    );
}

#[test]
fn configured_display_duration_drives_presenter() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        alert: AlertConfig {
            display_secs: Some(4.0),
            blur_style: Some(BlurStyle::Thick),
        },
        diagnostics: DiagnosticsConfig {
            buffer_capacity: Some(64),
        },
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, config);

    let t0 = Instant::now();
    let mut visible = Binding::default();
    let mut presenter = Presenter::new().with_display_duration(loaded.alert.display_duration());
    visible.set(true);
    presenter.sync(&visible, t0);

    presenter.tick(&mut visible, at(t0, 3.0));
    assert!(visible.get());
    presenter.tick(&mut visible, at(t0, 4.0));
    assert!(!visible.get());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn diagnostics_report_lists_presentation_lifecycle() {
    let t0 = Instant::now();
    let mut visible = Binding::default();
    let (mut presenter, mut log) = logged_presenter();
    visible.set(true);
    presenter.sync(&visible, t0);
    presenter.tap(&mut visible, at(t0, 0.3));
    presenter.tick(&mut visible, at(t0, 0.3 + EXIT_DONE));
    log.process_pending();

    let json = log.export_json().expect("export");
    let report: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(report["event_count"], 3);
    assert_eq!(report["events"][1]["event"], "dismissed");
    assert_eq!(report["events"][1]["reason"], "tap");
}

#[test]
fn host_flag_raised_from_the_start_shows_and_dismisses() {
    let t0 = Instant::now();
    let mut visible = Binding::new(true);
    let mut presenter = Presenter::new();

    presenter.update(Message::Tick(t0), &mut visible);
    assert!(presenter.is_showing());

    presenter.update(Message::Tick(at(t0, 2.0)), &mut visible);
    assert!(!visible.get());
    presenter.update(Message::Tick(at(t0, 2.0 + EXIT_DONE)), &mut visible);
    assert_eq!(presenter.phase(), Phase::Hidden);
}
