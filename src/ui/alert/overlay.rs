// SPDX-License-Identifier: MPL-2.0
//! Stacks a presented alert over a host view.

use super::motion::Appearance;
use super::presenter::Presenter;
use iced::widget::{mouse_area, Container, Space, Stack};
use iced::{alignment, Element, Length};

/// Returns `host` with the alert centered on top of it while `presenter` is
/// mounted.
///
/// The result is always a two-layer stack with the host at the bottom, so the
/// host keeps its widget state (scroll offsets, focus, caches) across show and
/// hide. `content` builds the alert for the current transition appearance and
/// is only called while mounted; otherwise the top layer is an empty space
/// that takes no input. Only the alert itself reacts to presses, emitting
/// `on_tap`.
pub fn attach<'a, Message, F>(
    host: impl Into<Element<'a, Message>>,
    presenter: &Presenter,
    content: F,
    on_tap: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: FnOnce(Appearance) -> Element<'a, Message>,
{
    let layer: Element<'a, Message> = match presenter.appearance() {
        Some(appearance) => {
            let alert = mouse_area(content(appearance)).on_press(on_tap);
            Container::new(alert)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into()
        }
        None => Space::new().into(),
    };

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(host)
        .push(layer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::alert::Binding;
    use iced::advanced::widget::tree;
    use iced::widget::{scrollable, text};
    use std::cell::Cell;
    use std::time::Instant;

    fn mounted_presenter() -> Presenter {
        let mut binding = Binding::default();
        let mut presenter = Presenter::new();
        binding.set(true);
        presenter.sync(&binding, Instant::now());
        presenter
    }

    /// Root tag and the tag of each layer.
    fn shape(element: &Element<'_, ()>) -> (tree::Tag, Vec<tree::Tag>) {
        let widget = element.as_widget();
        let layers = widget.children().iter().map(|child| child.tag).collect();
        (widget.tag(), layers)
    }

    #[test]
    fn hidden_presenter_never_builds_content() {
        let presenter = Presenter::new();
        let built = Cell::new(false);

        let _element: Element<'_, ()> = attach(
            text("host"),
            &presenter,
            |_| {
                built.set(true);
                text("alert").into()
            },
            (),
        );
        assert!(!built.get());
    }

    #[test]
    fn mounted_presenter_builds_content_with_appearance() {
        let presenter = mounted_presenter();
        let seen = Cell::new(None);

        let _element: Element<'_, ()> = attach(
            text("host"),
            &presenter,
            |appearance| {
                seen.set(Some(appearance));
                text("alert").into()
            },
            (),
        );
        let appearance = seen.get().expect("content built");
        assert!(appearance.opacity < 0.5);
    }

    #[test]
    fn host_layer_is_kept_across_show_and_hide() {
        let hidden_presenter = Presenter::new();
        let shown_presenter = mounted_presenter();
        let host = || scrollable(text("host"));

        let hidden: Element<'_, ()> =
            attach(host(), &hidden_presenter, |_| text("alert").into(), ());
        let shown: Element<'_, ()> =
            attach(host(), &shown_presenter, |_| text("alert").into(), ());

        let (hidden_root, hidden_layers) = shape(&hidden);
        let (shown_root, shown_layers) = shape(&shown);
        assert_eq!(hidden_root, shown_root);
        assert_eq!(hidden_layers.len(), 2);
        assert_eq!(shown_layers.len(), 2);
        // The host sits at the same position with the same widget type, so
        // iced diffs it in place instead of rebuilding it.
        assert_eq!(hidden_layers[0], shown_layers[0]);
    }
}
