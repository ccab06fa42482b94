// SPDX-License-Identifier: MPL-2.0
//! Animated checkmark and X-mark icons.
//!
//! The icon is a canvas program whose widget-tree state is a
//! [`RevealProgress`]. Iced creates that state when the canvas mounts and
//! drops it when the canvas leaves the tree, so each mount reveals its stroke
//! exactly once and nothing outside the canvas can drive or replay it.
//!
//! The state also remembers which presentation it was revealed for. A canvas
//! that iced keeps in place across two presentations (an exit completing and
//! the next entry starting within one update) sees a new presentation id and
//! starts over from 0.

use super::motion::Spring;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, window, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::time::Instant;

/// Progress at or above which the reveal snaps to fully drawn.
const COMPLETE_THRESHOLD: f32 = 0.999;

/// Vector shape revealed by a [`StrokeReveal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Three-point polyline: left-middle, bottom notch, top-right.
    Checkmark,
    /// Two diagonals crossing in the middle of the square.
    XMark,
}

impl Shape {
    /// Polylines making up the shape inside a `size` x `size` square.
    #[must_use]
    pub fn polylines(self, size: f32) -> Vec<Vec<Point>> {
        match self {
            Shape::Checkmark => vec![vec![
                Point::new(0.0, size / 2.0),
                Point::new(size / 2.5, size),
                Point::new(size, 0.0),
            ]],
            Shape::XMark => vec![
                vec![Point::ORIGIN, Point::new(size, size)],
                vec![Point::new(size, 0.0), Point::new(0.0, size)],
            ],
        }
    }
}

/// Returns the leading part of `points` covering `fraction` of its length.
///
/// A fraction of 0 (or a degenerate polyline) yields no points; a fraction of
/// 1 yields the polyline unchanged.
#[must_use]
pub fn trim_polyline(points: &[Point], fraction: f32) -> Vec<Point> {
    if points.len() < 2 || fraction <= 0.0 {
        return Vec::new();
    }
    if fraction >= 1.0 {
        return points.to_vec();
    }

    let total: f32 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut remaining = total * fraction;
    let mut trimmed = vec![points[0]];
    for segment in points.windows(2) {
        let (start, end) = (segment[0], segment[1]);
        let length = start.distance(end);
        if remaining >= length {
            trimmed.push(end);
            remaining -= length;
            continue;
        }
        let t = remaining / length;
        trimmed.push(Point::new(
            start.x + (end.x - start.x) * t,
            start.y + (end.y - start.y) * t,
        ));
        break;
    }
    trimmed
}

/// Outcome of advancing a [`RevealProgress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Still drawing; another frame is needed.
    Running,
    /// Reached fully drawn on this step. Reported once per mount.
    Completed,
    /// Already complete; nothing to do.
    Idle,
}

/// Fraction of the icon stroke that is drawn, owned by one icon instance.
///
/// Starts at 0 and only moves forward: the spring overshoot never un-draws
/// the stroke, and once the curve reaches the end the value stays at 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealProgress {
    presentation: u64,
    started_at: Option<Instant>,
    value: f32,
    completed: bool,
}

impl RevealProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Drawn fraction as seen by `presentation`; 0 if the state was revealed
    /// for another one.
    #[must_use]
    pub fn value_for(&self, presentation: u64) -> f32 {
        if self.presentation == presentation {
            self.value
        } else {
            0.0
        }
    }

    /// Resets the reveal when the icon now belongs to another presentation.
    pub(crate) fn follow(&mut self, presentation: u64) {
        if self.presentation != presentation {
            *self = Self {
                presentation,
                ..Self::default()
            };
        }
    }

    /// Moves the progress to `now` along `curve`. The first call marks the
    /// start of the reveal.
    pub(crate) fn advance(&mut self, now: Instant, curve: &Spring) -> RevealStep {
        if self.completed {
            return RevealStep::Idle;
        }
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);

        let sample = curve.value(elapsed).clamp(0.0, 1.0);
        self.value = self.value.max(sample);

        if self.value >= COMPLETE_THRESHOLD || elapsed >= curve.settle_time() {
            self.value = 1.0;
            self.completed = true;
            RevealStep::Completed
        } else {
            RevealStep::Running
        }
    }
}

/// Stroke-revealed vector icon.
#[derive(Debug, Clone, Copy)]
pub struct StrokeReveal {
    shape: Shape,
    size: f32,
    color: Color,
    opacity: f32,
    presentation: u64,
}

impl StrokeReveal {
    #[must_use]
    pub fn new(shape: Shape, color: Color, size: f32) -> Self {
        Self {
            shape,
            size: size.max(0.0),
            color,
            opacity: 1.0,
            presentation: 0,
        }
    }

    #[must_use]
    pub fn checkmark(color: Color, size: f32) -> Self {
        Self::new(Shape::Checkmark, color, size)
    }

    #[must_use]
    pub fn x_mark(color: Color, size: f32) -> Self {
        Self::new(Shape::XMark, color, size)
    }

    /// Multiplies the stroke alpha, used by the alert fade transition.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Ties the reveal to one presentation of the alert.
    #[must_use]
    pub fn with_presentation(mut self, presentation: u64) -> Self {
        self.presentation = presentation;
        self
    }

    #[must_use]
    pub fn stroke_width(&self) -> f32 {
        self.size / 8.0
    }

    /// Edge length of the canvas: the shape square plus room for round caps.
    #[must_use]
    pub fn canvas_size(&self) -> f32 {
        self.size + self.stroke_width()
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let edge = self.canvas_size();
        Canvas::new(self)
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .into()
    }

    /// Trimmed polylines for the given progress, offset into canvas space.
    fn visible_polylines(&self, progress: f32) -> Vec<Vec<Point>> {
        let inset = self.stroke_width() / 2.0;
        self.shape
            .polylines(self.size)
            .iter()
            .map(|line| {
                trim_polyline(line, progress)
                    .into_iter()
                    .map(|p| Point::new(p.x + inset, p.y + inset))
                    .collect::<Vec<_>>()
            })
            .filter(|line| line.len() >= 2)
            .collect()
    }
}

impl<Message> canvas::Program<Message> for StrokeReveal {
    type State = RevealProgress;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let iced::Event::Window(window::Event::RedrawRequested(now)) = event else {
            return None;
        };

        state.follow(self.presentation);
        match state.advance(*now, &Spring::REVEAL) {
            RevealStep::Running | RevealStep::Completed => Some(Action::request_redraw()),
            RevealStep::Idle => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let stroke = Stroke::default()
            .with_width(self.stroke_width())
            .with_color(Color {
                a: self.color.a * self.opacity,
                ..self.color
            })
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Round);

        for line in self.visible_polylines(state.value_for(self.presentation)) {
            let path = Path::new(|builder| {
                builder.move_to(line[0]);
                for point in &line[1..] {
                    builder.line_to(*point);
                }
            });
            frame.stroke(&path, stroke);
        }

        vec![frame.into_geometry()]
    }
}
