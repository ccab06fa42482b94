// SPDX-License-Identifier: MPL-2.0
//! Presentation lifecycle of a single alert.
//!
//! The `Presenter` observes the host's [`Binding`], mounts content with an
//! entry transition, arms a one-shot dismiss timer, and runs the exit
//! transition when the alert is dismissed by timeout, by tap or by the host.
//!
//! It holds no clock of its own: every operation takes `now`, and the host
//! drives it with [`Message::Tick`] while [`Presenter::needs_tick`] is true.
//!
//! Dismiss timers are never cancelled. When one comes due it checks that the
//! binding is still raised and that it belongs to the current presentation;
//! otherwise it does nothing. Dropping the presenter drops its timers.

use super::binding::Binding;
use super::motion::{Appearance, Spring};
use crate::config::defaults::DEFAULT_DISPLAY_SECS;
use crate::diagnostics::{AlertEvent, DiagnosticsHandle, DismissReason, IgnoreReason};
use std::time::{Duration, Instant};

/// Messages driving the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user tapped the alert.
    Tapped,
    /// Frame tick from the host's subscription.
    Tick(Instant),
}

/// Where the alert is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Nothing mounted.
    Hidden,
    /// Mounted; the entry transition started at `since`.
    Showing { since: Instant },
    /// Mounted and leaving; `from` is the transition progress the exit
    /// started at.
    Exiting { since: Instant, from: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    deadline: Instant,
    epoch: u64,
}

/// Drives one alert through entry, display and exit.
#[derive(Debug)]
pub struct Presenter {
    phase: Phase,
    /// Incremented on every entry; identifies the current presentation.
    epoch: u64,
    /// Pending dismiss timers, oldest first.
    timers: Vec<Timer>,
    /// Binding revision last acted upon; `None` until the first sync, so a
    /// binding that starts raised is still observed.
    seen_revision: Option<u64>,
    display: Duration,
    transition: Spring,
    /// Time of the most recent operation; used to render the current frame.
    now: Option<Instant>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Hidden,
            epoch: 0,
            timers: Vec::new(),
            seen_revision: None,
            display: Duration::from_secs_f32(DEFAULT_DISPLAY_SECS),
            transition: Spring::transition(),
            now: None,
            diagnostics: None,
        }
    }

    /// Sets how long the alert stays up before dismissing itself.
    #[must_use]
    pub fn with_display_duration(mut self, display: Duration) -> Self {
        self.display = display;
        self
    }

    /// Sets the diagnostics handle for lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.display
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Identifier of the current (or last) presentation, 0 before the first.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether alert content is in the tree (showing or exiting).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !matches!(self.phase, Phase::Hidden)
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        matches!(self.phase, Phase::Showing { .. })
    }

    /// Whether the host must keep delivering ticks.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.is_mounted() || !self.timers.is_empty()
    }

    /// Appearance at the last observed time, `None` when unmounted.
    #[must_use]
    pub fn appearance(&self) -> Option<Appearance> {
        let now = self.now?;
        self.appearance_at(now)
    }

    /// Appearance at `now`, `None` when unmounted.
    #[must_use]
    pub fn appearance_at(&self, now: Instant) -> Option<Appearance> {
        let progress = match self.phase {
            Phase::Hidden => return None,
            Phase::Showing { since } => self.entry_progress(since, now),
            Phase::Exiting { since, from } => {
                let elapsed = now.saturating_duration_since(since);
                from * (1.0 - self.transition.value(elapsed))
            }
        };
        Some(Appearance::at(progress).with_presentation(self.epoch))
    }

    /// Routes a message; the Elm-style entry point for the host's `update`.
    pub fn update(&mut self, message: Message, binding: &mut Binding) {
        match message {
            Message::Tapped => self.tap(binding, Instant::now()),
            Message::Tick(now) => self.tick(binding, now),
        }
    }

    /// Reacts to binding changes made by the host since the last call.
    pub fn sync(&mut self, binding: &Binding, now: Instant) {
        self.now = Some(now);
        if self
            .seen_revision
            .is_some_and(|seen| !binding.changed_since(seen))
        {
            return;
        }
        self.seen_revision = Some(binding.revision());

        match (binding.get(), self.phase) {
            (true, Phase::Hidden) => self.enter(now),
            (true, Phase::Showing { .. }) => {
                self.log(AlertEvent::ContentReplaced { epoch: self.epoch });
            }
            (true, Phase::Exiting { .. }) => {
                self.log(AlertEvent::EntryDeferred { epoch: self.epoch });
            }
            (false, Phase::Showing { since }) => self.begin_exit(since, now, DismissReason::Host),
            (false, Phase::Hidden | Phase::Exiting { .. }) => {}
        }
    }

    /// Dismisses the alert in response to a tap.
    pub fn tap(&mut self, binding: &mut Binding, now: Instant) {
        self.sync(binding, now);
        if let Phase::Showing { since } = self.phase {
            self.lower(binding);
            self.begin_exit(since, now, DismissReason::Tap);
        }
    }

    /// Advances timers and transitions to `now`.
    pub fn tick(&mut self, binding: &mut Binding, now: Instant) {
        self.sync(binding, now);

        if let Phase::Exiting { since, .. } = self.phase {
            if now.saturating_duration_since(since) >= self.transition.settle_time() {
                self.finish_exit(binding, now);
            }
        }

        let (due, pending): (Vec<Timer>, Vec<Timer>) =
            std::mem::take(&mut self.timers)
                .into_iter()
                .partition(|timer| timer.deadline <= now);
        self.timers = pending;
        for timer in due {
            self.fire(timer, binding, now);
        }
    }

    fn enter(&mut self, now: Instant) {
        self.epoch += 1;
        self.phase = Phase::Showing { since: now };
        self.timers.push(Timer {
            deadline: now + self.display,
            epoch: self.epoch,
        });
        self.log(AlertEvent::Presented { epoch: self.epoch });
    }

    fn fire(&mut self, timer: Timer, binding: &mut Binding, now: Instant) {
        if !binding.get() {
            self.log(AlertEvent::TimerIgnored {
                epoch: timer.epoch,
                reason: IgnoreReason::AlreadyHidden,
            });
            return;
        }

        match self.phase {
            Phase::Showing { since } if timer.epoch == self.epoch => {
                self.lower(binding);
                self.begin_exit(since, now, DismissReason::Timeout);
            }
            _ => self.log(AlertEvent::TimerIgnored {
                epoch: timer.epoch,
                reason: IgnoreReason::Stale,
            }),
        }
    }

    fn lower(&mut self, binding: &mut Binding) {
        binding.set(false);
        self.seen_revision = Some(binding.revision());
    }

    fn begin_exit(&mut self, since: Instant, now: Instant, reason: DismissReason) {
        let from = self.entry_progress(since, now);
        self.phase = Phase::Exiting { since: now, from };
        self.log(AlertEvent::Dismissed {
            epoch: self.epoch,
            reason,
        });
    }

    fn finish_exit(&mut self, binding: &Binding, now: Instant) {
        self.phase = Phase::Hidden;
        self.log(AlertEvent::ExitCompleted { epoch: self.epoch });

        // A re-show requested during the exit starts now.
        if binding.get() {
            self.enter(now);
        }
    }

    fn entry_progress(&self, since: Instant, now: Instant) -> f32 {
        self.transition.value(now.saturating_duration_since(since))
    }

    fn log(&self, event: AlertEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}
