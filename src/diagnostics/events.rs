// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for alert lifecycle tracking.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why an alert left the screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// The display timer elapsed.
    Timeout,
    /// The user tapped the alert.
    Tap,
    /// The host cleared the visibility flag itself.
    Host,
}

/// Why a due dismiss timer did nothing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The flag was already `false` (e.g. tapped earlier).
    AlreadyHidden,
    /// The timer belongs to an earlier presentation.
    Stale,
}

/// Alert lifecycle events emitted by the presenter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlertEvent {
    /// Content mounted and the entry transition started.
    Presented { epoch: u64 },
    /// Flag raised while already showing; content is updated in place.
    ContentReplaced { epoch: u64 },
    /// Flag raised during an exit transition; entry waits for the exit to finish.
    EntryDeferred { epoch: u64 },
    /// The exit transition started.
    Dismissed { epoch: u64, reason: DismissReason },
    /// A dismiss timer came due and was a no-op.
    TimerIgnored { epoch: u64, reason: IgnoreReason },
    /// The exit transition finished and content unmounted.
    ExitCompleted { epoch: u64 },
}

/// A single diagnostic event with timestamps.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic timestamp for ordering and relative offsets.
    pub timestamp: Instant,
    /// Wall clock time for reports.
    pub wall_clock: DateTime<Utc>,
    pub kind: AlertEvent,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: AlertEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            wall_clock: Utc::now(),
            kind,
        }
    }
}

/// Event representation used in exported reports: the monotonic timestamp is
/// replaced by an offset from the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    pub wall_clock: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: AlertEvent,
}

impl SerializableEvent {
    #[allow(clippy::cast_possible_truncation)] // Offsets in ms fit comfortably in u64
    #[must_use]
    pub fn new(event: &DiagnosticEvent, started_at: Instant) -> Self {
        Self {
            offset_ms: event
                .timestamp
                .saturating_duration_since(started_at)
                .as_millis() as u64,
            wall_clock: event.wall_clock,
            kind: event.kind.clone(),
        }
    }
}
