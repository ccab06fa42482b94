// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing alert lifecycle events.
//!
//! The presenter holds a [`DiagnosticsHandle`] and reports through it; the
//! application owns the [`DiagnosticsCollector`] and drains it on each tick.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;

use super::export::write_atomic;
use super::{AlertEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, SerializableEvent};

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Events are sent via a bounded channel so
/// logging never blocks the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an alert lifecycle event.
    ///
    /// Non-blocking: the event is dropped if the channel is full.
    pub fn log(&self, event: AlertEvent) {
        let _ = self.try_log(event);
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(&self, event: AlertEvent) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(event))
    }
}

/// Central collector for diagnostic events.
///
/// Receives events through a channel and stores them in a memory-bounded
/// circular buffer. Old events are evicted when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Exported report: collection metadata plus every buffered event.
#[derive(Debug, Serialize)]
struct DiagnosticReport {
    started_at: DateTime<Utc>,
    collection_duration_ms: u64,
    event_count: usize,
    events: Vec<SerializableEvent>,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the event channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the stored event kinds (oldest first).
    pub fn kinds(&self) -> impl Iterator<Item = &AlertEvent> {
        self.buffer.iter().map(|event| &event.kind)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports all collected events as a JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::new(event, self.collection_started_at))
            .collect();

        let report = DiagnosticReport {
            started_at: self.collection_started_at_utc,
            collection_duration_ms: self.collection_started_at.elapsed().as_millis() as u64,
            event_count: events.len(),
            events,
        };
        serde_json::to_string_pretty(&report)
    }

    /// Writes the JSON report to `path`, returning the path written.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if the report cannot be serialized and
    /// `Error::Io` if the file cannot be written.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> crate::error::Result<PathBuf> {
        let path = path.as_ref();
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DismissReason;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        handle.log(AlertEvent::Presented { epoch: 1 });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        for epoch in 0..DEFAULT_CHANNEL_CAPACITY as u64 {
            handle.log(AlertEvent::ExitCompleted { epoch });
        }
        let overflow = handle.try_log(AlertEvent::ExitCompleted { epoch: 999 });
        assert!(matches!(overflow, Err(TrySendError::Full(_))));
    }

    #[test]
    fn export_json_contains_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        collector.handle().log(AlertEvent::Dismissed {
            epoch: 2,
            reason: DismissReason::Timeout,
        });
        collector.process_pending();

        let json = collector.export_json().expect("export");
        assert!(json.contains("\"event_count\": 1"));
        assert!(json.contains("\"reason\": \"timeout\""));
    }

    #[test]
    fn export_to_file_writes_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        collector.handle().log(AlertEvent::Presented { epoch: 1 });
        collector.process_pending();

        let path = collector
            .export_to_file(dir.path().join("report.json"))
            .expect("export");
        let content = std::fs::read_to_string(path).expect("read");
        let report: serde_json::Value = serde_json::from_str(&content).expect("valid json");
        assert_eq!(report["event_count"], 1);
        assert_eq!(report["events"][0]["event"], "presented");
    }
}
