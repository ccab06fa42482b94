// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording alert lifecycle events.
//!
//! Presentations, dismissals and ignored timers are captured as structured
//! events, stored in a memory-bounded circular buffer, and can be exported
//! as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`AlertEvent`]: The lifecycle events the presenter reports
//! - [`DiagnosticsHandle`] / [`DiagnosticsCollector`]: channel-backed sink
//! - [`write_atomic`]: report files are replaced, never truncated

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AlertEvent, DiagnosticEvent, DismissReason, IgnoreReason, SerializableEvent};
pub use export::{default_export_directory, generate_default_filename, write_atomic};
