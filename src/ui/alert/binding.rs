// SPDX-License-Identifier: MPL-2.0
//! Host-owned visibility flag.
//!
//! The host application owns the [`Binding`] and lends it to the presenter.
//! Every write, from the host or from the presenter, goes through
//! [`Binding::set`]; a write that does not change the value is a no-op and
//! does not advance the revision, so observers only ever see real edges.

/// Direction of a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Raised,
    Lowered,
}

/// Boolean cell with change tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Binding {
    value: bool,
    revision: u64,
}

impl Binding {
    #[must_use]
    pub fn new(value: bool) -> Self {
        Self { value, revision: 0 }
    }

    #[must_use]
    pub fn get(&self) -> bool {
        self.value
    }

    /// Monotonic counter bumped on every actual change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Writes `value`, returning the edge if the value changed.
    pub fn set(&mut self, value: bool) -> Option<Edge> {
        if self.value == value {
            return None;
        }
        self.value = value;
        self.revision += 1;
        Some(if value { Edge::Raised } else { Edge::Lowered })
    }

    /// Whether the value changed since `revision` was observed.
    #[must_use]
    pub fn changed_since(&self, revision: u64) -> bool {
        self.revision != revision
    }
}
