// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and time arithmetic.
//!
//! Re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use std::time::{Duration, Instant};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

/// Returns `base` shifted forward by `secs` seconds.
///
/// Keeps scenario tests readable (`at(t0, 0.5)` instead of duration plumbing).
pub fn at(base: Instant, secs: f32) -> Instant {
    base + Duration::from_secs_f32(secs)
}
