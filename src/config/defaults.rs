// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Alert timing**: how long an alert stays up before auto-dismissal
//! - **Diagnostics**: capacity of the lifecycle event buffer

// ==========================================================================
// Alert Timing Defaults
// ==========================================================================

/// Default time an alert stays on screen before it dismisses itself (seconds).
pub const DEFAULT_DISPLAY_SECS: f32 = 2.0;

/// Minimum allowed display time (seconds).
pub const MIN_DISPLAY_SECS: f32 = 0.5;

/// Maximum allowed display time (seconds).
pub const MAX_DISPLAY_SECS: f32 = 30.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Helpers
// ==========================================================================

/// Clamps a display duration to the supported range. Non-finite values
/// fall back to the default.
#[must_use]
pub fn clamp_display_secs(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_DISPLAY_SECS, MAX_DISPLAY_SECS)
    } else {
        DEFAULT_DISPLAY_SECS
    }
}

const _: () = {
    assert!(MIN_DISPLAY_SECS < DEFAULT_DISPLAY_SECS);
    assert!(DEFAULT_DISPLAY_SECS < MAX_DISPLAY_SECS);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_display_secs_respects_bounds() {
        assert_eq!(clamp_display_secs(0.0), MIN_DISPLAY_SECS);
        assert_eq!(clamp_display_secs(120.0), MAX_DISPLAY_SECS);
        assert_eq!(clamp_display_secs(2.0), 2.0);
    }

    #[test]
    fn clamp_display_secs_rejects_nan() {
        assert_eq!(clamp_display_secs(f32::NAN), DEFAULT_DISPLAY_SECS);
    }
}
