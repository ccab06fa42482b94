// SPDX-License-Identifier: MPL-2.0
//! Time curves for alert animations.
//!
//! Both the entry/exit transition and the icon stroke reveal follow a damped
//! spring moving from 0 to 1. Springs are evaluated in closed form from the
//! elapsed time, so animation state is just a start instant.

use std::time::Duration;

/// Residual amplitude below which a spring counts as settled.
const SETTLE_EPSILON: f32 = 1e-3;

/// Scale the alert enters from and exits to.
pub const ENTRY_SCALE: f32 = 0.8;

/// Damped spring from 0 to 1 with unit mass and zero initial velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    stiffness: f32,
    damping: f32,
    /// Playback speed multiplier (0.8 = 20% slower).
    speed: f32,
    delay: Duration,
}

impl Spring {
    /// Spring for the icon stroke reveal: soft, slightly slowed, and delayed
    /// so the stroke starts once the alert has mostly entered.
    pub const REVEAL: Spring = Spring {
        stiffness: 170.0,
        damping: 15.0,
        speed: 0.8,
        delay: Duration::from_millis(500),
    };

    #[must_use]
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            speed: 1.0,
            delay: Duration::ZERO,
        }
    }

    /// Builds a spring from its period (`response`, seconds) and damping ratio.
    #[must_use]
    pub fn from_response(response: f32, damping_fraction: f32) -> Self {
        let omega = std::f32::consts::TAU / response;
        Self::new(omega * omega, 2.0 * damping_fraction * omega)
    }

    /// Spring used for the entry/exit transition.
    #[must_use]
    pub fn transition() -> Self {
        Self::from_response(0.55, 0.825)
    }

    #[must_use]
    pub const fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn natural_frequency(&self) -> f32 {
        self.stiffness.sqrt()
    }

    fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Spring position after `elapsed`, including delay and speed.
    ///
    /// Underdamped springs overshoot past 1 before settling.
    #[must_use]
    pub fn value(&self, elapsed: Duration) -> f32 {
        let t = elapsed.saturating_sub(self.delay).as_secs_f32() * self.speed;
        if t <= 0.0 {
            return 0.0;
        }

        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-4 {
            1.0 - (-omega * t).exp() * (1.0 + omega * t)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time after which the spring stays within `SETTLE_EPSILON` of 1.
    #[must_use]
    pub fn settle_time(&self) -> Duration {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        let decay = if zeta < 1.0 {
            zeta * omega
        } else {
            // Slowest root dominates the tail.
            omega * (zeta - (zeta * zeta - 1.0).max(0.0).sqrt())
        };
        let secs = -SETTLE_EPSILON.ln() / decay.max(f32::EPSILON);
        self.delay + Duration::from_secs_f32(secs / self.speed)
    }
}

/// Visual state of the alert block during a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub scale: f32,
    pub opacity: f32,
    /// Presentation the frame belongs to. Animated icons restart their
    /// reveal when it changes.
    pub presentation: u64,
}

impl Appearance {
    /// Fully entered.
    pub const VISIBLE: Appearance = Appearance {
        scale: 1.0,
        opacity: 1.0,
        presentation: 0,
    };

    /// Appearance at transition `progress` (0 = out, 1 = in). Scale may
    /// follow a spring overshoot; opacity is clamped.
    #[must_use]
    pub fn at(progress: f32) -> Self {
        Self {
            scale: (ENTRY_SCALE + (1.0 - ENTRY_SCALE) * progress).max(0.0),
            opacity: progress.clamp(0.0, 1.0),
            presentation: 0,
        }
    }

    #[must_use]
    pub fn with_presentation(mut self, presentation: u64) -> Self {
        self.presentation = presentation;
        self
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::VISIBLE
    }
}
