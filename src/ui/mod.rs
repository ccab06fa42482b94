// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`alert`] - The alert overlay: content, presentation, icon animation
//! - [`styles`] - Centralized styling (backdrop, buttons)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`symbols`] - Embedded vector symbols for system-icon alerts

pub mod alert;
pub mod design_tokens;
pub mod styles;
pub mod symbols;
