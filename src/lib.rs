// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a transient, auto-dismissing alert overlay for Iced
//! applications.
//!
//! An alert shows an optional icon (stroke-revealed checkmark or X-mark,
//! named symbol, or image) above a title and subtitle on a frosted backing.
//! Its visibility is bound to a host-owned flag; it dismisses itself after a
//! display duration or when tapped. See [`ui::alert`] for the building blocks
//! and [`app`] for a demo host.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
