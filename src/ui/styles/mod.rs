// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the alert and the demo host screen.

pub mod backdrop;
pub mod button;
