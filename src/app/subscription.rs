// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::alert;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between animation ticks while an alert needs them.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the alert tick subscription.
///
/// Only active while the presenter has something to animate or a dismiss
/// timer pending; an idle screen receives no ticks.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(TICK_INTERVAL).map(|instant| Message::Alert(alert::Message::Tick(instant)))
    } else {
        Subscription::none()
    }
}
