// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions of the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between two media clock ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks only while the media is playing.
pub fn create_tick_subscription(is_playing: bool) -> Subscription<Message> {
    if is_playing {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
