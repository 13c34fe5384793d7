use gloo_timers::callback::Timeout;

use crate::domain::animation::Millis;
use crate::domain::scheduling::{TimerCallback, TimerScheduler};

/// `setTimeout`-backed scheduler. A dropped [`Timeout`] calls `clearTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl TimerScheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule_once(&self, delay_ms: Millis, callback: TimerCallback) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}
