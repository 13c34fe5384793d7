use crate::domain::animation::Millis;

/// Callback executed when a single-shot timer fires.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Single-shot timer service.
///
/// The returned handle owns the timer: dropping it before the deadline cancels
/// the callback, so a timer can never outlive whoever holds its handle.
pub trait TimerScheduler: Clone + 'static {
    type Handle: 'static;

    fn schedule_once(&self, delay_ms: Millis, callback: TimerCallback) -> Self::Handle;
}
