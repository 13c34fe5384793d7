use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::domain::animation::Millis;
use crate::domain::scheduling::{TimerCallback, TimerScheduler};

#[derive(Default)]
struct ClockInner {
    now: u64,
    next_id: u64,
    /// Keyed by `(deadline, id)` so equal deadlines fire in scheduling order.
    timers: BTreeMap<(u64, u64), TimerCallback>,
}

impl ClockInner {
    fn cancel(&mut self, id: u64) -> Option<TimerCallback> {
        let key = *self.timers.keys().find(|&&(_, timer_id)| timer_id == id)?;
        self.timers.remove(&key)
    }

    /// Pops the earliest timer due at or before `until`, moving `now` to its deadline.
    fn pop_due(&mut self, until: u64) -> Option<TimerCallback> {
        let key = *self.timers.keys().next()?;
        if key.0 > until {
            return None;
        }
        self.now = key.0;
        self.timers.remove(&key)
    }
}

/// Manually advanced clock. Nothing fires until [`VirtualScheduler::advance_to`]
/// or [`VirtualScheduler::advance_by`] is called, which makes timer-driven
/// behavior fully deterministic.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    inner: Rc<RefCell<ClockInner>>,
}

/// Pending virtual timer; cancelled on drop.
#[derive(Debug)]
pub struct VirtualTimer {
    id: u64,
    clock: Weak<RefCell<ClockInner>>,
}

impl Drop for VirtualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            // Dropped outside the borrow: the callback may own timers of its own.
            let cancelled = clock.borrow_mut().cancel(self.id);
            drop(cancelled);
        }
    }
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.inner.borrow().timers.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Fire, in deadline order, every timer due at or before `until`,
    /// including timers armed by callbacks along the way.
    pub fn advance_to(&self, until: u64) {
        loop {
            // The borrow ends before the callback runs so it can re-arm.
            let due = self.inner.borrow_mut().pop_due(until);
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        let mut inner = self.inner.borrow_mut();
        inner.now = inner.now.max(until);
    }

    pub fn advance_by(&self, delta_ms: u64) {
        let until = self.now() + delta_ms;
        self.advance_to(until);
    }
}

impl TimerScheduler for VirtualScheduler {
    type Handle = VirtualTimer;

    fn schedule_once(&self, delay_ms: Millis, callback: TimerCallback) -> VirtualTimer {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let deadline = inner.now + u64::from(delay_ms);
        inner.timers.insert((deadline, id), callback);
        VirtualTimer { id, clock: Rc::downgrade(&self.inner) }
    }
}
