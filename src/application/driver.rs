use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::animation::{Animator, Wake};
use crate::domain::logging::LogComponent;
use crate::domain::scheduling::TimerScheduler;
use crate::log_trace;

type Observer<S> = Box<dyn Fn(&S)>;

struct DriverInner<A: Animator, S: TimerScheduler> {
    animator: RefCell<A>,
    scheduler: S,
    /// At most one armed timer per animator.
    pending: RefCell<Option<S::Handle>>,
    observer: Observer<A::State>,
}

/// Runs one animator on a scheduler and owns its pending timer.
///
/// Timer callbacks hold only a weak reference, and dropping the driver drops
/// the pending handle, so nothing can reach the animator after disposal.
pub struct AnimatorDriver<A: Animator + 'static, S: TimerScheduler> {
    inner: Rc<DriverInner<A, S>>,
}

impl<A: Animator + 'static, S: TimerScheduler> AnimatorDriver<A, S> {
    /// Mounts the animator: applies `on_mount`, reports the state and arms the first timer.
    pub fn mount(animator: A, scheduler: S, observer: impl Fn(&A::State) + 'static) -> Self {
        let inner = Rc::new(DriverInner {
            animator: RefCell::new(animator),
            scheduler,
            pending: RefCell::new(None),
            observer: Box::new(observer),
        });
        let name = inner.animator.borrow().name();
        log_trace!(LogComponent::Scheduler("Driver"), "mount {}", name);
        transition(&inner, |animator| animator.on_mount());
        Self { inner }
    }

    pub fn state(&self) -> A::State {
        self.inner.animator.borrow().state()
    }

    pub fn is_idle(&self) -> bool {
        self.inner.pending.borrow().is_none()
    }

    /// Applies an input change. The pending timer is cancelled before `change`
    /// runs; the returned [`Wake`] arms the next one.
    pub fn reconfigure(&self, change: impl FnOnce(&mut A) -> Wake) {
        let cancelled = self.inner.pending.borrow_mut().take();
        drop(cancelled);
        transition(&self.inner, change);
    }
}

impl<A: Animator + 'static, S: TimerScheduler> Drop for AnimatorDriver<A, S> {
    fn drop(&mut self) {
        let cancelled = self.inner.pending.borrow_mut().take();
        let name = self.inner.animator.borrow().name();
        log_trace!(
            LogComponent::Scheduler("Driver"),
            "dispose {} (pending timer: {})",
            name,
            cancelled.is_some()
        );
    }
}

fn transition<A, S>(inner: &Rc<DriverInner<A, S>>, step: impl FnOnce(&mut A) -> Wake)
where
    A: Animator + 'static,
    S: TimerScheduler,
{
    let (wake, state) = {
        let mut animator = inner.animator.borrow_mut();
        let wake = step(&mut *animator);
        (wake, animator.state())
    };
    (inner.observer)(&state);
    arm(inner, wake);
}

fn arm<A, S>(inner: &Rc<DriverInner<A, S>>, wake: Wake)
where
    A: Animator + 'static,
    S: TimerScheduler,
{
    let handle = match wake {
        Wake::After(delay_ms) => {
            let weak = Rc::downgrade(inner);
            Some(inner.scheduler.schedule_once(
                delay_ms,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        transition(&inner, |animator| animator.on_timer());
                    }
                }),
            ))
        }
        Wake::Idle => None,
    };
    // The replaced handle belongs to the timer that just fired.
    let previous = inner.pending.replace(handle);
    drop(previous);
}
