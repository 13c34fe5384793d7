use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::application::driver::AnimatorDriver;
use crate::domain::animation::{Animator, Wake};
use crate::infrastructure::scheduler::BrowserScheduler;

/// Driver owned by the reactive scope that mounted it.
pub struct MountedAnimator<A: Animator + 'static> {
    slot: Rc<RefCell<Option<AnimatorDriver<A, BrowserScheduler>>>>,
}

impl<A: Animator + 'static> Clone for MountedAnimator<A> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<A: Animator + 'static> MountedAnimator<A> {
    /// Forwards an input change; a no-op once the scope is disposed.
    pub fn reconfigure(&self, change: impl FnOnce(&mut A) -> Wake) {
        if let Some(driver) = self.slot.borrow().as_ref() {
            driver.reconfigure(change);
        }
    }
}

/// Mounts `animator` on browser timers for the lifetime of the current scope.
///
/// The returned signal mirrors every transition. Scope cleanup drops the
/// driver, which cancels whatever timer is still pending.
pub fn use_animator<A: Animator + 'static>(animator: A) -> (ReadSignal<A::State>, MountedAnimator<A>) {
    let (state, set_state) = create_signal(animator.state());
    let driver = AnimatorDriver::mount(animator, BrowserScheduler, move |next: &A::State| {
        set_state.set(next.clone());
    });
    let mounted = MountedAnimator { slot: Rc::new(RefCell::new(Some(driver))) };

    let owned = mounted.clone();
    on_cleanup(move || {
        let driver = owned.slot.borrow_mut().take();
        drop(driver);
    });

    (state, mounted)
}

/// Flips to `true` once the browser has painted the DOM built in this scope.
///
/// A class present when its element is inserted never runs a CSS transition;
/// gating the class on this signal makes the change happen after first paint.
pub fn use_first_paint() -> ReadSignal<bool> {
    let (painted, set_painted) = create_signal(false);
    // The first frame callback runs before the insertion is painted.
    request_animation_frame(move || {
        request_animation_frame(move || {
            set_painted.try_set(true);
        })
    });
    painted
}
