//! Time-driven presentation state machines.
//!
//! Every animator is advanced only through [`Animator::on_mount`] and
//! [`Animator::on_timer`]; each transition answers with the next [`Wake`]
//! request. Arming and cancelling the actual timers is the driver's job.

pub mod glitch;
pub mod load_sequence;
pub mod reveal;
pub mod typing;

pub use glitch::{GlitchCadence, GlitchFlicker, GlitchState, GlitchTiming};
pub use load_sequence::{LoadSequence, LoadSequenceState};
pub use reveal::{DelayedReveal, RevealState};
pub use typing::{TypingRevealer, TypingState};

/// Milliseconds on the animation clock.
pub type Millis = u32;

/// Timer request produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// Arm one single-shot timer firing after the delay.
    After(Millis),
    /// Terminal for now: nothing to arm.
    Idle,
}

/// A state machine whose only inputs are its mount and its own timer firings.
pub trait Animator {
    type State: Clone + PartialEq + 'static;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Snapshot of the state exposed to the view layer.
    fn state(&self) -> Self::State;

    fn on_mount(&mut self) -> Wake;

    /// Applied when the timer requested by the previous transition fires.
    fn on_timer(&mut self) -> Wake;
}
