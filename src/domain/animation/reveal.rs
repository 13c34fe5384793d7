use super::{Animator, Millis, Wake};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub visible: bool,
}

/// Turns visible once, `delay_ms` after mount, and stays visible.
#[derive(Debug, Clone)]
pub struct DelayedReveal {
    delay_ms: Millis,
    state: RevealState,
}

impl DelayedReveal {
    pub fn new(delay_ms: Millis) -> Self {
        Self { delay_ms, state: RevealState::default() }
    }
}

impl Animator for DelayedReveal {
    type State = RevealState;

    fn name(&self) -> &'static str {
        "Reveal"
    }

    fn state(&self) -> RevealState {
        self.state
    }

    fn on_mount(&mut self) -> Wake {
        if self.state.visible { Wake::Idle } else { Wake::After(self.delay_ms) }
    }

    fn on_timer(&mut self) -> Wake {
        self.state.visible = true;
        Wake::Idle
    }
}
