use super::{Animator, Millis, Wake};
use crate::domain::logging::LogComponent;
use crate::log_info;

pub const CONTENT_DELAY_MS: Millis = 800;

/// Page load stages. Both flags only ever go from false to true, and
/// `show_content` never precedes `loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSequenceState {
    pub loaded: bool,
    pub show_content: bool,
}

/// Shell sequencer: `loaded` on mount, `show_content` after `content_delay_ms`.
#[derive(Debug, Clone)]
pub struct LoadSequence {
    content_delay_ms: Millis,
    state: LoadSequenceState,
}

impl LoadSequence {
    pub fn new(content_delay_ms: Millis) -> Self {
        Self { content_delay_ms, state: LoadSequenceState::default() }
    }
}

impl Default for LoadSequence {
    fn default() -> Self {
        Self::new(CONTENT_DELAY_MS)
    }
}

impl Animator for LoadSequence {
    type State = LoadSequenceState;

    fn name(&self) -> &'static str {
        "LoadSequence"
    }

    fn state(&self) -> LoadSequenceState {
        self.state
    }

    fn on_mount(&mut self) -> Wake {
        self.state.loaded = true;
        if self.state.show_content { Wake::Idle } else { Wake::After(self.content_delay_ms) }
    }

    fn on_timer(&mut self) -> Wake {
        if self.state.loaded && !self.state.show_content {
            self.state.show_content = true;
            log_info!(LogComponent::Animator("LoadSequence"), "content revealed");
        }
        Wake::Idle
    }
}
