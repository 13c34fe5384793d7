use super::{Animator, Millis, Wake};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

pub const DEFAULT_TYPING_INTERVAL_MS: Millis = 50;

/// Progress of a character-by-character reveal.
///
/// Lengths are counted in Unicode scalar values, so a multi-byte character is
/// revealed in a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingState {
    source_text: String,
    char_len: usize,
    revealed_count: usize,
}

impl TypingState {
    pub fn new(source_text: impl Into<String>) -> Self {
        let source_text = source_text.into();
        let char_len = source_text.chars().count();
        Self { source_text, char_len, revealed_count: 0 }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_count >= self.char_len
    }

    /// Revealed prefix of the source text.
    pub fn displayed(&self) -> &str {
        match self.source_text.char_indices().nth(self.revealed_count) {
            Some((end, _)) => &self.source_text[..end],
            None => &self.source_text,
        }
    }

    /// One step forward; a complete state is returned unchanged.
    pub fn advance(&self) -> Self {
        Self {
            revealed_count: (self.revealed_count + 1).min(self.char_len),
            ..self.clone()
        }
    }
}

/// Reveals `source_text` one character per `interval_ms`.
#[derive(Debug, Clone)]
pub struct TypingRevealer {
    state: TypingState,
    interval_ms: Millis,
}

impl TypingRevealer {
    pub fn new(source_text: impl Into<String>, interval_ms: Millis) -> Self {
        Self { state: TypingState::new(source_text), interval_ms: sanitize_interval(interval_ms) }
    }

    pub fn interval_ms(&self) -> Millis {
        self.interval_ms
    }

    /// Swap the text being revealed. A different text restarts from zero; the
    /// same text keeps its progress.
    pub fn set_source(&mut self, source_text: impl Into<String>) -> Wake {
        let source_text = source_text.into();
        if source_text != self.state.source_text {
            log_debug!(
                LogComponent::Animator("Typing"),
                "source changed after {} chars, restarting",
                self.state.revealed_count
            );
            self.state = TypingState::new(source_text);
        }
        self.next_wake()
    }

    /// Change the pace without losing progress.
    pub fn set_interval(&mut self, interval_ms: Millis) -> Wake {
        self.interval_ms = sanitize_interval(interval_ms);
        self.next_wake()
    }

    fn next_wake(&self) -> Wake {
        if self.state.is_complete() { Wake::Idle } else { Wake::After(self.interval_ms) }
    }
}

fn sanitize_interval(interval_ms: Millis) -> Millis {
    if interval_ms == 0 {
        log_warn!(
            LogComponent::Animator("Typing"),
            "interval of 0ms rejected, using {}ms",
            DEFAULT_TYPING_INTERVAL_MS
        );
        DEFAULT_TYPING_INTERVAL_MS
    } else {
        interval_ms
    }
}

impl Animator for TypingRevealer {
    type State = TypingState;

    fn name(&self) -> &'static str {
        "Typing"
    }

    fn state(&self) -> TypingState {
        self.state.clone()
    }

    fn on_mount(&mut self) -> Wake {
        self.state = TypingState::new(std::mem::take(&mut self.state.source_text));
        self.next_wake()
    }

    fn on_timer(&mut self) -> Wake {
        self.state = self.state.advance();
        if self.state.is_complete() {
            log_debug!(
                LogComponent::Animator("Typing"),
                "revealed all {} chars",
                self.state.len()
            );
        }
        self.next_wake()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_saturates_at_length() {
        let mut state = TypingState::new("hi");
        for _ in 0..5 {
            state = state.advance();
        }
        assert_eq!(state.revealed_count(), 2);
        assert_eq!(state.displayed(), "hi");
    }

    #[test]
    fn displayed_respects_char_boundaries() {
        let state = TypingState::new("∞ok").advance();
        assert_eq!(state.displayed(), "∞");
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn empty_text_is_terminal_on_mount() {
        let mut typing = TypingRevealer::new("", 40);
        assert_eq!(typing.on_mount(), Wake::Idle);
        assert!(typing.state().is_complete());
    }

    #[test]
    fn zero_interval_falls_back_to_default() {
        let typing = TypingRevealer::new("abc", 0);
        assert_eq!(typing.interval_ms(), DEFAULT_TYPING_INTERVAL_MS);
    }
}
