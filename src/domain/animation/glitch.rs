use std::ops::Range;

use rand::Rng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use super::{Animator, Millis, Wake};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

pub const FLICKER_DURATION_MS: Millis = 200;
pub const RECURRENCE_RANGE_MS: Range<Millis> = 4000..6000;

/// When the recurrence period is drawn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GlitchCadence {
    /// One draw per mount; every cycle has the same period.
    #[default]
    FixedAtMount,
    /// A fresh draw after every flicker.
    RedrawEachCycle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlitchTiming {
    pub flicker_ms: Millis,
    pub recurrence_ms: Range<Millis>,
    pub cadence: GlitchCadence,
}

impl Default for GlitchTiming {
    fn default() -> Self {
        Self {
            flicker_ms: FLICKER_DURATION_MS,
            recurrence_ms: RECURRENCE_RANGE_MS,
            cadence: GlitchCadence::default(),
        }
    }
}

impl GlitchTiming {
    /// A flicker must fit strictly inside the shortest period.
    pub fn is_valid(&self) -> bool {
        self.flicker_ms > 0
            && self.recurrence_ms.start < self.recurrence_ms.end
            && self.flicker_ms < self.recurrence_ms.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlitchState {
    pub active: bool,
}

/// Recurring glitch pulse: `active` for `flicker_ms`, once per period.
///
/// Periods run activation to activation; the first activation comes one
/// period after mount.
#[derive(Debug, Clone)]
pub struct GlitchFlicker<R: Rng = SmallRng> {
    state: GlitchState,
    timing: GlitchTiming,
    period_ms: Millis,
    rng: R,
}

impl<R: Rng> GlitchFlicker<R> {
    pub fn new(timing: GlitchTiming, mut rng: R) -> Self {
        let timing = if timing.is_valid() {
            timing
        } else {
            log_warn!(
                LogComponent::Animator("Glitch"),
                "invalid timing {:?}, using defaults",
                timing
            );
            GlitchTiming::default()
        };
        let period_ms = rng.gen_range(timing.recurrence_ms.clone());
        Self { state: GlitchState::default(), timing, period_ms, rng }
    }

    /// Period currently in effect.
    pub fn period_ms(&self) -> Millis {
        self.period_ms
    }

    pub fn timing(&self) -> &GlitchTiming {
        &self.timing
    }

    fn draw_period(&mut self) {
        self.period_ms = self.rng.gen_range(self.timing.recurrence_ms.clone());
    }
}

impl<R: Rng> Animator for GlitchFlicker<R> {
    type State = GlitchState;

    fn name(&self) -> &'static str {
        "Glitch"
    }

    fn state(&self) -> GlitchState {
        self.state
    }

    fn on_mount(&mut self) -> Wake {
        self.state = GlitchState::default();
        log_debug!(
            LogComponent::Animator("Glitch"),
            "period {}ms ({})",
            self.period_ms,
            self.timing.cadence
        );
        Wake::After(self.period_ms)
    }

    fn on_timer(&mut self) -> Wake {
        if self.state.active {
            self.state.active = false;
            if self.timing.cadence == GlitchCadence::RedrawEachCycle {
                self.draw_period();
            }
            Wake::After(self.period_ms - self.timing.flicker_ms)
        } else {
            self.state.active = true;
            Wake::After(self.timing.flicker_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn invalid_timing_falls_back_to_defaults() {
        let timing = GlitchTiming { flicker_ms: 500, recurrence_ms: 300..400, ..Default::default() };
        let glitch = GlitchFlicker::new(timing, StdRng::seed_from_u64(7));
        assert_eq!(glitch.timing(), &GlitchTiming::default());
        assert!(RECURRENCE_RANGE_MS.contains(&glitch.period_ms()));
    }

    #[test]
    fn cadence_names_round_trip_through_strum() {
        use std::str::FromStr;
        assert_eq!(GlitchCadence::from_str("redraw-each-cycle").unwrap(), GlitchCadence::RedrawEachCycle);
        assert_eq!(GlitchCadence::FixedAtMount.as_ref(), "fixed-at-mount");
    }
}
