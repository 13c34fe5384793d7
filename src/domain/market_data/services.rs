use rand::Rng;
use rand::rngs::SmallRng;

use super::entities::TickerEntry;
use super::value_objects::{JitterBounds, TICK_INTERVAL_MS};
use crate::domain::animation::{Animator, Millis, Wake};
use crate::domain::logging::LogComponent;
use crate::{log_trace, log_warn};

/// Uniform draw from `[-bound, bound)`; a zero bound draws nothing.
fn symmetric_jitter<R: Rng>(rng: &mut R, bound: f64) -> f64 {
    if bound > 0.0 { rng.gen_range(-bound..bound) } else { 0.0 }
}

/// Next generation of the feed: same length and order, every entry perturbed
/// independently.
pub fn perturb_entries<R: Rng>(entries: &[TickerEntry], jitter: &JitterBounds, rng: &mut R) -> Vec<TickerEntry> {
    entries
        .iter()
        .map(|entry| TickerEntry {
            symbol: entry.symbol.clone(),
            price: entry.price * (1.0 + symmetric_jitter(rng, jitter.price_ratio)),
            change_percent: entry.change_percent + symmetric_jitter(rng, jitter.change_delta),
        })
        .collect()
}

/// Ticker feed replaced by a perturbed copy every `tick_interval_ms`.
#[derive(Debug, Clone)]
pub struct SimulatedTicker<R: Rng = SmallRng> {
    seed: Vec<TickerEntry>,
    entries: Vec<TickerEntry>,
    jitter: JitterBounds,
    tick_interval_ms: Millis,
    ticks: u64,
    rng: R,
}

impl<R: Rng> SimulatedTicker<R> {
    pub fn new(seed: Vec<TickerEntry>, jitter: JitterBounds, tick_interval_ms: Millis, rng: R) -> Self {
        let jitter = if jitter.is_valid() {
            jitter
        } else {
            log_warn!(LogComponent::Animator("Ticker"), "invalid jitter {:?}, using defaults", jitter);
            JitterBounds::default()
        };
        let tick_interval_ms = if tick_interval_ms == 0 {
            log_warn!(
                LogComponent::Animator("Ticker"),
                "tick interval of 0ms rejected, using {}ms",
                TICK_INTERVAL_MS
            );
            TICK_INTERVAL_MS
        } else {
            tick_interval_ms
        };
        Self { entries: seed.clone(), seed, jitter, tick_interval_ms, ticks: 0, rng }
    }

    pub fn entries(&self) -> &[TickerEntry] {
        &self.entries
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl<R: Rng> Animator for SimulatedTicker<R> {
    type State = Vec<TickerEntry>;

    fn name(&self) -> &'static str {
        "Ticker"
    }

    fn state(&self) -> Vec<TickerEntry> {
        self.entries.clone()
    }

    fn on_mount(&mut self) -> Wake {
        self.entries = self.seed.clone();
        self.ticks = 0;
        Wake::After(self.tick_interval_ms)
    }

    fn on_timer(&mut self) -> Wake {
        self.entries = perturb_entries(&self.entries, &self.jitter, &mut self.rng);
        self.ticks += 1;
        log_trace!(
            LogComponent::Animator("Ticker"),
            "tick #{} over {} entries",
            self.ticks,
            self.entries.len()
        );
        Wake::After(self.tick_interval_ms)
    }
}
