use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use crate::domain::animation::Millis;

pub const TICK_INTERVAL_MS: Millis = 2000;
/// ±0.1% multiplicative price jitter.
pub const PRICE_JITTER_RATIO: f64 = 0.001;
/// ±0.05 additive change-percent jitter.
pub const CHANGE_JITTER_DELTA: f64 = 0.05;

/// Half-widths of the uniform per-tick perturbations.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct JitterBounds {
    pub price_ratio: f64,
    pub change_delta: f64,
}

impl Default for JitterBounds {
    fn default() -> Self {
        Self::new(PRICE_JITTER_RATIO, CHANGE_JITTER_DELTA)
    }
}

impl JitterBounds {
    pub fn is_valid(&self) -> bool {
        [self.price_ratio, self.change_delta].iter().all(|b| b.is_finite() && *b >= 0.0)
    }
}
