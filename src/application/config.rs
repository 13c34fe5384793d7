//! Site configuration. Every field has a default, so partial JSON overrides
//! are accepted.

use serde::{Deserialize, Serialize};

use crate::domain::animation::glitch::{FLICKER_DURATION_MS, RECURRENCE_RANGE_MS};
use crate::domain::animation::load_sequence::CONTENT_DELAY_MS;
use crate::domain::animation::{GlitchCadence, GlitchTiming, Millis};
use crate::domain::errors::{AppError, ConfigResult};
use crate::domain::logging::LogLevel;
use crate::domain::market_data::{JitterBounds, TICK_INTERVAL_MS, TickerEntry, default_seed};

pub const HERO_TAGLINE: &str = "Crypto trader. Degen analyst. Contrarian by nature.";
pub const HERO_TYPING_INTERVAL_MS: Millis = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingConfig {
    pub text: String,
    pub interval_ms: Millis,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self { text: HERO_TAGLINE.to_string(), interval_ms: HERO_TYPING_INTERVAL_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlitchConfig {
    pub flicker_ms: Millis,
    pub recurrence_min_ms: Millis,
    pub recurrence_max_ms: Millis,
    pub cadence: GlitchCadence,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            flicker_ms: FLICKER_DURATION_MS,
            recurrence_min_ms: RECURRENCE_RANGE_MS.start,
            recurrence_max_ms: RECURRENCE_RANGE_MS.end,
            cadence: GlitchCadence::default(),
        }
    }
}

impl GlitchConfig {
    pub fn timing(&self) -> GlitchTiming {
        GlitchTiming {
            flicker_ms: self.flicker_ms,
            recurrence_ms: self.recurrence_min_ms..self.recurrence_max_ms,
            cadence: self.cadence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickerConfig {
    pub tick_interval_ms: Millis,
    pub price_jitter: f64,
    pub change_jitter: f64,
    pub seed: Vec<TickerEntry>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        let jitter = JitterBounds::default();
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            price_jitter: jitter.price_ratio,
            change_jitter: jitter.change_delta,
            seed: default_seed(),
        }
    }
}

impl TickerConfig {
    pub fn jitter(&self) -> JitterBounds {
        JitterBounds::new(self.price_jitter, self.change_jitter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    pub content_delay_ms: Millis,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { content_delay_ms: CONTENT_DELAY_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCardConfig {
    pub label: String,
    pub value: String,
    pub delay_ms: Millis,
}

impl StatCardConfig {
    fn new(label: &str, value: &str, delay_ms: Millis) -> Self {
        Self { label: label.to_string(), value: value.to_string(), delay_ms }
    }
}

fn default_stats() -> Vec<StatCardConfig> {
    vec![
        StatCardConfig::new("Trading since", "2017", 1200),
        StatCardConfig::new("Market cycles", "3+", 1400),
        StatCardConfig::new("Tops avoided", "∞", 1600),
        StatCardConfig::new("Alpha shared", "24/7", 1800),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub typing: TypingConfig,
    pub glitch: GlitchConfig,
    pub ticker: TickerConfig,
    pub shell: ShellConfig,
    pub stats: Vec<StatCardConfig>,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            typing: TypingConfig::default(),
            glitch: GlitchConfig::default(),
            ticker: TickerConfig::default(),
            shell: ShellConfig::default(),
            stats: default_stats(),
            log_level: LogLevel::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.typing.interval_ms == 0 {
            return Err(invalid("typing.intervalMs must be > 0"));
        }
        if !self.glitch.timing().is_valid() {
            return Err(invalid(format!(
                "glitch timing needs 0 < flickerMs < recurrenceMinMs < recurrenceMaxMs, got {} / {}..{}",
                self.glitch.flicker_ms, self.glitch.recurrence_min_ms, self.glitch.recurrence_max_ms
            )));
        }
        if self.ticker.tick_interval_ms == 0 {
            return Err(invalid("ticker.tickIntervalMs must be > 0"));
        }
        if !self.ticker.jitter().is_valid() {
            return Err(invalid("ticker jitter must be finite and >= 0"));
        }
        if let Some(entry) = self.ticker.seed.iter().find(|e| !e.price.is_finite() || !e.change_percent.is_finite()) {
            return Err(invalid(format!("ticker seed {} has a non-finite value", entry.symbol)));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError::ConfigurationError(message.into())
}
