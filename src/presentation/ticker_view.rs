use strum::AsRefStr;

use crate::domain::market_data::TickerEntry;
use crate::format_utils::{format_change, format_price};

/// Copies of the feed laid end to end so the scrolling track never shows a gap.
pub const TRACK_COPIES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
}

/// Display-ready ticker line.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerRow {
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub trend: Trend,
}

impl From<&TickerEntry> for TickerRow {
    fn from(entry: &TickerEntry) -> Self {
        Self {
            symbol: entry.symbol.clone(),
            price: format!("${}", format_price(entry.price)),
            change: format_change(entry.change_percent),
            trend: if entry.is_gaining() { Trend::Positive } else { Trend::Negative },
        }
    }
}

/// The feed repeated `copies` times, in order.
pub fn scroll_track(entries: &[TickerEntry], copies: usize) -> Vec<TickerRow> {
    let rows: Vec<TickerRow> = entries.iter().map(TickerRow::from).collect();
    let mut track = Vec::with_capacity(rows.len() * copies);
    for _ in 0..copies {
        track.extend(rows.iter().cloned());
    }
    track
}
