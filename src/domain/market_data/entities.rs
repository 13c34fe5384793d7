use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// One ticker line. Prices and changes are unbounded simulated values.
#[derive(Debug, Clone, PartialEq, Constructor, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerEntry {
    pub symbol: String,
    pub price: f64,
    pub change_percent: f64,
}

impl TickerEntry {
    pub fn is_gaining(&self) -> bool {
        self.change_percent >= 0.0
    }
}

/// Entries shown on first mount.
pub fn default_seed() -> Vec<TickerEntry> {
    vec![
        TickerEntry::new("BTC".to_string(), 67234.12, 2.34),
        TickerEntry::new("ETH".to_string(), 3521.87, -1.23),
        TickerEntry::new("SOL".to_string(), 178.45, 5.67),
    ]
}
