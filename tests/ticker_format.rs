use dontbuytops_terminal::domain::market_data::{TickerEntry, default_seed};
use dontbuytops_terminal::format_utils::{format_change, format_price};
use dontbuytops_terminal::presentation::ticker_view::{TRACK_COPIES, TickerRow, Trend, scroll_track};
use insta::{assert_json_snapshot, assert_snapshot};

#[test]
fn seed_labels() {
    let rows: Vec<String> = default_seed()
        .iter()
        .map(TickerRow::from)
        .map(|row| format!("{} {} {} {}", row.symbol, row.price, row.change, row.trend.as_ref()))
        .collect();
    assert_snapshot!(rows.join(" | "), @"BTC $67,234.12 +2.34% positive | ETH $3,521.87 -1.23% negative | SOL $178.45 +5.67% positive");
}

#[test]
fn price_label_rounds_to_cents() {
    assert_snapshot!(format_price(0.006), @"0.01");
    assert_snapshot!(format_price(1_000_000.0), @"1,000,000.00");
    assert_snapshot!(format_price(100.0), @"100.00");
}

#[test]
fn change_label_signs() {
    assert_snapshot!(format_change(0.0), @"+0.00%");
    assert_snapshot!(format_change(-0.001), @"-0.00%");
    assert_snapshot!(format_change(12.0), @"+12.00%");
}

#[test]
fn track_repeats_feed_in_order() {
    let seed = default_seed();
    let track = scroll_track(&seed, TRACK_COPIES);
    assert_eq!(track.len(), seed.len() * 3);
    let symbols: Vec<&str> = track.iter().map(|row| row.symbol.as_str()).collect();
    assert_eq!(symbols, ["BTC", "ETH", "SOL", "BTC", "ETH", "SOL", "BTC", "ETH", "SOL"]);
}

#[test]
fn empty_feed_gives_empty_track() {
    assert!(scroll_track(&[], TRACK_COPIES).is_empty());
}

#[test]
fn zero_change_counts_as_positive() {
    let row = TickerRow::from(&TickerEntry::new("X".to_string(), 1.0, 0.0));
    assert_eq!(row.trend, Trend::Positive);
}

#[test]
fn entry_wire_format() {
    assert_json_snapshot!(TickerEntry::new("SOL".to_string(), 178.45, 5.67), @r###"
    {
      "symbol": "SOL",
      "price": 178.45,
      "changePercent": 5.67
    }
    "###);
}
