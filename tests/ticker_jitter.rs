use std::cell::Cell;
use std::rc::Rc;

use dontbuytops_terminal::application::driver::AnimatorDriver;
use dontbuytops_terminal::domain::market_data::{
    JitterBounds, SimulatedTicker, TICK_INTERVAL_MS, TickerEntry, default_seed, perturb_entries,
};
use dontbuytops_terminal::infrastructure::scheduler::VirtualScheduler;
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn single_btc_entry_moves_within_bounds_after_one_tick() {
    let clock = VirtualScheduler::new();
    let seed = vec![TickerEntry::new("BTC".to_string(), 100.00, 0.00)];
    let ticker =
        SimulatedTicker::new(seed.clone(), JitterBounds::default(), TICK_INTERVAL_MS, StdRng::seed_from_u64(1));
    let driver = AnimatorDriver::mount(ticker, clock.clone(), |_: &Vec<TickerEntry>| {});

    clock.advance_to(1_999);
    assert_eq!(driver.state(), seed);

    clock.advance_to(2_000);
    let entries = driver.state();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].symbol, "BTC");
    assert!((99.90..=100.10).contains(&entries[0].price));
    assert!((-0.05..=0.05).contains(&entries[0].change_percent));
}

#[test]
fn ticks_every_two_seconds_forever() {
    let clock = VirtualScheduler::new();
    let ticks = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&ticks);
    let ticker =
        SimulatedTicker::new(default_seed(), JitterBounds::default(), TICK_INTERVAL_MS, StdRng::seed_from_u64(2));
    let _driver = AnimatorDriver::mount(ticker, clock.clone(), move |_: &Vec<TickerEntry>| {
        counter.set(counter.get() + 1)
    });

    clock.advance_to(20_000);
    // one notification for the mount, then one per tick
    assert_eq!(ticks.get(), 1 + 10);
    assert_eq!(clock.pending(), 1);
}

#[test]
fn drift_is_unclamped() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut entries = default_seed();
    for _ in 0..5_000 {
        entries = perturb_entries(&entries, &JitterBounds::new(0.01, 1.0), &mut rng);
    }
    assert!(
        entries.iter().zip(default_seed()).any(|(now, seed)| (now.change_percent - seed.change_percent).abs() > 5.0)
    );
}

#[quickcheck]
fn perturbation_preserves_shape_and_bounds(seed: Vec<(String, u32, i16)>, rng_seed: u64) -> bool {
    let entries: Vec<TickerEntry> = seed
        .into_iter()
        .map(|(symbol, price, change)| TickerEntry::new(symbol, f64::from(price) / 100.0, f64::from(change) / 100.0))
        .collect();
    let jitter = JitterBounds::default();
    let next = perturb_entries(&entries, &jitter, &mut StdRng::seed_from_u64(rng_seed));

    next.len() == entries.len()
        && next.iter().zip(&entries).all(|(after, before)| {
            let price_bound = before.price.abs() * jitter.price_ratio + 1e-9;
            after.symbol == before.symbol
                && (after.price - before.price).abs() <= price_bound
                && (after.change_percent - before.change_percent).abs() <= jitter.change_delta + 1e-9
        })
}
