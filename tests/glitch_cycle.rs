use std::cell::RefCell;
use std::rc::Rc;

use dontbuytops_terminal::application::driver::AnimatorDriver;
use dontbuytops_terminal::domain::animation::glitch::{FLICKER_DURATION_MS, RECURRENCE_RANGE_MS};
use dontbuytops_terminal::domain::animation::{GlitchCadence, GlitchFlicker, GlitchState, GlitchTiming};
use dontbuytops_terminal::infrastructure::scheduler::VirtualScheduler;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Runs the flicker for `horizon` ms and returns `(time, active)` for every transition.
fn record_transitions(cadence: GlitchCadence, seed: u64, horizon: u64) -> Vec<(u64, bool)> {
    let clock = VirtualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let observed_clock = clock.clone();
    let timing = GlitchTiming { cadence, ..GlitchTiming::default() };
    let _driver = AnimatorDriver::mount(
        GlitchFlicker::new(timing, StdRng::seed_from_u64(seed)),
        clock.clone(),
        move |state: &GlitchState| sink.borrow_mut().push((observed_clock.now(), state.active)),
    );

    while let Some(deadline) = clock.next_deadline() {
        if deadline > horizon {
            break;
        }
        clock.advance_to(deadline);
    }
    let transitions = log.borrow().clone();
    transitions
}

fn activations(transitions: &[(u64, bool)]) -> Vec<u64> {
    transitions.iter().filter(|(_, active)| *active).map(|(t, _)| *t).collect()
}

#[test]
fn starts_inactive_and_first_flicker_follows_one_period() {
    let transitions = record_transitions(GlitchCadence::FixedAtMount, 11, 7_000);
    assert_eq!(transitions[0], (0, false));
    let first = activations(&transitions)[0];
    assert!(RECURRENCE_RANGE_MS.contains(&(first as u32)));
}

#[test]
fn each_flicker_lasts_exactly_two_hundred_ms() {
    let transitions = record_transitions(GlitchCadence::FixedAtMount, 5, 60_000);
    for pair in transitions[1..].chunks_exact(2) {
        let (on_at, on) = pair[0];
        let (off_at, off) = pair[1];
        assert!(on && !off);
        assert_eq!(off_at - on_at, u64::from(FLICKER_DURATION_MS));
    }
}

#[test]
fn fixed_cadence_keeps_one_period() {
    for seed in 0..16 {
        let starts = activations(&record_transitions(GlitchCadence::FixedAtMount, seed, 60_000));
        assert!(starts.len() >= 9);
        let period = starts[0];
        assert!(RECURRENCE_RANGE_MS.contains(&(period as u32)));
        for pair in starts.windows(2) {
            assert_eq!(pair[1] - pair[0], period);
        }
    }
}

#[test]
fn redraw_cadence_keeps_every_period_in_range() {
    let starts = activations(&record_transitions(GlitchCadence::RedrawEachCycle, 42, 200_000));
    let periods: Vec<u64> = std::iter::once(starts[0]).chain(starts.windows(2).map(|w| w[1] - w[0])).collect();
    assert!(periods.iter().all(|p| RECURRENCE_RANGE_MS.contains(&(*p as u32))));
    assert!(periods.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn same_seed_gives_same_schedule() {
    assert_eq!(
        record_transitions(GlitchCadence::RedrawEachCycle, 9, 30_000),
        record_transitions(GlitchCadence::RedrawEachCycle, 9, 30_000)
    );
}
