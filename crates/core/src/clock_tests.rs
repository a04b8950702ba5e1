use super::*;

#[test]
fn system_clock_returns_plausible_epoch_millis() {
    let clock = SystemClock;
    let now = clock.now_ms();
    // Anything after 2020-01-01 in epoch millis.
    assert!(now > 1_577_836_800_000);
}

#[test]
fn fake_clock_starts_fixed_and_advances_on_demand() {
    let clock = FakeClock::at(1_000);
    assert_eq!(clock.now_ms(), 1_000);
    assert_eq!(clock.advance(500), 1_500);
    assert_eq!(clock.now_ms(), 1_500);
}

#[test]
fn fake_clock_clones_share_state() {
    let clock = FakeClock::at(0);
    let clone = clock.clone();
    clone.advance(42);
    assert_eq!(clock.now_ms(), 42);
}
