use skyfire::audio::LoopClock;

// A 6-second track started at t=100 must restart 0.7s before its end,
// at t=105.3.

#[test]
fn loop_restart_not_due_while_track_plays() {
    let clock = LoopClock::new(6.0, 100.0);
    assert!(!clock.restart_due(100.0));
    assert!(!clock.restart_due(105.0));
}

#[test]
fn loop_restart_due_at_the_buffer_point() {
    let clock = LoopClock::new(6.0, 100.0);
    assert!(clock.restart_due(105.31));
    assert!(clock.restart_due(200.0));
}

#[test]
fn loop_restart_clock_follows_started_at() {
    let mut clock = LoopClock::new(6.0, 100.0);
    clock.started_at = 105.3;
    assert!(!clock.restart_due(106.0));
    assert!(clock.restart_due(110.61));
}
