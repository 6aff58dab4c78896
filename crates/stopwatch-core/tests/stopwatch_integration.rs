//! Integration tests for the stopwatch controller driven frame by frame.

use stopwatch_core::{
    Event, InputEvent, KeyCode, ManualClock, ManualScheduler, Mode, RecordingSurface, Stopwatch,
};

type TestWatch = Stopwatch<ManualClock, ManualScheduler, RecordingSurface>;

fn watch() -> TestWatch {
    Stopwatch::new(
        ManualClock::new(0.0),
        ManualScheduler::new(),
        RecordingSurface::new(),
    )
}

fn at(sw: &mut TestWatch, ms: f64) {
    sw.clock_mut().set(ms);
}

#[test]
fn test_pause_then_clear_scenario() {
    let mut sw = watch();
    sw.start();

    at(&mut sw, 500.0);
    assert!(matches!(sw.toggle(), Some(Event::StopwatchPaused { .. })));
    assert!(sw.surface().clear_enabled(), "clear should be enabled after 500ms");

    sw.clear();
    assert_eq!(sw.surface().display_text().as_deref(), Some("00:00:00.000"));
    assert_eq!(sw.surface().title.as_deref(), Some("Stopwatch – 00:00:00.000"));
    assert!(!sw.surface().clear_enabled());
    assert_eq!(sw.mode(), Mode::Idle);
}

#[test]
fn test_resume_from_idle_is_no_op() {
    let mut sw = watch();
    assert!(sw.resume().is_none());
    assert_eq!(sw.mode(), Mode::Idle);
    assert!(sw.tick_handle().is_none());
    assert_eq!(sw.scheduler().scheduled_count(), 0);
}

#[test]
fn test_second_start_does_not_touch_accumulated_time() {
    let mut sw = watch();
    sw.start();
    at(&mut sw, 300.0);
    sw.pause();
    at(&mut sw, 400.0);
    sw.resume();
    assert_eq!(sw.accumulated_ms(), 300.0);

    at(&mut sw, 450.0);
    assert!(sw.start().is_none());
    assert_eq!(sw.accumulated_ms(), 300.0);
    assert_eq!(sw.elapsed_ms(), 350.0);
    assert_eq!(sw.scheduler().scheduled_count(), 2);
}

#[test]
fn test_accumulation_ignores_paused_time() {
    let mut sw = watch();
    at(&mut sw, 1_000.0);
    sw.start();
    at(&mut sw, 1_750.0);
    sw.pause();
    at(&mut sw, 90_000.0);
    sw.resume();
    at(&mut sw, 90_250.0);
    sw.pause();
    assert_eq!(sw.accumulated_ms(), 750.0 + 250.0);
}

#[test]
fn test_clear_from_idle_matches_initial_state() {
    let fresh = watch();
    let mut cleared = watch();
    cleared.clear();

    assert_eq!(cleared.mode(), fresh.mode());
    assert_eq!(cleared.elapsed_ms(), fresh.elapsed_ms());
    assert_eq!(cleared.tick_handle(), fresh.tick_handle());
    assert_eq!(cleared.surface().display, fresh.surface().display);
    assert_eq!(cleared.surface().title, fresh.surface().title);
    assert_eq!(cleared.surface().clear_enabled, fresh.surface().clear_enabled);
    assert_eq!(cleared.surface().appearance, fresh.surface().appearance);
}

#[test]
fn test_frames_are_monotonic_while_running() {
    let mut sw = watch();
    sw.start();
    let mut last = 0.0;
    for step in [16.0, 17.0, 0.0, 16.5, 33.25, 1.0] {
        sw.clock_mut().advance(step);
        let frame = sw.pump().expect("running stopwatch always has a frame due");
        assert!(frame.elapsed_ms >= last);
        last = frame.elapsed_ms;
    }
    assert_eq!(sw.surface().display_writes, 1 + 6);
}

#[test]
fn test_no_frames_after_pause() {
    let mut sw = watch();
    sw.start();
    sw.clock_mut().advance(100.0);
    sw.pump();
    sw.pause();
    sw.clock_mut().advance(100.0);
    assert!(sw.pump().is_none());
    assert_eq!(sw.surface().display_text().as_deref(), Some("00:00:00.100"));
    assert_eq!(
        sw.surface().title.as_deref(),
        Some("Stopwatch – 00:00:00.100")
    );
}

#[test]
fn test_one_hour_frame() {
    let mut sw = watch();
    sw.start();
    sw.clock_mut().advance(3_600_000.0);
    let frame = sw.pump().unwrap();
    assert_eq!(frame.parts.hours, 1);
    assert_eq!(frame.parts.minutes, 0);
    assert_eq!(frame.display.to_string(), "01:00:00.000");
}

#[test]
fn test_keyboard_session() {
    let mut sw = watch();

    let outcome = sw.handle_input(InputEvent::KeyDown(KeyCode::Space));
    assert!(outcome.prevent_default);
    assert_eq!(sw.mode(), Mode::Running);

    sw.clock_mut().advance(1_234.0);
    sw.pump();
    let outcome = sw.handle_input(InputEvent::KeyDown(KeyCode::Space));
    assert!(matches!(outcome.event, Some(Event::StopwatchPaused { .. })));
    assert_eq!(sw.mode(), Mode::Paused);
    assert_eq!(sw.surface().appearance.as_ref().unwrap().hint, "Paused");

    let outcome = sw.handle_input(InputEvent::KeyDown(KeyCode::Letter('X')));
    assert!(!outcome.prevent_default);
    assert_eq!(sw.mode(), Mode::Paused);

    let outcome = sw.handle_input(InputEvent::KeyDown(KeyCode::Escape));
    assert!(outcome.prevent_default);
    assert_eq!(sw.mode(), Mode::Idle);
    assert_eq!(sw.surface().appearance.as_ref().unwrap().label, "Start");
}

#[test]
fn test_independent_instances() {
    let mut a = watch();
    let mut b = watch();
    a.start();
    a.clock_mut().advance(10.0);
    b.clock_mut().advance(10.0);
    assert_eq!(a.elapsed_ms(), 10.0);
    assert_eq!(b.elapsed_ms(), 0.0);
    assert_eq!(b.mode(), Mode::Idle);
}
