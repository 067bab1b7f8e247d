use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use calloop::EventLoop;
use pager_swiper::prelude::*;
use pager_swiper::reactive::{live_effect_count, live_owner_count, live_signal_count};
use pager_swiper::testing::{ManualScheduler, RecordingSurface};

fn autoplaying(timeout: f64) -> SwiperConfig {
    SwiperConfig::new().autoplay(true).autoplay_timeout(timeout)
}

fn build(
    count: usize,
    config: SwiperConfig,
) -> (Swiper<usize>, Rc<ManualScheduler>, RecordingSurface) {
    let _ = env_logger::builder().is_test(true).try_init();
    let clock = Rc::new(ManualScheduler::new());
    let surface = RecordingSurface::new();
    let swiper = Swiper::new((0..count).collect(), config, clock.clone());
    swiper.attach_surface(Box::new(surface.clone()));
    (swiper, clock, surface)
}

#[test]
fn test_advances_once_per_interval_and_wraps() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let changes_log = changes.clone();
    let (swiper, clock, surface) = build(3, autoplaying(1.0));
    let swiper = swiper.on_index_changed(move |index| changes_log.borrow_mut().push(index));

    clock.advance(Duration::from_millis(999));
    assert_eq!(swiper.current_index(), 0);

    clock.advance(Duration::from_millis(1));
    assert_eq!(swiper.current_index(), 1);
    clock.advance(Duration::from_secs(1));
    assert_eq!(swiper.current_index(), 2);
    clock.advance(Duration::from_secs(1));
    assert_eq!(swiper.current_index(), 0);

    assert_eq!(surface.jumps(), vec![1, 2, 0]);
    assert_eq!(*changes.borrow(), vec![1, 2, 0]);
}

#[test]
fn test_dots_follow_autoplay() {
    let (swiper, clock, _surface) = build(4, autoplaying(1.0));
    clock.advance(Duration::from_secs(2));
    let view = swiper.render();
    let active = view.as_pager().unwrap().pagination.as_ref().unwrap().active_index();
    assert_eq!(active, Some(2));
}

#[test]
fn test_at_most_one_live_timer() {
    let (swiper, clock, _surface) = build(5, autoplaying(0.5));
    assert_eq!(clock.live_timers(), 1);
    for position in [3, 1, 4] {
        clock.advance(Duration::from_millis(700));
        assert_eq!(clock.live_timers(), 1);
        swiper.handle_surface_event(SurfaceEvent::PageSelected { position });
        assert_eq!(clock.live_timers(), 1);
    }
    swiper.press_next();
    swiper.update_config(|config| config.autoplay_timeout = 2.0);
    assert_eq!(clock.live_timers(), 1);
}

#[test]
fn test_swipe_restarts_countdown() {
    let (swiper, clock, surface) = build(3, autoplaying(1.0));

    clock.advance(Duration::from_millis(600));
    swiper.handle_surface_event(SurfaceEvent::PageSelected { position: 2 });

    // The first countdown would have fired at 1.0s.
    clock.advance(Duration::from_millis(500));
    assert_eq!(swiper.current_index(), 2);

    clock.advance(Duration::from_millis(500));
    assert_eq!(swiper.current_index(), 0);
    assert_eq!(surface.jumps(), vec![0]);
}

#[test]
fn test_backward_direction() {
    let (swiper, clock, surface) = build(
        3,
        autoplaying(1.0).autoplay_direction(Direction::Backward),
    );
    clock.advance(Duration::from_secs(3));
    assert_eq!(surface.jumps(), vec![2, 1, 0]);
    assert_eq!(swiper.current_index(), 0);
}

#[test]
fn test_no_timer_without_loop() {
    let (swiper, clock, surface) = build(3, autoplaying(1.0).loop_enabled(false));
    assert_eq!(clock.live_timers(), 0);
    clock.advance(Duration::from_secs(10));
    assert_eq!(swiper.current_index(), 0);
    assert!(surface.jumps().is_empty());
}

#[test]
fn test_toggling_options_starts_and_stops_the_timer() {
    let (swiper, clock, _surface) = build(3, SwiperConfig::new().autoplay_timeout(1.0));
    assert_eq!(clock.live_timers(), 0);

    swiper.update_config(|config| config.autoplay = true);
    assert_eq!(clock.live_timers(), 1);
    clock.advance(Duration::from_secs(1));
    assert_eq!(swiper.current_index(), 1);

    swiper.update_config(|config| config.disable = true);
    assert_eq!(clock.live_timers(), 0);
    clock.advance(Duration::from_secs(5));
    assert_eq!(swiper.current_index(), 1);
}

#[test]
fn test_interval_change_takes_effect_immediately() {
    let (swiper, clock, _surface) = build(3, autoplaying(1.0));
    clock.advance(Duration::from_millis(500));
    swiper.update_config(|config| config.autoplay_timeout = 3.0);

    clock.advance(Duration::from_millis(2900));
    assert_eq!(swiper.current_index(), 0);
    clock.advance(Duration::from_millis(100));
    assert_eq!(swiper.current_index(), 1);
}

#[test]
fn test_invalid_timeout_uses_default_interval() {
    let (swiper, clock, _surface) = build(3, autoplaying(f64::NAN));
    clock.advance(Duration::from_millis(2499));
    assert_eq!(swiper.current_index(), 0);
    clock.advance(Duration::from_millis(1));
    assert_eq!(swiper.current_index(), 1);
}

#[test]
fn test_shrinking_to_one_slide_stops_autoplay() {
    let (mut swiper, clock, _surface) = build(3, autoplaying(1.0));
    swiper.set_slides(vec![7]);
    assert_eq!(clock.live_timers(), 0);
    swiper.set_slides(vec![7, 8]);
    assert_eq!(clock.live_timers(), 1);
}

#[test]
fn test_dropping_swiper_cancels_timer() {
    let (swiper, clock, surface) = build(3, autoplaying(1.0));
    assert_eq!(clock.live_timers(), 1);
    drop(swiper);
    assert_eq!(clock.live_timers(), 0);
    clock.advance(Duration::from_secs(5));
    assert!(surface.jumps().is_empty());
}

#[test]
fn test_dropping_swiper_mid_tick_sequence() {
    let (swiper, clock, _surface) = build(4, autoplaying(0.5));
    clock.advance(Duration::from_millis(1200));
    assert_eq!(swiper.current_index(), 2);
    drop(swiper);
    assert_eq!(clock.live_timers(), 0);
}

#[test]
fn test_ticks_do_not_accumulate_reactive_state() {
    let (swiper, clock, _surface) = build(3, autoplaying(1.0));
    clock.advance(Duration::from_secs(1));
    let counts = (live_owner_count(), live_effect_count(), live_signal_count());

    clock.advance(Duration::from_secs(20));
    assert_eq!(swiper.current_index(), 0);
    assert_eq!(
        (live_owner_count(), live_effect_count(), live_signal_count()),
        counts
    );
}

#[test]
fn test_rebuilding_swipers_releases_reactive_state() {
    let _ = env_logger::builder().is_test(true).try_init();
    let clock = Rc::new(ManualScheduler::new());
    let counts = (live_owner_count(), live_effect_count(), live_signal_count());

    for _ in 0..10 {
        let swiper = Swiper::new(vec![1, 2, 3], autoplaying(1.0), clock.clone());
        clock.advance(Duration::from_secs(1));
        assert_eq!(swiper.current_index(), 1);
    }
    assert_eq!(clock.live_timers(), 0);
    assert_eq!(
        (live_owner_count(), live_effect_count(), live_signal_count()),
        counts
    );
}

#[test]
fn test_calloop_drives_autoplay() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut event_loop: EventLoop<'static, ()> = EventLoop::try_new().unwrap();
    let scheduler = Rc::new(CalloopScheduler::new(event_loop.handle()));
    let surface = RecordingSurface::new();

    let swiper = Swiper::new(vec!['a', 'b', 'c'], autoplaying(0.01), scheduler.clone());
    swiper.attach_surface(Box::new(surface.clone()));

    let deadline = Instant::now() + Duration::from_secs(2);
    while surface.jumps().len() < 3 && Instant::now() < deadline {
        event_loop
            .dispatch(Some(Duration::from_millis(5)), &mut ())
            .unwrap();
    }
    assert_eq!(&surface.jumps()[..3], &[1, 2, 0]);
    assert_eq!(scheduler.live_timers(), 1);

    drop(swiper);
    assert_eq!(scheduler.live_timers(), 0);
}
