//! Autoplay on a calloop event loop, printed to the console.
//!
//! Run with `RUST_LOG=debug cargo run --example console_swiper` to also see
//! the timer being torn down and re-armed after every step.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use calloop::EventLoop;
use calloop::timer::{TimeoutAction, Timer};
use pager_swiper::prelude::*;

fn describe(view: &SwiperView<'_, &str>) -> String {
    let Some(pager) = view.as_pager() else {
        return "[empty]".to_string();
    };
    let slides: Vec<String> = pager
        .slides
        .iter()
        .map(|slide| match slide.slide() {
            Some(name) => name.to_string(),
            None => "...".to_string(),
        })
        .collect();
    let dots: String = pager
        .pagination
        .as_ref()
        .map(|p| p.dots.iter().map(|d| if d.active { '●' } else { '○' }).collect())
        .unwrap_or_default();
    format!("{}  {}", slides.join(" | "), dots)
}

fn main() {
    let _ = env_logger::try_init();

    let mut event_loop: EventLoop<'static, ()> =
        EventLoop::try_new().expect("failed to create event loop");
    let scheduler = Rc::new(CalloopScheduler::new(event_loop.handle()));

    let steps = Rc::new(Cell::new(0));
    let steps_counter = steps.clone();
    let swiper = Rc::new(
        Swiper::new(
            vec!["red", "green", "blue", "amber", "violet"],
            SwiperConfig::new()
                .autoplay(true)
                .autoplay_timeout(0.4)
                .load_minimal(true)
                .load_minimal_size(1)
                .shows_buttons(true),
            scheduler,
        )
        .on_index_changed(move |index| {
            steps_counter.set(steps_counter.get() + 1);
            log::info!("index changed to {index}");
        }),
    );
    swiper.attach_surface(Box::new(|page: usize| log::info!("pager: jump to {page}")));

    // A user swipe back to the first slide midway through.
    let swiped = swiper.clone();
    event_loop
        .handle()
        .insert_source(Timer::from_duration(Duration::from_millis(1000)), move |_, _, _| {
            println!("(user swipes to slide 0)");
            swiped.handle_surface_event(SurfaceEvent::PageSelected { position: 0 });
            TimeoutAction::Drop
        })
        .expect("failed to register swipe timer");

    println!("{}", describe(&swiper.render()));
    let mut last = swiper.current_index();
    while steps.get() < 8 {
        event_loop
            .dispatch(Some(Duration::from_millis(50)), &mut ())
            .expect("event loop dispatch failed");
        if swiper.current_index() != last {
            last = swiper.current_index();
            println!("{}", describe(&swiper.render()));
        }
    }
}
