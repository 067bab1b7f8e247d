//! Timer-driven auto-advance.
//!
//! Autoplay is an effect over the plan (what to do) and the current index
//! (where to start). The scheduled callback captures both by value, so any
//! change to either disposes the previous run, whose cleanup cancels its
//! timer, before a fresh timer is scheduled. A swipe therefore also restarts
//! the countdown.

use std::rc::Rc;
use std::time::Duration;

use crate::config::{DEFAULT_AUTOPLAY_TIMEOUT, SwiperConfig};
use crate::index::{Direction, Paging};
use crate::reactive::{Effect, Memo, Signal, create_effect, on_cleanup};
use crate::scheduler::Scheduler;

/// Everything the autoplay timer depends on apart from the current index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayPlan {
    pub interval: Duration,
    pub direction: Direction,
    pub count: usize,
}

impl AutoplayPlan {
    /// `None` unless autoplay is on, looping is on, the swiper is enabled and
    /// there is more than one slide.
    pub fn from_config(config: &SwiperConfig, count: usize) -> Option<Self> {
        if !config.autoplay || !config.loop_enabled || config.disable || count <= 1 {
            return None;
        }
        let interval = config.autoplay_interval().unwrap_or_else(|err| {
            log::warn!("{err}; using {DEFAULT_AUTOPLAY_TIMEOUT}s");
            Duration::from_secs_f64(DEFAULT_AUTOPLAY_TIMEOUT)
        });
        Some(Self {
            interval,
            direction: config.autoplay_direction,
            count,
        })
    }

    /// Where the next tick goes when starting from `base`.
    pub fn target(&self, base: usize) -> usize {
        Paging::new(self.count, true).step(base, self.direction)
    }
}

/// Keep exactly one repeating timer alive while `plan` is `Some`.
///
/// `on_tick` receives the index to move to and is expected to update
/// `current`, which in turn reschedules the timer from the new base.
pub fn autoplay_effect(
    plan: Memo<Option<AutoplayPlan>>,
    current: Signal<usize>,
    scheduler: Rc<dyn Scheduler>,
    on_tick: Rc<dyn Fn(usize)>,
) -> Effect {
    create_effect(move || {
        let Some(plan) = plan.get() else {
            return;
        };
        let base = current.get();
        let target = plan.target(base);
        let tick = on_tick.clone();

        match scheduler.schedule_repeating(plan.interval, Box::new(move || tick(target))) {
            Ok(handle) => {
                log::debug!(
                    "autoplay armed: {base} -> {target} in {:?} ({handle:?})",
                    plan.interval
                );
                let scheduler = scheduler.clone();
                on_cleanup(move || scheduler.cancel(handle));
            }
            Err(err) => log::error!("autoplay stopped: {err}"),
        }
    })
}
