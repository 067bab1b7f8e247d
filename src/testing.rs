//! Deterministic stand-ins for the event loop and the pager primitive.
//!
//! ```ignore
//! let clock = Rc::new(ManualScheduler::new());
//! let surface = RecordingSurface::new();
//! let swiper = Swiper::new(slides, config, clock.clone());
//! swiper.attach_surface(Box::new(surface.clone()));
//!
//! clock.advance(Duration::from_secs(1));
//! assert_eq!(surface.jumps(), vec![1]);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::error::Result;
use crate::scheduler::{Scheduler, TimerCallback, TimerHandle};
use crate::surface::PageSurface;

struct ManualTimer {
    interval: Duration,
    due: Duration,
    /// `None` while the callback is executing.
    callback: Option<TimerCallback>,
}

/// Virtual clock. Timers only fire from [`advance`](Self::advance).
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    timers: RefCell<BTreeMap<TimerHandle, ManualTimer>>,
    scheduled: Cell<usize>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Timers that are scheduled and not cancelled.
    pub fn live_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Total number of timers ever scheduled.
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.get()
    }

    /// Move the clock forward, firing every timer that comes due on the way
    /// in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        while let Some((handle, due, mut callback)) = self.take_next_due(target) {
            self.now.set(due);
            callback();
            // Put the callback back unless the timer was cancelled meanwhile.
            if let Some(timer) = self.timers.borrow_mut().get_mut(&handle) {
                timer.due = due + timer.interval;
                timer.callback = Some(callback);
            }
        }
        self.now.set(target);
    }

    fn take_next_due(&self, target: Duration) -> Option<(TimerHandle, Duration, TimerCallback)> {
        let mut timers = self.timers.borrow_mut();
        let (&handle, timer) = timers
            .iter_mut()
            .filter(|(_, timer)| timer.due <= target && timer.callback.is_some())
            .min_by_key(|(handle, timer)| (timer.due, **handle))?;
        let callback = timer.callback.take()?;
        Some((handle, timer.due, callback))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(
        &self,
        interval: Duration,
        callback: TimerCallback,
    ) -> Result<TimerHandle> {
        let handle = TimerHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);
        self.scheduled.set(self.scheduled.get() + 1);
        self.timers.borrow_mut().insert(
            handle,
            ManualTimer {
                interval,
                due: self.now.get() + interval,
                callback: Some(callback),
            },
        );
        Ok(handle)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.timers.borrow_mut().remove(&handle);
    }
}

/// Pager primitive that just remembers every jump it was asked to make.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    jumps: Rc<RefCell<Vec<usize>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jumps(&self) -> Vec<usize> {
        self.jumps.borrow().clone()
    }

    pub fn last_jump(&self) -> Option<usize> {
        self.jumps.borrow().last().copied()
    }
}

impl PageSurface for RecordingSurface {
    fn jump_to_page(&mut self, index: usize) {
        self.jumps.borrow_mut().push(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, TimerCallback) {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        (count, Box::new(move || count_clone.set(count_clone.get() + 1)))
    }

    #[test]
    fn test_fires_once_per_interval() {
        let clock = ManualScheduler::new();
        let (count, callback) = counter();
        clock
            .schedule_repeating(Duration::from_millis(500), callback)
            .unwrap();

        clock.advance(Duration::from_millis(499));
        assert_eq!(count.get(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(count.get(), 1);
        clock.advance(Duration::from_millis(1500));
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn test_cancel_stops_timer() {
        let clock = ManualScheduler::new();
        let (count, callback) = counter();
        let handle = clock
            .schedule_repeating(Duration::from_secs(1), callback)
            .unwrap();
        clock.cancel(handle);
        clock.advance(Duration::from_secs(5));
        assert_eq!(count.get(), 0);
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn test_recording_surface_shares_log_between_clones() {
        let surface = RecordingSurface::new();
        let mut handle = surface.clone();
        handle.jump_to_page(3);
        handle.jump_to_page(1);
        assert_eq!(surface.jumps(), vec![3, 1]);
        assert_eq!(surface.last_jump(), Some(1));
    }
}
