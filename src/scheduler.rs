//! Repeating timers for autoplay.
//!
//! The swiper never owns a clock. It asks a [`Scheduler`] for one repeating
//! timer at a time and cancels it before asking for the next.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use calloop::timer::{TimeoutAction, Timer};
use calloop::{LoopHandle, RegistrationToken};

use crate::error::{Result, SwiperError};

/// Identifies a scheduled timer so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub(crate) u64);

pub type TimerCallback = Box<dyn FnMut()>;

pub trait Scheduler {
    /// Call `callback` every `interval` until cancelled.
    fn schedule_repeating(&self, interval: Duration, callback: TimerCallback)
    -> Result<TimerHandle>;

    /// Stop a timer. After this returns the callback never runs again.
    /// Unknown or already cancelled handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}

struct CalloopTimer {
    token: RegistrationToken,
    live: Rc<Cell<bool>>,
}

/// [`Scheduler`] backed by calloop timer sources.
///
/// The timer source only queues an idle callback; the swiper update runs from
/// that idle, after source dispatch, so it may freely cancel the timer that
/// triggered it.
pub struct CalloopScheduler<Data: 'static> {
    handle: LoopHandle<'static, Data>,
    timers: RefCell<HashMap<TimerHandle, CalloopTimer>>,
    next_id: Cell<u64>,
}

impl<Data: 'static> CalloopScheduler<Data> {
    pub fn new(handle: LoopHandle<'static, Data>) -> Self {
        Self {
            handle,
            timers: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn live_timers(&self) -> usize {
        self.timers.borrow().len()
    }
}

impl<Data: 'static> Scheduler for CalloopScheduler<Data> {
    fn schedule_repeating(
        &self,
        interval: Duration,
        callback: TimerCallback,
    ) -> Result<TimerHandle> {
        let live = Rc::new(Cell::new(true));
        let callback = Rc::new(RefCell::new(callback));

        let idle_handle = self.handle.clone();
        let source_live = live.clone();
        let token = self
            .handle
            .insert_source(Timer::from_duration(interval), move |_, _, _| {
                if !source_live.get() {
                    return TimeoutAction::Drop;
                }
                let live = source_live.clone();
                let callback = callback.clone();
                let _ = idle_handle.insert_idle(move |_| {
                    if live.get() {
                        (callback.borrow_mut())();
                    }
                });
                TimeoutAction::ToDuration(interval)
            })
            .map_err(|err| SwiperError::TimerRegistration(err.error.to_string()))?;

        let id = TimerHandle(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.timers
            .borrow_mut()
            .insert(id, CalloopTimer { token, live });
        log::debug!("scheduled calloop timer {id:?} every {interval:?}");
        Ok(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let Some(timer) = self.timers.borrow_mut().remove(&handle) else {
            return;
        };
        timer.live.set(false);
        self.handle.remove(timer.token);
        log::debug!("cancelled calloop timer {handle:?}");
    }
}

impl<Data: 'static> Drop for CalloopScheduler<Data> {
    fn drop(&mut self) {
        for (_, timer) in self.timers.get_mut().drain() {
            timer.live.set(false);
            self.handle.remove(timer.token);
        }
    }
}
