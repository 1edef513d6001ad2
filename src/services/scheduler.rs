//! Timer capability. Components ask a [`Scheduler`] for intervals and timeouts
//! instead of talking to the browser directly, so tests can drive virtual time.

use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler {
    /// Calls `tick` every `period_ms` until the returned handle is dropped.
    /// The first tick fires one full period after scheduling.
    fn interval(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> TimerHandle;

    /// Calls `fire` once after `delay_ms` unless the handle is dropped first.
    fn timeout(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Owns a scheduled timer. Dropping it cancels the timer.
#[must_use = "dropping a TimerHandle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Browser timers through `gloo-timers`.
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn interval(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> TimerHandle {
        let interval = Interval::new(period_ms, tick);
        TimerHandle::new(move || drop(interval))
    }

    fn timeout(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> TimerHandle {
        let timeout = Timeout::new(delay_ms, fire);
        TimerHandle::new(move || drop(timeout))
    }
}

#[cfg(test)]
pub use virtual_time::VirtualScheduler;

#[cfg(test)]
mod virtual_time {
    use super::{Scheduler, TimerHandle};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    enum Task {
        Once(Box<dyn FnOnce()>),
        Repeat(Box<dyn FnMut()>),
    }

    struct Pending {
        id: u64,
        due: u64,
        period: u64,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        pending: Vec<Pending>,
        // ids cancelled while their task was running
        cancelled: HashSet<u64>,
    }

    /// Deterministic scheduler: time only moves when a test calls [`advance`].
    ///
    /// [`advance`]: VirtualScheduler::advance
    #[derive(Clone, Default)]
    pub struct VirtualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl VirtualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        pub fn cancelled(&self) -> usize {
            self.clock.borrow().cancelled.len()
        }

        /// Moves time forward, running every timer that comes due in order.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let earliest = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(i, _)| i);
                    earliest.map(|i| {
                        let pending = clock.pending.remove(i);
                        clock.now = pending.due;
                        pending
                    })
                };
                let Some(Pending { id, due, period, task }) = next else {
                    break;
                };
                match task {
                    Task::Once(fire) => fire(),
                    Task::Repeat(mut tick) => {
                        tick();
                        let mut clock = self.clock.borrow_mut();
                        if !clock.cancelled.remove(&id) {
                            clock.pending.push(Pending {
                                id,
                                due: due + period,
                                period,
                                task: Task::Repeat(tick),
                            });
                        }
                    }
                }
            }
            self.clock.borrow_mut().now = target;
        }

        fn schedule(&self, delay: u64, period: u64, task: Task) -> TimerHandle {
            let repeating = matches!(task, Task::Repeat(_));
            let id = {
                let mut clock = self.clock.borrow_mut();
                clock.next_id += 1;
                let id = clock.next_id;
                let due = clock.now + delay;
                clock.pending.push(Pending { id, due, period, task });
                id
            };
            let clock = Rc::downgrade(&self.clock);
            TimerHandle::new(move || {
                let Some(clock) = clock.upgrade() else { return };
                let removed = {
                    let mut clock = clock.borrow_mut();
                    match clock.pending.iter().position(|p| p.id == id) {
                        Some(i) => Some(clock.pending.remove(i)),
                        // a fired timeout is simply gone
                        None if repeating => {
                            clock.cancelled.insert(id);
                            None
                        }
                        None => None,
                    }
                };
                // the task may own other handles; drop it outside the borrow
                drop(removed);
            })
        }
    }

    impl Scheduler for VirtualScheduler {
        fn interval(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> TimerHandle {
            let period = u64::from(period_ms.max(1));
            self.schedule(period, period, Task::Repeat(tick))
        }

        fn timeout(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> TimerHandle {
            self.schedule(u64::from(delay_ms), 0, Task::Once(fire))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
        let count = Rc::new(Cell::new(0));
        let tick = {
            let count = count.clone();
            Box::new(move || count.set(count.get() + 1)) as Box<dyn FnMut()>
        };
        (count, tick)
    }

    #[test]
    fn interval_fires_once_per_period() {
        let scheduler = VirtualScheduler::new();
        let (count, tick) = counter();
        let _handle = scheduler.interval(3000, tick);

        scheduler.advance(2999);
        assert_eq!(count.get(), 0);
        scheduler.advance(1);
        assert_eq!(count.get(), 1);
        scheduler.advance(9000);
        assert_eq!(count.get(), 4);
        assert_eq!(scheduler.now(), 12000);
    }

    #[test]
    fn dropping_handle_cancels_interval() {
        let scheduler = VirtualScheduler::new();
        let (count, tick) = counter();
        let handle = scheduler.interval(1000, tick);
        scheduler.advance(1000);
        drop(handle);
        scheduler.advance(5000);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn timeout_fires_once() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let _handle = {
            let fired = fired.clone();
            scheduler.timeout(500, Box::new(move || fired.set(fired.get() + 1)))
        };
        scheduler.advance(499);
        assert_eq!(fired.get(), 0);
        scheduler.advance(10_000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn dropping_handle_after_timeout_fired_leaves_nothing_behind() {
        let scheduler = VirtualScheduler::new();
        let handle = scheduler.timeout(500, Box::new(|| {}));
        scheduler.advance(500);
        drop(handle);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.cancelled(), 0);
    }

    #[test]
    fn interval_cancelled_from_its_own_tick_stops() {
        let scheduler = VirtualScheduler::new();
        let slot: Rc<std::cell::RefCell<Option<TimerHandle>>> = Rc::default();
        let count = Rc::new(Cell::new(0));
        let handle = {
            let slot = slot.clone();
            let count = count.clone();
            scheduler.interval(
                100,
                Box::new(move || {
                    count.set(count.get() + 1);
                    slot.borrow_mut().take();
                }),
            )
        };
        *slot.borrow_mut() = Some(handle);
        scheduler.advance(1000);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.cancelled(), 0);
    }
}
