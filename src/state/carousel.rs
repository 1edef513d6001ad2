//! Auto-advancing carousel: index arithmetic plus the timer that drives it.

use crate::services::scheduler::{Scheduler, TimerHandle};
use log::debug;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    hovered: bool,
    focused: bool,
    pausable: bool,
}

impl CarouselState {
    pub fn new(len: usize, pausable: bool) -> Self {
        Self {
            len,
            index: 0,
            hovered: false,
            focused: false,
            pausable,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, slide: usize) -> bool {
        slide == self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps straight to `slide`. Callers only pass indices of rendered slides.
    pub fn select_slide(&mut self, slide: usize) {
        debug_assert!(slide < self.len, "slide {slide} out of range 0..{}", self.len);
        if slide < self.len {
            self.index = slide;
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_paused(&self) -> bool {
        self.pausable && (self.hovered || self.focused)
    }

    /// Live-region text for screen readers.
    pub fn announcement(&self) -> String {
        format!("Slide {} of {}", self.index + 1, self.len)
    }
}

struct Inner {
    state: RefCell<CarouselState>,
    timer: RefCell<Option<TimerHandle>>,
    running: Cell<bool>,
    scheduler: Rc<dyn Scheduler>,
    period_ms: u32,
    on_change: Callback<CarouselState>,
}

impl Inner {
    fn update(&self, change: impl FnOnce(&mut CarouselState)) -> CarouselState {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            change(&mut state);
            *state
        };
        self.on_change.emit(snapshot);
        snapshot
    }

    fn tick(&self) {
        let state = self.update(CarouselState::advance);
        debug!("carousel advanced to {}", state.index());
    }
}

/// Owns a [`CarouselState`] and an interval that advances it while running and not paused.
///
/// Pausing releases the interval; resuming schedules a fresh one, so a resume never
/// fires a tick straight away.
#[derive(Clone)]
pub struct AutoAdvance {
    inner: Rc<Inner>,
}

impl AutoAdvance {
    pub fn new(
        state: CarouselState,
        scheduler: Rc<dyn Scheduler>,
        period_ms: u32,
        on_change: Callback<CarouselState>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                timer: RefCell::new(None),
                running: Cell::new(false),
                scheduler,
                period_ms,
                on_change,
            }),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> CarouselState {
        *self.inner.state.borrow()
    }

    pub fn start(&self) {
        self.inner.running.set(true);
        self.sync_timer();
    }

    /// Releases the timer. Used on unmount.
    pub fn stop(&self) {
        self.inner.running.set(false);
        self.sync_timer();
    }

    pub fn is_ticking(&self) -> bool {
        self.inner.timer.borrow().is_some()
    }

    pub fn select_slide(&self, slide: usize) {
        self.inner.update(|s| s.select_slide(slide));
    }

    pub fn next(&self) {
        self.inner.update(CarouselState::advance);
    }

    pub fn previous(&self) {
        self.inner.update(CarouselState::previous);
    }

    pub fn set_hovered(&self, hovered: bool) {
        self.inner.update(|s| s.set_hovered(hovered));
        self.sync_timer();
    }

    pub fn set_focused(&self, focused: bool) {
        self.inner.update(|s| s.set_focused(focused));
        self.sync_timer();
    }

    fn sync_timer(&self) {
        let should_tick = self.inner.running.get() && !self.inner.state.borrow().is_paused();
        let is_ticking = self.is_ticking();
        if should_tick && !is_ticking {
            let weak: Weak<Inner> = Rc::downgrade(&self.inner);
            let handle = self.inner.scheduler.interval(
                self.inner.period_ms,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.tick();
                    }
                }),
            );
            *self.inner.timer.borrow_mut() = Some(handle);
        } else if !should_tick && is_ticking {
            let released = self.inner.timer.borrow_mut().take();
            drop(released);
        }
    }
}
