//! Entrance animations triggered by scrolling a container into view.
//!
//! Only the boolean reveal signal and the per-item stagger offset matter here;
//! keyframes and easing live in each section's stylesheet.

use crate::services::viewport::{Crossing, Observation, ObserverOptions, ViewportObserver};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveals on the first entry and stays revealed.
    OneShot,
    /// Tracks intersection live, replaying on every entry.
    Retrigger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealSettings {
    pub mode: RevealMode,
    pub options: ObserverOptions,
    pub stagger_step_ms: u32,
}

pub const VALUES_REVEAL: RevealSettings = RevealSettings {
    mode: RevealMode::OneShot,
    options: ObserverOptions {
        root_margin: "0px 0px -20% 0px",
        threshold: 0.2,
    },
    stagger_step_ms: 120,
};

pub const SERVICES_REVEAL: RevealSettings = RevealSettings {
    mode: RevealMode::Retrigger,
    options: ObserverOptions {
        root_margin: "0px 0px -20% 0px",
        threshold: 0.15,
    },
    stagger_step_ms: 140,
};

pub const PROCESS_REVEAL: RevealSettings = RevealSettings {
    mode: RevealMode::Retrigger,
    options: ObserverOptions {
        root_margin: "0px 0px -15% 0px",
        threshold: 0.15,
    },
    stagger_step_ms: 120,
};

impl RevealSettings {
    pub fn stagger_ms(&self, index: usize) -> u32 {
        stagger_delay_ms(index, self.stagger_step_ms)
    }
}

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealState {
    mode: RevealMode,
    revealed: bool,
}

impl RevealState {
    pub fn new(mode: RevealMode) -> Self {
        Self {
            mode,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// True once a one-shot reveal has fired; nothing can change it afterwards.
    pub fn is_settled(&self) -> bool {
        self.mode == RevealMode::OneShot && self.revealed
    }

    /// Returns true when the revealed flag changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let next = match self.mode {
            RevealMode::OneShot => self.revealed || intersecting,
            RevealMode::Retrigger => intersecting,
        };
        let changed = next != self.revealed;
        self.revealed = next;
        changed
    }
}

/// Watches one container and reports its reveal flag. A one-shot watch releases
/// its observation as soon as it reveals.
pub fn watch_reveal(
    observer: &dyn ViewportObserver,
    target_id: &'static str,
    settings: &RevealSettings,
    on_change: Callback<bool>,
) -> Observation {
    let state = Rc::new(RefCell::new(RevealState::new(settings.mode)));
    let slot: Rc<RefCell<Option<Observation>>> = Rc::default();

    let on_crossing = {
        let slot = slot.clone();
        Callback::from(move |crossings: Vec<Crossing>| {
            let settled = {
                let mut state = state.borrow_mut();
                for crossing in crossings.iter().filter(|c| c.id == target_id) {
                    if state.observe(crossing.intersecting) {
                        on_change.emit(state.is_revealed());
                    }
                    if state.is_settled() {
                        break;
                    }
                }
                state.is_settled()
            };
            if settled {
                debug!("reveal #{target_id} settled, releasing observer");
                let released = slot.borrow_mut().take();
                drop(released);
            }
        })
    };

    let observation = observer.observe(&[target_id], &settings.options, on_crossing);
    *slot.borrow_mut() = Some(observation);
    Observation::new(move || {
        let released = slot.borrow_mut().take();
        drop(released);
    })
}
