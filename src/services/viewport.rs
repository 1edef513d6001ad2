//! Viewport intersection capability.
//!
//! The browser implementation wraps `IntersectionObserver`. Targets are looked up by
//! element id; ids with no element in the document are skipped without error.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    /// CSS margin applied to the viewport before intersecting, e.g. `"0px 0px -20% 0px"`.
    pub root_margin: &'static str,
    pub threshold: f64,
}

/// One intersection change reported for an observed element.
#[derive(Clone, Debug, PartialEq)]
pub struct Crossing {
    pub id: String,
    pub intersecting: bool,
}

impl Crossing {
    pub fn new(id: impl Into<String>, intersecting: bool) -> Self {
        Self {
            id: id.into(),
            intersecting,
        }
    }
}

pub trait ViewportObserver {
    /// Starts watching the elements with the given ids. Every batch of crossings is
    /// delivered to `on_crossing` in document order until the observation is dropped.
    fn observe(
        &self,
        ids: &[&str],
        options: &ObserverOptions,
        on_crossing: Callback<Vec<Crossing>>,
    ) -> Observation;
}

/// A live observation. Dropping it stops delivery.
#[must_use = "dropping an Observation stops it"]
pub struct Observation {
    release: Option<Box<dyn FnOnce()>>,
}

impl Observation {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// An observation that watches nothing.
    pub fn inert() -> Self {
        Self { release: None }
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

pub struct BrowserViewport;

impl ViewportObserver for BrowserViewport {
    fn observe(
        &self,
        ids: &[&str],
        options: &ObserverOptions,
        on_crossing: Callback<Vec<Crossing>>,
    ) -> Observation {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Observation::inert();
        };

        let targets: Vec<Element> = ids
            .iter()
            .filter_map(|id| {
                let element = document.get_element_by_id(id);
                if element.is_none() {
                    debug!("viewport: no element #{id}, not observing it");
                }
                element
            })
            .collect();
        if targets.is_empty() {
            return Observation::inert();
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let crossings = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| Crossing::new(entry.target().id(), entry.is_intersecting()))
                    .collect();
                on_crossing.emit(crossings);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("viewport: IntersectionObserver unavailable: {err:?}");
                    return Observation::inert();
                }
            };
        for target in &targets {
            observer.observe(target);
        }

        Observation::new(move || {
            observer.disconnect();
            drop(callback);
        })
    }
}

#[cfg(test)]
pub use fake::FakeViewport;

#[cfg(test)]
mod fake {
    use super::{Crossing, Observation, ObserverOptions, ViewportObserver};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use yew::Callback;

    struct Watch {
        key: u64,
        ids: Vec<String>,
        options: ObserverOptions,
        on_crossing: Callback<Vec<Crossing>>,
    }

    /// Viewport stand-in: tests decide which elements exist and when they cross.
    #[derive(Clone, Default)]
    pub struct FakeViewport {
        watches: Rc<RefCell<Vec<Watch>>>,
        next_key: Rc<Cell<u64>>,
        // None means every id is present in the document
        present: Option<Rc<Vec<String>>>,
    }

    impl FakeViewport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_elements(ids: &[&str]) -> Self {
            Self {
                present: Some(Rc::new(ids.iter().map(|id| id.to_string()).collect())),
                ..Self::default()
            }
        }

        pub fn enter(&self, id: &str) {
            self.cross(&[(id, true)]);
        }

        pub fn leave(&self, id: &str) {
            self.cross(&[(id, false)]);
        }

        /// Delivers one batch. Each live watch receives the crossings for its own ids.
        pub fn cross(&self, batch: &[(&str, bool)]) {
            let deliveries: Vec<(Callback<Vec<Crossing>>, Vec<Crossing>)> = self
                .watches
                .borrow()
                .iter()
                .filter_map(|watch| {
                    let crossings: Vec<Crossing> = batch
                        .iter()
                        .filter(|(id, _)| watch.ids.iter().any(|w| w == id))
                        .map(|(id, intersecting)| Crossing::new(*id, *intersecting))
                        .collect();
                    (!crossings.is_empty()).then(|| (watch.on_crossing.clone(), crossings))
                })
                .collect();
            for (on_crossing, crossings) in deliveries {
                on_crossing.emit(crossings);
            }
        }

        pub fn live_watches(&self) -> usize {
            self.watches.borrow().len()
        }

        pub fn watched_ids(&self) -> Vec<String> {
            self.watches
                .borrow()
                .iter()
                .flat_map(|w| w.ids.iter().cloned())
                .collect()
        }

        pub fn last_options(&self) -> Option<ObserverOptions> {
            self.watches.borrow().last().map(|w| w.options.clone())
        }
    }

    impl ViewportObserver for FakeViewport {
        fn observe(
            &self,
            ids: &[&str],
            options: &ObserverOptions,
            on_crossing: Callback<Vec<Crossing>>,
        ) -> Observation {
            let ids: Vec<String> = ids
                .iter()
                .filter(|id| match &self.present {
                    Some(present) => present.iter().any(|p| p == *id),
                    None => true,
                })
                .map(|id| id.to_string())
                .collect();
            if ids.is_empty() {
                return Observation::inert();
            }

            let key = self.next_key.get() + 1;
            self.next_key.set(key);
            self.watches.borrow_mut().push(Watch {
                key,
                ids,
                options: options.clone(),
                on_crossing,
            });

            let watches = Rc::downgrade(&self.watches);
            Observation::new(move || {
                if let Some(watches) = watches.upgrade() {
                    let removed: Vec<Watch> = {
                        let mut watches = watches.borrow_mut();
                        let (gone, kept): (Vec<Watch>, Vec<Watch>) =
                            watches.drain(..).partition(|w| w.key == key);
                        *watches = kept;
                        gone
                    };
                    drop(removed);
                }
            })
        }
    }
}
