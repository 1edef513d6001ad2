use crate::services::viewport::{Crossing, Observation, ObserverOptions, ViewportObserver};
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

/// Sections highlighted in the primary navigation, in document order.
pub const NAV_SECTIONS: &[&str] = &["about", "values", "services", "choose", "process"];

/// A band across the upper third of the viewport.
pub const SPY_OPTIONS: ObserverOptions = ObserverOptions {
    root_margin: "-30% 0px -60% 0px",
    threshold: 0.01,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSpy {
    sections: Vec<String>,
    active: Option<String>,
}

impl ScrollSpy {
    pub fn new(sections: &[&str]) -> Self {
        Self {
            sections: sections.iter().map(|s| s.to_string()).collect(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Applies one batch of crossings. The last section entering the band wins;
    /// leaving it changes nothing. Returns true when the active section changed.
    pub fn apply(&mut self, crossings: &[Crossing]) -> bool {
        let entered = crossings
            .iter()
            .filter(|c| c.intersecting && self.sections.contains(&c.id))
            .last();
        match entered {
            Some(crossing) if self.active.as_deref() != Some(crossing.id.as_str()) => {
                self.active = Some(crossing.id.clone());
                true
            }
            _ => false,
        }
    }
}

/// Watches `sections` and reports each new active section id.
pub fn track_sections(
    observer: &dyn ViewportObserver,
    sections: &[&str],
    on_active: Callback<String>,
) -> Observation {
    let spy = Rc::new(RefCell::new(ScrollSpy::new(sections)));
    let on_crossing = Callback::from(move |crossings: Vec<Crossing>| {
        let mut spy = spy.borrow_mut();
        if spy.apply(&crossings) {
            if let Some(active) = spy.active() {
                on_active.emit(active.to_string());
            }
        }
    });
    observer.observe(sections, &SPY_OPTIONS, on_crossing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::viewport::FakeViewport;

    fn tracked(viewport: &FakeViewport) -> (Rc<RefCell<Vec<String>>>, Observation) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let observation = {
            let seen = seen.clone();
            track_sections(
                viewport,
                &["a", "b", "c"],
                Callback::from(move |id| seen.borrow_mut().push(id)),
            )
        };
        (seen, observation)
    }

    #[test]
    fn latest_crossing_overwrites_active() {
        let viewport = FakeViewport::new();
        let (seen, _observation) = tracked(&viewport);

        viewport.enter("b");
        viewport.enter("a");

        assert_eq!(*seen.borrow(), vec!["b", "a"]);
    }

    #[test]
    fn same_frame_crossings_resolve_in_document_order() {
        let mut spy = ScrollSpy::new(&["a", "b", "c"]);
        let changed = spy.apply(&[Crossing::new("a", true), Crossing::new("c", true)]);
        assert!(changed);
        assert_eq!(spy.active(), Some("c"));
    }

    #[test]
    fn leaving_keeps_last_active() {
        let mut spy = ScrollSpy::new(&["a", "b"]);
        spy.apply(&[Crossing::new("b", true)]);
        assert!(!spy.apply(&[Crossing::new("b", false)]));
        assert_eq!(spy.active(), Some("b"));
    }

    #[test]
    fn starts_with_nothing_active_and_ignores_unknown_ids() {
        let mut spy = ScrollSpy::new(&["a"]);
        assert_eq!(spy.active(), None);
        assert!(!spy.apply(&[Crossing::new("hero", true)]));
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn missing_anchor_is_skipped() {
        let viewport = FakeViewport::with_elements(&["a", "c"]);
        let (seen, _observation) = tracked(&viewport);
        assert_eq!(viewport.watched_ids(), vec!["a", "c"]);

        viewport.enter("b");
        viewport.enter("c");
        assert_eq!(*seen.borrow(), vec!["c"]);
    }

    #[test]
    fn uses_the_upper_band() {
        let viewport = FakeViewport::new();
        let (_seen, _observation) = tracked(&viewport);
        assert_eq!(viewport.last_options(), Some(SPY_OPTIONS));
    }

    #[test]
    fn nav_watches_the_page_anchors() {
        assert_eq!(NAV_SECTIONS, &["about", "values", "services", "choose", "process"]);
    }
}
