use crate::services::signals::{PanelSignal, SignalBus, Subscription};
use log::debug;
use std::rc::Rc;
use yew::{Callback, Reducible};

/// Open/closed state shared by the contact drawer and the chat widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    /// The panel's signal arrived on the page bus.
    Signal,
    /// The panel's own launcher was pressed.
    Launcher,
    CloseButton,
    Backdrop,
    Escape,
    /// A form inside the panel was submitted successfully.
    Submitted,
}

impl PanelState {
    pub fn on(self, event: PanelEvent) -> Self {
        match event {
            PanelEvent::Signal | PanelEvent::Launcher => PanelState::Open,
            PanelEvent::CloseButton
            | PanelEvent::Backdrop
            | PanelEvent::Escape
            | PanelEvent::Submitted => PanelState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }
}

impl Reducible for PanelState {
    type Action = PanelEvent;

    fn reduce(self: Rc<Self>, event: PanelEvent) -> Rc<Self> {
        let next = self.on(event);
        if next == *self {
            return self;
        }
        debug!("panel {:?} -> {:?} on {:?}", *self, next, event);
        Rc::new(next)
    }
}

/// Subscribes a panel to the page bus. Only `opens_on` reaches it, as `PanelEvent::Signal`.
pub fn bind(
    bus: &SignalBus<PanelSignal>,
    opens_on: PanelSignal,
    on_event: Callback<PanelEvent>,
) -> Subscription {
    bus.subscribe(Callback::from(move |signal: PanelSignal| {
        if signal == opens_on {
            on_event.emit(PanelEvent::Signal);
        }
    }))
}
