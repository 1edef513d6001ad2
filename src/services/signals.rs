//! Typed in-process publish/subscribe. Any control can open a panel without holding
//! a reference to it: the page owns one [`SignalBus`] and panels subscribe to it.

use log::debug;
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;
use yew::Callback;

/// Requests that open one of the page overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSignal {
    OpenContact,
    OpenChat,
}

impl PanelSignal {
    pub fn name(self) -> &'static str {
        match self {
            PanelSignal::OpenContact => "open-contact",
            PanelSignal::OpenChat => "open-chat",
        }
    }
}

struct Registry<S> {
    next_key: u64,
    subscribers: Vec<(u64, Callback<S>)>,
}

pub struct SignalBus<S> {
    registry: Rc<RefCell<Registry<S>>>,
}

impl<S> Clone for SignalBus<S> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<S> PartialEq for SignalBus<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl<S: Clone + Debug + 'static> Default for SignalBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Debug + 'static> SignalBus<S> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_key: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, on_signal: Callback<S>) -> Subscription {
        let key = {
            let mut registry = self.registry.borrow_mut();
            registry.next_key += 1;
            let key = registry.next_key;
            registry.subscribers.push((key, on_signal));
            key
        };
        let registry = Rc::downgrade(&self.registry);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().subscribers.retain(|(k, _)| *k != key);
                }
            })),
        }
    }

    /// Delivers `signal` to every current subscriber, in subscription order.
    pub fn dispatch(&self, signal: S) {
        let subscribers: Vec<Callback<S>> = self
            .registry
            .borrow()
            .subscribers
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        debug!("signal {signal:?} -> {} subscriber(s)", subscribers.len());
        for subscriber in subscribers {
            subscriber.emit(signal.clone());
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }
}

/// Dropping a subscription unsubscribes.
#[must_use = "dropping a Subscription unsubscribes"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(bus: &SignalBus<PanelSignal>) -> (Rc<RefCell<Vec<PanelSignal>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = seen.clone();
            bus.subscribe(Callback::from(move |s| seen.borrow_mut().push(s)))
        };
        (seen, subscription)
    }

    #[test]
    fn every_subscriber_receives_dispatch() {
        let bus = SignalBus::new();
        let (first, _a) = recorder(&bus);
        let (second, _b) = recorder(&bus);

        bus.dispatch(PanelSignal::OpenChat);

        assert_eq!(*first.borrow(), vec![PanelSignal::OpenChat]);
        assert_eq!(*second.borrow(), vec![PanelSignal::OpenChat]);
    }

    #[test]
    fn dropped_subscription_stops_receiving() {
        let bus = SignalBus::new();
        let (seen, subscription) = recorder(&bus);
        bus.dispatch(PanelSignal::OpenContact);
        drop(subscription);
        bus.dispatch(PanelSignal::OpenContact);

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_one_channel() {
        let bus = SignalBus::new();
        let (seen, _sub) = recorder(&bus);
        let other = bus.clone();
        other.dispatch(PanelSignal::OpenContact);
        assert_eq!(*seen.borrow(), vec![PanelSignal::OpenContact]);
        assert!(bus == other);
    }

    #[test]
    fn signal_names_match_event_names() {
        assert_eq!(PanelSignal::OpenContact.name(), "open-contact");
        assert_eq!(PanelSignal::OpenChat.name(), "open-chat");
    }
}
