use crate::config::SiteConfig;
use crate::services::scheduler::{GlooScheduler, Scheduler};
use crate::services::signals::{PanelSignal, SignalBus};
use crate::services::storage::{self, KeyValueStore};
use crate::services::viewport::{BrowserViewport, ViewportObserver};
use log::error;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Host capabilities and the page signal bus, shared with every section through
/// a Yew context.
#[derive(Clone)]
pub struct PageServices {
    pub config: Rc<SiteConfig>,
    pub scheduler: Rc<dyn Scheduler>,
    pub viewport: Rc<dyn ViewportObserver>,
    pub storage: Rc<dyn KeyValueStore>,
    pub signals: SignalBus<PanelSignal>,
}

impl PartialEq for PageServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && self.signals == other.signals
    }
}

impl PageServices {
    pub fn browser(config: SiteConfig) -> Self {
        Self {
            config: Rc::new(config),
            scheduler: Rc::new(GlooScheduler),
            viewport: Rc::new(BrowserViewport),
            storage: storage::local_or_memory(),
            signals: SignalBus::new(),
        }
    }
}

thread_local! {
    static DETACHED: RefCell<Option<PageServices>> = RefCell::new(None);
}

/// Services for sections mounted without a provider. Built once, so every such
/// section still shares one signal bus.
fn detached(build: impl FnOnce() -> PageServices) -> PageServices {
    DETACHED.with(|slot| slot.borrow_mut().get_or_insert_with(build).clone())
}

#[hook]
pub fn use_page_services() -> PageServices {
    use_context::<PageServices>().unwrap_or_else(|| {
        detached(|| {
            error!("section rendered outside the page services provider");
            PageServices::browser(SiteConfig::default())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scheduler::VirtualScheduler;
    use crate::services::storage::MemoryStorage;
    use crate::services::viewport::FakeViewport;
    use std::cell::Cell;

    fn clear_detached() {
        DETACHED.with(|slot| slot.borrow_mut().take());
    }

    fn in_memory() -> PageServices {
        PageServices {
            config: Rc::new(SiteConfig::default()),
            scheduler: Rc::new(VirtualScheduler::new()),
            viewport: Rc::new(FakeViewport::new()),
            storage: Rc::new(MemoryStorage::default()),
            signals: SignalBus::new(),
        }
    }

    #[test]
    fn detached_services_are_built_once() {
        clear_detached();
        let builds = Cell::new(0);
        let build = || {
            builds.set(builds.get() + 1);
            in_memory()
        };
        let first = detached(build);
        let second = detached(build);
        assert_eq!(builds.get(), 1);
        assert!(first == second);
    }

    #[test]
    fn detached_sections_share_one_bus() {
        clear_detached();
        let opener = detached(in_memory);
        let panel = detached(in_memory);
        let seen = Rc::new(Cell::new(0));
        let _sub = {
            let seen = seen.clone();
            panel
                .signals
                .subscribe(Callback::from(move |_: PanelSignal| seen.set(seen.get() + 1)))
        };
        opener.signals.dispatch(PanelSignal::OpenChat);
        assert_eq!(seen.get(), 1);
    }
}
