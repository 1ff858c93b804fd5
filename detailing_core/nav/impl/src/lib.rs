use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, PoisonError,
};

use detailing_browser_contracts::NavView;
use detailing_core_nav_contracts::{ClickTarget, NavFeatureService};
use detailing_models::page::{active_section, PageSection, NAVBAR_SCROLL_THRESHOLD};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct NavFeatureServiceImpl<View> {
    view: View,
    state: Arc<State>,
}

#[derive(Debug, Default)]
struct State {
    open: AtomicBool,
    scrolled: AtomicBool,
    active_section: Mutex<Option<String>>,
}

impl<View: NavView> NavFeatureServiceImpl<View> {
    pub fn new(view: View) -> Self {
        Self {
            view,
            state: Default::default(),
        }
    }

    fn close(&self) {
        trace!("Closing navigation menu");
        self.state.open.store(false, Ordering::Relaxed);
        self.view.set_menu_active(false);
    }
}

impl<View: NavView> NavFeatureService for NavFeatureServiceImpl<View> {
    fn toggle(&self) {
        let open = !self.state.open.fetch_xor(true, Ordering::Relaxed);
        trace!(open, "Toggled navigation menu");
        self.view.set_menu_active(open);
    }

    fn link_clicked(&self) {
        self.close();
    }

    fn document_clicked(&self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.close();
        }
    }

    fn scrolled(&self, offset: f64, sections: &[PageSection]) {
        let scrolled = offset > NAVBAR_SCROLL_THRESHOLD;
        if self.state.scrolled.swap(scrolled, Ordering::Relaxed) != scrolled {
            trace!(scrolled, "Navigation bar style changed");
            self.view.set_scrolled(scrolled);
        }

        let active = active_section(sections, offset).map(|section| section.id.clone());
        let mut current = self
            .state
            .active_section
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *current != active {
            trace!(?active, "Active section changed");
            current.clone_from(&active);
            self.view.set_active_section(active);
        }
    }

    fn is_open(&self) -> bool {
        self.state.open.load(Ordering::Relaxed)
    }

    fn is_scrolled(&self) -> bool {
        self.state.scrolled.load(Ordering::Relaxed)
    }

    fn active_section(&self) -> Option<String> {
        self.state
            .active_section
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
