use std::sync::{Arc, Mutex, PoisonError};

use detailing_browser_contracts::FaqView;
use detailing_core_faq_contracts::{FaqFeatureService, FaqQuestionError};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct FaqFeatureServiceImpl<View> {
    view: View,
    config: FaqFeatureConfig,
    open: Arc<Mutex<Option<usize>>>,
}

#[derive(Debug, Clone)]
pub struct FaqFeatureConfig {
    /// Number of items in the accordion.
    pub items: usize,
}

impl<View: FaqView> FaqFeatureServiceImpl<View> {
    pub fn new(view: View, config: FaqFeatureConfig) -> Self {
        Self {
            view,
            config,
            open: Default::default(),
        }
    }
}

impl<View: FaqView> FaqFeatureService for FaqFeatureServiceImpl<View> {
    fn question_clicked(&self, index: usize) -> Result<(), FaqQuestionError> {
        if index >= self.config.items {
            return Err(FaqQuestionError::UnknownItem {
                index,
                count: self.config.items,
            });
        }

        let mut open = self.open.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = open.take();
        if let Some(previous) = previous {
            self.view.set_item_open(previous, false);
        }
        if previous != Some(index) {
            self.view.set_item_open(index, true);
            *open = Some(index);
        }
        trace!(open = ?*open, "FAQ accordion changed");

        Ok(())
    }

    fn open_item(&self) -> Option<usize> {
        *self.open.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
