use thiserror::Error;

/// The FAQ accordion. At most one answer is expanded at a time.
pub trait FaqFeatureService: Send + Sync + 'static {
    /// Handles a click on the question of the item at `index`. Collapses the
    /// item if it is expanded and otherwise expands it in place of the
    /// currently expanded one.
    fn question_clicked(&self, index: usize) -> Result<(), FaqQuestionError>;

    /// The index of the expanded item.
    fn open_item(&self) -> Option<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FaqQuestionError {
    #[error("There is no FAQ item with index {index}, the page has {count}.")]
    UnknownItem { index: usize, count: usize },
}
