use detailing_models::page::PageSection;

/// The navigation bar and its collapsible menu shown on narrow screens.
pub trait NavFeatureService: Send + Sync + 'static {
    /// Opens the menu if it is closed and closes it otherwise.
    fn toggle(&self);

    /// Closes the menu after one of its links was followed.
    fn link_clicked(&self);

    /// Handles a click anywhere on the page. The menu closes unless the click
    /// landed inside the menu or on its toggle.
    fn document_clicked(&self, target: ClickTarget);

    /// Handles the page being scrolled to `offset`. Updates the navigation bar
    /// style and highlights the link of the section that has been reached.
    fn scrolled(&self, offset: f64, sections: &[PageSection]);

    fn is_open(&self) -> bool;

    fn is_scrolled(&self) -> bool;

    /// The id of the section whose link is highlighted.
    fn active_section(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// The menu itself or the hamburger toggle.
    Menu,
    Outside,
}
