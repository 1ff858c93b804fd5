use serde::Deserialize;

/// Scroll offset past which the navigation bar switches to its scrolled style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// A section's navigation link becomes active this far before the section
/// reaches the top of the viewport.
pub const SECTION_ACTIVATION_LEAD: f64 = 200.0;

/// A section of the page that has a link in the navigation menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageSection {
    pub id: String,
    /// Offset of the section from the top of the document.
    pub top: f64,
}

/// Returns the section whose link is highlighted at the scroll `offset`,
/// which is the last section in document order that has been reached.
pub fn active_section(sections: &[PageSection], offset: f64) -> Option<&PageSection> {
    sections
        .iter()
        .rev()
        .find(|section| offset >= section.top - SECTION_ACTIVATION_LEAD)
}
