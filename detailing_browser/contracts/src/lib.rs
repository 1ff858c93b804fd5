//! Capabilities of the page hosting the booking form.

use std::future::Future;

use chrono::NaiveDate;
use detailing_models::{animation::Transition, channel::ChannelUri};

/// The window the page is displayed in.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BrowsingContext: Send + Sync + 'static {
    /// Returns the platform signature (user agent) of the environment.
    fn platform_signature(&self) -> String;

    /// Replaces the current document with `uri`.
    fn navigate(&self, uri: &ChannelUri);

    /// Opens `uri` in a new browsing context.
    ///
    /// Returns `None` if the environment refused to create one.
    fn open(&self, uri: &ChannelUri) -> Option<ContextHandle>;

    /// Shows a notification and blocks until the user dismisses it.
    fn alert(&self, message: &str);
}

/// Handle to a browsing context returned by [`BrowsingContext::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextHandle {
    pub closed: bool,
}

impl ContextHandle {
    pub const OPEN: Self = Self { closed: false };
    pub const CLOSED: Self = Self { closed: true };
}

/// The booking form, its submit control and the success panel.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BookingView: Send + Sync + 'static {
    /// Switches the submit control between its pending (disabled) and its
    /// normal state.
    fn set_submit_pending(&self, pending: bool);

    fn set_form_visible(&self, visible: bool);

    fn set_success_visible(&self, visible: bool);

    /// Points the manual link on the success panel to `uri`.
    fn set_manual_link(&self, uri: &ChannelUri);

    /// Clears all form fields.
    fn clear_fields(&self);

    /// Sets the earliest date the date input accepts.
    fn set_min_date(&self, date: NaiveDate);

    /// Plays `transition`, resolving once it has finished.
    fn play(&self, transition: Transition) -> impl Future<Output = ()> + Send;
}

/// The navigation bar with its hamburger toggle and menu.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NavView: Send + Sync + 'static {
    /// Adds or removes the `active` class on both the toggle and the menu.
    fn set_menu_active(&self, active: bool);

    /// Switches the navigation bar between its top and its scrolled style.
    fn set_scrolled(&self, scrolled: bool);

    /// Highlights the menu link of the section with the given id, or no link
    /// at all.
    fn set_active_section(&self, id: Option<String>);
}

/// The FAQ accordion.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FaqView: Send + Sync + 'static {
    /// Expands or collapses the answer of the item at `index`.
    fn set_item_open(&self, index: usize, open: bool);
}

#[cfg(feature = "mock")]
impl MockBrowsingContext {
    pub fn with_platform_signature(mut self, signature: &str) -> Self {
        self.expect_platform_signature()
            .once()
            .return_const(signature.to_owned());
        self
    }

    pub fn with_alert(mut self, message: &'static str) -> Self {
        self.expect_alert()
            .once()
            .withf(move |m| m == message)
            .return_const(());
        self
    }
}

#[cfg(feature = "mock")]
impl MockBookingView {
    /// Expects `transition` to be played once, completing immediately.
    pub fn with_play(mut self, transition: Transition) -> Self {
        self.expect_play()
            .once()
            .with(mockall::predicate::eq(transition))
            .returning(|_| Box::pin(std::future::ready(())));
        self
    }

    pub fn with_min_date(mut self, date: NaiveDate) -> Self {
        self.expect_set_min_date()
            .once()
            .with(mockall::predicate::eq(date))
            .return_const(());
        self
    }
}

#[cfg(feature = "mock")]
impl MockNavView {
    pub fn with_menu_active(mut self, active: bool) -> Self {
        self.expect_set_menu_active()
            .once()
            .with(mockall::predicate::eq(active))
            .return_const(());
        self
    }

    pub fn with_scrolled(mut self, scrolled: bool) -> Self {
        self.expect_set_scrolled()
            .once()
            .with(mockall::predicate::eq(scrolled))
            .return_const(());
        self
    }

    pub fn with_active_section(mut self, id: Option<&str>) -> Self {
        self.expect_set_active_section()
            .once()
            .with(mockall::predicate::eq(id.map(String::from)))
            .return_const(());
        self
    }
}

#[cfg(feature = "mock")]
impl MockFaqView {
    pub fn with_item_open(mut self, index: usize, open: bool) -> Self {
        self.expect_set_item_open()
            .once()
            .with(
                mockall::predicate::eq(index),
                mockall::predicate::eq(open),
            )
            .return_const(());
        self
    }
}
