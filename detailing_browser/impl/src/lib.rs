//! A browsing context and page views rendering to the terminal, used to
//! drive the page from the command line.

use std::{
    io::Write,
    sync::{Arc, Mutex, PoisonError},
};

use chrono::NaiveDate;
use detailing_browser_contracts::{
    BookingView, BrowsingContext, ContextHandle, FaqView, NavView,
};
use detailing_models::{animation::Transition, channel::ChannelUri};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct TerminalBrowsingContext {
    signature: String,
    popups_blocked: bool,
    out: Output,
}

impl TerminalBrowsingContext {
    pub fn new(signature: impl Into<String>, popups_blocked: bool) -> Self {
        Self {
            signature: signature.into(),
            popups_blocked,
            out: Output::Stdout,
        }
    }

    /// Returns a browsing context writing into a shared buffer instead of
    /// stdout.
    pub fn buffered(signature: impl Into<String>, popups_blocked: bool) -> (Self, Buffer) {
        let buffer = Buffer::default();
        let context = Self {
            out: Output::Buffer(buffer.clone()),
            ..Self::new(signature, popups_blocked)
        };
        (context, buffer)
    }
}

impl BrowsingContext for TerminalBrowsingContext {
    fn platform_signature(&self) -> String {
        self.signature.clone()
    }

    fn navigate(&self, uri: &ChannelUri) {
        info!(%uri, "Navigating");
        self.out.line(&format!("navigate {uri}"));
    }

    fn open(&self, uri: &ChannelUri) -> Option<ContextHandle> {
        if self.popups_blocked {
            info!(%uri, "Blocked new browsing context");
            return None;
        }
        info!(%uri, "Opening new browsing context");
        self.out.line(&format!("open {uri}"));
        Some(ContextHandle::OPEN)
    }

    fn alert(&self, message: &str) {
        self.out.line(&format!("alert {message}"));
    }
}

#[derive(Debug, Clone, Default)]
pub struct TerminalBookingView {
    out: Output,
}

impl TerminalBookingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffered() -> (Self, Buffer) {
        let buffer = Buffer::default();
        let view = Self {
            out: Output::Buffer(buffer.clone()),
        };
        (view, buffer)
    }
}

impl BookingView for TerminalBookingView {
    fn set_submit_pending(&self, pending: bool) {
        let label = if pending {
            "Preparing WhatsApp..."
        } else {
            "Send Booking Request"
        };
        self.out.line(&format!("button {label}"));
    }

    fn set_form_visible(&self, visible: bool) {
        debug!(visible, "Booking form visibility changed");
    }

    fn set_success_visible(&self, visible: bool) {
        if visible {
            self.out.line("success Booking request prepared");
        }
    }

    fn set_manual_link(&self, uri: &ChannelUri) {
        self.out.line(&format!("link {uri}"));
    }

    fn clear_fields(&self) {
        debug!("Booking form cleared");
    }

    fn set_min_date(&self, date: NaiveDate) {
        debug!(%date, "Earliest booking date set");
    }

    async fn play(&self, transition: Transition) {
        let tween = transition.tween();
        debug!(?transition, ease = %tween.ease, "Playing transition");
        tokio::time::sleep(tween.duration).await;
    }
}

#[derive(Debug, Clone, Default)]
pub struct TerminalNavView {
    out: Output,
}

impl TerminalNavView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffered() -> (Self, Buffer) {
        let buffer = Buffer::default();
        let view = Self {
            out: Output::Buffer(buffer.clone()),
        };
        (view, buffer)
    }
}

impl NavView for TerminalNavView {
    fn set_menu_active(&self, active: bool) {
        self.out.line(if active { "menu open" } else { "menu closed" });
    }

    fn set_scrolled(&self, scrolled: bool) {
        self.out.line(if scrolled { "navbar scrolled" } else { "navbar top" });
    }

    fn set_active_section(&self, id: Option<String>) {
        self.out.line(&format!("section {}", id.as_deref().unwrap_or("none")));
    }
}

#[derive(Debug, Clone, Default)]
pub struct TerminalFaqView {
    out: Output,
}

impl TerminalFaqView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffered() -> (Self, Buffer) {
        let buffer = Buffer::default();
        let view = Self {
            out: Output::Buffer(buffer.clone()),
        };
        (view, buffer)
    }
}

impl FaqView for TerminalFaqView {
    fn set_item_open(&self, index: usize, open: bool) {
        let state = if open { "open" } else { "closed" };
        self.out.line(&format!("faq {index} {state}"));
    }
}

#[derive(Debug, Clone, Default)]
enum Output {
    #[default]
    Stdout,
    Buffer(Buffer),
}

impl Output {
    fn line(&self, line: &str) {
        match self {
            Self::Stdout => {
                let _ = writeln!(std::io::stdout().lock(), "{line}");
            }
            Self::Buffer(buffer) => buffer.push(line),
        }
    }
}

/// Lines written by a buffered terminal implementation.
#[derive(Debug, Clone, Default)]
pub struct Buffer(Arc<Mutex<Vec<String>>>);

impl Buffer {
    fn push(&self, line: &str) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.into());
    }

    pub fn lines(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
