use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use detailing_browser_contracts::{BookingView, BrowsingContext, ContextHandle};
use detailing_core_booking_contracts::{
    BookingFeatureService, BookingSubmitError, SubmissionHandle, SubmissionPhase, SubmitReceipt,
    ValidationFailure,
};
use detailing_models::{
    animation::Transition,
    booking::{
        BookingEmail, BookingPhone, BookingRequest, FormattedMessage, InvalidField,
        ValidBookingRequest,
    },
    channel::{ChannelEndpoints, ChannelUri},
    device::DeviceClass,
};
use detailing_shared_contracts::time::{earliest_booking_date, TimeService};
use tokio::task::AbortHandle;
use tracing::{debug, info, instrument, warn};

mod message;
#[cfg(test)]
mod tests;

pub const INVALID_EMAIL_NOTICE: &str = "Please enter a valid email address";
pub const INVALID_PHONE_NOTICE: &str = "Please enter a valid phone number";
pub const POPUP_BLOCKED_NOTICE: &str = "Pop-up blocked! Please allow pop-ups for this site and \
                                        try again, or click the WhatsApp link in the success \
                                        message.";

#[derive(Debug)]
pub struct BookingFeatureServiceImpl<Browser, View, Time> {
    inner: Arc<Inner<Browser, View, Time>>,
}

#[derive(Debug, Clone)]
pub struct BookingFeatureConfig {
    pub business_name: String,
    pub channel: ChannelEndpoints,
    /// Delay between accepting a submission and dispatching it.
    pub submit_delay: Duration,
    /// Delay between navigating to the app link and opening the web fallback
    /// on mobile devices.
    pub fallback_delay: Duration,
    /// Number of days after today of the earliest bookable date.
    pub min_lead_days: u32,
}

#[derive(Debug)]
struct Inner<Browser, View, Time> {
    browser: Browser,
    view: View,
    time: Time,
    config: BookingFeatureConfig,
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    phase: SubmissionPhase,
    /// Incremented by every submission and reset. A scheduled dispatch only
    /// touches the state while its generation is current.
    generation: u64,
    /// The scheduled submission, until its dispatch starts.
    task: Option<AbortHandle>,
}

impl<Browser, View, Time> Clone for BookingFeatureServiceImpl<Browser, View, Time> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Browser, View, Time> BookingFeatureServiceImpl<Browser, View, Time>
where
    Browser: BrowsingContext,
    View: BookingView,
    Time: TimeService,
{
    pub fn new(browser: Browser, view: View, time: Time, config: BookingFeatureConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                browser,
                view,
                time,
                config,
                state: Mutex::new(State {
                    phase: SubmissionPhase::Idle,
                    generation: 0,
                    task: None,
                }),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_min_date(&self) {
        let date = earliest_booking_date(&self.inner.time, self.inner.config.min_lead_days);
        self.inner.view.set_min_date(date);
    }

    async fn complete_submission(
        self,
        generation: u64,
        message: FormattedMessage,
        device: DeviceClass,
        manual_uri: ChannelUri,
    ) {
        let view = &self.inner.view;

        tokio::time::sleep(self.inner.config.submit_delay).await;

        // Past this point the message is on its way. A reset only restores the
        // form and no longer cancels the dispatch.
        {
            let mut state = self.state();
            if state.generation != generation {
                return;
            }
            state.task = None;
            view.set_submit_pending(false);
        }

        let reveal = async {
            view.play(Transition::FormExit).await;

            {
                let mut state = self.state();
                if state.generation != generation {
                    debug!("Booking form was reset before the success panel was shown");
                    return;
                }
                view.set_form_visible(false);
                view.set_success_visible(true);
                view.set_manual_link(&manual_uri);
                state.phase = SubmissionPhase::Submitted;
            }

            view.play(Transition::SuccessEntrance).await;
        };

        tokio::join!(self.dispatch(&message, device), reveal);
    }
}

impl<Browser, View, Time> BookingFeatureService for BookingFeatureServiceImpl<Browser, View, Time>
where
    Browser: BrowsingContext,
    View: BookingView,
    Time: TimeService,
{
    fn init(&self) {
        self.apply_min_date();
    }

    #[instrument(skip_all)]
    fn validate(&self, request: BookingRequest) -> Result<ValidBookingRequest, ValidationFailure> {
        let email = BookingEmail::try_new(request.email.clone());
        let phone = BookingPhone::try_new(request.phone.clone());

        let mut fields = Vec::new();
        if email.is_err() {
            self.inner.browser.alert(INVALID_EMAIL_NOTICE);
            fields.push(InvalidField::Email);
        }
        if phone.is_err() {
            self.inner.browser.alert(INVALID_PHONE_NOTICE);
            fields.push(InvalidField::Phone);
        }

        match (email, phone) {
            (Ok(email), Ok(phone)) => Ok(request.into_valid(email, phone)),
            _ => {
                debug!(?fields, "Booking request failed validation");
                Err(ValidationFailure { fields })
            }
        }
    }

    fn compose(&self, request: &ValidBookingRequest) -> FormattedMessage {
        message::compose(&self.inner.config.business_name, request)
    }

    async fn dispatch(&self, message: &FormattedMessage, device: DeviceClass) {
        let browser = &self.inner.browser;
        let channel = &self.inner.config.channel;

        match device {
            DeviceClass::Mobile => {
                let uri = channel.app_uri(message);
                info!(%uri, "Opening messaging app");
                browser.navigate(&uri);

                // There is no way to tell whether the app took over, so the
                // web link is always opened as well.
                tokio::time::sleep(self.inner.config.fallback_delay).await;
                let fallback = channel.alternate_uri(message);
                info!(uri = %fallback, "Opening messaging fallback link");
                browser.open(&fallback);
            }
            DeviceClass::Desktop => {
                let uri = channel.web_uri(message);
                info!(%uri, "Opening messaging web client");
                if browser.open(&uri) != Some(ContextHandle::OPEN) {
                    warn!("Messaging web client was blocked, retrying with the alternate link");
                    browser.alert(POPUP_BLOCKED_NOTICE);
                    browser.open(&channel.alternate_uri(message));
                }
            }
        }
    }

    async fn submit(&self, request: BookingRequest) -> Result<SubmitReceipt, BookingSubmitError> {
        ensure_idle(self.phase())?;

        let request = self.validate(request)?;

        let generation = {
            let mut state = self.state();
            ensure_idle(state.phase)?;
            state.phase = SubmissionPhase::Pending;
            state.generation += 1;
            state.generation
        };

        self.inner.view.set_submit_pending(true);

        let message = self.compose(&request);
        let device = DeviceClass::classify(&self.inner.browser.platform_signature());
        let channel = &self.inner.config.channel;
        let primary_uri = channel.primary_uri(device, &message);
        let manual_uri = channel.manual_uri(device, &message);
        info!(%device, uri = %primary_uri, "Scheduling booking request dispatch");

        // Spawned under the lock so the task cannot detach itself before its
        // abort handle is stored.
        let task = {
            let mut state = self.state();
            let task = tokio::spawn(self.clone().complete_submission(
                generation,
                message.clone(),
                device,
                manual_uri.clone(),
            ));
            if state.generation == generation {
                state.task = Some(task.abort_handle());
            } else {
                // reset while composing
                task.abort();
            }
            task
        };

        Ok(SubmitReceipt {
            message,
            device,
            primary_uri,
            manual_uri,
            handle: SubmissionHandle::new(task),
        })
    }

    async fn reset(&self) {
        // Only a submission that has not been dispatched yet still owns its
        // task and its pending submit control.
        let task = {
            let mut state = self.state();
            state.generation += 1;
            state.phase = SubmissionPhase::Idle;
            state.task.take()
        };

        let cancelled = task.is_some();
        if let Some(task) = task {
            task.abort();
            info!("Cancelled pending booking request dispatch");
        }

        let view = &self.inner.view;
        view.set_success_visible(false);
        view.set_form_visible(true);
        view.clear_fields();
        if cancelled {
            view.set_submit_pending(false);
        }
        self.apply_min_date();
        view.play(Transition::FormEntrance).await;
    }

    fn phase(&self) -> SubmissionPhase {
        self.state().phase
    }
}

fn ensure_idle(phase: SubmissionPhase) -> Result<(), BookingSubmitError> {
    match phase {
        SubmissionPhase::Idle => Ok(()),
        SubmissionPhase::Pending => Err(BookingSubmitError::InProgress),
        SubmissionPhase::Submitted => Err(BookingSubmitError::AlreadySubmitted),
    }
}
