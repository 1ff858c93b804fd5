use std::future::Future;

use detailing_models::{
    booking::{BookingRequest, FormattedMessage, InvalidField, ValidBookingRequest},
    channel::ChannelUri,
    device::DeviceClass,
};
use thiserror::Error;
use tokio::task::JoinHandle;

pub trait BookingFeatureService: Send + Sync + 'static {
    /// Prepares a freshly rendered booking form.
    fn init(&self);

    /// Checks the email and phone fields, notifying the user about each
    /// invalid one.
    fn validate(&self, request: BookingRequest) -> Result<ValidBookingRequest, ValidationFailure>;

    /// Builds the message sent to the business.
    fn compose(&self, request: &ValidBookingRequest) -> FormattedMessage;

    /// Hands `message` to the messaging channel appropriate for `device`.
    fn dispatch(
        &self,
        message: &FormattedMessage,
        device: DeviceClass,
    ) -> impl Future<Output = ()> + Send;

    /// Validates and composes `request` and schedules its dispatch.
    ///
    /// Must be called from within a tokio runtime.
    fn submit(
        &self,
        request: BookingRequest,
    ) -> impl Future<Output = Result<SubmitReceipt, BookingSubmitError>> + Send;

    /// Cancels a pending submission and restores the empty form.
    fn reset(&self) -> impl Future<Output = ()> + Send;

    fn phase(&self) -> SubmissionPhase;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionPhase {
    Idle,
    /// The request has been accepted and its dispatch is scheduled.
    Pending,
    /// The success panel is shown.
    Submitted,
}

#[derive(Debug)]
pub struct SubmitReceipt {
    pub message: FormattedMessage,
    pub device: DeviceClass,
    pub primary_uri: ChannelUri,
    pub manual_uri: ChannelUri,
    pub handle: SubmissionHandle,
}

/// Handle to the scheduled dispatch of a submission.
#[derive(Debug)]
pub struct SubmissionHandle(JoinHandle<()>);

impl SubmissionHandle {
    pub fn new(task: JoinHandle<()>) -> Self {
        Self(task)
    }

    /// Waits for the dispatch to finish. Returns `false` if it was cancelled
    /// by a reset.
    pub async fn finished(self) -> bool {
        self.0.await.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid booking request fields: {}", field_list(.fields))]
pub struct ValidationFailure {
    /// The failing fields in the order they were checked.
    pub fields: Vec<InvalidField>,
}

fn field_list(fields: &[InvalidField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum BookingSubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),
    #[error("A booking request is already being submitted.")]
    InProgress,
    #[error("The booking request has already been submitted.")]
    AlreadySubmitted,
}
