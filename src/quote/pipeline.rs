//! Quote submission state machine.
//!
//! `Idle -> Validating -> (Submitting) -> Idle`. Every attempt ends back in
//! `Idle`, so one pipeline can be submitted again after fixing errors.

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::models::{QuoteForm, QuoteRequest};
use super::relay::{QuoteRelay, RelayPayload};
use super::validation::{validate, QuoteValidationError};

pub const SUCCESS_MESSAGE: &str = "Дякуємо за заявку! Ми зв'яжемося з вами найближчим часом.";

/// Message shown when the relay could not take the request.
pub fn failure_message(fallback_phone: &str) -> String {
    format!(
        "Виникла помилка при відправці. Будь ласка, зателефонуйте нам: {}",
        fallback_phone
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Validating,
    Submitting,
}

/// What happened to one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Relay accepted the request; fields were cleared
    Sent,
    /// Honeypot was filled; dropped without a word
    Suppressed,
    /// A field rule failed; nothing was sent
    Rejected(QuoteValidationError),
    /// Relay or network failure; fields kept for a manual retry
    Failed,
    /// Another attempt on this form is still in flight
    Busy,
}

/// Banner shown next to the form after an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// One contact form instance and its submission state.
#[derive(Debug, Clone)]
pub struct QuotePipeline {
    request: QuoteRequest,
    honeypot: String,
    status: SubmissionStatus,
    notice: Option<Notice>,
    invalid_field: Option<&'static str>,
}

impl Default for QuotePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotePipeline {
    /// Empty form, as freshly rendered
    pub fn new() -> Self {
        Self {
            request: QuoteRequest::default(),
            honeypot: String::new(),
            status: SubmissionStatus::Idle,
            notice: None,
            invalid_field: None,
        }
    }

    /// Form filled in from a post
    pub fn from_form(form: QuoteForm) -> Self {
        Self {
            request: form.request,
            honeypot: form.honeypot,
            ..Self::new()
        }
    }

    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }

    /// Field-by-field edits while the form is idle
    pub fn request_mut(&mut self) -> &mut QuoteRequest {
        &mut self.request
    }

    pub fn set_honeypot(&mut self, value: impl Into<String>) {
        self.honeypot = value.into();
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Whether the submit control should be disabled
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Name of the field that failed validation on the last attempt
    pub fn invalid_field(&self) -> Option<&'static str> {
        self.invalid_field
    }

    /// Validate and, if everything passes, hand the request to the relay.
    ///
    /// `services` are the titles the service dropdown offers and
    /// `fallback_phone` is quoted to the customer if delivery fails.
    pub async fn submit(
        &mut self,
        relay: &dyn QuoteRelay,
        services: &[&str],
        fallback_phone: &str,
    ) -> SubmissionOutcome {
        if self.status != SubmissionStatus::Idle {
            debug!("Submission ignored, form is {:?}", self.status);
            return SubmissionOutcome::Busy;
        }

        let attempt_id = Uuid::new_v4();
        self.notice = None;
        self.invalid_field = None;
        self.status = SubmissionStatus::Validating;

        if !self.honeypot.is_empty() {
            debug!(%attempt_id, "Honeypot filled, dropping submission");
            self.status = SubmissionStatus::Idle;
            return SubmissionOutcome::Suppressed;
        }

        if let Err(err) = validate(&self.request, services) {
            debug!(%attempt_id, field = err.field(), "Quote request rejected");
            self.notice = Some(Notice::Error(err.to_string()));
            self.invalid_field = Some(err.field());
            self.status = SubmissionStatus::Idle;
            return SubmissionOutcome::Rejected(err);
        }

        self.status = SubmissionStatus::Submitting;
        let payload = RelayPayload::from_request(&self.request);
        let result = relay.deliver(&payload).await;
        self.status = SubmissionStatus::Idle;

        match result {
            Ok(()) => {
                info!(%attempt_id, service = %payload.service, "Quote request delivered");
                self.request = QuoteRequest::default();
                self.notice = Some(Notice::Success(SUCCESS_MESSAGE.to_string()));
                SubmissionOutcome::Sent
            }
            Err(err) => {
                warn!(%attempt_id, error = %err, "Quote request delivery failed");
                self.notice = Some(Notice::Error(failure_message(fallback_phone)));
                SubmissionOutcome::Failed
            }
        }
    }
}
