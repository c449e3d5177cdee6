//! Client-side state of the two lead forms.
//!
//! Each form moves `Idle -> Loading -> Success | Error` on submit and is
//! brought back to `Idle` by [`ContactForm::settle`] / [`NewsletterForm::settle`]
//! once the confirmation has been on screen for the form's reset delay.
use crate::domain::{ContactSubmission, NewsletterSubmission};
use crate::webhook_client::WebhookClient;
use std::time::Duration;

pub const CONTACT_RESET_DELAY: Duration = Duration::from_secs(2);
pub const NEWSLETTER_RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl Default for FormStatus {
    fn default() -> Self {
        FormStatus::Idle
    }
}

/// Keeps a form in `Loading` until an outcome is recorded.
/// If the submit future is dropped first, the form goes back to `Idle`.
struct InFlight<'a> {
    status: &'a mut FormStatus,
    outcome: Option<FormStatus>,
}

impl<'a> InFlight<'a> {
    fn start(status: &'a mut FormStatus) -> Self {
        *status = FormStatus::Loading;
        Self {
            status,
            outcome: None,
        }
    }

    fn finish(mut self, outcome: FormStatus) -> FormStatus {
        self.outcome = Some(outcome);
        outcome
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.status = self.outcome.unwrap_or(FormStatus::Idle);
    }
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub budget: String,
    pub message: String,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterFormData {
    pub email: String,
}

#[derive(Debug)]
pub struct ContactForm {
    pub fields: ContactFormData,
    status: FormStatus,
    reset_delay: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFormData::default(),
            status: FormStatus::Idle,
            reset_delay: CONTACT_RESET_DELAY,
        }
    }

    pub fn with_reset_delay(mut self, reset_delay: Duration) -> Self {
        self.reset_delay = reset_delay;
        self
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn can_submit(&self) -> bool {
        !matches!(self.status, FormStatus::Loading | FormStatus::Success)
            && !self.fields.name.is_empty()
            && !self.fields.email.is_empty()
            && !self.fields.message.is_empty()
    }

    #[tracing::instrument(
        name = "Submitting the contact form",
        skip(self, webhook_client)
    )]
    pub async fn submit(&mut self, webhook_client: &WebhookClient) -> FormStatus {
        if !self.can_submit() {
            return self.status;
        }
        let in_flight = InFlight::start(&mut self.status);

        let submission: ContactSubmission = match self.fields.clone().try_into() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::warn!(error = %e, "Contact form holds invalid data");
                return in_flight.finish(FormStatus::Error);
            }
        };

        match webhook_client.submit_contact(&submission).await {
            Ok(()) => in_flight.finish(FormStatus::Success),
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to submit the contact form");
                in_flight.finish(FormStatus::Error)
            }
        }
    }

    /// After a success, waits for the reset delay and then clears the form.
    /// An error stays visible until the next submit.
    pub async fn settle(&mut self) {
        if self.status == FormStatus::Success {
            tokio::time::sleep(self.reset_delay).await;
            self.fields = ContactFormData::default();
            self.status = FormStatus::Idle;
        }
    }
}

#[derive(Debug)]
pub struct NewsletterForm {
    pub email: String,
    status: FormStatus,
    reset_delay: Duration,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            status: FormStatus::Idle,
            reset_delay: NEWSLETTER_RESET_DELAY,
        }
    }

    pub fn with_reset_delay(mut self, reset_delay: Duration) -> Self {
        self.reset_delay = reset_delay;
        self
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && self.status != FormStatus::Loading
    }

    #[tracing::instrument(
        name = "Submitting the newsletter form",
        skip(self, webhook_client)
    )]
    pub async fn submit(&mut self, webhook_client: &WebhookClient) -> FormStatus {
        if !self.can_submit() {
            return self.status;
        }
        let in_flight = InFlight::start(&mut self.status);

        let data = NewsletterFormData {
            email: self.email.clone(),
        };
        let submission: NewsletterSubmission = match data.try_into() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::warn!(error = %e, "Newsletter form holds an invalid email");
                return in_flight.finish(FormStatus::Error);
            }
        };

        match webhook_client.submit_newsletter(&submission).await {
            Ok(()) => {
                self.email.clear();
                in_flight.finish(FormStatus::Success)
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to submit the newsletter form");
                in_flight.finish(FormStatus::Error)
            }
        }
    }

    /// Both outcomes are shown for the reset delay before the form returns to idle.
    pub async fn settle(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            tokio::time::sleep(self.reset_delay).await;
            self.status = FormStatus::Idle;
        }
    }
}
