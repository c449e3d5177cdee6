use crate::domain::{ContactSubmission, NewsletterSubmission};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

const CONTACT_SOURCE: &str = "Oasis Website 3D Form";
const CONTACT_TAGS: [&str; 2] = ["website-lead", "3d-contact-form"];
const CONTACT_LEAD_SOURCE: &str = "Interactive 3D Website";

const NEWSLETTER_SOURCE: &str = "Oasis Website Newsletter";
const NEWSLETTER_TAGS: [&str; 2] = ["newsletter-signup", "website-visitor"];
const NEWSLETTER_SIGNUP_SOURCE: &str = "Interactive 3D Website Newsletter";

/// Delivers leads to the CRM's inbound webhooks.
///
/// Every request is bounded by the timeout given to [`WebhookClient::new`];
/// a failed delivery is reported once and never retried.
pub struct WebhookClient {
    http_client: Client,
    contact_url: Secret<String>,
    newsletter_url: Secret<String>,
}

impl WebhookClient {
    pub fn new(
        contact_url: Secret<String>,
        newsletter_url: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            contact_url,
            newsletter_url,
        })
    }

    #[tracing::instrument(name = "Posting contact lead to CRM webhook", skip_all)]
    pub async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), reqwest::Error> {
        let (first_name, last_name) = submission.name.first_and_last();
        let body = ContactPayload {
            first_name,
            last_name,
            email: submission.email.as_ref(),
            phone: submission.phone.as_str(),
            budget: submission.budget.as_str(),
            message: submission.message.as_ref(),
            source: CONTACT_SOURCE,
            tags: CONTACT_TAGS,
            custom_fields: ContactCustomFields {
                budget_range: submission.budget.as_str(),
                project_details: submission.message.as_ref(),
                lead_source: CONTACT_LEAD_SOURCE,
            },
        };
        self.post_json(&self.contact_url, &body).await
    }

    #[tracing::instrument(name = "Posting newsletter signup to CRM webhook", skip_all)]
    pub async fn submit_newsletter(
        &self,
        submission: &NewsletterSubmission,
    ) -> Result<(), reqwest::Error> {
        let body = NewsletterPayload {
            email: submission.email.as_ref(),
            source: NEWSLETTER_SOURCE,
            tags: NEWSLETTER_TAGS,
            custom_fields: NewsletterCustomFields {
                signup_source: NEWSLETTER_SIGNUP_SOURCE,
            },
        };
        self.post_json(&self.newsletter_url, &body).await
    }

    async fn post_json<T: serde::Serialize>(
        &self,
        url: &Secret<String>,
        body: &T,
    ) -> Result<(), reqwest::Error> {
        // `json` sets Content-Type: application/json
        self.http_client
            .post(url.expose_secret().as_str())
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactPayload<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: &'a str,
    budget: &'a str,
    message: &'a str,
    source: &'a str,
    tags: [&'a str; 2],
    custom_fields: ContactCustomFields<'a>,
}

#[derive(serde::Serialize)]
struct ContactCustomFields<'a> {
    budget_range: &'a str,
    project_details: &'a str,
    lead_source: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct NewsletterPayload<'a> {
    email: &'a str,
    source: &'a str,
    tags: [&'a str; 2],
    custom_fields: NewsletterCustomFields<'a>,
}

#[derive(serde::Serialize)]
struct NewsletterCustomFields<'a> {
    signup_source: &'a str,
}
