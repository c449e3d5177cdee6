use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use std::fmt::Formatter;

use crate::domain::NewsletterSubmission;
use crate::forms::NewsletterFormData;
use crate::routes::error_chain_fmt;
use crate::webhook_client::WebhookClient;

#[derive(thiserror::Error)]
pub enum NewsletterError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for NewsletterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for NewsletterError {
    fn status_code(&self) -> StatusCode {
        match self {
            NewsletterError::ValidationError(_) => StatusCode::BAD_REQUEST,
            NewsletterError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[tracing::instrument(
    name = "Relaying a newsletter signup",
    skip(form, webhook_client),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe_newsletter(
    form: web::Form<NewsletterFormData>,
    webhook_client: web::Data<WebhookClient>,
) -> Result<HttpResponse, NewsletterError> {
    let submission: NewsletterSubmission =
        form.0.try_into().map_err(NewsletterError::ValidationError)?;
    webhook_client
        .submit_newsletter(&submission)
        .await
        .context("Failed to deliver the newsletter signup to the CRM webhook")?;
    Ok(HttpResponse::Ok().finish())
}
