use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use std::fmt::Formatter;

use crate::domain::ContactSubmission;
use crate::forms::ContactFormData;
use crate::routes::error_chain_fmt;
use crate::webhook_client::WebhookClient;

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[tracing::instrument(
    name = "Relaying a contact form lead",
    skip(form, webhook_client),
    fields(
        lead_email = %form.email,
        lead_name = %form.name
    )
)]
pub async fn submit_contact(
    form: web::Form<ContactFormData>,
    webhook_client: web::Data<WebhookClient>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = form.0.try_into().map_err(ContactError::ValidationError)?;
    webhook_client
        .submit_contact(&submission)
        .await
        .context("Failed to deliver the contact lead to the CRM webhook")?;
    Ok(HttpResponse::Ok().finish())
}
