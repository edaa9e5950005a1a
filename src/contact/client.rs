//! Contact Form 7 REST client.
//!
//! Forwards a submission as `multipart/form-data` to the form's feedback
//! endpoint. Contact Form 7 answers with a JSON body on both success and
//! validation failure, so the body is read before the status is judged.

use reqwest::multipart::{Form, Part};

use super::types::{ContactError, ContactRelay, ContactSubmission, FeedbackResponse, field};
use crate::config::SiteConfig;

pub struct Cf7Client {
    endpoint: String,
}

impl Cf7Client {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.contact_feedback_url())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ContactRelay for Cf7Client {
    async fn submit(&self, submission: &ContactSubmission) -> Result<FeedbackResponse, ContactError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ContactError::HttpClientBuild(e.to_string()))?;

        let response = http
            .post(&self.endpoint)
            .multipart(build_form(submission)?)
            .send()
            .await
            .map_err(|e| ContactError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ContactError::Request(e.to_string()))?;

        parse_response(status.as_u16(), &text)
    }
}

fn build_form(submission: &ContactSubmission) -> Result<Form, ContactError> {
    let fields = &submission.fields;
    let mut form = Form::new()
        .text(field::NAME, fields.name.clone())
        .text(field::EMAIL, fields.email.clone())
        .text(field::MESSAGE, fields.message.clone());

    if let Some(attachment) = &submission.attachment {
        let mut part = Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone());
        if let Some(content_type) = &attachment.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| ContactError::InvalidForm(e.to_string()))?;
        }
        form = form.part(field::FILE, part);
    }

    Ok(form)
}

fn parse_response(status: u16, body: &str) -> Result<FeedbackResponse, ContactError> {
    match serde_json::from_str::<FeedbackResponse>(body) {
        Ok(response) => Ok(response),
        Err(_) if !(200..300).contains(&status) => Err(ContactError::Status { status, body: body.to_owned() }),
        Err(e) => Err(ContactError::Parse(e.to_string())),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
