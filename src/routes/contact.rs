//! Contact form post-back route.
//!
//! The browser posts the form as `multipart/form-data`; the handler relays
//! it and answers with the home page showing the outcome. Bad input is
//! reported on the form, never as a bare error response, and any text the
//! visitor typed before the body broke off is kept.

use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use tracing::warn;

use crate::contact::types::field;
use crate::contact::{self, Attachment, ContactError, ContactForm, ContactStatus, ContactSubmission};
use crate::page::{PageData, render_document};
use crate::state::AppState;

const INVALID_FORM: &str = "The form could not be read. Please try again.";
const TOO_LARGE: &str = "The attachment is too large.";

/// `POST /contact`: relay the submission, then render the page with its status.
pub async fn submit(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> (StatusCode, Html<String>) {
    let mut submission = ContactSubmission::default();
    let (status, form) = match read_submission(multipart, &mut submission).await {
        Ok(()) => {
            let form = contact::send(state.relay.as_ref(), &state.in_flight, &submission).await;
            (StatusCode::OK, form)
        }
        Err(rejected) => {
            warn!(error = %rejected.error, "contact form body rejected");
            let status = ContactStatus::Failed(rejected.message.to_owned());
            (rejected.status, ContactForm::with_status(status, submission.fields))
        }
    };

    let data = state.pages.get().await;
    (status, Html(render_document(PageData::clone(&data), form)))
}

struct Rejected {
    status: StatusCode,
    message: &'static str,
    error: ContactError,
}

impl From<MultipartRejection> for Rejected {
    fn from(e: MultipartRejection) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: INVALID_FORM, error: ContactError::InvalidForm(e.body_text()) }
    }
}

impl From<MultipartError> for Rejected {
    fn from(e: MultipartError) -> Self {
        let (status, message) = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            (StatusCode::PAYLOAD_TOO_LARGE, TOO_LARGE)
        } else {
            (StatusCode::BAD_REQUEST, INVALID_FORM)
        };
        Self { status, message, error: ContactError::InvalidForm(e.body_text()) }
    }
}

/// Fill `submission` part by part. On error it holds whatever was read.
async fn read_submission(
    multipart: Result<Multipart, MultipartRejection>,
    submission: &mut ContactSubmission,
) -> Result<(), Rejected> {
    let mut multipart = multipart?;

    while let Some(part) = multipart.next_field().await? {
        let name = part.name().map(str::to_owned);
        match name.as_deref() {
            Some(field::NAME) => submission.fields.name = part.text().await?,
            Some(field::EMAIL) => submission.fields.email = part.text().await?,
            Some(field::MESSAGE) => submission.fields.message = part.text().await?,
            Some(field::FILE) => submission.attachment = read_attachment(part).await?,
            _ => {}
        }
    }

    Ok(())
}

/// A file part, or `None` when the visitor chose no file.
async fn read_attachment(part: Field<'_>) -> Result<Option<Attachment>, MultipartError> {
    let file_name = part.file_name().unwrap_or_default().to_owned();
    let content_type = part.content_type().map(str::to_owned);
    let bytes = part.bytes().await?;

    if file_name.is_empty() && bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(Attachment { file_name, content_type, bytes: bytes.to_vec() }))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
