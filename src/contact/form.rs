//! Contact form state machine.
//!
//! `Idle -> Sending -> Sent | Failed`, and back to `Sending` on the next
//! submit. A submit while `Sending` is rejected. A successful send clears
//! the fields; a failed one keeps them so the visitor can retry.

use super::types::{ContactError, ContactFields, FeedbackResponse};

/// Shown when the endpoint cannot be reached or answers with garbage.
pub const TRANSPORT_FAILURE: &str = "Submission failed. Please try again.";

/// Shown when an identical submission is still being relayed.
pub const IN_PROGRESS: &str = "This message is already being sent.";

/// Shown when the endpoint rejects the submission without a message.
pub const REJECTED_FALLBACK: &str = "Message could not be sent.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl ContactStatus {
    /// Status line shown under the form.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Sending => "Sending...".to_owned(),
            Self::Sent => "✅ Message sent successfully!".to_owned(),
            Self::Failed(message) => format!("❌ {message}"),
        }
    }

    /// Map a relay result to the terminal status it produces.
    #[must_use]
    pub fn from_outcome(outcome: Result<FeedbackResponse, ContactError>) -> Self {
        match outcome {
            Ok(response) if response.is_sent() => Self::Sent,
            Ok(response) => {
                tracing::warn!(status = %response.status, "contact submission rejected");
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| REJECTED_FALLBACK.to_owned());
                Self::Failed(message)
            }
            Err(ContactError::InProgress) => {
                tracing::warn!("duplicate contact submission while one is in flight");
                Self::Failed(IN_PROGRESS.to_owned())
            }
            Err(e) => {
                tracing::error!(error = %e, "contact submission failed");
                Self::Failed(TRANSPORT_FAILURE.to_owned())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    status: ContactStatus,
    fields: ContactFields,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form showing `status` with the given retained fields.
    #[must_use]
    pub fn with_status(status: ContactStatus, fields: ContactFields) -> Self {
        Self { status, fields }
    }

    #[must_use]
    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    /// Enter `Sending` with the submitted fields.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::InProgress`] if a submit is already in flight.
    pub fn begin_submit(&mut self, fields: ContactFields) -> Result<(), ContactError> {
        if self.is_sending() {
            return Err(ContactError::InProgress);
        }
        self.fields = fields;
        self.status = ContactStatus::Sending;
        Ok(())
    }

    /// Apply the relay result. A finish without a pending submit is ignored.
    pub fn finish(&mut self, outcome: Result<FeedbackResponse, ContactError>) {
        if !self.is_sending() {
            return;
        }
        self.status = ContactStatus::from_outcome(outcome);
        if self.status == ContactStatus::Sent {
            self.fields = ContactFields::default();
        }
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
