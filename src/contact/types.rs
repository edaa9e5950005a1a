//! Contact types: submission payload, relay response, errors, and the relay
//! seam.

use serde::Deserialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while accepting or relaying a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the form endpoint failed before a response arrived.
    #[error("contact request failed: {0}")]
    Request(String),

    /// The form endpoint returned a non-success status without a readable body.
    #[error("contact response error: status {status}")]
    Status { status: u16, body: String },

    /// The form endpoint response body could not be deserialized.
    #[error("contact response parse failed: {0}")]
    Parse(String),

    /// The inbound multipart body could not be read.
    #[error("invalid form submission: {0}")]
    InvalidForm(String),

    /// A submission is already being relayed for this form.
    #[error("a submission is already in progress")]
    InProgress,
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// Text fields of the contact form. Retained across a failed submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Uploaded file forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub fields: ContactFields,
    pub attachment: Option<Attachment>,
}

/// Multipart field names expected by the form endpoint.
pub mod field {
    pub const NAME: &str = "your-name";
    pub const EMAIL: &str = "your-email";
    pub const MESSAGE: &str = "your-message";
    pub const FILE: &str = "your-file";
}

// =============================================================================
// RELAY
// =============================================================================

/// Contact Form 7 feedback response. Only `status` and `message` are read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedbackResponse {
    pub status: String,
    pub message: Option<String>,
}

impl FeedbackResponse {
    pub const MAIL_SENT: &'static str = "mail_sent";

    #[must_use]
    pub fn is_sent(&self) -> bool {
        self.status == Self::MAIL_SENT
    }
}

/// Async seam over the form endpoint. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ContactRelay: Send + Sync {
    /// Forward one submission and return the endpoint's verdict.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactError`] on transport failure or an unreadable
    /// response.
    async fn submit(&self, submission: &ContactSubmission) -> Result<FeedbackResponse, ContactError>;
}
