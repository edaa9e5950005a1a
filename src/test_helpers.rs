//! Shared fixtures for unit tests: a scripted CMS, a scripted contact relay,
//! and an in-process HTTP server for client tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::cms::{CmsError, CmsQuery, SectionQuery};
use crate::contact::{ContactError, ContactRelay, ContactSubmission, FeedbackResponse};

// =========================================================================
// MockCms
// =========================================================================

/// Scripted CMS keyed by GraphQL operation name. Unscripted operations fail
/// like an unreachable endpoint.
#[derive(Default)]
pub struct MockCms {
    responses: HashMap<&'static str, Result<serde_json::Value, CmsError>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockCms {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, operation: &'static str, data: serde_json::Value) -> Self {
        self.responses.insert(operation, Ok(data));
        self
    }

    #[must_use]
    pub fn failing(mut self, operation: &'static str, err: CmsError) -> Self {
        self.responses.insert(operation, Err(err));
        self
    }

    /// Operation names executed so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CmsQuery for MockCms {
    async fn execute(&self, query: &SectionQuery) -> Result<serde_json::Value, CmsError> {
        self.calls.lock().unwrap().push(query.operation);
        self.responses
            .get(query.operation)
            .cloned()
            .unwrap_or_else(|| Err(CmsError::Request("connection refused".into())))
    }
}

// =========================================================================
// MockRelay
// =========================================================================

/// Contact relay returning one fixed result and recording what it received.
pub struct MockRelay {
    result: Result<FeedbackResponse, ContactError>,
    submissions: Mutex<Vec<ContactSubmission>>,
}

impl MockRelay {
    #[must_use]
    pub fn answering(status: &str, message: &str) -> Self {
        let response = FeedbackResponse { status: status.to_owned(), message: Some(message.to_owned()) };
        Self { result: Ok(response), submissions: Mutex::new(Vec::new()) }
    }

    #[must_use]
    pub fn failing(err: ContactError) -> Self {
        Self { result: Err(err), submissions: Mutex::new(Vec::new()) }
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContactRelay for MockRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<FeedbackResponse, ContactError> {
        self.submissions.lock().unwrap().push(submission.clone());
        self.result.clone()
    }
}

// =========================================================================
// In-process server
// =========================================================================

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Rendered markup with hydration markers removed, trimmed.
#[must_use]
pub fn visible(html: &str) -> String {
    html.replace("<!>", "").trim().to_string()
}
