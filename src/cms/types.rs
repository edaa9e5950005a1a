//! CMS types: shared record shapes, errors, and the query seam.
//!
//! Section-specific shapes live next to their loaders in `crate::sections`.
//! The types here are the pieces every section reuses: images, buttons,
//! trusted rich text.

use serde::{Deserialize, Serialize};

use super::images::ImagePolicy;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by CMS query operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CmsError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the CMS failed before a response arrived.
    #[error("CMS request failed: {0}")]
    Request(String),

    /// The CMS returned a non-success HTTP status.
    #[error("CMS response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body is not a GraphQL JSON envelope.
    #[error("CMS response parse failed: {0}")]
    Parse(String),

    /// The GraphQL response carried an `errors` member.
    #[error("GraphQL errors: {0}")]
    GraphQl(String),

    /// The GraphQL response had no `data` member.
    #[error("GraphQL response has no data")]
    MissingData,

    /// `data` did not match the expected section shape.
    #[error("CMS data decode failed: {0}")]
    Decode(String),
}

// =============================================================================
// QUERY
// =============================================================================

/// A fixed, named GraphQL document belonging to one page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionQuery {
    /// Section name used in log fields.
    pub section: &'static str,
    /// GraphQL operation name, sent as `operationName`.
    pub operation: &'static str,
    pub document: &'static str,
}

/// Async seam over the GraphQL endpoint. Enables mocking in tests.
#[async_trait::async_trait]
pub trait CmsQuery: Send + Sync {
    /// Execute one query document and return the GraphQL `data` member.
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] on transport failure, non-success status,
    /// malformed envelope, GraphQL errors, or missing data.
    async fn execute(&self, query: &SectionQuery) -> Result<serde_json::Value, CmsError>;
}

// =============================================================================
// SHARED RECORDS
// =============================================================================

/// A media item as exposed by WPGraphQL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub alt_text: Option<String>,
    pub source_url: Option<String>,
}

impl Image {
    /// Non-empty source URL, if any.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.source_url.as_deref().filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        self.alt_text.as_deref().unwrap_or_default()
    }

    /// Clear the source URL when the policy does not permit its host.
    pub fn restrict(&mut self, policy: &ImagePolicy) {
        if let Some(src) = self.src() {
            if !policy.permits(src) {
                tracing::warn!(src, "dropping image from non-allowed host");
                self.source_url = None;
            }
        }
    }
}

/// Connection edge wrapping a single image (`{ node { ... } }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageNode {
    pub node: Option<Image>,
}

impl ImageNode {
    /// The wrapped image, only when it has a usable source URL.
    #[must_use]
    pub fn image(&self) -> Option<&Image> {
        self.node.as_ref().filter(|img| img.src().is_some())
    }

    pub fn restrict(&mut self, policy: &ImagePolicy) {
        if let Some(node) = self.node.as_mut() {
            node.restrict(policy);
        }
    }
}

/// ACF link field rendered as a button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    pub title: Option<String>,
    pub url: Option<String>,
    pub target: Option<String>,
}

impl Button {
    #[must_use]
    pub fn href(&self) -> String {
        self.url.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.title.clone().unwrap_or_default()
    }

    /// Link target, omitted when empty.
    #[must_use]
    pub fn target(&self) -> Option<String> {
        self.target.clone().filter(|t| !t.is_empty())
    }
}

/// CMS-authored markup. Trusted and rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub String);

impl RichText {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

// =============================================================================
// DECODE
// =============================================================================

/// Deserialize a GraphQL list that may itself be null or hold null entries.
///
/// A null list is empty. A null entry becomes `T::default()`, so the list
/// keeps its length and each entry renders as an empty block.
///
/// # Errors
///
/// Propagates errors for values that are neither null nor a list of `T`.
pub fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// Strict boundary from untyped `data` to a typed section response.
///
/// # Errors
///
/// Returns [`CmsError::Decode`] if `data` does not match `T`.
pub fn decode<T>(data: serde_json::Value) -> Result<T, CmsError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(data).map_err(|e| CmsError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
