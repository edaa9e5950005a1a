//! WPGraphQL HTTP client.
//!
//! Thin wrapper that POSTs one named document and unwraps the GraphQL
//! envelope. Pure parsing in `parse_response` for testability.

use super::types::{CmsError, CmsQuery, SectionQuery};

// =============================================================================
// CLIENT
// =============================================================================

pub struct CmsClient {
    endpoint: String,
}

impl CmsClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl CmsQuery for CmsClient {
    async fn execute(&self, query: &SectionQuery) -> Result<serde_json::Value, CmsError> {
        // One client per request: concurrent loaders share no connection state.
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| CmsError::HttpClientBuild(e.to_string()))?;

        let body = ApiRequest { query: query.document, operation_name: query.operation };

        let response = http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(CmsError::Status { status: status.as_u16(), body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<ApiErrorEntry>>,
}

#[derive(serde::Deserialize)]
struct ApiErrorEntry {
    #[serde(default)]
    message: String,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<serde_json::Value, CmsError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| CmsError::Parse(e.to_string()))?;

    if let Some(errors) = api.errors.filter(|errors| !errors.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(CmsError::GraphQl(messages.join("; ")));
    }

    match api.data {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(CmsError::MissingData),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
