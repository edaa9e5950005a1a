//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One server-rendered page at `/`, the contact form's post-back at
//! `/contact`, static images under `/images`, and a health probe.

pub mod contact;
pub mod home;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let images = ServeDir::new(&state.config.static_dir);
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(home::home))
        .route("/contact", post(contact::submit).layer(DefaultBodyLimit::max(upload_limit)))
        .route("/healthz", get(healthz))
        .nest_service("/images", images)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
