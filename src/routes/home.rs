//! Home page route.

use axum::extract::State;
use axum::response::Html;

use crate::contact::ContactForm;
use crate::page::{PageData, render_document};
use crate::state::AppState;

/// `GET /`: render the home page from cached section data.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let data = state.pages.get().await;
    Html(render_document(PageData::clone(&data), ContactForm::new()))
}
