//! Page sections: one module per CMS-backed block of the home page.
//!
//! DESIGN
//! ======
//! Each section module owns three things: the typed response shape, the
//! fixed GraphQL document with its loader, and a leptos component that
//! renders the optional record. Loaders never fail; an absent record makes
//! the component render nothing, an absent field drops only its own markup.
//! Rich text is CMS-authored and injected as-is.

pub mod billboard;
pub mod footer;
pub mod funding;
pub mod header;
pub mod why;

use leptos::prelude::*;
use serde::Deserialize;

/// `pageBy { homepageSettings }` wrapper shared by the home page sections.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HomePageResponse<T> {
    page_by: Option<HomePageGroup<T>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HomePageGroup<T> {
    homepage_settings: Option<T>,
}

impl<T> HomePageResponse<T> {
    pub(crate) fn into_settings(self) -> Option<T> {
        self.page_by?.homepage_settings
    }
}

/// Keep a text field only when it has visible content.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Render a view to an HTML string inside a throwaway reactive owner.
pub fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}
