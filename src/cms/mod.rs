//! CMS: WPGraphQL access for page sections.
//!
//! DESIGN
//! ======
//! Every section issues exactly one named query. `CmsQuery` is the seam:
//! `CmsClient` talks HTTP, tests substitute a scripted mock. Section
//! loaders go through `query_section`, which is the only place a CMS
//! failure is turned into "no data": the error is logged and the section
//! simply does not render. Nothing retries and nothing times out.

pub mod client;
pub mod images;
pub mod types;

pub use client::CmsClient;
pub use images::{ImagePolicy, RestrictImages};
pub use types::{Button, CmsError, CmsQuery, Image, ImageNode, RichText, SectionQuery, decode};

/// Run `query` and decode its data into `T`.
///
/// # Errors
///
/// Returns the transport, envelope, or decode error.
pub async fn fetch<T>(cms: &dyn CmsQuery, query: &SectionQuery) -> Result<T, CmsError>
where
    T: serde::de::DeserializeOwned,
{
    let data = cms.execute(query).await?;
    decode(data)
}

/// Run `query` for a section; any failure is logged and becomes `None`.
pub async fn query_section<T>(cms: &dyn CmsQuery, query: &SectionQuery) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    match fetch(cms, query).await {
        Ok(response) => Some(response),
        Err(e) => {
            tracing::error!(section = query.section, operation = query.operation, error = %e, "cms query failed");
            None
        }
    }
}
