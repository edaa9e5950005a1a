//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the site config, the contact relay with its in-flight registry,
//! and the page cache over the CMS. Every field is `Arc`-wrapped or cheap to clone.

use std::sync::Arc;

use crate::cms::{CmsClient, CmsQuery};
use crate::config::SiteConfig;
use crate::contact::{Cf7Client, ContactRelay, InFlight};
use crate::services::revalidate::PageCache;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub relay: Arc<dyn ContactRelay>,
    pub in_flight: InFlight,
    pub pages: PageCache,
}

impl AppState {
    #[must_use]
    pub fn new(config: SiteConfig, cms: Arc<dyn CmsQuery>, relay: Arc<dyn ContactRelay>) -> Self {
        let config = Arc::new(config);
        let pages = PageCache::new(cms, Arc::clone(&config));
        Self { config, relay, in_flight: InFlight::new(), pages }
    }

    /// State wired to the live CMS and Contact Form 7 endpoints.
    #[must_use]
    pub fn from_config(config: SiteConfig) -> Self {
        let cms = Arc::new(CmsClient::new(config.api_url.clone()));
        let relay = Arc::new(Cf7Client::from_config(&config));
        Self::new(config, cms, relay)
    }
}
