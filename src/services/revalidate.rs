//! Page revalidation: serve generated page data, regenerate when stale.
//!
//! DESIGN
//! ======
//! The cache holds the last generated `PageData` and when it was built.
//! Fresh data is served as-is. Stale data is still served, and one
//! background task regenerates it; further requests keep getting the stale
//! copy until the task swaps in the new one. An empty cache generates
//! synchronously. Startup fills it with `warm` before the listener binds,
//! so requests never race each other to the first generation.
//!
//! A regeneration replaces the cached data wholesale, including sections
//! that failed this time. Nothing is merged across generations.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::info;

use crate::cms::CmsQuery;
use crate::config::SiteConfig;
use crate::page::{PageData, load_page};

struct CachedPage {
    data: Arc<PageData>,
    generated_at: Instant,
}

struct Inner {
    entry: RwLock<Option<CachedPage>>,
    regenerating: AtomicBool,
}

#[derive(Clone)]
pub struct PageCache {
    cms: Arc<dyn CmsQuery>,
    config: Arc<SiteConfig>,
    inner: Arc<Inner>,
}

impl PageCache {
    #[must_use]
    pub fn new(cms: Arc<dyn CmsQuery>, config: Arc<SiteConfig>) -> Self {
        let inner = Inner { entry: RwLock::new(None), regenerating: AtomicBool::new(false) };
        Self { cms, config, inner: Arc::new(inner) }
    }

    fn ttl(&self) -> Duration {
        self.config.revalidate
    }

    /// Current page data, generating or scheduling regeneration as needed.
    pub async fn get(&self) -> Arc<PageData> {
        let cached = {
            let entry = self.inner.entry.read().await;
            entry.as_ref().map(|page| (Arc::clone(&page.data), page.generated_at.elapsed()))
        };

        match cached {
            Some((data, age)) if age < self.ttl() => data,
            Some((data, age)) => {
                self.spawn_regeneration(age);
                data
            }
            None => self.regenerate().await,
        }
    }

    /// Generate the page once before serving; returns the number of
    /// sections that loaded. Requests after this find a filled cache.
    pub async fn warm(&self) -> usize {
        self.get().await.loaded()
    }

    /// Whether a background regeneration is running.
    #[must_use]
    pub fn is_regenerating(&self) -> bool {
        self.inner.regenerating.load(Ordering::Acquire)
    }

    async fn regenerate(&self) -> Arc<PageData> {
        let started = Instant::now();
        let data = Arc::new(load_page(self.cms.as_ref(), &self.config).await);
        info!(
            loaded = data.loaded(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "page data generated"
        );

        let mut entry = self.inner.entry.write().await;
        *entry = Some(CachedPage { data: Arc::clone(&data), generated_at: Instant::now() });
        data
    }

    fn spawn_regeneration(&self, age: Duration) {
        if self
            .inner
            .regenerating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        info!(age_secs = age.as_secs(), "page data stale; regenerating in background");
        let cache = self.clone();
        tokio::spawn(async move {
            cache.regenerate().await;
            cache.inner.regenerating.store(false, Ordering::Release);
        });
    }
}

#[cfg(test)]
#[path = "revalidate_test.rs"]
mod tests;
