//! Image host allow-list.
//!
//! CMS image URLs are only rendered when they are relative (no scheme, no
//! host) or come from a configured host. Anything else is stripped after decode so the
//! views never see it.

use crate::config::SiteConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePolicy {
    domains: Vec<String>,
}

impl ImagePolicy {
    #[must_use]
    pub fn new(domains: Vec<String>) -> Self {
        let domains = domains.into_iter().map(|d| d.to_ascii_lowercase()).collect();
        Self { domains }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.image_domains.clone())
    }

    /// Whether `src` may be used as an image source.
    ///
    /// Relative references such as `/images/a.png` or `images/a.png` are
    /// permitted. Protocol-relative `//host/...` references are not.
    #[must_use]
    pub fn permits(&self, src: &str) -> bool {
        if src.starts_with("//") {
            return false;
        }

        let parsed = match url::Url::parse(src) {
            Ok(parsed) => parsed,
            Err(url::ParseError::RelativeUrlWithoutBase) => return !src.trim().is_empty(),
            Err(_) => return false,
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }

        parsed
            .host_str()
            .map(str::to_ascii_lowercase)
            .is_some_and(|host| self.domains.iter().any(|d| *d == host))
    }
}

/// Records that carry CMS images and can drop the ones the policy rejects.
pub trait RestrictImages {
    fn restrict_images(&mut self, policy: &ImagePolicy);
}
