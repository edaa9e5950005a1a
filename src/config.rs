//! Site configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Read once at startup and shared behind an `Arc` afterwards. Nothing in
//! the crate reads the environment after `SiteConfig::from_env` returns;
//! loaders and the contact relay receive the config by reference.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REVALIDATE_SECS: u64 = 60;
pub const DEFAULT_CONTACT_FORM_ID: u32 = 1553;
pub const DEFAULT_IMAGE_DOMAINS: &str = "dev.metatagg.ca";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set or is empty.
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    /// A variable is set but cannot be used.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// GraphQL endpoint of the CMS.
    pub api_url: String,
    /// Base URL of the CMS site, without trailing slash.
    pub site_url: String,
    pub port: u16,
    /// How long generated page data may be served before regeneration.
    pub revalidate: Duration,
    pub contact_form_id: u32,
    /// Hosts allowed to serve CMS images.
    pub image_domains: Vec<String>,
    pub static_dir: String,
    pub max_upload_bytes: usize,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Required:
    /// - `WORDPRESS_API_URL`: GraphQL endpoint
    /// - `WORDPRESS_URL`: CMS base URL for the contact form endpoint
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `REVALIDATE_SECS`: default 60
    /// - `CONTACT_FORM_ID`: default 1553
    /// - `IMAGE_DOMAINS`: comma separated, default `dev.metatagg.ca`
    /// - `STATIC_DIR`: default `public`
    /// - `CONTACT_MAX_UPLOAD_BYTES`: default 10 MiB
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a URL is not
    /// absolute http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = required_url("WORDPRESS_API_URL")?;
        let site_url = required_url("WORDPRESS_URL")?.trim_end_matches('/').to_string();

        let image_domains = parse_domains(
            std::env::var("IMAGE_DOMAINS")
                .ok()
                .as_deref()
                .unwrap_or(DEFAULT_IMAGE_DOMAINS),
        );

        Ok(Self {
            api_url,
            site_url,
            port: env_parse("PORT", DEFAULT_PORT),
            revalidate: Duration::from_secs(env_parse("REVALIDATE_SECS", DEFAULT_REVALIDATE_SECS)),
            contact_form_id: env_parse("CONTACT_FORM_ID", DEFAULT_CONTACT_FORM_ID),
            image_domains,
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
            max_upload_bytes: env_parse("CONTACT_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        })
    }

    /// Contact Form 7 feedback endpoint for the configured form.
    #[must_use]
    pub fn contact_feedback_url(&self) -> String {
        format!(
            "{}/wp-json/contact-form-7/v1/contact-forms/{}/feedback",
            self.site_url, self.contact_form_id
        )
    }
}

fn required_url(var: &'static str) -> Result<String, ConfigError> {
    let raw = std::env::var(var).unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ConfigError::Missing { var });
    }

    let parsed = url::Url::parse(raw).map_err(|e| ConfigError::Invalid { var, reason: e.to_string() })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid { var, reason: format!("unsupported scheme '{}'", parsed.scheme()) });
    }

    Ok(raw.to_string())
}

fn parse_domains(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().to_ascii_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
