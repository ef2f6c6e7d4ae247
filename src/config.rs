//! Site configuration resolved once at startup.
//!
//! Branding values come from [`crate::constants`]; the only external input is
//! the deployed site's absolute URL, read from the `SITE` environment
//! variable. The resulting [`SiteConfig`] is immutable and is meant to be
//! passed explicitly to whatever renders pages or metadata.
//!
//! ```bash
//! export SITE="https://arejula27.dev"
//! ```
//!
//! ## Required Variables
//!
//! - `SITE` - Absolute `http(s)` URL of the deployed site
//!
//! A missing, empty or malformed `SITE` aborts startup. There is no default
//! origin.

use serde::Serialize;
use std::env;
use url::Url;

use crate::constants::{MY_NAME, SITE_DESCRIPTION, SITE_TITLE, SITE_URL_ENV, TWITTER_HANDLE};
use crate::error::ConfigError;
use crate::utils::origin::{origin_of, parse_base_url};

/// Longest handle accepted after the leading `@`.
const MAX_HANDLE_LEN: usize = 15;

/// Frozen site configuration.
///
/// `base_url` and `site_url` are private so the origin always matches the
/// parsed base URL. The branding fields are plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub twitter_handle: String,
    pub author_name: String,
    base_url: Url,
    site_url: String,
}

impl SiteConfig {
    /// Builds the configuration from the crate constants and `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is empty, malformed or has an opaque
    /// origin.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::with_var(SITE_URL_ENV, base_url)
    }

    /// Loads configuration from the `SITE` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSiteUrl`] when `SITE` is unset or empty,
    /// [`ConfigError::NotUnicode`] when it is not valid UTF-8, and a parse
    /// error when it is not an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var(SITE_URL_ENV).map_err(|e| match e {
            env::VarError::NotPresent => ConfigError::missing(SITE_URL_ENV),
            env::VarError::NotUnicode(_) => ConfigError::NotUnicode {
                var: SITE_URL_ENV.to_string(),
            },
        })?;

        Self::with_var(SITE_URL_ENV, &raw)
    }

    fn with_var(var: &str, raw: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(var, raw)?;
        let site_url = origin_of(&base_url)?;

        tracing::debug!(base_url = %base_url, site_url = %site_url, "Resolved site origin");

        Ok(Self {
            title: SITE_TITLE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            twitter_handle: TWITTER_HANDLE.to_string(),
            author_name: MY_NAME.to_string(),
            base_url,
            site_url,
        })
    }

    /// Base URL exactly as parsed from `SITE`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Origin of the base URL (`scheme://host[:port]`).
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if:
    /// - `title` or `author_name` is blank
    /// - `twitter_handle` is not `@` followed by 1-15 letters, digits or `_`
    /// - `base_url` is not an `http` or `https` URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::invalid("title", "must not be empty"));
        }

        if self.author_name.trim().is_empty() {
            return Err(ConfigError::invalid("author_name", "must not be empty"));
        }

        let Some(name) = self.twitter_handle.strip_prefix('@') else {
            return Err(ConfigError::invalid(
                "twitter_handle",
                format!("must start with '@', got '{}'", self.twitter_handle),
            ));
        };
        if name.is_empty()
            || name.len() > MAX_HANDLE_LEN
            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::invalid(
                "twitter_handle",
                format!(
                    "must be 1-{MAX_HANDLE_LEN} letters, digits or '_' after '@', got '{}'",
                    self.twitter_handle
                ),
            ));
        }

        match self.base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::invalid(
                    "base_url",
                    format!("only http and https are allowed, got '{other}'"),
                ));
            }
        }

        Ok(())
    }

    /// Resolves a site-relative path against the origin.
    ///
    /// Used for canonical links and social-card image URLs. The result
    /// always shares the site origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSiteUrl`] if `path` cannot be joined and
    /// [`ConfigError::Invalid`] if it points outside the site, as absolute
    /// (`https://other/x`, `mailto:`) or protocol-relative (`//other/x`)
    /// inputs do.
    ///
    /// # Examples
    ///
    /// ```
    /// use site_config::SiteConfig;
    ///
    /// let config = SiteConfig::new("https://example.com/ignored/").unwrap();
    /// let url = config.absolute_url("/blog/hello").unwrap();
    /// assert_eq!(url.as_str(), "https://example.com/blog/hello");
    /// assert!(config.absolute_url("//other.example/x").is_err());
    /// ```
    pub fn absolute_url(&self, path: &str) -> Result<Url, ConfigError> {
        let origin = Url::parse(&self.site_url).map_err(|source| ConfigError::InvalidSiteUrl {
            value: self.site_url.clone(),
            source,
        })?;

        let joined = origin
            .join(path)
            .map_err(|source| ConfigError::InvalidSiteUrl {
                value: path.to_string(),
                source,
            })?;

        if joined.origin().ascii_serialization() != self.site_url {
            return Err(ConfigError::invalid(
                "path",
                format!("'{path}' resolves outside {}", self.site_url),
            ));
        }

        Ok(joined)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Site configuration loaded:");
        tracing::info!("  Title: {}", self.title);
        tracing::info!("  Author: {}", self.author_name);
        tracing::info!("  Twitter: {}", self.twitter_handle);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Site URL: {}", self.site_url);
    }
}

/// Loads and validates configuration from environment variables.
///
/// This is the single initialization step for the site configuration. Call
/// it once at startup and pass the result down; an error must abort the
/// build.
///
/// # Errors
///
/// Returns an error if `SITE` is missing or malformed, or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<SiteConfig, ConfigError> {
    let config = SiteConfig::from_env()?;
    config.validate()?;
    Ok(config)
}
