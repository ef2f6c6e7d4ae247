//! Origin extraction for the site base URL.
//!
//! The origin is the `scheme://host[:port]` part of a URL. Paths, queries,
//! fragments and credentials are dropped, and default ports are omitted.

use url::{Origin, Url};

use crate::error::ConfigError;

/// Parses `input` as an absolute URL.
///
/// Surrounding whitespace is ignored. Empty input is reported as a missing
/// value for `var` rather than as a parse failure.
///
/// # Errors
///
/// Returns [`ConfigError::MissingSiteUrl`] for empty input and
/// [`ConfigError::InvalidSiteUrl`] when the value is not an absolute URL.
pub fn parse_base_url(var: &str, input: &str) -> Result<Url, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::missing(var));
    }

    Url::parse(trimmed).map_err(|source| ConfigError::InvalidSiteUrl {
        value: input.to_string(),
        source,
    })
}

/// Serializes the origin of an already parsed URL.
///
/// # Errors
///
/// Returns [`ConfigError::OpaqueOrigin`] for URLs without a tuple origin,
/// such as `mailto:`, `data:` or `file:` URLs.
pub fn origin_of(url: &Url) -> Result<String, ConfigError> {
    match url.origin() {
        origin @ Origin::Tuple(..) => Ok(origin.ascii_serialization()),
        Origin::Opaque(_) => Err(ConfigError::OpaqueOrigin {
            value: url.to_string(),
        }),
    }
}

/// Derives the site origin from a raw URL string.
///
/// # Examples
///
/// ```
/// use site_config::utils::origin::site_origin;
///
/// assert_eq!(
///     site_origin("https://example.com/anything?x=1").unwrap(),
///     "https://example.com"
/// );
/// assert_eq!(
///     site_origin("https://example.com:8443/").unwrap(),
///     "https://example.com:8443"
/// );
/// assert!(site_origin("not a url").is_err());
/// ```
pub fn site_origin(input: &str) -> Result<String, ConfigError> {
    let url = parse_base_url(crate::constants::SITE_URL_ENV, input)?;
    origin_of(&url)
}
