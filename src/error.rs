//! Configuration errors.
//!
//! Every variant is fatal: configuration is resolved once at startup and
//! nothing downstream can run with a wrong or missing origin.

/// Errors raised while loading or validating the site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set to the site's absolute URL (e.g. https://example.com)")]
    MissingSiteUrl { var: String },

    #[error("{var} contains invalid unicode")]
    NotUnicode { var: String },

    #[error("Invalid site URL '{value}': {source}")]
    InvalidSiteUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Site URL '{value}' has no host-based origin")]
    OpaqueOrigin { value: String },

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn missing(var: impl Into<String>) -> Self {
        Self::MissingSiteUrl { var: var.into() }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
