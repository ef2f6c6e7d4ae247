//! # Site Config
//!
//! Static configuration for a personal blog: branding constants plus the
//! site origin derived from the deployed URL.
//!
//! ## Layout
//!
//! - **Constants** ([`constants`]) - Title, bilingual description, social handle, author
//! - **Configuration** ([`config`]) - The frozen [`SiteConfig`] built once at startup
//! - **Utilities** ([`utils`]) - Base URL parsing and origin extraction
//! - **Errors** ([`error`]) - [`ConfigError`], every variant fatal at build time
//!
//! ## Quick Start
//!
//! ```bash
//! export SITE="https://arejula27.dev"
//! cargo run -- show --json
//! ```
//!
//! ```no_run
//! let config = site_config::config::load_from_env()?;
//! println!("{} at {}", config.title, config.site_url());
//! # Ok::<(), site_config::ConfigError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod utils;

pub use config::SiteConfig;
pub use error::ConfigError;

/// Commonly used items for site generators.
pub mod prelude {
    pub use crate::config::{SiteConfig, load_from_env};
    pub use crate::constants::{MY_NAME, SITE_DESCRIPTION, SITE_TITLE, TWITTER_HANDLE};
    pub use crate::error::ConfigError;
    pub use crate::utils::origin::site_origin;
}
