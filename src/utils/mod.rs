//! Helper functions used by the configuration loader.
//!
//! - [`origin`] - Base URL parsing and origin extraction

pub mod origin;
