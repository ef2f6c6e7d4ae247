#![allow(dead_code)]

use site_config::constants::SITE_URL_ENV;
use std::env;
use std::ffi::{OsStr, OsString};

/// Restores the previous `SITE` value on drop, including on panic.
struct SiteEnvGuard {
    previous: Option<OsString>,
}

impl Drop for SiteEnvGuard {
    fn drop(&mut self) {
        // SAFETY: dropped inside the #[serial] caller
        unsafe {
            match self.previous.take() {
                Some(v) => env::set_var(SITE_URL_ENV, v),
                None => env::remove_var(SITE_URL_ENV),
            }
        }
    }
}

/// Runs `f` with `SITE` set to `value` (or unset for `None`), restoring the
/// previous value afterwards. Callers must be `#[serial]`.
pub fn with_site_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
    with_site_env_os(value.map(OsStr::new), f)
}

/// Same as [`with_site_env`] for values that may not be valid UTF-8.
pub fn with_site_env_os<T>(value: Option<&OsStr>, f: impl FnOnce() -> T) -> T {
    let _guard = SiteEnvGuard {
        previous: env::var_os(SITE_URL_ENV),
    };

    // SAFETY: every caller runs under #[serial], so no concurrent env access
    unsafe {
        match value {
            Some(v) => env::set_var(SITE_URL_ENV, v),
            None => env::remove_var(SITE_URL_ENV),
        }
    }

    f()
}
