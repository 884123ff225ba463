//! Process-wide switches for warning emission.
//!
//! Configuration only decides whether experimental warnings reach the
//! `tracing` channel. Suppression scopes are tracked the same way whether
//! or not emission is enabled.

use std::env;
use std::sync::RwLock;

/// Environment variable that disables experimental warnings when set to a
/// truthy value.
pub const IGNORE_EXPERIMENTAL_ENV: &str = "API_COMPAT_IGNORE_EXPERIMENTAL";

static EXPERIMENTAL_WARNINGS: RwLock<Option<bool>> = RwLock::new(None);

/// Enable or disable experimental warnings for the whole process.
///
/// An explicit setting takes precedence over [`IGNORE_EXPERIMENTAL_ENV`].
pub fn set_experimental_warnings_enabled(value: bool) {
    let mut enabled = EXPERIMENTAL_WARNINGS.write().expect("lock poisoned");
    *enabled = Some(value);
}

/// Drop any explicit setting and fall back to the environment again.
pub fn reset_experimental_warnings_enabled() {
    let mut enabled = EXPERIMENTAL_WARNINGS.write().expect("lock poisoned");
    *enabled = None;
}

/// Whether experimental warnings are emitted at all.
pub fn experimental_warnings_enabled() -> bool {
    let enabled = EXPERIMENTAL_WARNINGS.read().expect("lock poisoned");
    match *enabled {
        Some(value) => value,
        None => !env_var_is_set(IGNORE_EXPERIMENTAL_ENV),
    }
}

/// `true` if the variable is set to something other than an empty or falsy
/// value.
pub fn env_var_is_set(env_var: &str) -> bool {
    match env::var(env_var) {
        Ok(value) => !value.is_empty() && value != "0" && value != "false" && value != "False",
        Err(_) => false,
    }
}
