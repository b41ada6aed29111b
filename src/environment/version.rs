//! Version string resolution.

use super::{env_value, vars, EnvMap};

/// Version this crate was built as.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version sources, highest precedence first.
const VERSION_VARS: &[&str] = &[
    vars::PROPEL_VERSION,
    vars::PROPEL_SERVICE_VERSION,
    vars::NPM_PACKAGE_VERSION,
];

/// The first non-blank version variable, if any.
pub fn resolve_version(env: &EnvMap) -> Option<String> {
    VERSION_VARS
        .iter()
        .find_map(|key| env_value(env, key))
        .map(str::to_string)
}

/// The resolved version, falling back to the crate version.
pub fn effective_version(env: &EnvMap) -> String {
    resolve_version(env).unwrap_or_else(|| VERSION.to_string())
}
