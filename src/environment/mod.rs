//! Environment snapshot and path resolution.
//!
//! Nothing in this module reads the process environment directly except
//! [`snapshot_process_env`]. Every resolver takes an [`EnvMap`] and a
//! home-directory accessor so callers (and tests) control both.
//!
//! Home resolution order:
//!
//! 1. `PROPEL_HOME` (a leading `~` expands against the next sources)
//! 2. `HOME`
//! 3. `USERPROFILE`
//! 4. The injected `homedir()` accessor
//! 5. The current working directory (only for [`resolve_required_home_dir`])

pub mod home;
pub mod paths;
pub mod version;

use std::collections::HashMap;
use std::path::PathBuf;

pub use home::{expand_home_prefix, resolve_effective_home_dir, resolve_required_home_dir};
pub use paths::{
    resolve_config_path, resolve_gateway_port, resolve_oauth_dir, resolve_profile_state_dir,
    resolve_state_dir,
};
pub use version::{effective_version, resolve_version};

/// An environment snapshot: variable name to value.
pub type EnvMap = HashMap<String, String>;

/// Accessor for the platform home directory.
pub type HomeDirFn<'a> = &'a dyn Fn() -> Option<PathBuf>;

/// Environment variable names read or written by the front controller.
pub mod vars {
    /// Explicit home directory override.
    pub const PROPEL_HOME: &str = "PROPEL_HOME";
    /// Unix home directory.
    pub const HOME: &str = "HOME";
    /// Windows home directory.
    pub const USERPROFILE: &str = "USERPROFILE";
    /// State directory.
    pub const PROPEL_STATE_DIR: &str = "PROPEL_STATE_DIR";
    /// Config file path.
    pub const PROPEL_CONFIG_PATH: &str = "PROPEL_CONFIG_PATH";
    /// OAuth credentials directory.
    pub const PROPEL_OAUTH_DIR: &str = "PROPEL_OAUTH_DIR";
    /// Active profile name.
    pub const PROPEL_PROFILE: &str = "PROPEL_PROFILE";
    /// Gateway service port.
    pub const PROPEL_GATEWAY_PORT: &str = "PROPEL_GATEWAY_PORT";
    /// CLI-facing version string.
    pub const PROPEL_VERSION: &str = "PROPEL_VERSION";
    /// Service version string.
    pub const PROPEL_SERVICE_VERSION: &str = "PROPEL_SERVICE_VERSION";
    /// Version provided by the package manager when run through a script.
    pub const NPM_PACKAGE_VERSION: &str = "npm_package_version";
}

/// Look up a variable, treating blank, `"undefined"` and `"null"` as unset.
///
/// The returned value is trimmed.
///
/// # Example
///
/// ```
/// use propel::environment::{env_value, EnvMap};
///
/// let mut env = EnvMap::new();
/// env.insert("HOME".into(), "  /home/alice ".into());
/// env.insert("PROPEL_HOME".into(), "   ".into());
///
/// assert_eq!(env_value(&env, "HOME"), Some("/home/alice"));
/// assert_eq!(env_value(&env, "PROPEL_HOME"), None);
/// ```
pub fn env_value<'a>(env: &'a EnvMap, key: &str) -> Option<&'a str> {
    let value = env.get(key)?.trim();
    match value {
        "" | "undefined" | "null" => None,
        value => Some(value),
    }
}

/// Snapshot the process environment, skipping non-UTF-8 entries.
pub fn snapshot_process_env() -> EnvMap {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// The platform home directory, as reported by the OS.
pub fn system_home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}
