//! State, config and credential path resolution.
//!
//! Explicit overrides always win and may use a leading `~`. Defaults live
//! under the state directory, which itself defaults to `~/.propel`.

use std::path::PathBuf;

use super::home::{absolutize, resolve_required_home_dir};
use super::{env_value, expand_home_prefix, vars, EnvMap, HomeDirFn};

/// Base name of the state directory under the home directory.
pub const STATE_DIR_NAME: &str = ".propel";

/// Config file name inside the state directory.
pub const CONFIG_FILE_NAME: &str = "propel.json";

/// OAuth credentials directory name inside the state directory.
pub const OAUTH_DIR_NAME: &str = "credentials";

/// Profile name that maps to the unsuffixed state directory.
pub const DEFAULT_PROFILE: &str = "default";

pub(crate) fn override_path(env: &EnvMap, key: &str, homedir: HomeDirFn<'_>) -> Option<PathBuf> {
    env_value(env, key).map(|raw| absolutize(expand_home_prefix(raw, env, homedir)))
}

/// State directory for a profile: `<home>/.propel` for no profile or
/// `default` (case-insensitive), `<home>/.propel-<profile>` otherwise.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use propel::environment::{resolve_profile_state_dir, EnvMap};
///
/// let home = || Some(PathBuf::from("/home/peter"));
/// assert_eq!(
///     resolve_profile_state_dir(Some("dev"), &EnvMap::new(), &home),
///     PathBuf::from("/home/peter/.propel-dev")
/// );
/// ```
pub fn resolve_profile_state_dir(
    profile: Option<&str>,
    env: &EnvMap,
    homedir: HomeDirFn<'_>,
) -> PathBuf {
    let dir_name = match profile.map(str::trim) {
        None | Some("") => STATE_DIR_NAME.to_string(),
        Some(name) if name.eq_ignore_ascii_case(DEFAULT_PROFILE) => STATE_DIR_NAME.to_string(),
        Some(name) => format!("{STATE_DIR_NAME}-{name}"),
    };
    resolve_required_home_dir(env, homedir).join(dir_name)
}

/// State directory in effect: `PROPEL_STATE_DIR`, else `<home>/.propel`.
pub fn resolve_state_dir(env: &EnvMap, homedir: HomeDirFn<'_>) -> PathBuf {
    override_path(env, vars::PROPEL_STATE_DIR, homedir)
        .unwrap_or_else(|| resolve_profile_state_dir(None, env, homedir))
}

/// Config file path: `PROPEL_CONFIG_PATH`, else `<state>/propel.json`.
pub fn resolve_config_path(env: &EnvMap, homedir: HomeDirFn<'_>) -> PathBuf {
    override_path(env, vars::PROPEL_CONFIG_PATH, homedir)
        .unwrap_or_else(|| resolve_state_dir(env, homedir).join(CONFIG_FILE_NAME))
}

/// OAuth credentials directory: `PROPEL_OAUTH_DIR`, else `<state>/credentials`.
pub fn resolve_oauth_dir(env: &EnvMap, homedir: HomeDirFn<'_>) -> PathBuf {
    override_path(env, vars::PROPEL_OAUTH_DIR, homedir)
        .unwrap_or_else(|| resolve_state_dir(env, homedir).join(OAUTH_DIR_NAME))
}

/// Gateway port from `PROPEL_GATEWAY_PORT`; malformed values are ignored.
pub fn resolve_gateway_port(env: &EnvMap) -> Option<u16> {
    env_value(env, vars::PROPEL_GATEWAY_PORT)?
        .parse::<u16>()
        .ok()
        .filter(|port| *port > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn peter() -> Option<PathBuf> {
        Some(PathBuf::from("/home/peter"))
    }

    #[test]
    fn default_profile_uses_unsuffixed_dir() {
        let empty = EnvMap::new();
        assert_eq!(
            resolve_profile_state_dir(None, &empty, &peter),
            PathBuf::from("/home/peter/.propel")
        );
        assert_eq!(
            resolve_profile_state_dir(Some("Default"), &empty, &peter),
            PathBuf::from("/home/peter/.propel")
        );
    }

    #[test]
    fn named_profile_gets_suffix() {
        assert_eq!(
            resolve_profile_state_dir(Some("work"), &EnvMap::new(), &peter),
            PathBuf::from("/home/peter/.propel-work")
        );
    }

    #[test]
    fn state_dir_override_wins() {
        let env = env(&[("PROPEL_STATE_DIR", "/custom")]);
        assert_eq!(resolve_state_dir(&env, &peter), PathBuf::from("/custom"));
    }

    #[test]
    fn state_dir_override_expands_tilde() {
        let env = env(&[("PROPEL_STATE_DIR", "~/state"), ("HOME", "/home/alice")]);
        assert_eq!(resolve_state_dir(&env, &peter), PathBuf::from("/home/alice/state"));
    }

    #[test]
    fn config_path_defaults_under_state_dir() {
        let env = env(&[("PROPEL_STATE_DIR", "/custom")]);
        assert_eq!(
            resolve_config_path(&env, &peter),
            PathBuf::from("/custom/propel.json")
        );
        assert_eq!(
            resolve_config_path(&EnvMap::new(), &peter),
            PathBuf::from("/home/peter/.propel/propel.json")
        );
    }

    #[test]
    fn config_path_override_wins() {
        let env = env(&[("PROPEL_CONFIG_PATH", "/etc/propel.json")]);
        assert_eq!(
            resolve_config_path(&env, &peter),
            PathBuf::from("/etc/propel.json")
        );
    }

    #[test]
    fn oauth_dir_defaults_under_state_dir() {
        assert_eq!(
            resolve_oauth_dir(&EnvMap::new(), &peter),
            PathBuf::from("/home/peter/.propel/credentials")
        );
        let env = env(&[("PROPEL_OAUTH_DIR", "/secrets")]);
        assert_eq!(resolve_oauth_dir(&env, &peter), PathBuf::from("/secrets"));
    }

    #[test]
    fn gateway_port_parsing() {
        assert_eq!(resolve_gateway_port(&env(&[("PROPEL_GATEWAY_PORT", "19001")])), Some(19001));
        assert_eq!(resolve_gateway_port(&env(&[("PROPEL_GATEWAY_PORT", "nope")])), None);
        assert_eq!(resolve_gateway_port(&env(&[("PROPEL_GATEWAY_PORT", "0")])), None);
        assert_eq!(resolve_gateway_port(&EnvMap::new()), None);
    }
}
