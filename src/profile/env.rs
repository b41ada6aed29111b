//! Profile-derived environment defaults.
//!
//! Applying a profile only fills gaps: a variable the caller already set is
//! never overwritten.

use std::collections::BTreeMap;

use super::{DEV_GATEWAY_PORT, DEV_PROFILE};
use crate::environment::paths::{override_path, CONFIG_FILE_NAME};
use crate::environment::{env_value, resolve_profile_state_dir, vars, EnvMap, HomeDirFn};

/// Variables set by [`apply_cli_profile_env`], in name order.
pub type EnvOverrides = BTreeMap<String, String>;

fn set_if_unset(env: &mut EnvMap, applied: &mut EnvOverrides, key: &str, value: String) {
    if env_value(env, key).is_some() {
        return;
    }
    env.insert(key.to_string(), value.clone());
    applied.insert(key.to_string(), value);
}

/// Fill profile-derived variables into `env` where they are unset.
///
/// - `PROPEL_PROFILE`: the profile name (skipped for no profile)
/// - `PROPEL_STATE_DIR`: `<home>/.propel-<profile>` (`<home>/.propel` for
///   no profile or `default`)
/// - `PROPEL_CONFIG_PATH`: `<state dir in effect>/propel.json`
/// - `PROPEL_GATEWAY_PORT`: `19001` for the `dev` profile only
///
/// Returns the variables that were actually set.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use propel::environment::EnvMap;
/// use propel::profile::apply_cli_profile_env;
///
/// let mut env = EnvMap::new();
/// env.insert("PROPEL_STATE_DIR".into(), "/custom".into());
///
/// apply_cli_profile_env(Some("dev"), &mut env, &|| Some(PathBuf::from("/home/peter")));
///
/// assert_eq!(env["PROPEL_STATE_DIR"], "/custom");
/// assert_eq!(env["PROPEL_CONFIG_PATH"], "/custom/propel.json");
/// assert_eq!(env["PROPEL_GATEWAY_PORT"], "19001");
/// ```
pub fn apply_cli_profile_env(
    profile: Option<&str>,
    env: &mut EnvMap,
    homedir: HomeDirFn<'_>,
) -> EnvOverrides {
    let profile = profile.map(str::trim).filter(|name| !name.is_empty());
    let mut applied = EnvOverrides::new();

    if let Some(name) = profile {
        set_if_unset(env, &mut applied, vars::PROPEL_PROFILE, name.to_string());
    }

    let explicit_state_dir = override_path(env, vars::PROPEL_STATE_DIR, homedir);
    let state_dir = match explicit_state_dir {
        Some(explicit) => explicit,
        None => {
            let derived = resolve_profile_state_dir(profile, env, homedir);
            set_if_unset(
                env,
                &mut applied,
                vars::PROPEL_STATE_DIR,
                derived.to_string_lossy().into_owned(),
            );
            derived
        }
    };

    set_if_unset(
        env,
        &mut applied,
        vars::PROPEL_CONFIG_PATH,
        state_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned(),
    );

    if profile == Some(DEV_PROFILE) {
        set_if_unset(
            env,
            &mut applied,
            vars::PROPEL_GATEWAY_PORT,
            DEV_GATEWAY_PORT.to_string(),
        );
    }

    for (key, value) in &applied {
        tracing::debug!("Profile default {}={}", key, value);
    }
    applied
}
