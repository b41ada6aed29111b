//! Profile-aware command suggestions.
//!
//! When a non-default profile is active, commands shown to the user (in
//! hints, error messages, docs links) need `--profile <name>` so that
//! copy-pasting them targets the same state directory.

use regex::Regex;
use std::sync::LazyLock;

use super::is_valid_profile_name;
use crate::environment::paths::DEFAULT_PROFILE;
use crate::environment::{env_value, vars, EnvMap};

static CLI_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(?:pnpm|npm|bunx|npx)\s+)?propel\b").unwrap());
static PROFILE_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)--profile(?:\s|=|$)").unwrap());
static DEV_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:^|\s)--dev(?:\s|$)").unwrap());

/// Trim a raw profile name, rejecting blank, `default` and invalid names.
pub fn normalize_profile_name(raw: Option<&str>) -> Option<&str> {
    let name = raw?.trim();
    if name.is_empty() || name.eq_ignore_ascii_case(DEFAULT_PROFILE) || !is_valid_profile_name(name)
    {
        return None;
    }
    Some(name)
}

/// Insert `--profile <name>` after the CLI name when a profile is active.
///
/// The command is returned unchanged when `PROPEL_PROFILE` is unset,
/// `default` or invalid, when it does not start with `propel` (optionally
/// behind a `pnpm`/`npm`/`bunx`/`npx` wrapper), or when it already selects a
/// profile with `--profile` or `--dev`.
///
/// # Example
///
/// ```
/// use propel::environment::EnvMap;
/// use propel::profile::format_cli_command;
///
/// let mut env = EnvMap::new();
/// env.insert("PROPEL_PROFILE".into(), "work".into());
///
/// assert_eq!(
///     format_cli_command("propel doctor --fix", &env),
///     "propel --profile work doctor --fix"
/// );
/// ```
pub fn format_cli_command(command: &str, env: &EnvMap) -> String {
    let Some(profile) = normalize_profile_name(env_value(env, vars::PROPEL_PROFILE)) else {
        return command.to_string();
    };
    let Some(prefix) = CLI_PREFIX.find(command) else {
        return command.to_string();
    };
    if PROFILE_FLAG.is_match(command) || DEV_FLAG.is_match(command) {
        return command.to_string();
    }
    let (head, tail) = command.split_at(prefix.end());
    format!("{head} --profile {profile}{tail}")
}
