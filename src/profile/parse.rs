//! Global profile flag parsing.

use regex::Regex;
use std::sync::LazyLock;

use super::DEV_PROFILE;
use crate::argv::flags::is_value_token;
use crate::argv::{root_command_index, USER_ARGS_START};
use crate::error::{PropelError, Result};

static PROFILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,63}$").unwrap());

const DEV_FLAG: &str = "--dev";
const PROFILE_FLAG: &str = "--profile";

/// Result of stripping profile flags from argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileArgs {
    /// Selected profile, if any.
    pub profile: Option<String>,
    /// Argv with the consumed profile tokens removed.
    pub argv: Vec<String>,
}

/// Whether `name` is usable as a profile name: letters, digits, `_` and
/// `-`, starting with a letter or digit, at most 64 characters.
pub fn is_valid_profile_name(name: &str) -> bool {
    PROFILE_NAME.is_match(name)
}

/// Extract `--dev` / `--profile <name>` from the global region of argv.
///
/// Only tokens before the first command-path token are considered, so a
/// subcommand's own `--dev` (as in `propel gateway --dev`) is left alone.
///
/// # Errors
///
/// - [`PropelError::ProfileConflict`] when both `--dev` and `--profile` are given
/// - [`PropelError::MissingProfileValue`] when `--profile` has no value
/// - [`PropelError::InvalidProfileName`] when the value is not a valid name
///
/// # Example
///
/// ```
/// use propel::profile::parse_cli_profile_args;
///
/// let parsed = parse_cli_profile_args(&["node", "propel", "--profile", "work", "status"]).unwrap();
/// assert_eq!(parsed.profile.as_deref(), Some("work"));
/// assert_eq!(parsed.argv, vec!["node", "propel", "status"]);
///
/// assert!(parse_cli_profile_args(&["node", "propel", "--dev", "--profile", "work"]).is_err());
/// ```
pub fn parse_cli_profile_args<S: AsRef<str>>(argv: &[S]) -> Result<ProfileArgs> {
    let tokens: Vec<&str> = argv.iter().map(|arg| arg.as_ref()).collect();
    if tokens.len() < USER_ARGS_START {
        return Ok(ProfileArgs {
            profile: None,
            argv: tokens.iter().map(|t| t.to_string()).collect(),
        });
    }

    let region_end = root_command_index(tokens.as_slice());
    let mut out: Vec<String> = tokens[..USER_ARGS_START]
        .iter()
        .map(|t| t.to_string())
        .collect();
    let mut profile: Option<String> = None;
    let mut saw_dev = false;
    let mut saw_profile = false;

    let mut index = USER_ARGS_START;
    while index < region_end {
        let arg = tokens[index];

        if arg == DEV_FLAG {
            if saw_profile {
                return Err(PropelError::ProfileConflict);
            }
            saw_dev = true;
            profile = Some(DEV_PROFILE.to_string());
            index += 1;
            continue;
        }

        let equals_value = arg
            .strip_prefix(PROFILE_FLAG)
            .and_then(|rest| rest.strip_prefix('='));
        if arg == PROFILE_FLAG || equals_value.is_some() {
            if saw_dev {
                return Err(PropelError::ProfileConflict);
            }
            let (value, width) = match equals_value {
                Some(value) => (value, 1),
                None => {
                    let next = tokens.get(index + 1).copied();
                    if is_value_token(next) {
                        (next.unwrap_or_default(), 2)
                    } else {
                        ("", 1)
                    }
                }
            };
            let value = value.trim();
            if value.is_empty() {
                return Err(PropelError::MissingProfileValue);
            }
            if !is_valid_profile_name(value) {
                return Err(PropelError::InvalidProfileName {
                    name: value.to_string(),
                });
            }
            saw_profile = true;
            profile = Some(value.to_string());
            index += width;
            continue;
        }

        out.push(arg.to_string());
        index += 1;
    }
    out.extend(tokens[region_end.max(USER_ARGS_START)..].iter().map(|t| t.to_string()));

    if let Some(name) = &profile {
        tracing::debug!("Resolved profile '{}' from argv", name);
    }
    Ok(ProfileArgs { profile, argv: out })
}
