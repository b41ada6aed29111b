//! Dispatch policy questions.
//!
//! Each answer is a pure function of argv (plus, for plugin registration,
//! what the caller already knows about the primary command).

use serde::Serialize;

use super::policy::is_read_only_path;
use crate::argv::{get_command_path, has_help_or_version, USER_ARGS_START};

/// The yes/no decisions handed to the dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchDecisions {
    /// Run state migration before the command.
    pub migrate_state: bool,
    /// Bootstrap the CLI's filesystem paths before the command.
    pub ensure_path: bool,
    /// Build the primary command's full handler up front.
    pub register_primary_eagerly: bool,
    /// Skip registering plugin-provided commands.
    pub skip_plugin_registration: bool,
}

impl DispatchDecisions {
    /// Answer every question for `argv`.
    pub fn for_argv<S: AsRef<str>>(argv: &[S], primary: Option<&str>, has_builtin_primary: bool) -> Self {
        Self {
            migrate_state: should_migrate_state(argv),
            ensure_path: should_ensure_cli_path(argv),
            register_primary_eagerly: should_register_primary_subcommand(argv),
            skip_plugin_registration: should_skip_plugin_command_registration(
                argv,
                primary,
                has_builtin_primary,
            ),
        }
    }

    /// Answer every question from an already-resolved command path.
    ///
    /// Agrees with [`DispatchDecisions::for_argv`] whenever `command_path`
    /// starts at the first user argument. The dispatcher passes the path
    /// found after any leading root flags instead.
    pub fn for_command_path<S: AsRef<str>>(
        help_or_version: bool,
        command_path: &[S],
        primary: Option<&str>,
        has_builtin_primary: bool,
    ) -> Self {
        Self {
            migrate_state: should_migrate_state_from_path(command_path),
            ensure_path: !help_or_version && !is_read_only_path(command_path),
            register_primary_eagerly: !help_or_version,
            skip_plugin_registration: has_builtin_primary
                || (primary.is_none() && help_or_version),
        }
    }
}

/// Whether a command path may mutate persisted state.
///
/// Only paths matching the read-only table skip migration; everything else,
/// including an empty path, migrates.
pub fn should_migrate_state_from_path<S: AsRef<str>>(path: &[S]) -> bool {
    !is_read_only_path(path)
}

/// [`should_migrate_state_from_path`] on the command path of `argv`.
///
/// # Example
///
/// ```
/// use propel::dispatch::should_migrate_state;
///
/// assert!(!should_migrate_state(&["node", "propel", "config", "get", "update"]));
/// assert!(should_migrate_state(&["node", "propel", "agents", "list"]));
/// ```
pub fn should_migrate_state<S: AsRef<str>>(argv: &[S]) -> bool {
    should_migrate_state_from_path(&get_command_path(argv, USER_ARGS_START))
}

/// Whether the CLI's filesystem paths need bootstrapping.
///
/// False for help/version and for read-only commands.
pub fn should_ensure_cli_path<S: AsRef<str>>(argv: &[S]) -> bool {
    if has_help_or_version(argv) {
        return false;
    }
    !is_read_only_path(&get_command_path(argv, USER_ARGS_START))
}

/// Whether to build the primary command's handler eagerly.
///
/// Help and version output never needs the full handler.
pub fn should_register_primary_subcommand<S: AsRef<str>>(argv: &[S]) -> bool {
    !has_help_or_version(argv)
}

/// Whether registering plugin commands can be skipped.
///
/// A builtin primary command never needs plugins, even under `--help`.
/// With no primary command, plugins are only skipped for root help/version.
/// A plugin-owned (or unknown) primary always gets plugin registration.
pub fn should_skip_plugin_command_registration<S: AsRef<str>>(
    argv: &[S],
    primary: Option<&str>,
    has_builtin_primary: bool,
) -> bool {
    if has_builtin_primary {
        return true;
    }
    match primary {
        None => has_help_or_version(argv),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NON_MUTATING: &[&[&str]] = &[
        &["node", "propel", "status"],
        &["node", "propel", "health"],
        &["node", "propel", "sessions"],
        &["node", "propel", "config", "get", "update"],
        &["node", "propel", "config", "unset", "update"],
        &["node", "propel", "models", "list"],
        &["node", "propel", "models", "status"],
        &["node", "propel", "memory", "status"],
        &["node", "propel", "agent", "--message", "hi"],
    ];

    const MUTATING: &[&[&str]] = &[
        &["node", "propel", "agents", "list"],
        &["node", "propel", "message", "send"],
    ];

    #[test]
    fn decides_when_to_migrate_state() {
        for argv in NON_MUTATING {
            assert!(!should_migrate_state(argv), "{argv:?} should not migrate");
        }
        for argv in MUTATING {
            assert!(should_migrate_state(argv), "{argv:?} should migrate");
        }
    }

    #[test]
    fn migrate_decision_from_path() {
        assert!(!should_migrate_state_from_path(&["status"]));
        assert!(!should_migrate_state_from_path(&["config", "get"]));
        assert!(!should_migrate_state_from_path(&["models", "status"]));
        assert!(should_migrate_state_from_path(&["agents", "list"]));
        assert!(should_migrate_state_from_path::<&str>(&[]));
    }

    #[test]
    fn migrate_state_agrees_with_command_path() {
        for argv in NON_MUTATING.iter().chain(MUTATING) {
            let path = get_command_path(argv, 2);
            assert_eq!(should_migrate_state(argv), should_migrate_state_from_path(&path));
        }
    }

    #[test]
    fn skips_primary_registration_for_help_and_version() {
        assert!(!should_register_primary_subcommand(&["node", "propel", "status", "--help"]));
        assert!(!should_register_primary_subcommand(&["node", "propel", "-V"]));
        assert!(!should_register_primary_subcommand(&["node", "propel", "-v"]));
    }

    #[test]
    fn keeps_primary_registration_for_regular_runs() {
        assert!(should_register_primary_subcommand(&["node", "propel", "status"]));
        assert!(should_register_primary_subcommand(&["node", "propel", "acp", "-v"]));
    }

    #[test]
    fn skips_plugin_registration_for_root_help() {
        assert!(should_skip_plugin_command_registration(
            &["node", "propel", "--help"],
            None,
            false
        ));
    }

    #[test]
    fn keeps_plugin_registration_for_bare_invocation() {
        assert!(!should_skip_plugin_command_registration(
            &["node", "propel"],
            None,
            false
        ));
    }

    #[test]
    fn skips_plugin_registration_for_builtin_help() {
        assert!(should_skip_plugin_command_registration(
            &["node", "propel", "config", "--help"],
            Some("config"),
            true
        ));
    }

    #[test]
    fn skips_plugin_registration_for_builtin_runs() {
        assert!(should_skip_plugin_command_registration(
            &["node", "propel", "sessions", "--json"],
            Some("sessions"),
            true
        ));
    }

    #[test]
    fn keeps_plugin_registration_for_plugin_commands() {
        assert!(!should_skip_plugin_command_registration(
            &["node", "propel", "voicecall", "--help"],
            Some("voicecall"),
            false
        ));
        assert!(!should_skip_plugin_command_registration(
            &["node", "propel", "voicecall", "status"],
            Some("voicecall"),
            false
        ));
    }

    #[test]
    fn skips_path_bootstrap_for_help_and_version() {
        assert!(!should_ensure_cli_path(&["node", "propel", "--help"]));
        assert!(!should_ensure_cli_path(&["node", "propel", "-V"]));
        assert!(!should_ensure_cli_path(&["node", "propel", "-v"]));
    }

    #[test]
    fn skips_path_bootstrap_for_read_only_commands() {
        assert!(!should_ensure_cli_path(&["node", "propel", "status"]));
        assert!(!should_ensure_cli_path(&["node", "propel", "sessions", "--json"]));
        assert!(!should_ensure_cli_path(&["node", "propel", "config", "get", "update"]));
        assert!(!should_ensure_cli_path(&["node", "propel", "models", "status", "--json"]));
    }

    #[test]
    fn keeps_path_bootstrap_for_mutating_or_unknown_commands() {
        assert!(should_ensure_cli_path(&["node", "propel", "message", "send"]));
        assert!(should_ensure_cli_path(&["node", "propel", "voicecall", "status"]));
        assert!(should_ensure_cli_path(&["node", "propel", "acp", "-v"]));
    }

    #[test]
    fn decisions_from_path_agree_with_argv() {
        let cases: &[(&[&str], Option<&str>, bool)] = &[
            (&["node", "propel", "status", "--json"], Some("status"), true),
            (&["node", "propel", "--help"], None, false),
            (&["node", "propel"], None, false),
            (&["node", "propel", "voicecall", "--help"], Some("voicecall"), false),
            (&["node", "propel", "message", "send"], Some("message"), true),
        ];
        for (argv, primary, builtin) in cases {
            let path = get_command_path(argv, USER_ARGS_START);
            assert_eq!(
                DispatchDecisions::for_argv(argv, *primary, *builtin),
                DispatchDecisions::for_command_path(
                    has_help_or_version(argv),
                    &path,
                    *primary,
                    *builtin
                ),
                "{argv:?}"
            );
        }
    }

    #[test]
    fn decisions_for_builtin_read_only_run() {
        let decisions =
            DispatchDecisions::for_argv(&["node", "propel", "status", "--json"], Some("status"), true);
        assert_eq!(
            decisions,
            DispatchDecisions {
                migrate_state: false,
                ensure_path: false,
                register_primary_eagerly: true,
                skip_plugin_registration: true,
            }
        );
    }
}
