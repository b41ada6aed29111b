//! Global region scanning.
//!
//! The global region is the stretch of user args before the first
//! command-path token. Root flags (profile selection, log level, the
//! help/version aliases) only mean something there; once a command token
//! has been seen, every later flag belongs to that subcommand.
//!
//! This is why `propel -v` asks for the version while `propel acp -v`
//! passes `-v` through to `acp`.

use super::flags::{has_flag, is_value_token};
use super::{FLAG_TERMINATOR, USER_ARGS_START};

/// Root flags that take a value (`--flag value` or `--flag=value`).
pub const ROOT_VALUE_FLAGS: &[&str] = &["--profile", "--log-level"];

/// Root flags that never take a value.
pub const ROOT_BOOLEAN_FLAGS: &[&str] = &["--dev", "--no-color", "--update"];

/// Help flags, recognized anywhere before the terminator.
pub const HELP_FLAGS: &[&str] = &["-h", "--help"];

/// Version flags, recognized anywhere before the terminator.
pub const VERSION_FLAGS: &[&str] = &["-V", "--version"];

/// Short alias that means "version" only in the global region.
pub const ROOT_VERSION_ALIAS: &str = "-v";

/// Whether `arg` is a value-taking root flag in equals form.
fn is_root_value_flag_with_equals(arg: &str) -> bool {
    ROOT_VALUE_FLAGS.iter().any(|flag| {
        arg.strip_prefix(*flag)
            .is_some_and(|rest| rest.starts_with('='))
    })
}

/// Whether `arg` is any known root flag (either form).
pub(crate) fn is_known_root_flag(arg: &str) -> bool {
    ROOT_VALUE_FLAGS.contains(&arg)
        || ROOT_BOOLEAN_FLAGS.contains(&arg)
        || is_root_value_flag_with_equals(arg)
}

/// Number of tokens a root-region flag at `index` occupies (1, or 2 when a
/// space-form value flag consumes its value).
fn root_flag_width<S: AsRef<str>>(argv: &[S], index: usize) -> usize {
    let arg = argv[index].as_ref();
    let next = argv.get(index + 1).map(|next| next.as_ref());
    if ROOT_VALUE_FLAGS.contains(&arg) && is_value_token(next) {
        2
    } else {
        1
    }
}

/// Index where the command path begins.
///
/// Skips every flag in the global region (known value flags also skip
/// their value). Returns the index of the first non-flag token, or the
/// index of the terminator / end of input when there is no command.
///
/// # Example
///
/// ```
/// use propel::argv::root_command_index;
///
/// let argv = ["node", "propel", "--log-level", "debug", "status"];
/// assert_eq!(root_command_index(&argv), 4);
/// ```
pub fn root_command_index<S: AsRef<str>>(argv: &[S]) -> usize {
    let mut index = USER_ARGS_START;
    while let Some(arg) = argv.get(index).map(|arg| arg.as_ref()) {
        if arg == FLAG_TERMINATOR || !arg.starts_with('-') {
            return index;
        }
        index += root_flag_width(argv, index);
    }
    argv.len()
}

/// End of the leading run made only of known root flags.
///
/// Unlike [`root_command_index`], an unknown option stops the run.
pub fn leading_global_flags_end<S: AsRef<str>>(argv: &[S]) -> usize {
    let mut index = USER_ARGS_START;
    while let Some(arg) = argv.get(index).map(|arg| arg.as_ref()) {
        if !is_known_root_flag(arg) {
            return index;
        }
        index += root_flag_width(argv, index);
    }
    argv.len().max(USER_ARGS_START)
}

/// Whether a `-v` appears in the global region.
fn has_root_version_alias<S: AsRef<str>>(argv: &[S]) -> bool {
    let end = root_command_index(argv);
    let mut index = USER_ARGS_START;
    while index < end {
        if argv[index].as_ref() == ROOT_VERSION_ALIAS {
            return true;
        }
        index += root_flag_width(argv, index);
    }
    false
}

/// Whether this invocation only asks for help or version text.
///
/// True for `-h`, `--help`, `-V` or `--version` anywhere before the
/// terminator, and for `-v` in the global region.
///
/// # Example
///
/// ```
/// use propel::argv::has_help_or_version;
///
/// assert!(has_help_or_version(&["node", "propel", "--profile", "work", "-v"]));
/// assert!(!has_help_or_version(&["node", "propel", "acp", "-v"]));
/// ```
pub fn has_help_or_version<S: AsRef<str>>(argv: &[S]) -> bool {
    HELP_FLAGS
        .iter()
        .chain(VERSION_FLAGS)
        .any(|flag| has_flag(argv, flag))
        || has_root_version_alias(argv)
}
