//! Legacy `--update` flag rewriting.

use std::borrow::Cow;

use crate::argv::{leading_global_flags_end, root_command_index, USER_ARGS_START};

/// Legacy root flag for updating the CLI.
pub const UPDATE_FLAG: &str = "--update";

/// Subcommand that replaces [`UPDATE_FLAG`].
pub const UPDATE_COMMAND: &str = "update";

/// Rewrite a root `--update` flag into the `update` subcommand.
///
/// The flag is removed and `update` is inserted right after the leading
/// global flags; every other token keeps its relative order. When the
/// global region has no `--update`, the input is returned borrowed.
///
/// Only the global region counts: in `propel status --update` the flag
/// belongs to `status` and is left alone.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use propel::dispatch::rewrite_update_flag_argv;
///
/// let argv: Vec<String> = ["node", "entry.js", "--profile", "p", "--update"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(
///     &*rewrite_update_flag_argv(&argv),
///     ["node", "entry.js", "--profile", "p", "update"]
/// );
///
/// let plain = vec!["node".to_string(), "entry.js".to_string(), "status".to_string()];
/// assert!(matches!(rewrite_update_flag_argv(&plain), Cow::Borrowed(_)));
/// ```
pub fn rewrite_update_flag_argv(argv: &[String]) -> Cow<'_, [String]> {
    let region = USER_ARGS_START..root_command_index(argv);
    let in_region = |index: usize, arg: &String| region.contains(&index) && arg == UPDATE_FLAG;

    if !argv.iter().enumerate().any(|(index, arg)| in_region(index, arg)) {
        return Cow::Borrowed(argv);
    }

    let mut rewritten: Vec<String> = argv
        .iter()
        .enumerate()
        .filter(|(index, arg)| !in_region(*index, *arg))
        .map(|(_, arg)| arg.clone())
        .collect();
    let insert_at = leading_global_flags_end(&rewritten);
    rewritten.insert(insert_at, UPDATE_COMMAND.to_string());

    tracing::debug!("Rewrote {} into the {} command", UPDATE_FLAG, UPDATE_COMMAND);
    Cow::Owned(rewritten)
}
