//! Command path extraction.

use super::{FLAG_TERMINATOR, USER_ARGS_START};

/// Collect the run of non-flag tokens starting at `start`.
///
/// The run ends at the first token starting with `-`, at the terminator,
/// or at end of input. Neither the terminator nor anything after it is
/// ever part of the path.
///
/// # Example
///
/// ```
/// use propel::argv::get_command_path;
///
/// let argv = ["node", "propel", "agents", "list", "--json"];
/// assert_eq!(get_command_path(&argv, 2), vec!["agents", "list"]);
/// ```
pub fn get_command_path<S: AsRef<str>>(argv: &[S], start: usize) -> Vec<String> {
    argv.iter()
        .skip(start)
        .map(|arg| arg.as_ref())
        .take_while(|arg| *arg != FLAG_TERMINATOR && !arg.starts_with('-'))
        .map(str::to_string)
        .collect()
}

/// The first token of the command path, if any.
pub fn get_primary_command<S: AsRef<str>>(argv: &[S]) -> Option<String> {
    get_command_path(argv, USER_ARGS_START).into_iter().next()
}
