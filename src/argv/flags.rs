//! Flag lookup over a canonical argv.
//!
//! Lookups scan user args from index 2 and stop at the `--` terminator.

use regex::Regex;
use std::sync::LazyLock;

use super::{FLAG_TERMINATOR, USER_ARGS_START};

static NEGATIVE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\d+(?:\.\d+)?$").unwrap());

/// Result of looking up a valued flag.
///
/// Distinguishes a flag that never appears from one that appears without a
/// usable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue<T> {
    /// The flag does not appear before the terminator.
    Absent,
    /// The flag appears but has no usable value.
    Missing,
    /// The flag appears with a value.
    Present(T),
}

impl<T> FlagValue<T> {
    /// Whether the flag appeared at all.
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// The value, if one was supplied.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Missing => None,
        }
    }

    /// Map the carried value, keeping `Absent`/`Missing` as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FlagValue<U> {
        match self {
            Self::Absent => FlagValue::Absent,
            Self::Missing => FlagValue::Missing,
            Self::Present(value) => FlagValue::Present(f(value)),
        }
    }
}

/// User args up to (not including) the terminator.
pub(crate) fn scan_region<S: AsRef<str>>(argv: &[S]) -> impl Iterator<Item = &str> {
    argv.iter()
        .skip(USER_ARGS_START)
        .map(|arg| arg.as_ref())
        .take_while(|arg| *arg != FLAG_TERMINATOR)
}

/// Whether `arg` can serve as the value of a preceding flag.
///
/// Anything not starting with `-` qualifies, as do negative numbers
/// like `-5` or `-0.25`.
pub(crate) fn is_value_token(arg: Option<&str>) -> bool {
    match arg {
        None => false,
        Some(arg) if arg.is_empty() || arg == FLAG_TERMINATOR => false,
        Some(arg) => !arg.starts_with('-') || NEGATIVE_NUMBER.is_match(arg),
    }
}

/// Check whether `name` appears verbatim before the terminator.
///
/// # Example
///
/// ```
/// use propel::argv::has_flag;
///
/// assert!(has_flag(&["node", "propel", "status", "--json"], "--json"));
/// assert!(!has_flag(&["node", "propel", "--", "--json"], "--json"));
/// ```
pub fn has_flag<S: AsRef<str>>(argv: &[S], name: &str) -> bool {
    scan_region(argv).any(|arg| arg == name)
}

/// Look up the value of a flag in `--name value` or `--name=value` form.
///
/// Returns [`FlagValue::Missing`] when the flag is the last token, when the
/// next token looks like another flag, or when the equals form is empty.
///
/// # Example
///
/// ```
/// use propel::argv::{get_flag_value, FlagValue};
///
/// let argv = ["node", "propel", "status", "--timeout=2500"];
/// assert_eq!(get_flag_value(&argv, "--timeout"), FlagValue::Present("2500"));
/// assert_eq!(get_flag_value(&argv, "--json"), FlagValue::Absent);
/// ```
pub fn get_flag_value<'a, S: AsRef<str>>(argv: &'a [S], name: &str) -> FlagValue<&'a str> {
    let args: Vec<&str> = scan_region(argv).collect();
    for (i, arg) in args.iter().enumerate() {
        if *arg == name {
            let next = args.get(i + 1).copied();
            return if is_value_token(next) {
                next.map_or(FlagValue::Missing, FlagValue::Present)
            } else {
                FlagValue::Missing
            };
        }
        if let Some(value) = arg
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
        {
            return if value.is_empty() {
                FlagValue::Missing
            } else {
                FlagValue::Present(value)
            };
        }
    }
    FlagValue::Absent
}

/// Look up a flag whose value must be a positive integer.
///
/// A value that is present but does not parse as an integer greater than
/// zero collapses to [`FlagValue::Absent`].
pub fn get_positive_int_flag_value<S: AsRef<str>>(argv: &[S], name: &str) -> FlagValue<u64> {
    match get_flag_value(argv, name) {
        FlagValue::Absent => FlagValue::Absent,
        FlagValue::Missing => FlagValue::Missing,
        FlagValue::Present(raw) => match raw.trim().parse::<u64>() {
            Ok(value) if value > 0 => FlagValue::Present(value),
            _ => FlagValue::Absent,
        },
    }
}

/// Whether verbose output was requested (`--verbose`, or `--debug` when
/// `include_debug` is set).
pub fn get_verbose_flag<S: AsRef<str>>(argv: &[S], include_debug: bool) -> bool {
    has_flag(argv, "--verbose") || (include_debug && has_flag(argv, "--debug"))
}
