//! Argv normalization.
//!
//! Launchers hand the program very different vectors: a script runtime
//! followed by the entry script (`node propel status`), the bare program
//! (`propel status`), or nothing usable at all. Everything downstream
//! expects `[runtime, program, ...user_args]`, so this module rebuilds that
//! shape on a best-effort basis and never fails.

use regex::Regex;
use std::sync::LazyLock;

/// Runtime name synthesized when the launcher did not provide one.
pub const DEFAULT_RUNTIME_NAME: &str = "node";

static VERSIONED_NODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^node-\d+(?:\.\d+)*(?:\.exe)?$").unwrap());

const RUNTIME_NAMES: &[&str] = &["node", "node.exe", "nodejs", "nodejs.exe", "bun", "bun.exe"];

/// Inputs for [`build_parse_argv`].
///
/// `raw_args` wins when non-empty; otherwise `fallback_argv` (bare user
/// args) is used.
#[derive(Debug, Clone, Default)]
pub struct ParseArgvInput {
    /// Program name used for the second slot when it has to be synthesized.
    pub program_name: String,
    /// Raw process arguments as handed over by the launcher.
    pub raw_args: Vec<String>,
    /// User args to use when no raw arguments are available.
    pub fallback_argv: Vec<String>,
}

impl ParseArgvInput {
    /// Create an input for the given program name with no arguments yet.
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            ..Self::default()
        }
    }

    /// Set the raw process arguments.
    pub fn with_raw_args<I, S>(mut self, raw_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_args = raw_args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fallback user args.
    pub fn with_fallback_argv<I, S>(mut self, fallback_argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_argv = fallback_argv.into_iter().map(Into::into).collect();
        self
    }
}

/// Final path component of `token`, split on either separator.
fn executable_name(token: &str) -> &str {
    token.rsplit(['/', '\\']).next().unwrap_or(token)
}

/// Whether `token` is `program_name` itself or a path to its executable.
///
/// A trailing `.exe` on the file name is ignored, case-insensitively.
fn names_program(token: &str, program_name: &str) -> bool {
    if program_name.is_empty() {
        return false;
    }
    if token == program_name {
        return true;
    }
    let name = executable_name(token);
    let stem = match name.len().checked_sub(4) {
        Some(split) if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(".exe") => {
            &name[..split]
        }
        _ => name,
    };
    stem == program_name
}

/// Whether `token` names a script-runtime executable.
///
/// Accepts `node`, `nodejs` and `bun` (optionally with `.exe`), and
/// versioned node builds such as `node-22` or `node-22.2.0.exe`, with or
/// without a leading directory.
///
/// # Example
///
/// ```
/// use propel::argv::is_runtime_executable;
///
/// assert!(is_runtime_executable("/usr/bin/node-22.2.0"));
/// assert!(is_runtime_executable("bun"));
/// assert!(!is_runtime_executable("node-dev"));
/// ```
pub fn is_runtime_executable(token: &str) -> bool {
    let name = executable_name(token).to_lowercase();
    RUNTIME_NAMES.contains(&name.as_str()) || VERSIONED_NODE.is_match(&name)
}

/// Build the canonical `[runtime, program, ...user_args]` vector.
///
/// A leading token equal to the program name (or a path ending in it) is
/// dropped first. If what remains starts with a runtime executable and has
/// at least two tokens it is already canonical; otherwise
/// `["node", program_name]` is prepended. Feeding the output back in
/// returns it unchanged.
///
/// # Example
///
/// ```
/// use propel::argv::{build_parse_argv, ParseArgvInput};
///
/// let input = ParseArgvInput::new("propel").with_raw_args(["propel", "status"]);
/// assert_eq!(build_parse_argv(&input), vec!["node", "propel", "status"]);
/// ```
pub fn build_parse_argv(input: &ParseArgvInput) -> Vec<String> {
    let base: &[String] = if !input.raw_args.is_empty() {
        &input.raw_args
    } else {
        &input.fallback_argv
    };

    let program_name = input.program_name.as_str();
    let normalized = match base.first() {
        Some(first) if names_program(first, program_name) => &base[1..],
        _ => base,
    };

    let looks_like_runtime = normalized.len() >= 2 && is_runtime_executable(&normalized[0]);
    if looks_like_runtime {
        return normalized.to_vec();
    }

    let mut argv = Vec::with_capacity(normalized.len() + 2);
    argv.push(DEFAULT_RUNTIME_NAME.to_string());
    argv.push(program_name.to_string());
    argv.extend(normalized.iter().cloned());
    argv
}
