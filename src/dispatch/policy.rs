//! Static command policy tables.
//!
//! Which command paths never touch persisted state, and which primary
//! commands are implemented natively rather than by a plugin.

/// A command path prefix such as `config get`.
///
/// A path matches when it starts with every token of the pattern, so
/// `config get` matches `config get update` but not `config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPattern(pub &'static [&'static str]);

impl CommandPattern {
    /// Whether `path` starts with this pattern.
    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
        path.len() >= self.0.len()
            && self
                .0
                .iter()
                .zip(path)
                .all(|(expected, actual)| *expected == actual.as_ref())
    }
}

impl std::fmt::Display for CommandPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Command paths known never to mutate persisted state.
pub const READ_ONLY_COMMANDS: &[CommandPattern] = &[
    CommandPattern(&["status"]),
    CommandPattern(&["health"]),
    CommandPattern(&["sessions"]),
    CommandPattern(&["config", "get"]),
    CommandPattern(&["config", "unset"]),
    CommandPattern(&["models", "list"]),
    CommandPattern(&["models", "status"]),
    CommandPattern(&["memory", "status"]),
    CommandPattern(&["agent"]),
];

/// Primary commands implemented natively.
pub const BUILTIN_COMMANDS: &[&str] = &[
    "setup",
    "onboard",
    "configure",
    "config",
    "doctor",
    "dashboard",
    "reset",
    "uninstall",
    "message",
    "memory",
    "agent",
    "agents",
    "status",
    "health",
    "sessions",
    "browser",
    "acp",
    "gateway",
    "daemon",
    "logs",
    "system",
    "models",
    "approvals",
    "nodes",
    "devices",
    "node",
    "sandbox",
    "tui",
    "cron",
    "dns",
    "docs",
    "hooks",
    "webhooks",
    "pairing",
    "plugins",
    "channels",
    "directory",
    "security",
    "skills",
    "update",
    "completion",
];

/// Whether `path` matches one of [`READ_ONLY_COMMANDS`].
pub fn is_read_only_path<S: AsRef<str>>(path: &[S]) -> bool {
    READ_ONLY_COMMANDS
        .iter()
        .any(|pattern| pattern.matches(path))
}

/// Whether `name` is a builtin primary command.
pub fn is_builtin_command(name: &str) -> bool {
    BUILTIN_COMMANDS.contains(&name)
}
