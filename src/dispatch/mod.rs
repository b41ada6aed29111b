//! Dispatch classification.
//!
//! Turns a canonical argv into the decisions the dispatch layer acts on:
//! whether to migrate state, bootstrap paths, build the primary command
//! eagerly, and register plugin commands.
//!
//! - [`policy`] - Read-only and builtin command tables
//! - [`classify`] - The policy questions themselves
//! - [`rewrite`] - Legacy `--update` flag rewriting

pub mod classify;
pub mod policy;
pub mod rewrite;

pub use classify::{
    should_ensure_cli_path, should_migrate_state, should_migrate_state_from_path,
    should_register_primary_subcommand, should_skip_plugin_command_registration,
    DispatchDecisions,
};
pub use policy::{is_builtin_command, is_read_only_path, CommandPattern, BUILTIN_COMMANDS, READ_ONLY_COMMANDS};
pub use rewrite::rewrite_update_flag_argv;
