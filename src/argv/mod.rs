//! Argument vector primitives.
//!
//! Every function here works on a canonical argv of the shape
//! `[runtime, program, ...user_args]` and only looks at user args
//! (index 2 onward). Scanning always stops at the `--` terminator:
//! tokens after it are never matched as flags or flag values.
//!
//! # Architecture
//!
//! - [`normalize`] - Canonicalize raw process args into the two-prefix shape
//! - [`flags`] - Boolean and valued flag lookup
//! - [`command_path`] - Leading non-flag tokens (the subcommand path)
//! - [`root`] - Global-region scanning and the help/version short-circuit

pub mod command_path;
pub mod flags;
pub mod normalize;
pub mod root;

pub use command_path::{get_command_path, get_primary_command};
pub use flags::{
    get_flag_value, get_positive_int_flag_value, get_verbose_flag, has_flag, FlagValue,
};
pub use normalize::{build_parse_argv, is_runtime_executable, ParseArgvInput};
pub use root::{has_help_or_version, leading_global_flags_end, root_command_index};

/// The token that disables flag recognition for everything after it.
pub const FLAG_TERMINATOR: &str = "--";

/// Index of the first user-supplied token in a canonical argv.
pub const USER_ARGS_START: usize = 2;
