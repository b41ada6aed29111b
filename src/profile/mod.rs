//! Named profiles.
//!
//! A profile is a named overlay that moves the state directory, config file
//! and gateway port so several independent setups can share one machine.
//! `--dev` is shorthand for `--profile dev`; the two are mutually exclusive.
//!
//! - [`parse`] - Strip global `--dev` / `--profile` flags from argv
//! - [`env`] - Fill profile-derived environment variables
//! - [`format`] - Add `--profile` to suggested commands

pub mod env;
pub mod format;
pub mod parse;

pub use env::{apply_cli_profile_env, EnvOverrides};
pub use format::{format_cli_command, normalize_profile_name};
pub use parse::{is_valid_profile_name, parse_cli_profile_args, ProfileArgs};

/// Profile selected by `--dev`.
pub const DEV_PROFILE: &str = "dev";

/// Gateway port the dev profile uses unless one is set explicitly.
pub const DEV_GATEWAY_PORT: u16 = 19001;
