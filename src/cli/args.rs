//! Root CLI surface.
//!
//! The front controller only understands the global flags; every command
//! is passed through as an external subcommand. [`root_command`] is what
//! renders root `--help` and `--version`.

use clap::{ArgAction, CommandFactory, Parser, Subcommand};

use crate::dispatch::BUILTIN_COMMANDS;

/// Propel - personal agent gateway CLI.
#[derive(Debug, Parser)]
#[command(name = "propel")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct RootCli {
    /// Run under a named profile (isolates state dir, config and port)
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Shorthand for `--profile dev`
    #[arg(long, conflicts_with = "profile")]
    pub dev: bool,

    /// Log level for front-controller diagnostics (e.g. debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Update the CLI (same as `propel update`)
    #[arg(long)]
    pub update: bool,

    /// Print version
    #[arg(short = 'V', long, short_alias = 'v', action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<RootCommand>,
}

/// Anything after the global flags.
#[derive(Debug, Subcommand)]
pub enum RootCommand {
    /// A builtin or plugin command with its arguments
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl RootCommand {
    /// The primary command name.
    pub fn name(&self) -> Option<&str> {
        match self {
            RootCommand::External(args) => args.first().map(String::as_str),
        }
    }
}

/// The clap command used to render root help and version output.
///
/// Builtin commands are listed so `propel --help` shows them; their own
/// arguments belong to the command implementations.
pub fn root_command(version: impl Into<String>) -> clap::Command {
    RootCli::command()
        .version(version.into())
        .allow_external_subcommands(true)
        .subcommands(BUILTIN_COMMANDS.iter().map(|name| clap::Command::new(*name)))
}
