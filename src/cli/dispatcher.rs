//! Front-controller dispatching.
//!
//! [`Dispatcher`] runs the pre-parse pipeline over raw process args:
//!
//! 1. Canonicalize argv to `[runtime, program, ...user_args]`
//! 2. Strip `--dev`/`--profile` and fill profile-derived environment
//! 3. Rewrite a legacy root `--update` into the `update` command
//! 4. Check for help/version, locate the primary command and answer the
//!    dispatch questions, all against the final argv
//!
//! The result is a [`DispatchPlan`] that the command layer acts on.

use std::path::PathBuf;

use serde::Serialize;

use crate::argv::{
    build_parse_argv, get_command_path, has_help_or_version, root_command_index, ParseArgvInput,
};
use crate::dispatch::{is_builtin_command, rewrite_update_flag_argv, DispatchDecisions};
use crate::environment::{effective_version, system_home_dir, EnvMap};
use crate::error::Result;
use crate::profile::{apply_cli_profile_env, parse_cli_profile_args, EnvOverrides, ProfileArgs};

/// Name of the CLI program.
pub const PROGRAM_NAME: &str = "propel";

/// Everything the command layer needs to run one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchPlan {
    /// Final argv with profile flags removed and `--update` rewritten.
    pub argv: Vec<String>,
    /// Profile selected on the command line, if any.
    pub profile: Option<String>,
    /// Environment variables the profile filled in.
    pub env_overrides: EnvOverrides,
    /// Leading command tokens after the global flags.
    pub command_path: Vec<String>,
    /// First token of [`DispatchPlan::command_path`].
    pub primary: Option<String>,
    /// Whether the primary command is builtin.
    pub builtin_primary: bool,
    /// Help or version was requested.
    pub help_or_version: bool,
    /// Version reported by `--version`.
    pub version: String,
    /// Answers to the dispatch policy questions.
    pub decisions: DispatchDecisions,
}

impl DispatchPlan {
    /// Whether the invocation is root help/version with no command.
    pub fn is_root_help_or_version(&self) -> bool {
        self.help_or_version && self.primary.is_none()
    }
}

/// Runs the pre-parse pipeline against an environment snapshot.
pub struct Dispatcher {
    env: EnvMap,
    homedir: Box<dyn Fn() -> Option<PathBuf>>,
    program_name: String,
}

impl Dispatcher {
    /// Create a dispatcher over an environment snapshot.
    ///
    /// The OS home directory is used as the last home fallback.
    pub fn new(env: EnvMap) -> Self {
        Self {
            env,
            homedir: Box::new(system_home_dir),
            program_name: PROGRAM_NAME.to_string(),
        }
    }

    /// Replace the OS home directory accessor.
    pub fn with_home_dir<F>(mut self, homedir: F) -> Self
    where
        F: Fn() -> Option<PathBuf> + 'static,
    {
        self.homedir = Box::new(homedir);
        self
    }

    /// Replace the program name used when canonicalizing argv.
    pub fn with_program_name(mut self, program_name: impl Into<String>) -> Self {
        self.program_name = program_name.into();
        self
    }

    /// The environment, including any profile-derived variables.
    pub fn env(&self) -> &EnvMap {
        &self.env
    }

    /// Run the pipeline over raw process args.
    ///
    /// # Errors
    ///
    /// Returns the profile parse error for conflicting or invalid profile
    /// flags. The environment is left untouched in that case.
    pub fn dispatch<I, S>(&mut self, raw_args: I) -> Result<DispatchPlan>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let input = ParseArgvInput::new(self.program_name.as_str()).with_raw_args(raw_args);
        let argv = build_parse_argv(&input);

        let ProfileArgs { profile, argv } = parse_cli_profile_args(&argv)?;
        let env_overrides = match profile.as_deref() {
            Some(name) => apply_cli_profile_env(Some(name), &mut self.env, &*self.homedir),
            None => EnvOverrides::new(),
        };

        let argv = rewrite_update_flag_argv(&argv).into_owned();
        let help_or_version = has_help_or_version(&argv);
        let command_path = get_command_path(&argv, root_command_index(&argv));
        let primary = command_path.first().cloned();
        let builtin_primary = primary.as_deref().is_some_and(is_builtin_command);
        let decisions = DispatchDecisions::for_command_path(
            help_or_version,
            &command_path,
            primary.as_deref(),
            builtin_primary,
        );

        tracing::debug!(
            "Dispatching {:?} (primary: {:?}, builtin: {})",
            argv,
            primary,
            builtin_primary
        );

        Ok(DispatchPlan {
            argv,
            profile,
            env_overrides,
            command_path,
            primary,
            builtin_primary,
            help_or_version,
            version: effective_version(&self.env),
            decisions,
        })
    }
}
