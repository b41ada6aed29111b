//! Propel - argv front controller for the propel multi-command CLI.
//!
//! Before any command runs, Propel canonicalizes the raw process arguments,
//! resolves the `--dev`/`--profile` selection into environment defaults,
//! rewrites legacy root flags and decides how much startup work the
//! invocation needs.
//!
//! # Modules
//!
//! - [`argv`] - Canonical argv shape, flag lookup and command paths
//! - [`cli`] - Root CLI surface and the dispatcher pipeline
//! - [`dispatch`] - Dispatch policy tables and decisions
//! - [`environment`] - Home, state dir, config path and version resolution
//! - [`error`] - Error types and result aliases
//! - [`profile`] - Profile flag parsing and profile-derived environment
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use propel::cli::Dispatcher;
//! use propel::environment::EnvMap;
//!
//! let mut dispatcher =
//!     Dispatcher::new(EnvMap::new()).with_home_dir(|| Some(PathBuf::from("/home/peter")));
//! let plan = dispatcher.dispatch(["propel", "--dev", "status"]).unwrap();
//!
//! assert_eq!(plan.argv, vec!["node", "propel", "status"]);
//! assert_eq!(plan.env_overrides["PROPEL_GATEWAY_PORT"], "19001");
//! assert!(!plan.decisions.migrate_state);
//! ```

pub mod argv;
pub mod cli;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod profile;

pub use error::{PropelError, Result};
