//! Command-line front controller for Propel.
//!
//! # Architecture
//!
//! - [`args`] - Root flag definitions and help/version rendering
//! - [`dispatcher`] - The pre-parse pipeline producing a [`DispatchPlan`]

pub mod args;
pub mod dispatcher;

pub use args::{root_command, RootCli, RootCommand};
pub use dispatcher::{DispatchPlan, Dispatcher, PROGRAM_NAME};
