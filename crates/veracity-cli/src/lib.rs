//! Veracity CLI library.
//!
//! This library provides the core functionality for the `veracity` command-line
//! interface, including console claim intake, configuration management,
//! command execution, and output formatting.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod intake;
pub mod output;
pub mod repl;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
