//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the narrtx binary.

mod commands;
mod health;
mod process;
mod serve;

pub use commands::{Cli, Commands, ConfigArgs};
pub use health::handle_health_command;
pub use process::handle_process_command;
pub use serve::handle_serve_command;
