//! Command-line interface components
//!
//! This module contains CLI-specific code for the velox updater: argument
//! parsing and the update command handler.

pub mod args;
pub mod commands;

pub use args::{Cli, GlobalArgs, UpdateArgs};
pub use commands::handle_update;
