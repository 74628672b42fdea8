//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the randomizer binary.

mod commands;
mod render;
mod run;
mod secret;

pub use commands::{Cli, Commands};
pub use run::{run_once, run_shell};
pub use secret::check_secret;
