//! CLI module - Command-line interface for the Late Show API
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Late Show API - episodes, guests and their appearances over HTTP
#[derive(Parser)]
#[command(name = "late-show")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API (default when no command is given)
    #[command(alias = "server", alias = "run")]
    Serve,

    /// Clear the database and load the fixture episodes, guests and appearances
    Seed,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

impl Commands {
    /// Whether the command reads `config.toml`. `init` must not, so that it
    /// still works when the existing file is broken.
    #[must_use]
    pub const fn needs_config(self) -> bool {
        !matches!(self, Self::Init)
    }
}

pub use commands::*;
