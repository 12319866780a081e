//! Command-line interface definition for Floe.
//!
//! This module defines the complete CLI structure using clap v4's
//! derive macros.
//!
//! # Command Structure
//!
//! - `floe check` - Validate descriptor files
//! - `floe show` - Print a descriptor or a single field
//! - `floe init` - Scaffold a starter descriptor

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, ShowArgs};

/// Floe - bundler configuration descriptors for operators
#[derive(Parser, Debug)]
#[command(
    name = "floe",
    version,
    about = "Validate, inspect, and scaffold bundler configuration descriptors",
    long_about = "Floe manages the static configuration descriptors a bundler/dev-server\n\
                  toolchain reads at startup: it validates their schema and policy\n\
                  constraints, prints their literal values, and scaffolds new profiles."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Useful for CI environments or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
