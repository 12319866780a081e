//! Command implementations for the Floe CLI.
//!
//! - [`check`] - Descriptor validation
//! - [`show`] - Descriptor inspection
//! - [`init`] - Profile scaffolding
//!
//! Each command is implemented in its own module and provides an
//! `execute` function that takes the parsed command arguments and
//! returns a Result.

pub mod check;
pub mod init;
pub mod show;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use show::execute as show_execute;
