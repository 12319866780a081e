//! Logging infrastructure for the Floe CLI.
//!
//! Structured logging via the `tracing` ecosystem: `--verbose` for
//! debug, `--quiet` for errors only, `RUST_LOG` for custom filters.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Should be called once at the start of the program, before any
/// logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for floe crates
/// 2. `--quiet` flag: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for floe crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("floe=debug,floe_config=debug,floe_cli=debug")
    } else if quiet {
        EnvFilter::new("floe=error,floe_config=error,floe_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("floe=info,floe_config=info,floe_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
