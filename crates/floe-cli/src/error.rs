//! Error handling for the Floe CLI.
//!
//! `CliError` wraps the descriptor errors from `floe-config` and adds
//! the CLI's own failure modes. `cli_error_to_miette` turns them into
//! operator-facing diagnostics that name the offending field.

use std::path::PathBuf;

use floe_config::ConfigError;
use miette::Report;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Descriptor loading or validation errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A scaffold target already exists
    #[error("refusing to overwrite {path}")]
    AlreadyExists { path: PathBuf },

    /// A dotted field path named nothing in the descriptor
    #[error("unknown field: {path}")]
    UnknownField { path: String },

    /// Serialization failures when printing descriptors
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert CliError to a miette Report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::Schema {
            field,
            message,
            hint,
        }) => match hint {
            Some(hint) => miette::miette!(
                "invalid value for `{}`: {}\n\nHint: {}",
                field,
                message,
                hint
            ),
            None => miette::miette!("invalid value for `{}`: {}", field, message),
        },
        CliError::Config(ConfigError::Parse { path, message }) => miette::miette!(
            "{}: not a well-formed configuration record: {}",
            path.display(),
            message
        ),
        CliError::Config(ConfigError::PortCollision {
            port,
            first,
            second,
        }) => miette::miette!(
            "dev server port {} is declared by both `{}` and `{}`\n\n\
             Hint: concurrently-running profiles must bind distinct ports",
            port,
            first,
            second
        ),
        CliError::Config(ConfigError::UnsupportedFormat { extension, hint }) => {
            miette::miette!(
                "unsupported configuration format `{}`\n\nHint: {}",
                extension,
                hint
            )
        }
        CliError::AlreadyExists { path } => miette::miette!(
            "refusing to overwrite {}\n\nHint: pass --force to replace it",
            path.display()
        ),
        CliError::UnknownField { path } => miette::miette!(
            "unknown field: {}\n\nHint: field paths are dotted serialized names, \
             e.g. devOptions.port",
            path
        ),
        _ => miette::miette!("{}", err),
    }
}
