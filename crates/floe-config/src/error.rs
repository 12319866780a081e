//! Error types for descriptor loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Discovery errors
    #[error("no configuration file found under {root}")]
    NotFound { root: PathBuf },

    #[error("unsupported configuration format `{extension}`: {hint}")]
    UnsupportedFormat { extension: String, hint: String },

    /// The input is not a well-formed structured record.
    #[error("{path}: not a well-formed configuration record: {message}")]
    Parse { path: PathBuf, message: String },

    /// A recognized key holds a value outside its allowed type, enum,
    /// or range.
    #[error("invalid value for `{field}`: {message}")]
    Schema {
        field: String,
        message: String,
        hint: Option<String>,
    },

    /// Two concurrently-running profiles declare the same dev server
    /// port.
    #[error("dev server port {port} is declared by both `{first}` and `{second}`")]
    PortCollision {
        port: u16,
        first: String,
        second: String,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn schema(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Schema {
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub(crate) fn schema_hint(
        field: impl Into<String>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        ConfigError::Schema {
            field: field.into(),
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}
