//! Dependency install options.
//!
//! Older declarations use the top-level key `installOptions` for this
//! record; newer ones use `packageOptions`. Both deserialize into
//! [`PackageOptions`] (see the alias on
//! [`BundlerConfig`](crate::config::BundlerConfig)).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PackageOptions {
    /// Where the consuming tool resolves dependencies from.
    #[serde(default)]
    pub source: PackageSource,

    /// Extra specifiers the installer prepares even when no source file
    /// imports them directly.
    #[serde(default)]
    pub known_entrypoints: Vec<String>,
}

/// Dependency-resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageSource {
    /// Resolve from the project's local package directory.
    #[default]
    Local,
    /// Stream packages from a remote registry CDN.
    Remote,
}
