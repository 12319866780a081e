//! Mount table types: local directories exposed under public URLs.

use serde::{Deserialize, Serialize};

/// A single mount declaration.
///
/// The short form maps a source directory straight to a public URL.
/// The long form carries the full specification understood by the
/// consuming dev server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MountEntry {
    Url(String),
    Spec(MountSpec),
}

impl MountEntry {
    /// Public URL this mount is served under.
    pub fn url(&self) -> &str {
        match self {
            MountEntry::Url(url) => url,
            MountEntry::Spec(spec) => &spec.url,
        }
    }

    /// Whether files are served verbatim, skipping the build pipeline.
    pub fn is_static(&self) -> bool {
        match self {
            MountEntry::Url(_) => false,
            MountEntry::Spec(spec) => spec.is_static,
        }
    }

    /// Whether imports in served files are rewritten.
    pub fn resolve(&self) -> bool {
        match self {
            MountEntry::Url(_) => true,
            MountEntry::Spec(spec) => spec.resolve,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MountSpec {
    /// Public URL prefix, must begin with `/`.
    pub url: String,

    /// Serve files verbatim without building them.
    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// Rewrite imports in served files.
    #[serde(default = "default_resolve")]
    pub resolve: bool,
}

fn default_resolve() -> bool {
    true
}
