//! Build output and optimization options.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildOptions {
    /// Output directory for production builds. Must not overlap any
    /// mounted source directory.
    #[serde(default = "default_out")]
    pub out: PathBuf,

    /// Public URL prefix baked into emitted assets.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Remove the output directory before building.
    #[serde(default)]
    pub clean: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            out: default_out(),
            base_url: default_base_url(),
            clean: false,
        }
    }
}

/// Optimization pass toggles. An absent `optimize` section means the
/// build ships unoptimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizeOptions {
    /// Enable the bundling pass.
    #[serde(default)]
    pub bundle: bool,

    /// Enable the minification pass.
    #[serde(default)]
    pub minify: bool,

    /// Language-version baseline the output is compiled down to.
    #[serde(default)]
    pub target: EsTarget,
}

/// Target ECMAScript version for the optimization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    /// ECMAScript 2015 (ES6)
    ES2015,
    /// ECMAScript 2016
    ES2016,
    /// ECMAScript 2017
    ES2017,
    /// ECMAScript 2018 (default)
    #[default]
    ES2018,
    /// ECMAScript 2019
    ES2019,
    /// ECMAScript 2020
    ES2020,
    /// ECMAScript 2021
    ES2021,
    /// ECMAScript 2022
    ES2022,
    /// Latest ECMAScript
    ESNext,
}

fn default_out() -> PathBuf {
    PathBuf::from("build")
}

fn default_base_url() -> String {
    "/".into()
}
