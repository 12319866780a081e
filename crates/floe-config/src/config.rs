//! The top-level configuration descriptor.
//!
//! A descriptor is parsed once from a static declaration, validated,
//! and handed to the consuming bundler/dev-server process at its
//! startup. It is never mutated afterwards. For file discovery, see the
//! `discovery` module; for cross-profile invariants, see `profiles`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::build::{BuildOptions, OptimizeOptions};
use crate::dev::DevOptions;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::mount::MountEntry;
use crate::packages::PackageOptions;
use crate::plugins::PluginRef;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BundlerConfig {
    /// Source directories exposed to the dev server and build, keyed by
    /// local path. Key order is declaration order.
    #[serde(default)]
    pub mount: IndexMap<PathBuf, MountEntry>,

    /// Processing pipeline stages, in execution order.
    #[serde(default)]
    pub plugins: Vec<PluginRef>,

    /// Dependency install strategy. `installOptions` is the older key
    /// for the same record; a declaration using both is rejected as a
    /// duplicate.
    #[serde(default, alias = "installOptions")]
    pub package_options: PackageOptions,

    #[serde(default)]
    pub dev_options: DevOptions,

    #[serde(default)]
    pub build_options: BuildOptions,

    /// Import-specifier rewrites, keyed by specifier.
    #[serde(default)]
    pub alias: IndexMap<String, PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimize: Option<OptimizeOptions>,
}

impl BundlerConfig {
    /// Build a descriptor from an in-memory JSON value.
    ///
    /// The value is already structured, so only shape violations can
    /// occur here; they surface as [`ConfigError::Schema`]. No
    /// partially-populated descriptor exists on failure.
    ///
    /// # Example
    ///
    /// ```
    /// use floe_config::BundlerConfig;
    /// use serde_json::json;
    ///
    /// let config = BundlerConfig::from_value(json!({
    ///     "devOptions": { "port": 8888 }
    /// }))
    /// .unwrap();
    /// assert_eq!(config.dev_options.port, 8888);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::Schema {
            field: "config".to_string(),
            message: e.to_string(),
            hint: None,
        })
    }

    /// Convert to serde_json::Value.
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::Schema {
            field: "config".to_string(),
            message: e.to_string(),
            hint: None,
        })
    }

    /// Read a single field by its dotted path in the serialized form.
    ///
    /// Returns the literal declared (or defaulted) value, or `None`
    /// when the path names nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use floe_config::BundlerConfig;
    /// use serde_json::json;
    ///
    /// let config = BundlerConfig::from_value(json!({
    ///     "devOptions": { "port": 8888 }
    /// }))
    /// .unwrap();
    /// assert_eq!(config.get("devOptions.port"), Some(json!(8888)));
    /// ```
    pub fn get(&self, path: &str) -> Option<Value> {
        let mut current = self.to_value().ok()?;
        for segment in path.split('.') {
            current = match current {
                Value::Object(mut map) => map.remove(segment)?,
                _ => return None,
            };
        }
        Some(current)
    }
}
