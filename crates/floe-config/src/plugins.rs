//! Plugin pipeline references.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A pipeline stage reference, resolved by the consuming tool.
///
/// Either a bare package name or a `[name, options]` pair. Options are
/// an opaque value forwarded to the plugin; order in the `plugins` list
/// defines execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
    Name(String),
    WithOptions(String, Value),
}

impl PluginRef {
    pub fn name(&self) -> &str {
        match self {
            PluginRef::Name(name) => name,
            PluginRef::WithOptions(name, _) => name,
        }
    }

    pub fn options(&self) -> Option<&Value> {
        match self {
            PluginRef::Name(_) => None,
            PluginRef::WithOptions(_, options) => Some(options),
        }
    }
}
