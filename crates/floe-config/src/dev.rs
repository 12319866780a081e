//! Development server options.

use serde::{Deserialize, Serialize};

/// Bind parameters and output behavior of the dev server.
///
/// `open` and `output` are policy-locked for managed projects: the
/// consuming tool supervises the server process itself and expects no
/// browser launch and stream-style logs. See
/// [`SchemaValidator`](crate::validation::SchemaValidator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevOptions {
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// TCP port the dev server binds. Must be unprivileged, and unique
    /// across concurrently-running profiles.
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub open: OpenMode,

    #[serde(default)]
    pub output: OutputMode,
}

impl Default for DevOptions {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            port: default_port(),
            open: OpenMode::None,
            output: OutputMode::Stream,
        }
    }
}

/// Browser auto-launch behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenMode {
    /// Never launch a browser.
    #[default]
    None,
    /// Launch the platform default browser.
    Default,
}

/// Dev server log output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain line-by-line log stream.
    #[default]
    Stream,
    /// Interactive terminal dashboard.
    Dashboard,
}

fn default_hostname() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    8080
}
