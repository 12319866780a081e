//! File-based descriptor discovery.
//!
//! Handles finding and loading bundler configuration files from the
//! filesystem. One file describes one environment profile; consumers
//! that run several profiles at once load each file separately and
//! combine them through [`ProfileSet`](crate::profiles::ProfileSet).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::BundlerConfig;
use crate::error::{ConfigError, Result};

/// File-based configuration discovery.
///
/// Searches for descriptor files in conventional locations and loads
/// them. This is primarily for CLI use - library users should use
/// `BundlerConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use floe_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a descriptor file in the root directory.
    ///
    /// Searches in this order:
    /// 1. floe.config.json
    /// 2. floe.config.toml
    /// 3. package.json (floe field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in ["floe.config.json", "floe.config.toml"] {
            let path = self.root.join(name);
            if path.exists() {
                return Some(path);
            }
        }

        // package.json with floe field
        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("floe").is_some() && !parsed["floe"].is_null() {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load the descriptor from the discovered file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<BundlerConfig> {
        let path = self.find().ok_or_else(|| ConfigError::NotFound {
            root: self.root.clone(),
        })?;
        load_file(&path)
    }
}

/// Load a descriptor from a specific file path.
///
/// The format is dispatched on the file extension: `.json` and `.toml`
/// declarations are parsed; evaluated declarations (`.js`, `.mjs`,
/// `.cjs`) are rejected with a conversion hint, since the descriptor is
/// static data. A `package.json` path reads the `floe` field.
///
/// Failure is all-or-nothing: a malformed file produces an error and no
/// descriptor.
pub fn load_file(path: &Path) -> Result<BundlerConfig> {
    tracing::debug!("loading descriptor from {}", path.display());

    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return load_package_json(path);
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match extension {
        "json" => {
            let content = fs::read_to_string(path)?;
            parse_json(path, &content)
        }
        "toml" => {
            let content = fs::read_to_string(path)?;
            parse_toml(path, &content)
        }
        "js" | "mjs" | "cjs" => Err(ConfigError::UnsupportedFormat {
            extension: extension.to_string(),
            hint: "JavaScript declarations are not evaluated; port the exported object literal \
                   to floe.config.json"
                .to_string(),
        }),
        other => Err(ConfigError::UnsupportedFormat {
            extension: other.to_string(),
            hint: "expected a .json or .toml descriptor".to_string(),
        }),
    }
}

fn parse_json(path: &Path, content: &str) -> Result<BundlerConfig> {
    let value: Value = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    BundlerConfig::from_value(value)
}

fn parse_toml(path: &Path, content: &str) -> Result<BundlerConfig> {
    let toml_val: toml::Value = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    BundlerConfig::from_value(value)
}

fn load_package_json(path: &Path) -> Result<BundlerConfig> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let floe_value = parsed.get("floe").ok_or_else(|| {
        ConfigError::schema_hint(
            "floe",
            "field missing from package.json",
            "add a 'floe' field holding the descriptor",
        )
    })?;

    if floe_value.is_null() {
        return Err(ConfigError::schema("floe", "field cannot be null"));
    }

    BundlerConfig::from_value(floe_value.clone())
}

/// Discover and load the descriptor from the current directory
/// (convenience function).
///
/// # Example
///
/// ```no_run
/// use floe_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<BundlerConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load the descriptor from a given root directory
/// (convenience function).
pub fn discover_from(root: impl AsRef<Path>) -> Result<BundlerConfig> {
    ConfigDiscovery::new(root).load()
}
