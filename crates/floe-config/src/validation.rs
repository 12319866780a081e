//! Pluggable descriptor validation strategies.
//!
//! Separates pure schema validation from filesystem checks, so library
//! consumers working against virtual or in-memory files can skip the
//! latter.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::config::BundlerConfig;
use crate::dev::{OpenMode, OutputMode};
use crate::error::{ConfigError, Result};

/// How overrides of the policy-locked dev options are treated.
///
/// `devOptions.open` and `devOptions.output` are fixed to `none` and
/// `stream` for managed projects: the consuming tool supervises the
/// server process itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyMode {
    /// Reject the descriptor. Startup must halt on a policy override.
    #[default]
    Enforce,
    /// Accept the value and log a warning.
    Warn,
}

/// Trait for pluggable descriptor validation strategies.
pub trait ConfigValidator {
    fn validate(&self, config: &BundlerConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks).
///
/// # Example
///
/// ```
/// use floe_config::{BundlerConfig, ConfigValidator, SchemaValidator};
///
/// let config = BundlerConfig::default();
/// SchemaValidator::default().validate(&config).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SchemaValidator {
    policy: PolicyMode,
}

impl SchemaValidator {
    pub fn with_policy(policy: PolicyMode) -> Self {
        Self { policy }
    }
}

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundlerConfig) -> Result<()> {
        // Dev server bind parameters
        let port = config.dev_options.port;
        if port == 0 {
            return Err(ConfigError::schema_hint(
                "devOptions.port",
                "port 0 is not a bindable dev server port",
                "pick a port between 1024 and 65535",
            ));
        }
        if port < 1024 {
            return Err(ConfigError::schema_hint(
                "devOptions.port",
                format!("port {port} is privileged"),
                "pick a port between 1024 and 65535",
            ));
        }

        if config.dev_options.hostname.trim().is_empty() {
            return Err(ConfigError::schema(
                "devOptions.hostname",
                "hostname cannot be empty",
            ));
        }

        // Policy-locked fields
        if config.dev_options.open != OpenMode::None {
            match self.policy {
                PolicyMode::Enforce => {
                    return Err(ConfigError::schema_hint(
                        "devOptions.open",
                        "locked to `none`",
                        "the consuming tool supervises the server and never launches a browser",
                    ));
                }
                PolicyMode::Warn => {
                    tracing::warn!(
                        "devOptions.open overrides the locked value `none`; the consuming tool \
                         may ignore it"
                    );
                }
            }
        }
        if config.dev_options.output != OutputMode::Stream {
            match self.policy {
                PolicyMode::Enforce => {
                    return Err(ConfigError::schema_hint(
                        "devOptions.output",
                        "locked to `stream`",
                        "the consuming tool captures server logs as a stream",
                    ));
                }
                PolicyMode::Warn => {
                    tracing::warn!(
                        "devOptions.output overrides the locked value `stream`; the consuming \
                         tool may ignore it"
                    );
                }
            }
        }

        // Mount table
        for (source, entry) in &config.mount {
            if source.as_os_str().is_empty() {
                return Err(ConfigError::schema(
                    "mount",
                    "mounted directory paths cannot be empty",
                ));
            }
            if !entry.url().starts_with('/') {
                return Err(ConfigError::schema_hint(
                    format!("mount.{}", source.display()),
                    format!("public URL `{}` must begin with '/'", entry.url()),
                    "mount URLs are absolute paths on the dev server",
                ));
            }
        }

        // Plugin pipeline
        for plugin in &config.plugins {
            if plugin.name().trim().is_empty() {
                return Err(ConfigError::schema(
                    "plugins",
                    "plugin names cannot be empty",
                ));
            }
        }

        // Alias table
        for (specifier, target) in &config.alias {
            if specifier.trim().is_empty() {
                return Err(ConfigError::schema(
                    "alias",
                    "import specifiers cannot be empty",
                ));
            }
            if target.as_os_str().is_empty() {
                return Err(ConfigError::schema(
                    format!("alias.{specifier}"),
                    "alias targets cannot be empty",
                ));
            }
        }

        // Build output must not overlap a mounted source directory
        let out = config.build_options.out.clean();
        for source in config.mount.keys() {
            let source = source.clean();
            if out.starts_with(&source) || source.starts_with(&out) {
                return Err(ConfigError::schema_hint(
                    "buildOptions.out",
                    format!(
                        "output directory `{}` overlaps mounted directory `{}`",
                        out.display(),
                        source.display()
                    ),
                    "choose an output directory outside every mounted directory",
                ));
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use).
///
/// Validates that mounted directories exist on disk and the build
/// output location is usable, on top of schema validation.
///
/// # Example
///
/// ```no_run
/// use floe_config::{BundlerConfig, ConfigValidator, FsValidator};
///
/// let config = BundlerConfig::default();
/// FsValidator::new(".").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
    policy: PolicyMode,
}

impl FsValidator {
    /// Create a new filesystem validator with a project root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            policy: PolicyMode::default(),
        }
    }

    pub fn with_policy(root: impl AsRef<Path>, policy: PolicyMode) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            policy,
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BundlerConfig) -> Result<()> {
        // Schema first, then filesystem references
        SchemaValidator::with_policy(self.policy).validate(config)?;

        for source in config.mount.keys() {
            let path = self.root.join(source);
            if !path.is_dir() {
                return Err(ConfigError::schema_hint(
                    format!("mount.{}", source.display()),
                    format!("mounted directory not found: {}", path.display()),
                    "mount keys are directories relative to the project root",
                ));
            }
        }

        let out = self.root.join(&config.build_options.out);
        if out.exists() && !out.is_dir() {
            return Err(ConfigError::schema(
                "buildOptions.out",
                format!("{} exists and is not a directory", out.display()),
            ));
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation.
pub fn validate_schema(config: &BundlerConfig) -> Result<()> {
    SchemaValidator::default().validate(config)
}

/// Convenience function for filesystem validation.
pub fn validate_fs(config: &BundlerConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
