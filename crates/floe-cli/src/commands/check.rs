//! Check command implementation.
//!
//! Validates descriptor files without running anything.

use std::path::{Path, PathBuf};

use floe_config::{
    load_file, ConfigDiscovery, ConfigError, ConfigValidator, FsValidator, PolicyMode,
    ProfileSet, SchemaValidator,
};

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Resolve the descriptor files (explicit paths, or discovery from
///    the current directory)
/// 2. Load each file and validate its schema and policy constraints
/// 3. Verify filesystem references (if --fs)
/// 4. Verify dev server ports are distinct across the files
///
/// # Errors
///
/// Returns errors for malformed files, schema or policy violations,
/// missing mounted directories, and port collisions.
pub fn execute(args: CheckArgs) -> Result<()> {
    let policy = if args.allow_policy_overrides {
        PolicyMode::Warn
    } else {
        PolicyMode::Enforce
    };

    let configs = resolve_configs(&args)?;
    tracing::debug!("validating {} descriptor file(s)", configs.len());

    let mut set = ProfileSet::new();
    for path in &configs {
        ui::info(&format!("Checking {}", path.display()));

        let config = load_file(path)?;

        let root = args
            .root
            .clone()
            .or_else(|| path.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));

        if args.fs {
            FsValidator::with_policy(&root, policy).validate(&config)?;
        } else {
            SchemaValidator::with_policy(policy).validate(&config)?;
        }

        // Profiles are named by path so collision diagnostics point at
        // the offending files.
        set.insert(path.display().to_string(), config)?;

        ui::success(&format!("  {} is valid", path.display()));
    }

    if configs.len() > 1 {
        ui::success(&format!(
            "{} profiles checked, dev server ports are distinct",
            set.len()
        ));
    }

    ui::success("All checks passed!");
    Ok(())
}

fn resolve_configs(args: &CheckArgs) -> Result<Vec<PathBuf>> {
    if !args.configs.is_empty() {
        return Ok(args.configs.clone());
    }

    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let path = ConfigDiscovery::new(&root)
        .find()
        .ok_or(ConfigError::NotFound { root })?;
    Ok(vec![path])
}
