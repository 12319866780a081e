//! Init command implementation.
//!
//! Scaffolds a starter descriptor file for a new profile.

use std::fs;
use std::path::{Path, PathBuf};

use floe_config::{
    validate_schema, BundlerConfig, EsTarget, MountEntry, MountSpec, OptimizeOptions,
};

use crate::cli::InitArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the init command.
///
/// # Process
///
/// 1. Create the target directory if missing
/// 2. Refuse to overwrite an existing descriptor unless --force
/// 3. Write a starter floe.config.json with the requested port and
///    output directory
///
/// # Errors
///
/// Returns errors for unusable ports, existing descriptors, and file
/// write failures.
pub fn execute(args: InitArgs) -> Result<()> {
    let dir = &args.dir;
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join("floe.config.json");
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists { path });
    }

    let config = starter_config(args.port, &args.out);

    // The scaffold must pass the same checks `floe check` applies
    validate_schema(&config)?;

    let mut json = serde_json::to_string_pretty(&config.to_value()?)?;
    json.push('\n');
    fs::write(&path, json)?;

    ui::success(&format!("Wrote {}", path.display()));
    ui::info("Next steps:");
    ui::info(&format!("  floe check {}", path.display()));
    Ok(())
}

/// A starter profile: static assets from `public/`, built sources from
/// `src/`, optimized production output.
fn starter_config(port: u16, out: &Path) -> BundlerConfig {
    let mut config = BundlerConfig::default();

    config.mount.insert(
        PathBuf::from("public"),
        MountEntry::Spec(MountSpec {
            url: "/".into(),
            is_static: true,
            resolve: false,
        }),
    );
    config
        .mount
        .insert(PathBuf::from("src"), MountEntry::Url("/dist".into()));

    config.dev_options.port = port;
    config.build_options.out = out.to_path_buf();
    config.optimize = Some(OptimizeOptions {
        bundle: true,
        minify: true,
        target: EsTarget::ES2018,
    });

    config
}
