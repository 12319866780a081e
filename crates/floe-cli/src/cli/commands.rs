use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Floe subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate descriptor files
    ///
    /// Checks schema constraints, policy-locked dev options, and - when
    /// several files are given - that concurrently-running profiles
    /// bind distinct dev server ports.
    Check(CheckArgs),

    /// Print a descriptor, or a single field of it, as JSON
    Show(ShowArgs),

    /// Scaffold a starter descriptor for a new profile
    Init(InitArgs),
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Descriptor files to validate
    ///
    /// Each file is one environment profile. With no file, the current
    /// directory is searched for floe.config.json, floe.config.toml,
    /// or a "floe" field in package.json.
    #[arg(value_name = "CONFIG")]
    pub configs: Vec<PathBuf>,

    /// Project root for filesystem checks
    ///
    /// Defaults to each descriptor file's directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Also verify mounted directories and the build output location on
    /// disk
    #[arg(long)]
    pub fs: bool,

    /// Accept overrides of the policy-locked dev options with a warning
    /// instead of failing
    #[arg(long)]
    pub allow_policy_overrides: bool,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Descriptor file to read
    ///
    /// Searched in the current directory when omitted.
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a single field by dotted path, e.g. devOptions.port
    #[arg(long, value_name = "PATH")]
    pub field: Option<String>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scaffold into (created if missing)
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Dev server port for the new profile
    ///
    /// Profiles that run concurrently must use distinct ports.
    #[arg(long, default_value_t = 8888)]
    pub port: u16,

    /// Production build output directory
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub out: PathBuf,

    /// Overwrite an existing floe.config.json
    #[arg(long)]
    pub force: bool,
}
