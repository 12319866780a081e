pub mod build;
pub mod config;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod mount;
pub mod packages;
pub mod plugins;
pub mod profiles;
pub mod validation;

// Re-export main types
pub use build::*;
pub use config::*;
pub use dev::*;
pub use error::*;
pub use mount::*;
pub use packages::*;
pub use plugins::*;

// Re-export discovery, profiles, and validation
pub use discovery::{discover, discover_from, load_file, ConfigDiscovery};
pub use profiles::ProfileSet;
pub use validation::{
    validate_fs, validate_schema, ConfigValidator, FsValidator, PolicyMode, SchemaValidator,
};
