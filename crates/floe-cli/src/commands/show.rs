//! Show command implementation.
//!
//! Prints a loaded descriptor, or one field of it, as JSON.

use floe_config::{discover, load_file, BundlerConfig};

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};

/// Execute the show command.
///
/// Output goes to stdout so it can be piped; a single `--field` prints
/// the literal declared (or defaulted) value at that dotted path.
pub fn execute(args: ShowArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_file(path)?,
        None => discover()?,
    };

    match &args.field {
        Some(path) => print_field(&config, path),
        None => {
            println!("{}", serde_json::to_string_pretty(&config.to_value()?)?);
            Ok(())
        }
    }
}

fn print_field(config: &BundlerConfig, path: &str) -> Result<()> {
    let value = config.get(path).ok_or_else(|| CliError::UnknownField {
        path: path.to_string(),
    })?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_field_is_an_error() {
        let config = BundlerConfig::from_value(json!({})).expect("config");
        let err = print_field(&config, "devOptions.banana").expect_err("unknown field");
        assert!(matches!(err, CliError::UnknownField { .. }));
    }

    #[test]
    fn known_field_prints() {
        let config =
            BundlerConfig::from_value(json!({ "devOptions": { "port": 8888 } })).expect("config");
        assert!(print_field(&config, "devOptions.port").is_ok());
    }
}
