//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::{CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::AliasDirUnreadable { path, source } => miette::miette!(
            "Alias directory cannot be read: {}\n{}\n\nHint: Pass --alias-dir or set alias_dir in monopack.toml",
            path.display(),
            source
        ),
        ConfigError::ManifestNotFound { path } => miette::miette!(
            "Package manifest not found: {}\n\nHint: Run inside a package or pass --root",
            path.display()
        ),
        ConfigError::SchemaValidation {
            message,
            hint: Some(hint),
        } => miette::miette!("Invalid configuration: {}\n\nHint: {}", message, hint),
        other => miette::miette!("Configuration error: {}", other),
    }
}
