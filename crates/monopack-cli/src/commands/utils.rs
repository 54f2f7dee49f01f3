//! Shared utilities for command implementations.

use std::fs;
use std::path::Path;

use monopack_config::{GeneratorSettings, SettingsOverrides, ENV_PREFIX, SETTINGS_FILE};
use serde::Serialize;
use tracing::debug;

use crate::cli::SourceArgs;
use crate::error::{Result, ResultExt};

/// Load generator settings for the package selected on the command line.
///
/// The package root defaults to the current directory; `--root` and
/// `--alias-dir` override whatever `monopack.toml` or the environment say.
/// Returned paths are absolute.
pub fn load_settings(source: &SourceArgs, library: Option<String>) -> Result<GeneratorSettings> {
    let root = match &source.root {
        Some(root) => std::path::absolute(root),
        None => std::env::current_dir(),
    }
    .context("Failed to locate the package root")?;

    let overrides = SettingsOverrides {
        package_root: source.root.as_ref().map(|_| root.clone()),
        alias_dir: source.alias_dir.clone(),
        library,
    };

    let settings = GeneratorSettings::load(&root, &overrides)
        .with_hint(format!(
            "Check {} and the {}* environment variables",
            SETTINGS_FILE, ENV_PREFIX
        ))?
        .resolved()?;
    debug!(
        root = %settings.package_root.display(),
        alias_dir = %settings.alias_dir.display(),
        "settings loaded"
    );
    Ok(settings)
}

/// Serialize `value` as JSON to `out`, or to stdout when no file is given.
pub fn emit_json<T: Serialize>(value: &T, out: Option<&Path>, compact: bool) -> Result<()> {
    let mut json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    json.push('\n');

    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(path, json).with_path(path)?;
        }
        None => print!("{json}"),
    }

    Ok(())
}
