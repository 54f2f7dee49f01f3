//! Print command implementation.

use monopack_config::{validate_schema, BuildEnv, ConfigBuilder};
use tracing::info;

use crate::cli::PrintArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the print command.
///
/// 1. Load settings (defaults, monopack.toml, environment, flags)
/// 2. Scan sibling packages and read the package manifest
/// 3. Build the selected variant and validate it
/// 4. Write the JSON to stdout or `--out`
pub fn execute(args: PrintArgs) -> Result<()> {
    let settings = utils::load_settings(&args.source, args.library.clone())?;
    let builder = ConfigBuilder::load(settings)?;

    let env = BuildEnv { dev: args.dev };
    let config = builder.build(&env);
    validate_schema(&config)?;

    info!(
        mode = config.mode.as_str(),
        aliases = config.resolve.alias.len(),
        externals = config.externals.len(),
        "generated bundler config"
    );

    utils::emit_json(&config, args.out.as_deref(), args.compact)?;

    if let Some(out) = &args.out {
        ui::success(&format!(
            "Wrote {} config for {} to {}",
            config.mode.as_str(),
            builder.manifest().name,
            out.display()
        ));
    }

    Ok(())
}
