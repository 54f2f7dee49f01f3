//! Aliases command implementation.

use monopack_config::AliasDiscovery;

use crate::cli::AliasesArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the aliases command.
///
/// Skipped sub-directories are reported as warnings on stderr; they never
/// fail the command.
pub fn execute(args: AliasesArgs) -> Result<()> {
    let settings = utils::load_settings(&args.source, None)?;
    let scan = AliasDiscovery::new(&settings.alias_dir).scan()?;

    for skipped in &scan.skipped {
        ui::warning(&format!(
            "Skipped {}: {}",
            skipped.dir.display(),
            skipped.reason
        ));
    }

    utils::emit_json(&scan.aliases, None, args.compact)
}
