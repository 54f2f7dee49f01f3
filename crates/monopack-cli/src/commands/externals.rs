//! Externals command implementation.

use monopack_config::PackageManifest;

use crate::cli::ExternalsArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the externals command.
pub fn execute(args: ExternalsArgs) -> Result<()> {
    let settings = utils::load_settings(&args.source, None)?;
    let manifest = PackageManifest::from_dir(&settings.package_root)?;
    let externals = settings.externals.resolve(&manifest);

    utils::emit_json(&externals, None, args.compact)
}
