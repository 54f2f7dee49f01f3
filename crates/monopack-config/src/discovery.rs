//! Sibling package discovery for import aliases
//!
//! Scans the monorepo's package directory and maps every sub-package name to
//! its `src` directory so imports resolve against sources instead of builds.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::manifest::read_package_name;

/// Package name → absolute source directory.
pub type AliasMap = IndexMap<String, PathBuf>;

/// Directory holding each sub-package's sources.
pub const SOURCE_DIR: &str = "src";

/// A sub-directory that was left out of the alias table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPackage {
    pub dir: PathBuf,
    pub reason: String,
}

/// Result of a best-effort alias scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasScan {
    pub aliases: AliasMap,
    pub skipped: Vec<SkippedPackage>,
}

/// Alias discovery over one parent directory
///
/// Only immediate sub-directories are inspected. A sub-directory whose
/// `package.json` is missing or invalid is skipped; only a parent directory
/// that cannot be listed fails the scan.
///
/// # Example
///
/// ```no_run
/// use monopack_config::AliasDiscovery;
///
/// let aliases = AliasDiscovery::new("..").discover().unwrap();
/// for (name, src) in &aliases {
///     println!("{name} -> {}", src.display());
/// }
/// ```
pub struct AliasDiscovery {
    parent: PathBuf,
}

impl AliasDiscovery {
    /// Create a discovery rooted at the directory containing sub-packages
    pub fn new(parent: impl AsRef<Path>) -> Self {
        Self {
            parent: parent.as_ref().to_path_buf(),
        }
    }

    pub fn parent(&self) -> &Path {
        &self.parent
    }

    /// Scan the parent directory, keeping track of skipped sub-packages
    ///
    /// Sub-directories are visited in name order so repeated scans of the same
    /// tree produce identical maps.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AliasDirUnreadable` if the parent directory cannot
    /// be resolved or listed.
    pub fn scan(&self) -> Result<AliasScan> {
        let unreadable = |source| ConfigError::AliasDirUnreadable {
            path: self.parent.clone(),
            source,
        };

        let parent = std::path::absolute(&self.parent).map_err(unreadable)?;
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&parent).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            if entry.path().is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();

        let mut scan = AliasScan::default();
        for dir in dirs {
            match read_package_name(&dir) {
                Ok(name) => {
                    let src = dir.join(SOURCE_DIR);
                    debug!(package = %name, src = %src.display(), "alias");
                    if let Some(previous) = scan.aliases.insert(name, src) {
                        debug!(replaced = %previous.display(), "duplicate package name");
                    }
                }
                Err(err) => {
                    debug!(dir = %dir.display(), %err, "skipping sub-package");
                    scan.skipped.push(SkippedPackage {
                        dir,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(scan)
    }

    /// Scan and return only the alias table
    pub fn discover(&self) -> Result<AliasMap> {
        self.scan().map(|scan| scan.aliases)
    }
}

/// Discover aliases under `parent` (convenience function)
pub fn discover_aliases(parent: impl AsRef<Path>) -> Result<AliasMap> {
    AliasDiscovery::new(parent).discover()
}
