//! Package manifest (`package.json`) loading.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// File name of a package manifest inside a package directory.
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of `package.json` that drives config generation.
///
/// Unknown fields are ignored, so any real-world manifest deserializes as long
/// as it carries a `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,

    #[serde(default)]
    pub version: String,

    /// Dependencies the consumer must supply (absent means none)
    #[serde(default)]
    pub peer_dependencies: IndexMap<String, String>,
}

/// Only the `name` of a manifest; every other field may be malformed.
#[derive(Deserialize)]
struct PackageName {
    name: String,
}

impl PackageManifest {
    /// Parse manifest JSON. `path` is only used for error reporting.
    pub fn parse(content: &str, path: impl AsRef<Path>) -> Result<Self> {
        parse_json(content, path.as_ref())
    }

    /// Load a manifest from a file path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ManifestNotFound` if the file does not exist and
    /// `ConfigError::InvalidManifest` if it is not a valid manifest.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Self::parse(&read_manifest(path)?, path)
    }

    /// Load `<dir>/package.json`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(manifest_path(dir))
    }

    /// Version string, or an error naming the manifest when it is missing.
    pub fn require_version(&self, path: impl AsRef<Path>) -> Result<&str> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::InvalidManifest {
                path: path.as_ref().to_path_buf(),
                message: format!("package '{}' has no version", self.name),
            });
        }
        Ok(&self.version)
    }
}

pub fn manifest_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(MANIFEST_FILE)
}

/// Read only the package name from `<dir>/package.json`.
///
/// Fails like [`PackageManifest::from_dir`] when the file is missing, is not
/// JSON or has no string `name`; other fields are not inspected.
pub fn read_package_name(dir: impl AsRef<Path>) -> Result<String> {
    let path = manifest_path(dir);
    let package: PackageName = parse_json(&read_manifest(&path)?, &path)?;
    Ok(package.name)
}

fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ConfigError::ManifestNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Io(err),
    })
}

fn parse_json<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|e| ConfigError::InvalidManifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
