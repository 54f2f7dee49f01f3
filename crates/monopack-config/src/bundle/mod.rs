//! Bundler configuration types emitted by the generator.

mod helpers;
mod plugin;
mod transform;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use plugin::InjectionPlugin;
pub use transform::{BabelItem, BabelOptions, TransformRule};
pub use types::{LibraryTarget, Mode};

pub(crate) use helpers::{
    default_alias_dir, default_dev_filename, default_entry, default_extensions,
    default_filename, default_library, default_package_root,
};

use crate::discovery::AliasMap;
use crate::externals::ExternalsMap;

/// Complete bundler configuration
///
/// Serializes to the camelCase object shape the bundler consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub mode: Mode,

    /// Entry name → entry module
    pub entry: IndexMap<String, PathBuf>,

    pub output: OutputOptions,

    pub resolve: ResolveOptions,

    pub module: ModuleOptions,

    /// Dependencies left out of the bundle and read from runtime globals
    pub externals: ExternalsMap,

    pub plugins: Vec<InjectionPlugin>,

    /// Node.js polyfills (always disabled)
    #[serde(default)]
    pub node: bool,

    /// Source map generation (always disabled)
    #[serde(default)]
    pub devtool: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    #[serde(default)]
    pub library_target: LibraryTarget,

    /// Directory bundles are written to
    pub path: PathBuf,

    /// Bundle file name, relative to `path`
    pub filename: String,

    /// Global the library is exposed as
    pub library: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Package name → source directory
    #[serde(default)]
    pub alias: AliasMap,

    /// Extensions tried, in order, for extensionless imports
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default)]
    pub rules: Vec<TransformRule>,
}

impl BuildConfig {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use monopack_config::{BuildConfig, Mode};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "mode": "development",
    ///     "entry": { "main": "./bundle" },
    ///     "output": { "path": ".", "filename": "dist.js", "library": "deck" },
    ///     "resolve": {},
    ///     "module": { "rules": [] },
    ///     "externals": {},
    ///     "plugins": []
    /// });
    ///
    /// let config = BuildConfig::from_value(value).unwrap();
    /// assert_eq!(config.mode, Mode::Development);
    /// assert_eq!(config.resolve.extensions, vec![".ts", ".tsx", ".js", ".json"]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }

    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, crate::error::ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "config".to_string(),
            message: e.to_string(),
        })
    }
}
