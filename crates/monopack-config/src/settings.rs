//! Generator settings with multi-source loading.
//!
//! Priority: overrides (CLI) > environment (`MONOPACK_*`) > `monopack.toml` > defaults

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bundle::{
    default_alias_dir, default_dev_filename, default_entry, default_filename, default_library,
    default_package_root,
};
use crate::error::{ConfigError, Result};
use crate::externals::ExternalsRules;

/// Settings file looked up in the package root
pub const SETTINGS_FILE: &str = "monopack.toml";

/// Environment variable prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "MONOPACK_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Package being bundled (holds `package.json`, receives the output)
    pub package_root: PathBuf,

    /// Directory whose sub-directories are aliased packages
    pub alias_dir: PathBuf,

    pub entry: IndexMap<String, PathBuf>,

    /// Global name the bundle is exposed as
    pub library: String,

    pub filename: String,

    pub dev_filename: String,

    pub externals: ExternalsRules,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            package_root: default_package_root(),
            alias_dir: default_alias_dir(),
            entry: default_entry(),
            library: default_library(),
            filename: default_filename(),
            dev_filename: default_dev_filename(),
            externals: ExternalsRules::default(),
        }
    }
}

/// Values supplied on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
}

impl GeneratorSettings {
    /// Layered provider for a package root.
    ///
    /// `root` becomes the package root unless the settings file or the
    /// environment name another one.
    pub fn figment(root: impl AsRef<Path>) -> Figment {
        let root = root.as_ref();
        let located = SettingsOverrides {
            package_root: Some(root.to_path_buf()),
            ..SettingsOverrides::default()
        };
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Serialized::defaults(located));

        let settings_path = root.join(SETTINGS_FILE);
        if settings_path.exists() {
            debug!(path = %settings_path.display(), "loading settings file");
            figment = figment.merge(Toml::file(settings_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load settings for the package at `root`, applying `overrides` last.
    ///
    /// A relative `package_root` from any layer is taken relative to `root`.
    pub fn load(root: impl AsRef<Path>, overrides: &SettingsOverrides) -> Result<Self> {
        let root = absolute(root.as_ref())?;
        let mut settings: Self = Self::figment(&root)
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(|e| ConfigError::InvalidSettings(e.to_string()))?;
        if settings.package_root.is_relative() {
            settings.package_root = root.join(&settings.package_root);
        }
        Ok(settings)
    }

    /// Make every path absolute.
    ///
    /// A relative package root is resolved against the working directory;
    /// relative alias directory and entry paths against the package root.
    pub fn resolved(mut self) -> Result<Self> {
        let root = absolute(&self.package_root)?;
        self.alias_dir = absolute(&root.join(&self.alias_dir))?;
        self.entry = self
            .entry
            .iter()
            .map(|(name, path)| Ok((name.clone(), absolute(&root.join(path))?)))
            .collect::<Result<IndexMap<_, _>>>()?;
        self.package_root = root;
        Ok(self)
    }

    /// Load settings from the current directory without overrides
    pub fn from_env() -> Result<Self> {
        let root = std::env::current_dir()?;
        Self::load(root, &SettingsOverrides::default())
    }
}

/// Absolute, lexically normalized path (`..` segments folded)
fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .map(path_clean::clean)
        .map_err(|e| ConfigError::InvalidValue {
            field: "path".to_string(),
            message: format!("{}: {e}", path.display()),
        })
}
