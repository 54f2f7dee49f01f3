//! Bundler config assembly.
//!
//! The builder is pure: alias scanning and manifest loading happen before it
//! is constructed (see [`ConfigBuilder::load`]), so both variants can be built
//! from the same inputs without touching the filesystem again.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bundle::{
    default_extensions, BuildConfig, InjectionPlugin, LibraryTarget, Mode, ModuleOptions,
    OutputOptions, ResolveOptions, TransformRule,
};
use crate::discovery::{AliasDiscovery, AliasMap};
use crate::error::Result;
use crate::manifest::{manifest_path, PackageManifest};
use crate::settings::GeneratorSettings;

/// Build environment passed by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEnv {
    /// Development variant: unminified output and light transpilation
    #[serde(default)]
    pub dev: bool,
}

impl BuildEnv {
    pub fn production() -> Self {
        Self { dev: false }
    }

    pub fn development() -> Self {
        Self { dev: true }
    }
}

/// Assembles [`BuildConfig`] values from precomputed inputs
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    settings: GeneratorSettings,
    aliases: AliasMap,
    manifest: PackageManifest,
}

impl ConfigBuilder {
    pub fn new(settings: GeneratorSettings, aliases: AliasMap, manifest: PackageManifest) -> Self {
        Self {
            settings,
            aliases,
            manifest,
        }
    }

    /// Read the alias directory and the package manifest named by `settings`.
    ///
    /// Paths are resolved with [`GeneratorSettings::resolved`].
    ///
    /// # Errors
    ///
    /// Fails if the alias directory cannot be listed or the package manifest
    /// is missing, invalid or has no version. Sub-packages without a readable
    /// manifest are skipped.
    pub fn load(settings: GeneratorSettings) -> Result<Self> {
        let settings = settings.resolved()?;

        let scan = AliasDiscovery::new(&settings.alias_dir).scan()?;
        if !scan.skipped.is_empty() {
            debug!(count = scan.skipped.len(), "sub-packages skipped during alias scan");
        }

        let path = manifest_path(&settings.package_root);
        let manifest = PackageManifest::from_path(&path)?;
        manifest.require_version(&path)?;

        info!(
            package = %manifest.name,
            version = %manifest.version,
            aliases = scan.aliases.len(),
            "loaded package"
        );

        Ok(Self::new(settings, scan.aliases, manifest))
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    pub fn manifest(&self) -> &PackageManifest {
        &self.manifest
    }

    /// Production variant: minified bundle and full transpilation
    pub fn production(&self) -> BuildConfig {
        self.base()
    }

    /// Development variant: same as production except for mode, output
    /// filename and transform rules
    pub fn development(&self) -> BuildConfig {
        let base = self.base();
        BuildConfig {
            mode: Mode::Development,
            output: OutputOptions {
                filename: self.settings.dev_filename.clone(),
                ..base.output
            },
            module: ModuleOptions {
                rules: vec![TransformRule::development()],
            },
            ..base
        }
    }

    /// Build the variant selected by `env`
    pub fn build(&self, env: &BuildEnv) -> BuildConfig {
        let config = if env.dev {
            self.development()
        } else {
            self.production()
        };
        debug!(mode = config.mode.as_str(), "assembled bundler config");
        config
    }

    fn base(&self) -> BuildConfig {
        BuildConfig {
            mode: Mode::Production,
            entry: self.settings.entry.clone(),
            output: OutputOptions {
                library_target: LibraryTarget::Umd,
                path: self.settings.package_root.clone(),
                filename: self.settings.filename.clone(),
                library: self.settings.library.clone(),
            },
            resolve: ResolveOptions {
                alias: self.aliases.clone(),
                extensions: default_extensions(),
            },
            module: ModuleOptions {
                rules: vec![TransformRule::production()],
            },
            externals: self.settings.externals.resolve(&self.manifest),
            plugins: vec![InjectionPlugin::version(&self.manifest.version)],
            node: false,
            devtool: false,
        }
    }
}

/// Load inputs from the filesystem and build the variant selected by `env`
/// (convenience function)
///
/// # Example
///
/// ```no_run
/// use monopack_config::{create_config, BuildEnv, GeneratorSettings};
///
/// let settings = GeneratorSettings::from_env().unwrap();
/// let config = create_config(settings, &BuildEnv::default()).unwrap();
/// println!("{}", config.to_json_pretty().unwrap());
/// ```
pub fn create_config(settings: GeneratorSettings, env: &BuildEnv) -> Result<BuildConfig> {
    Ok(ConfigBuilder::load(settings)?.build(env))
}
