//! Pluggable config validation strategies

use regex::Regex;

use crate::bundle::BuildConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate an assembled bundler config
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use monopack_config::{
///     BuildEnv, ConfigBuilder, ConfigValidator, GeneratorSettings, PackageManifest,
///     SchemaValidator,
/// };
///
/// let manifest = PackageManifest::parse(r#"{"name": "a", "version": "1.0.0"}"#, "package.json")
///     .unwrap();
/// let builder = ConfigBuilder::new(GeneratorSettings::default(), Default::default(), manifest);
///
/// SchemaValidator.validate(&builder.build(&BuildEnv::default())).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        if !is_js_identifier(&config.output.library) {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "library name '{}' is not a valid JavaScript identifier",
                    config.output.library
                ),
                hint: Some(
                    "Use letters, digits, '_' or '$', not starting with a digit".to_string(),
                ),
            });
        }

        if config.output.filename.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output filename cannot be empty".to_string(),
                hint: None,
            });
        }

        for (name, global) in &config.externals {
            if name.trim().is_empty() || global.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("invalid external '{name}' -> '{global}'"),
                    hint: Some("Externals need a package name and a global name".to_string()),
                });
            }
        }

        for rule in &config.module.rules {
            for pattern in std::iter::once(&rule.test).chain(&rule.include) {
                if let Err(err) = Regex::new(pattern) {
                    return Err(ConfigError::SchemaValidation {
                        message: format!("invalid rule pattern '{pattern}': {err}"),
                        hint: None,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Whether `name` can be used as a browser global.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}
