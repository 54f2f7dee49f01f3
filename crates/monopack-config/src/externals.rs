//! Externals resolution.
//!
//! Peer dependencies are not bundled. Each one is mapped to the global
//! variable it is read from at runtime, e.g. `@deck.gl/core` is resolved from
//! the already loaded `deck` object when bundling `@deck.gl/geo-layers`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::manifest::PackageManifest;

/// Dependency name → runtime global name.
pub type ExternalsMap = IndexMap<String, String>;

/// Rules deciding which dependencies become externals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalsRules {
    /// Entries that are always external
    pub seed: IndexMap<String, String>,

    /// Peer dependencies starting with this prefix are external
    pub namespace_prefix: String,

    /// Global every namespaced peer dependency resolves to
    pub namespace_global: String,

    /// Namespace package whose presence pulls in the companion entry
    pub core_package: String,

    pub companion_package: String,

    pub companion_global: String,
}

impl Default for ExternalsRules {
    fn default() -> Self {
        Self {
            seed: IndexMap::from([("h3-js".to_string(), "h3".to_string())]),
            namespace_prefix: "@deck.gl".to_string(),
            namespace_global: "deck".to_string(),
            core_package: "@deck.gl/core".to_string(),
            companion_package: "@luma.gl/core".to_string(),
            companion_global: "luma".to_string(),
        }
    }
}

impl ExternalsRules {
    /// Compute the externals table for a package.
    ///
    /// The seed entries always come first, followed by namespaced peer
    /// dependencies in manifest order and finally the companion entry when the
    /// core package was made external.
    pub fn resolve(&self, manifest: &PackageManifest) -> ExternalsMap {
        let mut externals = self.seed.clone();

        for dep in manifest.peer_dependencies.keys() {
            if dep.starts_with(&self.namespace_prefix) {
                externals.insert(dep.clone(), self.namespace_global.clone());
            }
        }

        if externals.contains_key(&self.core_package) {
            externals.insert(
                self.companion_package.clone(),
                self.companion_global.clone(),
            );
        }

        debug!(package = %manifest.name, count = externals.len(), "resolved externals");
        externals
    }
}

/// Resolve externals with the default rules (convenience function)
pub fn resolve_externals(manifest: &PackageManifest) -> ExternalsMap {
    ExternalsRules::default().resolve(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(peers: &[&str]) -> PackageManifest {
        PackageManifest {
            name: "pkg".to_string(),
            version: "1.0.0".to_string(),
            peer_dependencies: peers
                .iter()
                .map(|p| (p.to_string(), "*".to_string()))
                .collect(),
        }
    }

    #[test]
    fn seed_is_always_present() {
        let externals = resolve_externals(&manifest(&[]));
        assert_eq!(externals.len(), 1);
        assert_eq!(externals["h3-js"], "h3");
    }

    #[test]
    fn core_peer_adds_companion() {
        let externals = resolve_externals(&manifest(&["@deck.gl/core", "@deck.gl/layers"]));
        assert_eq!(externals["@deck.gl/core"], "deck");
        assert_eq!(externals["@deck.gl/layers"], "deck");
        assert_eq!(externals["@luma.gl/core"], "luma");
        assert_eq!(externals.len(), 4);
    }

    #[test]
    fn companion_requires_core() {
        let externals = resolve_externals(&manifest(&["@deck.gl/layers"]));
        assert!(externals.contains_key("@deck.gl/layers"));
        assert!(!externals.contains_key("@luma.gl/core"));
    }

    #[test]
    fn custom_namespace() {
        let rules = ExternalsRules {
            namespace_prefix: "@ns".to_string(),
            namespace_global: "ns".to_string(),
            core_package: "@ns/core".to_string(),
            companion_package: "companion".to_string(),
            companion_global: "comp".to_string(),
            ..ExternalsRules::default()
        };
        let externals = rules.resolve(&manifest(&["@ns/core", "@ns/other", "unrelated"]));

        assert_eq!(externals["@ns/core"], "ns");
        assert_eq!(externals["@ns/other"], "ns");
        assert_eq!(externals["companion"], "comp");
        assert!(!externals.contains_key("unrelated"));
        assert_eq!(externals["h3-js"], "h3");
    }

    #[test]
    fn does_not_touch_manifest() {
        let input = manifest(&["@deck.gl/core"]);
        let before = input.clone();
        let _ = resolve_externals(&input);
        assert_eq!(input, before);
    }
}
