use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bundle::helpers::VERSION_IDENTIFIER;

/// Build-time plugins attached to the bundler config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InjectionPlugin {
    /// Replace identifiers with literal source text at compile time
    Define {
        /// Identifier → replacement source (already JSON encoded)
        definitions: IndexMap<String, String>,
    },
}

impl InjectionPlugin {
    /// Define `__VERSION__` as the string literal of `version`.
    pub fn version(version: &str) -> Self {
        // serializing a &str cannot fail
        let literal = serde_json::to_string(version).unwrap_or_else(|_| format!("\"{version}\""));
        InjectionPlugin::Define {
            definitions: IndexMap::from([(VERSION_IDENTIFIER.to_string(), literal)]),
        }
    }

    pub fn definitions(&self) -> &IndexMap<String, String> {
        match self {
            InjectionPlugin::Define { definitions } => definitions,
        }
    }
}
