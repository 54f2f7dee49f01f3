pub mod builder;
pub mod bundle;
pub mod discovery;
pub mod error;
pub mod externals;
pub mod manifest;
pub mod settings;
pub mod validation;

// Re-export main types
pub use builder::*;
pub use bundle::*;
pub use error::*;
pub use manifest::*;
pub use settings::*;

// Re-export discovery, externals and validation
pub use discovery::{discover_aliases, AliasDiscovery, AliasMap, AliasScan, SkippedPackage};
pub use externals::{resolve_externals, ExternalsMap, ExternalsRules};
pub use validation::{is_js_identifier, validate_schema, ConfigValidator, SchemaValidator};
