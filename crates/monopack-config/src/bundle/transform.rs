use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::bundle::helpers::{BABEL_LOADER, SCRIPT_TEST};

/// A module rule: files matching `test` under one of the `include` roots are
/// passed through `loader`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRule {
    /// Regular expression source matched against module paths
    pub test: String,

    pub loader: String,

    /// Regular expression sources selecting the source roots to transform
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub options: BabelOptions,
}

/// Transpiler presets and plugins, applied in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BabelOptions {
    #[serde(default)]
    pub presets: Vec<BabelItem>,

    #[serde(default)]
    pub plugins: Vec<BabelItem>,
}

/// A preset or plugin reference.
///
/// Serializes as either `"name"` or `["name", {options}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BabelItem {
    Name(String),
    WithOptions(String, Value),
}

impl BabelItem {
    pub fn name(name: impl Into<String>) -> Self {
        BabelItem::Name(name.into())
    }

    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        BabelItem::WithOptions(name.into(), options)
    }

    /// Package name of the preset or plugin
    pub fn id(&self) -> &str {
        match self {
            BabelItem::Name(name) | BabelItem::WithOptions(name, _) => name,
        }
    }
}

impl TransformRule {
    /// Full production transpilation: type stripping, syntax downleveling for
    /// WebGL-capable browsers, runtime helper extraction and the GL-specific
    /// source transforms.
    pub fn production() -> Self {
        Self {
            test: SCRIPT_TEST.to_string(),
            loader: BABEL_LOADER.to_string(),
            include: vec!["src".into(), "bundle".into(), "esm".into()],
            options: BabelOptions {
                presets: vec![
                    BabelItem::name("@babel/preset-typescript"),
                    BabelItem::with_options(
                        "@babel/preset-env",
                        json!({ "targets": ["supports webgl", "not dead"] }),
                    ),
                ],
                // helpers reference @babel/runtime instead of being inlined per module
                plugins: vec![
                    BabelItem::name("@babel/transform-runtime"),
                    BabelItem::name("inline-webgl-constants"),
                    BabelItem::with_options(
                        "remove-glsl-comments",
                        json!({ "patterns": ["**/*.glsl.js"] }),
                    ),
                ],
            },
        }
    }

    /// Light development transpilation: type stripping plus class properties.
    pub fn development() -> Self {
        Self {
            test: SCRIPT_TEST.to_string(),
            loader: BABEL_LOADER.to_string(),
            include: vec!["src".into(), "bundle".into()],
            options: BabelOptions {
                presets: vec![BabelItem::name("@babel/preset-typescript")],
                plugins: vec![BabelItem::name("@babel/proposal-class-properties")],
            },
        }
    }
}
