use std::path::PathBuf;

use indexmap::IndexMap;

// Helper defaults

/// Files handed to the transpiler
pub(crate) const SCRIPT_TEST: &str = r"(\.js|\.ts|\.tsx)$";

pub(crate) const BABEL_LOADER: &str = "babel-loader";

/// Identifier replaced by the package version at build time
pub(crate) const VERSION_IDENTIFIER: &str = "__VERSION__";

pub(crate) fn default_extensions() -> Vec<String> {
    [".ts", ".tsx", ".js", ".json"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub(crate) fn default_entry() -> IndexMap<String, PathBuf> {
    IndexMap::from([("main".to_string(), PathBuf::from("./bundle"))])
}

pub(crate) fn default_library() -> String {
    "deck".to_string()
}

pub(crate) fn default_filename() -> String {
    "dist.min.js".to_string()
}

pub(crate) fn default_dev_filename() -> String {
    "dist/dist.dev.js".to_string()
}

/// Parent of the package root, where sibling packages live
pub(crate) fn default_alias_dir() -> PathBuf {
    PathBuf::from("..")
}

pub(crate) fn default_package_root() -> PathBuf {
    PathBuf::from(".")
}
