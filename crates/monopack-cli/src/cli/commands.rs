use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_global;

/// Available monopack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the bundler configuration
    ///
    /// Scans sibling packages, resolves externals from the package manifest
    /// and writes the production (or, with --dev, development) configuration
    /// as JSON.
    Print(PrintArgs),

    /// List sibling package aliases
    ///
    /// Shows the package name → source directory table and reports
    /// sub-directories that were skipped.
    Aliases(AliasesArgs),

    /// List externals of the package
    Externals(ExternalsArgs),
}

/// Where the package and its siblings live
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Package root holding package.json (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory whose sub-directories are aliased packages
    #[arg(short, long, value_name = "DIR")]
    pub alias_dir: Option<PathBuf>,
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Emit the development variant
    ///
    /// Unminified output (dist/dist.dev.js) and light transpilation.
    #[arg(long)]
    pub dev: bool,

    /// Global variable name the bundle is exposed as
    #[arg(long, value_name = "NAME", value_parser = parse_global)]
    pub library: Option<String>,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the aliases command
#[derive(Args, Debug)]
pub struct AliasesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the externals command
#[derive(Args, Debug)]
pub struct ExternalsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}
