//! Command-line interface definition for monopack.
//!
//! # Command Structure
//!
//! - `monopack print` - Emit the bundler configuration as JSON
//! - `monopack aliases` - Show sibling package aliases
//! - `monopack externals` - Show the externals of a package

mod commands;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{AliasesArgs, Command, ExternalsArgs, PrintArgs, SourceArgs};
pub use validation::parse_global;

/// monopack - bundler configuration for monorepo packages
#[derive(Parser, Debug)]
#[command(
    name = "monopack",
    version,
    about = "Generate bundler configuration for monorepo packages",
    long_about = "monopack builds the UMD bundler configuration of a monorepo package.\n\
                  Sibling packages are aliased to their sources, peer dependencies become\n\
                  externals and the package version is injected at build time."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
