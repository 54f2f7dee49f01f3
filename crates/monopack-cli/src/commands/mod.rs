//! Command implementations for the monopack CLI.
//!
//! - [`print`] - Emit the bundler configuration
//! - [`aliases`] - Show sibling package aliases
//! - [`externals`] - Show package externals

pub mod aliases;
pub mod externals;
pub mod print;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use aliases::execute as aliases_execute;
pub use externals::execute as externals_execute;
pub use print::execute as print_execute;
