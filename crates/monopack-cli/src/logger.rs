//! Logging setup for the monopack CLI.
//!
//! Logs go to stderr so stdout carries only the generated JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "monopack_config=debug,monopack_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "monopack_config=info,monopack_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// # Verbosity Levels
///
/// 1. `--verbose` flag: DEBUG for monopack crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for monopack crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so only
    // filter selection is tested here.

    #[test]
    fn test_verbose_filter() {
        let filter = filter_for(true, false).to_string();
        assert!(filter.contains("monopack_config=debug"));
        assert!(filter.contains("monopack_cli=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        assert_eq!(filter_for(false, true).to_string(), QUIET_FILTER);
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        assert!(filter_for(true, true).to_string().contains("=debug"));
    }
}
