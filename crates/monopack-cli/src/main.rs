//! monopack CLI entry point.
//!
//! Parses arguments, initializes logging and dispatches to the command.

use clap::Parser;
use miette::Result;
use monopack_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args),
        cli::Command::Aliases(aliases_args) => commands::aliases_execute(aliases_args),
        cli::Command::Externals(externals_args) => commands::externals_execute(externals_args),
    };

    result.map_err(error::cli_error_to_miette)
}
