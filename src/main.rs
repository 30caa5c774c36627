//! `mpi-glossary` — Sphinx glossary markup generator for MPI lesson material

use clap::Parser;

use mpi_glossary::cli::args::Cli;
use mpi_glossary::cli::commands;
use mpi_glossary::error::ExitCode;
use mpi_glossary::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
