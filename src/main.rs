//! squarepad CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, resolve params, run the
//! dataset pass, and exit with appropriate status.
//! For programmatic use, prefer the library API (`squarepad::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", cli::runner::error_message(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}
