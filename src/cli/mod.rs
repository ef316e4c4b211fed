//! Command Line Interface (CLI) layer for squarepad.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that merges flags, environment,
//! and an optional JSON config into `ProcessingParams`.
//!
//! If you are embedding squarepad into another application, prefer using
//! the high-level `squarepad::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
