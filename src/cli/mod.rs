//! Command Line Interface (CLI) layer for platesim.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the interactive, single-pair,
//! batch and generator flows. It wires user-provided options to the
//! library functionality exposed via `platesim::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
