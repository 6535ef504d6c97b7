//! Command-line interface: argument parsing and dispatch.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
