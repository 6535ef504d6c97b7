//! payops CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: initialize logging, parse args,
//! dispatch, and exit non-zero on failure. For programmatic use, prefer the
//! library API (`payops::commands`).

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = payops::cli::CliArgs::parse();
    if let Err(err) = payops::cli::run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
