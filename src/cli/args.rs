//! Command-line argument surface.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "payops",
    version,
    about = "CSV-driven batch operations against the payment platform"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Flags every command shares.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input CSV file.
    #[arg(long, value_name = "FILE")]
    pub csv: PathBuf,

    /// Run against the live environment instead of test.
    #[arg(long)]
    pub prod: bool,

    /// Read and validate everything, write nothing.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Link stores to split configurations.
    Link {
        #[command(flatten)]
        common: CommonArgs,
        /// Patch balance-platform split configurations instead of classic
        /// account holders.
        #[arg(long)]
        balance: bool,
    },
    /// Close account holders.
    Close {
        #[command(flatten)]
        common: CommonArgs,
        /// Also close each record's store first.
        #[arg(long)]
        store: bool,
    },
    /// Add payment methods to stores.
    Methods {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Reassign terminals to stores or merchant inventory.
    Reassign {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Toggle terminal SIM cards.
    Cellular {
        #[command(flatten)]
        common: CommonArgs,
        /// Park the SIM card in inventory instead of activating it.
        #[arg(long)]
        disable: bool,
    },
    /// Disable offline payment acceptance on terminals.
    Offline {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Schedule Android app installations.
    Install {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Point balance-account sweeps at the holder's transfer instrument.
    Sweep {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Set sales-day closing time and settlement delay.
    Sales {
        #[command(flatten)]
        common: CommonArgs,
    },
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Link { common, .. }
            | Command::Close { common, .. }
            | Command::Methods { common }
            | Command::Reassign { common }
            | Command::Cellular { common, .. }
            | Command::Offline { common }
            | Command::Install { common }
            | Command::Sweep { common }
            | Command::Sales { common } => common,
        }
    }
}
