//! Wires configuration, the HTTP client and the command processors together.
use tracing::info;

use crate::api::Client;
use crate::cli::args::{CliArgs, Command};
use crate::commands;
use crate::config::{Config, Environment};
use crate::error::Result;

pub fn run(args: CliArgs) -> Result<()> {
    let config = Config::from_env()?;

    let common = args.command.common();
    let environment = Environment::from_prod_flag(common.prod);
    info!(?environment, dry_run = common.dry_run, csv = %common.csv.display(), "starting");

    let http = reqwest::blocking::Client::new();
    let client = Client::new(http, config.resolve(environment));

    match args.command {
        Command::Link { common, balance } => {
            commands::link::Processor::new(client, balance, common.dry_run).run(&common.csv)
        }
        Command::Close { common, store } => {
            commands::close::Processor::new(client, store, common.dry_run).run(&common.csv)
        }
        Command::Methods { common } => {
            commands::methods::Processor::new(client, common.dry_run).run(&common.csv)
        }
        Command::Reassign { common } => {
            commands::reassign::Processor::new(client, common.dry_run).run(&common.csv)
        }
        Command::Cellular { common, disable } => {
            commands::cellular::Processor::new(client, disable, common.dry_run).run(&common.csv)
        }
        Command::Offline { common } => {
            commands::offline::Processor::new(client, common.dry_run).run(&common.csv)
        }
        Command::Install { common } => {
            commands::install::Processor::new(client, common.dry_run).run(&common.csv)
        }
        Command::Sweep { common } => {
            commands::sweep::Processor::new(client, common.dry_run).run(&common.csv)
        }
        Command::Sales { common } => {
            commands::sales::Processor::new(client, common.dry_run).run(&common.csv)
        }
    }
}
