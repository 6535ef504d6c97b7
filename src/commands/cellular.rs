//! Toggle terminal SIM cards on or off.
//!
//! Enabling sets the card to `ACTIVATED`; `--disable` parks it in
//! `INVENTORY`.
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::api::Api;
use crate::batch;
use crate::commands::resolve_terminal;
use crate::error::Result;
use crate::records;

const COMMAND: &str = "cellular";

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "TERMINAL ID", default)]
    pub terminal_id: String,
    #[serde(rename = "SERIAL NUMBER", default)]
    pub serial_number: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terminal_id.is_empty() {
            write!(f, "{}", self.serial_number)
        } else {
            write!(f, "{}", self.terminal_id)
        }
    }
}

pub struct Processor<A> {
    api: A,
    disable: bool,
    dry_run: bool,
}

impl<A: Api> Processor<A> {
    pub fn new(api: A, disable: bool, dry_run: bool) -> Self {
        Self {
            api,
            disable,
            dry_run,
        }
    }

    pub fn run(&self, csv: &Path) -> Result<()> {
        let records: Vec<Record> = records::read(csv)?;
        batch::run(COMMAND, &records, |record| self.process(record))
    }

    fn process(&self, record: &Record) -> Result<()> {
        let terminal_id = resolve_terminal(&self.api, &record.terminal_id, &record.serial_number)?;
        if self.dry_run {
            info!(record = %record, "dry run, skipping SIM card update");
            return Ok(());
        }
        self.api.set_sim_card_status(&terminal_id, self.disable)
    }
}
