//! Disable offline payment acceptance on terminals.
//!
//! The platform has no single off switch; instead the current settings are
//! fetched and every offline limit is zeroed while the rest of the carried
//! fields (currencies, supported card types) go back unchanged.
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::api::types::{OfflinePaymentsUpdate, TerminalSettings};
use crate::api::Api;
use crate::batch;
use crate::commands::resolve_terminal;
use crate::error::Result;
use crate::records;

const COMMAND: &str = "offline";

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

/// Zero every offline limit, keep everything else as fetched.
fn zeroed_update(settings: TerminalSettings) -> OfflinePaymentsUpdate {
    let mut update = OfflinePaymentsUpdate {
        offline_processing: settings.offline_processing,
        store_and_forward: settings.store_and_forward,
    };
    update.offline_processing.chip_floor_limit = 0;
    for limit in &mut update.offline_processing.offline_swipe_limits {
        limit.amount = 0;
    }
    update.store_and_forward.max_payments = 0;
    for amount in &mut update.store_and_forward.max_amount {
        amount.amount = 0;
    }
    update
}

pub struct Processor<A> {
    api: A,
    dry_run: bool,
}

impl<A: Api> Processor<A> {
    pub fn new(api: A, dry_run: bool) -> Self {
        Self { api, dry_run }
    }

    pub fn run(&self, csv: &Path) -> Result<()> {
        let records: Vec<Record> = records::read(csv)?;
        batch::run(COMMAND, &records, |record| self.process(record))
    }

    fn process(&self, record: &Record) -> Result<()> {
        let terminal_id = resolve_terminal(&self.api, &record.terminal_id, &record.serial_number)?;
        let settings = self.api.terminal_settings(&terminal_id)?;
        let update = zeroed_update(settings);

        if self.dry_run {
            info!(record = %record, "dry run, skipping terminal settings update");
            return Ok(());
        }
        self.api.disable_offline_payments(&terminal_id, &update)
    }
}
