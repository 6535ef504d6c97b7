//! Point balance-account sweeps at the holder's transfer instrument.
//!
//! The chain runs account holder, legal entity, sweep: each link must be
//! unambiguous before anything is written. A sweep that already targets the
//! instrument is left alone, so re-running a file is safe.
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::api::Api;
use crate::batch;
use crate::error::{Error, Result};
use crate::records;

const COMMAND: &str = "sweep";

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "ACCOUNT HOLDER ID", default)]
    pub account_holder_id: String,
    #[serde(rename = "BALANCE ID", default)]
    pub balance_id: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.account_holder_id.is_empty() {
            write!(f, "{}", self.balance_id)
        } else {
            write!(f, "{}", self.account_holder_id)
        }
    }
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
        let holder_id = if record.account_holder_id.is_empty() {
            if record.balance_id.is_empty() {
                return Err(Error::NoBalanceAccount(record.to_string()));
            }
            self.api.balance_account(&record.balance_id)?.account_holder_id
        } else {
            record.account_holder_id.clone()
        };

        let holder = self.api.balance_account_holder(&holder_id)?;
        if holder.primary_balance_account.is_empty() {
            return Err(Error::NoBalanceAccount(holder_id));
        }
        if holder.legal_entity_id.is_empty() {
            return Err(Error::NoLegalEntity(holder_id));
        }

        let legal_entity = self.api.legal_entity(&holder.legal_entity_id)?;
        if legal_entity.transfer_instruments.len() != 1 {
            return Err(Error::Cardinality {
                what: "transfer instrument",
                count: legal_entity.transfer_instruments.len(),
            });
        }
        let instrument_id = &legal_entity.transfer_instruments[0].id;

        let page = self.api.sweeps(&holder.primary_balance_account)?;
        if page.sweeps.len() != 1 {
            return Err(Error::Cardinality {
                what: "sweep",
                count: page.sweeps.len(),
            });
        }
        let sweep = &page.sweeps[0];

        if sweep.counterparty.transfer_instrument_id.as_deref() == Some(instrument_id.as_str()) {
            info!(sweep = %sweep.id, "sweep already targets the transfer instrument");
            return Ok(());
        }

        if self.dry_run {
            info!(record = %record, "dry run, skipping sweep update");
            return Ok(());
        }
        self.api
            .update_sweep(&holder.primary_balance_account, &sweep.id, instrument_id)?;
        Ok(())
    }
}
