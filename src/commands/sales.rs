//! Set the sales-day closing time and settlement delay of balance accounts.
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::api::Api;
use crate::batch;
use crate::error::{Error, Result};
use crate::records;

const COMMAND: &str = "sales";

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "ACCOUNT HOLDER ID", default)]
    pub account_holder_id: String,
    #[serde(rename = "BALANCE ID", default)]
    pub balance_id: String,
    #[serde(rename = "CLOSE TIME")]
    pub close_time: String,
    #[serde(rename = "DELAYS")]
    pub delays: u32,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.balance_id.is_empty() {
            write!(f, "{}", self.account_holder_id)
        } else {
            write!(f, "{}", self.balance_id)
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
        let balance_id = if record.balance_id.is_empty() {
            if record.account_holder_id.is_empty() {
                return Err(Error::NoBalanceAccount(record.to_string()));
            }
            let holder = self.api.balance_account_holder(&record.account_holder_id)?;
            if holder.primary_balance_account.is_empty() {
                return Err(Error::NoBalanceAccount(record.account_holder_id.clone()));
            }
            holder.primary_balance_account
        } else {
            record.balance_id.clone()
        };

        if self.dry_run {
            info!(record = %record, "dry run, skipping sales close time update");
            return Ok(());
        }
        self.api
            .set_sales_close_time(&balance_id, &record.close_time, record.delays)?;
        Ok(())
    }
}
