//! Close account holders, optionally retiring their store first.
//!
//! A store can only move to `closed` from `inactive`, so the store path is a
//! two-step status transition before the account holder itself is closed.
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::api::types::StoreStatus;
use crate::api::Api;
use crate::batch;
use crate::commands::find_store;
use crate::error::{Error, Result};
use crate::records;

const COMMAND: &str = "close";

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "ACCOUNT HOLDER CODE")]
    pub account_holder_code: String,
    #[serde(rename = "STORE ID")]
    pub store_id: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.account_holder_code)
    }
}

pub struct Processor<A> {
    api: A,
    close_store: bool,
    dry_run: bool,
}

impl<A: Api> Processor<A> {
    pub fn new(api: A, close_store: bool, dry_run: bool) -> Self {
        Self {
            api,
            close_store,
            dry_run,
        }
    }

    pub fn run(&self, csv: &Path) -> Result<()> {
        let records: Vec<Record> = records::read(csv)?;
        batch::run(COMMAND, &records, |record| self.process(record))
    }

    fn process(&self, record: &Record) -> Result<()> {
        let holder = self.api.account_holder(&record.account_holder_code)?;

        let details = &holder.update.account_holder_details.store_details;
        if details.len() != holder.accounts.len() || details.len() != 1 {
            return Err(Error::InvalidAccountHolder);
        }
        if details[0].store_id != record.store_id {
            return Err(Error::StoreMismatch {
                requested: record.store_id.clone(),
                found: details[0].store_id.clone(),
            });
        }

        let store = if self.close_store {
            Some(find_store(&self.api, &record.store_id)?)
        } else {
            None
        };

        if self.dry_run {
            info!(record = %record, "dry run, skipping close");
            return Ok(());
        }

        if let Some(store) = store {
            self.api.set_store_status(&store.id, StoreStatus::Inactive)?;
            self.api.set_store_status(&store.id, StoreStatus::Closed)?;
        }
        self.api.close_account_holder(&record.account_holder_code)
    }
}
