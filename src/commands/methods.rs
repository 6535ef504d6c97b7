//! Add payment methods to stores, one record per store.
//!
//! The PAYMENT METHODS column carries a `|`-separated list; each method is
//! added in its own call so one rejected method does not block the rest, and
//! all rejections are reported together.
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::api::Api;
use crate::batch;
use crate::commands::find_store;
use crate::error::{Error, Result};
use crate::records;

const COMMAND: &str = "methods";

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "STORE ID")]
    pub store_id: String,
    #[serde(rename = "PAYMENT METHODS")]
    pub payment_methods: String,
    #[serde(rename = "CURRENCY")]
    pub currency: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.store_id)
    }
}

impl Record {
    fn methods(&self) -> impl Iterator<Item = &str> {
        self.payment_methods
            .split('|')
            .map(str::trim)
            .filter(|m| !m.is_empty())
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
        let store = find_store(&self.api, &record.store_id)?;
        if store.business_line_ids.len() != 1 {
            return Err(Error::Cardinality {
                what: "business line",
                count: store.business_line_ids.len(),
            });
        }
        let business_line = &store.business_line_ids[0];

        if self.dry_run {
            info!(record = %record, "dry run, skipping payment method setup");
            return Ok(());
        }

        let mut failures = Vec::new();
        for method in record.methods() {
            if let Err(err) = self.api.add_payment_method(
                &store.merchant_id,
                &store.id,
                business_line,
                method,
                &record.currency,
            ) {
                failures.push(err);
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::PaymentMethods(failures))
        }
    }
}
