//! Link stores to the split configuration that routes their funds.
//!
//! Two platform generations are supported. The classic flow fetches the
//! account holder, stamps its single store detail with the account's virtual
//! account and the split UUID, and pushes the holder back. The balance
//! platform flow patches the store's split configuration directly.
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::api::types::{SplitConfiguration, UpdateSplitConfigurationRequest};
use crate::api::Api;
use crate::batch;
use crate::error::{Error, Result};
use crate::records;

const COMMAND: &str = "link";

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "MERCHANT ID")]
    pub merchant_id: String,
    #[serde(rename = "ACCOUNT HOLDER CODE")]
    pub account_holder_code: String,
    #[serde(rename = "STORE ID")]
    pub store_id: String,
    #[serde(rename = "SPLIT ID")]
    pub split_id: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.account_holder_code, self.store_id)
    }
}

pub struct Processor<A> {
    api: A,
    balance: bool,
    dry_run: bool,
}

impl<A: Api> Processor<A> {
    pub fn new(api: A, balance: bool, dry_run: bool) -> Self {
        Self {
            api,
            balance,
            dry_run,
        }
    }

    pub fn run(&self, csv: &Path) -> Result<()> {
        let records: Vec<Record> = records::read(csv)?;
        batch::run(COMMAND, &records, |record| self.process(record))
    }

    fn process(&self, record: &Record) -> Result<()> {
        if self.balance {
            self.link_balance(record)
        } else {
            self.link_virtual_account(record)
        }
    }

    /// Balance platform: the account holder code column carries the balance
    /// account ID. Nothing to read first.
    fn link_balance(&self, record: &Record) -> Result<()> {
        let request = UpdateSplitConfigurationRequest {
            split_configuration: SplitConfiguration {
                balance_account_id: record.account_holder_code.clone(),
                split_configuration_id: record.split_id.clone(),
            },
        };
        if self.dry_run {
            info!(record = %record, "dry run, skipping split configuration update");
            return Ok(());
        }
        self.api
            .update_split_configuration(&record.merchant_id, &record.store_id, &request)
    }

    fn link_virtual_account(&self, record: &Record) -> Result<()> {
        let mut holder = self.api.account_holder(&record.account_holder_code)?;

        let details = &mut holder.update.account_holder_details;
        if details.store_details.len() != holder.accounts.len() || details.store_details.len() != 1
        {
            return Err(Error::InvalidAccountHolder);
        }
        let detail = &mut details.store_details[0];
        if detail.store_id != record.store_id {
            return Err(Error::StoreMismatch {
                requested: record.store_id.clone(),
                found: detail.store_id.clone(),
            });
        }

        detail.virtual_account = Some(holder.accounts[0].account_code.clone());
        detail.split_configuration_uuid = Some(record.split_id.clone());

        if self.dry_run {
            info!(record = %record, "dry run, skipping account holder update");
            return Ok(());
        }
        self.api.update_account_holder(&holder.update)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::api::testing::{fixtures, Call, MockApi};
    use crate::api::types::{Account, StoreDetail};

    fn record(holder: &str, store: &str, split: &str) -> Record {
        Record {
            merchant_id: "M1".to_string(),
            account_holder_code: holder.to_string(),
            store_id: store.to_string(),
            split_id: split.to_string(),
        }
    }

    #[test]
    fn virtual_account_link_stamps_and_pushes_the_holder() {
        let mut api = MockApi::new();
        api.account_holders.insert(
            "AH1".to_string(),
            fixtures::single_store_holder("AH1", "ACC-1", "S1"),
        );

        let processor = Processor::new(&api, false, false);
        processor.process(&record("AH1", "S1", "SPLIT-X")).unwrap();

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::AccountHolder("AH1".to_string()));
        match &calls[1] {
            Call::UpdateAccountHolder(update) => {
                let detail = &update.account_holder_details.store_details[0];
                assert_eq!(detail.store_id, "S1");
                assert_eq!(detail.virtual_account.as_deref(), Some("ACC-1"));
                assert_eq!(detail.split_configuration_uuid.as_deref(), Some("SPLIT-X"));
            }
            other => panic!("expected holder update, got {other:?}"),
        }
    }

    #[test]
    fn balance_link_patches_the_split_configuration() {
        let api = MockApi::new();
        let processor = Processor::new(&api, true, false);
        processor.process(&record("BA-1", "STR-1", "SPLIT-X")).unwrap();

        assert_eq!(
            api.calls(),
            [Call::UpdateSplitConfiguration {
                merchant_id: "M1".to_string(),
                store_id: "STR-1".to_string(),
                request: UpdateSplitConfigurationRequest {
                    split_configuration: SplitConfiguration {
                        balance_account_id: "BA-1".to_string(),
                        split_configuration_id: "SPLIT-X".to_string(),
                    },
                },
            }]
        );
    }

    #[test]
    fn cardinality_mismatch_fails_before_any_mutation() {
        let mut api = MockApi::new();
        let mut holder = fixtures::single_store_holder("AH1", "ACC-1", "S1");
        holder.accounts.push(Account::default());
        api.account_holders.insert("AH1".to_string(), holder);

        let processor = Processor::new(&api, false, false);
        let err = processor.process(&record("AH1", "S1", "SPLIT-X")).unwrap_err();
        assert!(matches!(err, Error::InvalidAccountHolder));
        assert!(api.mutating_calls().is_empty());
    }

    #[test]
    fn store_mismatch_fails_the_record() {
        let mut api = MockApi::new();
        api.account_holders.insert(
            "AH1".to_string(),
            fixtures::single_store_holder("AH1", "ACC-1", "OTHER"),
        );

        let processor = Processor::new(&api, false, false);
        let err = processor.process(&record("AH1", "S1", "SPLIT-X")).unwrap_err();
        assert!(matches!(err, Error::StoreMismatch { .. }));
        assert!(api.mutating_calls().is_empty());
    }

    #[test]
    fn dry_run_reads_and_validates_but_never_mutates() {
        let mut api = MockApi::new();
        api.account_holders.insert(
            "AH1".to_string(),
            fixtures::single_store_holder("AH1", "ACC-1", "S1"),
        );

        let processor = Processor::new(&api, false, true);
        processor.process(&record("AH1", "S1", "SPLIT-X")).unwrap();

        assert_eq!(api.calls(), [Call::AccountHolder("AH1".to_string())]);
        assert!(api.mutating_calls().is_empty());
    }

    #[test]
    fn run_collects_per_record_failures_without_aborting() {
        let mut api = MockApi::new();
        api.account_holders.insert(
            "AH1".to_string(),
            fixtures::single_store_holder("AH1", "ACC-1", "S1"),
        );
        api.account_holders.insert(
            "AH2".to_string(),
            fixtures::single_store_holder("AH2", "ACC-2", "S2"),
        );

        let mut csv = tempfile::NamedTempFile::new().unwrap();
        writeln!(csv, "MERCHANT ID,ACCOUNT HOLDER CODE,STORE ID,SPLIT ID").unwrap();
        writeln!(csv, "M1,AH1,S1,SPLIT-A").unwrap();
        writeln!(csv, "M1,MISSING,S9,SPLIT-B").unwrap();
        writeln!(csv, "M1,AH2,S2,SPLIT-C").unwrap();

        let processor = Processor::new(&api, false, false);
        match processor.run(csv.path()) {
            Err(Error::Batch(batch)) => {
                assert_eq!(batch.command, "link");
                assert_eq!(batch.success, 2);
                assert_eq!(batch.failures.len(), 1);
                assert!(batch.failures[0].to_string().contains("MISSING/S9"));
            }
            other => panic!("expected batch error, got {other:?}"),
        }
        // Both valid records were still pushed.
        assert_eq!(api.mutating_calls().len(), 2);
    }

    #[test]
    fn update_stamps_store_detail_on_the_stored_holder() {
        let mut api = MockApi::new();
        let mut holder = fixtures::single_store_holder("AH1", "ACC-1", "S1");
        holder.update.account_holder_details.store_details[0] = StoreDetail {
            status: Some("Active".to_string()),
            store_id: "S1".to_string(),
            ..Default::default()
        };
        api.account_holders.insert("AH1".to_string(), holder);

        let processor = Processor::new(&api, false, false);
        processor.process(&record("AH1", "S1", "SPLIT-X")).unwrap();

        match &api.calls()[1] {
            Call::UpdateAccountHolder(update) => {
                let detail = &update.account_holder_details.store_details[0];
                // Untouched fields ride along unchanged.
                assert_eq!(detail.status.as_deref(), Some("Active"));
            }
            other => panic!("expected holder update, got {other:?}"),
        }
    }
}
