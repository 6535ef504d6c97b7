//! Reassign terminals to a store, or back to a merchant's inventory.
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::api::Api;
use crate::batch;
use crate::commands::{find_store, resolve_terminal};
use crate::error::{Error, Result};
use crate::records;

const COMMAND: &str = "reassign";

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "TERMINAL ID", default)]
    pub terminal_id: String,
    #[serde(rename = "SERIAL NUMBER", default)]
    pub serial_number: String,
    #[serde(rename = "MERCHANT ID", default)]
    pub merchant_id: String,
    #[serde(rename = "STORE ID", default)]
    pub store_id: String,
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

        let store = if record.store_id.is_empty() {
            None
        } else {
            Some(find_store(&self.api, &record.store_id)?)
        };
        if store.is_none() && record.merchant_id.is_empty() {
            return Err(Error::NoAssignmentTarget { terminal_id });
        }

        if self.dry_run {
            info!(record = %record, "dry run, skipping reassignment");
            return Ok(());
        }

        match store {
            Some(store) => self
                .api
                .reassign_terminal(&terminal_id, &store.merchant_id, &store.id),
            // No store: back to the merchant's inventory.
            None => self
                .api
                .reassign_terminal(&terminal_id, &record.merchant_id, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{fixtures, Call, MockApi};
    use crate::api::types::{Terminal, TerminalPage};

    fn record(terminal: &str, serial: &str, merchant: &str, store: &str) -> Record {
        Record {
            terminal_id: terminal.to_string(),
            serial_number: serial.to_string(),
            merchant_id: merchant.to_string(),
            store_id: store.to_string(),
        }
    }

    #[test]
    fn reassigns_to_the_resolved_store() {
        let mut api = MockApi::new();
        api.stores
            .insert("S1".to_string(), fixtures::single_store_page("STR-1", "S1"));

        let processor = Processor::new(&api, false);
        processor.process(&record("T1", "", "", "S1")).unwrap();

        assert_eq!(
            api.mutating_calls(),
            [Call::ReassignTerminal {
                terminal_id: "T1".to_string(),
                merchant_id: "M1".to_string(),
                store_id: "STR-1".to_string(),
            }]
        );
    }

    #[test]
    fn without_a_store_the_terminal_goes_to_merchant_inventory() {
        let api = MockApi::new();
        let processor = Processor::new(&api, false);
        processor.process(&record("T1", "", "M1", "")).unwrap();

        assert_eq!(
            api.calls(),
            [Call::ReassignTerminal {
                terminal_id: "T1".to_string(),
                merchant_id: "M1".to_string(),
                store_id: String::new(),
            }]
        );
    }

    #[test]
    fn serial_number_resolves_the_terminal_first() {
        let mut api = MockApi::new();
        api.terminals.insert(
            (String::new(), "SN-9".to_string()),
            TerminalPage {
                items_total: 1,
                pages_total: 1,
                data: vec![Terminal {
                    id: "T9".to_string(),
                    serial_number: "SN-9".to_string(),
                    ..Default::default()
                }],
            },
        );

        let processor = Processor::new(&api, false);
        processor.process(&record("", "SN-9", "M1", "")).unwrap();

        assert_eq!(
            api.mutating_calls(),
            [Call::ReassignTerminal {
                terminal_id: "T9".to_string(),
                merchant_id: "M1".to_string(),
                store_id: String::new(),
            }]
        );
    }

    #[test]
    fn missing_merchant_and_store_fails_the_record() {
        let api = MockApi::new();
        let processor = Processor::new(&api, false);
        let err = processor.process(&record("T1", "", "", "")).unwrap_err();
        assert!(matches!(err, Error::NoAssignmentTarget { terminal_id } if terminal_id == "T1"));
    }

    #[test]
    fn dry_run_resolves_but_never_reassigns() {
        let mut api = MockApi::new();
        api.stores
            .insert("S1".to_string(), fixtures::single_store_page("STR-1", "S1"));

        let processor = Processor::new(&api, true);
        processor.process(&record("T1", "", "", "S1")).unwrap();

        assert_eq!(api.calls(), [Call::SearchStores("S1".to_string())]);
        assert!(api.mutating_calls().is_empty());
    }
}
