//! Schedule Android app installations on terminals.
//!
//! A record targets either every terminal of a store (optionally narrowed by
//! the FILTER column) or one explicit terminal. The app is looked up by
//! package name within the company and must match the requested version
//! exactly.
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Duration, Local, TimeZone};
use serde::Deserialize;
use tracing::info;

use crate::api::types::AndroidApp;
use crate::api::Api;
use crate::batch;
use crate::commands::find_store;
use crate::error::{Error, Result};
use crate::records;

const COMMAND: &str = "install";

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "COMPANY ID")]
    pub company_id: String,
    #[serde(rename = "STORE ID", default)]
    pub store_id: String,
    #[serde(rename = "FILTER", default)]
    pub filter: String,
    #[serde(rename = "TERMINAL ID", default)]
    pub terminal_id: String,
    #[serde(rename = "PACKAGE NAME")]
    pub package_name: String,
    #[serde(rename = "VERSION NAME")]
    pub version_name: String,
    #[serde(rename = "DATE", default)]
    pub date: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = if self.store_id.is_empty() {
            &self.terminal_id
        } else {
            &self.store_id
        };
        write!(f, "{}@{}", self.package_name, target)
    }
}

/// Install two minutes from now, in the platform's no-colon zone format.
fn default_schedule<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    (now + Duration::minutes(2))
        .format("%Y-%m-%dT%H:%M:%S%z")
        .to_string()
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
        let terminal_ids = self.resolve_targets(record)?;
        let app = self.find_app(record)?;

        let scheduled_at = if record.date.is_empty() {
            default_schedule(Local::now())
        } else {
            record.date.clone()
        };

        if self.dry_run {
            info!(record = %record, terminals = terminal_ids.len(), "dry run, skipping install");
            return Ok(());
        }
        // The action is always scheduled against explicit terminal IDs; the
        // store only scopes the search, it is never part of the payload.
        self.api
            .install_android_app(&app.id, "", &terminal_ids, &scheduled_at)
    }

    /// Either a whole store's terminals or one explicit terminal.
    fn resolve_targets(&self, record: &Record) -> Result<Vec<String>> {
        if record.store_id.is_empty() {
            if record.terminal_id.is_empty() {
                return Err(Error::NoTerminal);
            }
            return Ok(vec![record.terminal_id.clone()]);
        }

        let store = find_store(&self.api, &record.store_id)?;
        let page = self.api.search_terminals(&store.id, &record.filter)?;
        // One page is the hard cap; a store with more terminals than that
        // needs a narrower filter.
        if page.pages_total > 1 {
            return Err(Error::TooManyTerminals);
        }
        Ok(page.data.into_iter().map(|t| t.id).collect())
    }

    fn find_app(&self, record: &Record) -> Result<AndroidApp> {
        let page = self
            .api
            .search_android_apps(&record.company_id, &record.package_name)?;
        page.data
            .into_iter()
            .find(|app| app.version_name == record.version_name)
            .ok_or_else(|| Error::AppNotFound {
                package_name: record.package_name.clone(),
                version_name: record.version_name.clone(),
            })
    }
}
