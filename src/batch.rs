//! Generic batch runner shared by every command.
//!
//! Records are processed strictly in file order, one at a time. A failing
//! record never aborts the batch: its error is wrapped with the record's
//! identity and collected. Any failure makes the whole run fail with a
//! combined error that enumerates every per-record reason.
use std::fmt::Display;

use tracing::{error, info};

use crate::error::{BatchFailure, Error, Result};

pub fn run<T, F>(command: &'static str, records: &[T], mut op: F) -> Result<()>
where
    T: Display,
    F: FnMut(&T) -> Result<()>,
{
    let mut success = 0usize;
    let mut failures: Vec<Error> = Vec::new();

    for record in records {
        match op(record) {
            Ok(()) => success += 1,
            Err(source) => failures.push(Error::Record {
                id: record.to_string(),
                source: Box::new(source),
            }),
        }
    }

    if !failures.is_empty() {
        error!(command, success, failed = failures.len(), "finished with failures");
        for failure in &failures {
            error!(command, %failure, "record failed");
        }
        return Err(Error::Batch(BatchFailure {
            command,
            success,
            failures,
        }));
    }

    info!(command, success, "finished");
    Ok(())
}
