//! Crate-level error type and `Result` alias.
//! Covers setup failures (configuration, CSV), remote-call failures
//! (transport, HTTP status, decode), and the domain-validation errors the
//! command processors raise, plus the per-record and whole-batch wrappers.
use thiserror::Error;

use crate::api::types::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode platform response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("platform error: {} ({}), HTTP status: {}", .0.title, .0.detail, .0.status)]
    Api(ApiError),

    #[error("platform call failed, HTTP status: {status}")]
    Status { status: u16, body: String },

    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },

    #[error("store details count not equal to accounts count")]
    InvalidAccountHolder,

    #[error("expected exactly one {what}, got {count}")]
    Cardinality { what: &'static str, count: usize },

    #[error("store ID not found: {found} {requested}")]
    StoreMismatch { requested: String, found: String },

    #[error("no terminal id and serial number defined")]
    NoTerminal,

    #[error("no merchant id and store id for terminal re-assignment: {terminal_id}")]
    NoAssignmentTarget { terminal_id: String },

    #[error("too many terminals assigned to the store")]
    TooManyTerminals,

    #[error("no app found: {package_name} {version_name}")]
    AppNotFound {
        package_name: String,
        version_name: String,
    },

    #[error("no balance account identified: {0}")]
    NoBalanceAccount(String),

    #[error("no legal entity identified: {0}")]
    NoLegalEntity(String),

    #[error("failed to add payment methods: {}", join(.0))]
    PaymentMethods(Vec<Error>),

    #[error("record {id}: {source}")]
    Record {
        id: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Batch(BatchFailure),
}

/// Aggregate outcome of a batch that had at least one failing record.
/// Its `Display` enumerates every per-record failure reason.
#[derive(Debug)]
pub struct BatchFailure {
    pub command: &'static str,
    pub success: usize,
    pub failures: Vec<Error>,
}

impl std::fmt::Display for BatchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "failed to process {} records: {} failed, {} succeeded",
            self.command,
            self.failures.len(),
            self.success
        )?;
        for failure in &self.failures {
            write!(f, "\n  - {failure}")?;
        }
        Ok(())
    }
}

fn join(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
