//! One module per business command. Each pairs a CSV record type with a
//! processor that is generic over [`Api`], reads its records and feeds them
//! through [`crate::batch::run`].
pub mod cellular;
pub mod close;
pub mod install;
pub mod link;
pub mod methods;
pub mod offline;
pub mod reassign;
pub mod sales;
pub mod sweep;

use crate::api::types::Store;
use crate::api::Api;
use crate::error::{Error, Result};

/// Resolve a store's management-API entry from its external reference.
///
/// The search must return exactly one store and its reference must equal the
/// requested one; the search endpoint matches loosely, so a prefix query can
/// return a different store.
pub(crate) fn find_store(api: &impl Api, reference: &str) -> Result<Store> {
    let page = api.search_stores(reference)?;
    if page.items_total != 1 {
        return Err(Error::Cardinality {
            what: "store",
            count: page.items_total as usize,
        });
    }
    let Some(store) = page.data.into_iter().next() else {
        return Err(Error::Cardinality {
            what: "store",
            count: 0,
        });
    };
    if store.reference != reference {
        return Err(Error::StoreMismatch {
            requested: reference.to_string(),
            found: store.reference,
        });
    }
    Ok(store)
}

/// Resolve a terminal ID either directly or by serial-number search.
/// The serial search must match exactly one terminal.
pub(crate) fn resolve_terminal(
    api: &impl Api,
    terminal_id: &str,
    serial_number: &str,
) -> Result<String> {
    if !terminal_id.is_empty() {
        return Ok(terminal_id.to_string());
    }
    if serial_number.is_empty() {
        return Err(Error::NoTerminal);
    }
    let page = api.search_terminals("", serial_number)?;
    if page.items_total != 1 {
        return Err(Error::Cardinality {
            what: "terminal",
            count: page.items_total as usize,
        });
    }
    let Some(terminal) = page.data.into_iter().next() else {
        return Err(Error::NoTerminal);
    };
    Ok(terminal.id)
}
