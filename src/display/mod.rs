//! Display formatting for terminal output
//!
//! Every command renders either a table (default) or a JSON document
//! (`--json`). Both forms carry the same fields.

pub mod backup;
pub mod clean;

use serde::Serialize;

use crate::error::FedcareResult;

pub use backup::{
    format_restore_report, format_snapshot_list, format_snapshot_report, restore_document,
    snapshot_list_document,
};
pub use clean::format_clean_report;

/// Serialize a document as pretty JSON
pub fn to_json<T: Serialize>(document: &T) -> FedcareResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
