//! Error type for the pretty-print boundary.

use thiserror::Error;

/// Failure while parsing or re-serializing structured data for display.
///
/// Never leaves the crate: the logging operations convert it into a
/// `Failed to pretty print ...` fallback line at the emit boundary.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PrettyPrintError(#[from] serde_json::Error);
