//! Error types for entity-generator

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a workbook or writing generated output
#[derive(Error, Debug)]
pub enum EntityGenError {
    #[error("Workbook not found: {path}")]
    WorkbookNotFound { path: PathBuf },

    #[error("Failed to open workbook: {path}")]
    WorkbookOpenError {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read worksheet '{sheet}' from {path}")]
    WorksheetReadError {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to write entity file: {path}")]
    EntityWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize schema to JSON")]
    JsonSerializeError {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write JSON to {path}")]
    JsonWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for EntityGenError {
    fn from(err: serde_json::Error) -> Self {
        EntityGenError::JsonSerializeError { source: err }
    }
}
