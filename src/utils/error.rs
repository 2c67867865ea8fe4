//! Error types for dataset loading
//!
//! Analytics themselves never fail; these errors cover reading record files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a record dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not a dataset, record array or JSON Lines stream
    #[error("Invalid dataset in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A single JSON Lines row failed to parse
    #[error("Invalid record on line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Neither an input file nor the demo dataset was selected
    #[error("No input dataset given (use --input or --demo)")]
    NoInput,
}

impl DatasetError {
    /// Whether retrying the load could succeed (only I/O failures qualify)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Read { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_is_recoverable() {
        let err = DatasetError::Read {
            path: PathBuf::from("records.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("records.json"));
    }

    #[test]
    fn test_no_input_message() {
        assert!(!DatasetError::NoInput.is_recoverable());
        assert!(DatasetError::NoInput.to_string().contains("--demo"));
    }
}
