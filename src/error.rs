//! Unified error handling for the fundstory crate
//!
//! The extractors in [`crate::analytics`] never fail. Errors arise only at the
//! edges: reading datasets, parsing filter input and loading configuration.
//!
//! - [`FundstoryErrorTrait`] - Common interface implemented by the error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping the domain-specific errors
//!
//! # Usage
//!
//! ```rust
//! use fundstory::error::{Error, ErrorCategory, FundstoryErrorTrait};
//!
//! let err = Error::config("top_n_words must be greater than 0");
//! assert_eq!(err.category(), ErrorCategory::Config);
//! assert!(!err.is_recoverable());
//! ```

use thiserror::Error;

pub use crate::filter::FilterError;
pub use crate::utils::error::DatasetError;

/// Common trait for all fundstory error types
pub trait FundstoryErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Dataset files and record parsing
    Input,
    /// User-supplied filter values
    Validation,
    /// Storage and I/O errors
    Storage,
    /// Configuration errors
    Config,
}

impl ErrorCategory {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Input => "input error",
            Self::Validation => "validation error",
            Self::Storage => "storage error",
            Self::Config => "configuration error",
        }
    }

    /// Korean description for dashboard messages
    pub fn korean_desc(&self) -> &'static str {
        match self {
            Self::Input => "입력 데이터 오류",
            Self::Validation => "입력값 오류",
            Self::Storage => "저장소 오류",
            Self::Config => "설정 오류",
        }
    }
}

/// Unified error type for the fundstory crate
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset loading errors
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Invalid filter input
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl FundstoryErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Dataset(e) => e.is_recoverable(),
            Self::Filter(_) => false,
            Self::Config(_) => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Dataset(DatasetError::Read { .. }) => ErrorCategory::Storage,
            Self::Dataset(_) => ErrorCategory::Input,
            Self::Filter(_) => ErrorCategory::Validation,
            Self::Config(_) => ErrorCategory::Config,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_category() {
        let filter_err = Error::Filter(FilterError::InvalidPrice("abc".into()));
        assert_eq!(filter_err.category(), ErrorCategory::Validation);

        let read_err = Error::Dataset(DatasetError::Read {
            path: PathBuf::from("x.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(read_err.category(), ErrorCategory::Storage);
        assert!(read_err.is_recoverable());

        let no_input = Error::Dataset(DatasetError::NoInput);
        assert_eq!(no_input.category(), ErrorCategory::Input);
        assert!(!no_input.is_recoverable());
    }

    #[test]
    fn test_filter_errors_are_not_recoverable() {
        let filter_err = Error::Filter(FilterError::InvertedRange { min: 2, max: 1 });
        assert!(!filter_err.is_recoverable());
    }

    #[test]
    fn test_error_conversion() {
        let unified: Error = FilterError::UnknownSeason("monsoon".into()).into();
        assert!(matches!(unified, Error::Filter(_)));
        assert!(unified.to_string().contains("monsoon"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("Invalid seed");
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.category().korean_desc(), "설정 오류");
        assert_eq!(err.category().description(), "configuration error");
    }
}
