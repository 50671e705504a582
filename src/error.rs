//! Error types for the contact book.
//!
//! Field validation errors live in [`crate::domain::errors`]; this module
//! defines the errors raised by records, the directory and configuration.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when editing a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The value to edit does not exist on the record
    #[error("{0} not exist")]
    ValueNotFound(String),
}

/// Errors that can occur during directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// An argument was outside its accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
