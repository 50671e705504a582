//! Contact Book - an in-memory contact directory.
//!
//! Contacts carry validated phone numbers and an optional birthday, and the
//! directory supports exact-name lookup, pagination and "days until next
//! birthday" queries.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone number, birthday)
//! - **models**: The contact record built from those fields
//! - **directory**: The name-keyed collection of records with pagination
//! - **error**: Error types for records, the directory and configuration
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use directory::{ContactDirectory, Pages, RecordMut};
pub use domain::{BirthdayDate, Name, PhoneNumber, ValidatedField, ValidationError};
pub use error::{ConfigError, DirectoryError, RecordError};
pub use models::ContactRecord;
