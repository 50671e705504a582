//! Data models for the contact book.
//!
//! This module contains the contact record aggregate built from the
//! validated fields in [`crate::domain`].

pub mod record;

pub use record::ContactRecord;
