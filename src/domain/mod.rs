//! Domain value objects and types.
//!
//! This module contains validated field types for the parts of a contact:
//! names, phone numbers and birthdays. Each is a [`ValidatedField`] of a
//! particular [`FieldKind`], so invalid data can never be stored in one.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{BirthdayDate, BirthdayKind};
pub use errors::ValidationError;
pub use field::{FieldKind, ValidatedField};
pub use name::{Name, NameKind};
pub use phone::{PhoneKind, PhoneNumber};
