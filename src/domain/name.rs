//! Name field.

use super::errors::ValidationError;
use super::field::{FieldKind, ValidatedField};

/// Field kind for contact names. Every string is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {}

impl FieldKind for NameKind {
    type Value = String;
    type Parsed = ();

    fn validate(_value: &String) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// The name of a contact. Also the key a record is stored under.
pub type Name = ValidatedField<NameKind>;
