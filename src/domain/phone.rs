//! PhoneNumber field.

use super::errors::ValidationError;
use super::field::{FieldKind, ValidatedField};

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Field kind for phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {}

impl FieldKind for PhoneKind {
    type Value = String;
    type Parsed = ();

    /// Validate phone format.
    ///
    /// # Validation Rules
    ///
    /// - Exactly 10 characters
    /// - Every character is an ASCII digit (no spaces, dashes or `+`)
    fn validate(phone: &String) -> Result<(), ValidationError> {
        if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(phone.clone()));
        }
        Ok(())
    }
}

/// A phone number of exactly 10 bare digits.
///
/// No normalization takes place: `"123-456-7890"` is rejected rather than
/// stripped down to its digits.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0987654321").unwrap();
/// assert_eq!(phone.as_str(), "0987654321");
/// assert!(PhoneNumber::new("+10987654321").is_err());
/// ```
pub type PhoneNumber = ValidatedField<PhoneKind>;
