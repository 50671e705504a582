//! Contact record: a name, its phone numbers and an optional birthday.

use crate::domain::{BirthdayDate, Name, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact.
///
/// The name is fixed at construction because the directory stores records
/// under it. Phone numbers keep insertion order and may repeat.
///
/// # Example
///
/// ```
/// use contact_book::ContactRecord;
///
/// let mut record = ContactRecord::new("Ann", None).unwrap();
/// record.add_phone("1234567890").unwrap();
/// record.add_phone("0987654321").unwrap();
/// assert_eq!(
///     record.to_string(),
///     "Contact name: Ann, phones: 1234567890; 0987654321"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create a record with no phone numbers.
    ///
    /// An empty or absent `birthday` leaves the record without one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if `birthday` is not a valid
    /// `YYYY-MM-DD` date.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let birthday = match birthday {
            Some(date) if !date.is_empty() => Some(BirthdayDate::new(date)?),
            _ => None,
        };

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Replace or clear the birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for a malformed date, in which
    /// case the current birthday is kept.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> Result<(), ValidationError> {
        match birthday {
            None => self.birthday = None,
            Some(date) => match self.birthday.as_mut() {
                Some(current) => current.set_value(date)?,
                None => self.birthday = Some(BirthdayDate::new(date)?),
            },
        }
        Ok(())
    }

    /// Validate and append a phone number. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not 10 digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Does nothing if there is none.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position_of(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// # Errors
    ///
    /// - `RecordError::ValueNotFound` if no phone equals `old`
    /// - `RecordError::Validation` if `new` is not a valid phone number
    ///
    /// The phone list is unchanged in both cases.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| RecordError::ValueNotFound(old.to_string()))?;
        self.phones[index].set_value(new)?;
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Days until the next birthday, or `None` if no birthday is set.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.birthday
            .as_ref()
            .map(BirthdayDate::days_until_next_occurrence)
    }

    /// Like [`days_to_next_birthday`](Self::days_to_next_birthday), counted
    /// from `reference` instead of the clock.
    pub fn days_to_next_birthday_from(&self, reference: NaiveDateTime) -> Option<i64> {
        self.birthday
            .as_ref()
            .map(|birthday| birthday.days_until_next_occurrence_from(reference))
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
