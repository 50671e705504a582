//! Restricted mutable access to a stored record.

use crate::domain::ValidationError;
use crate::error::RecordResult;
use crate::models::ContactRecord;
use std::ops::Deref;

/// Mutable handle to a record inside a [`ContactDirectory`](super::ContactDirectory).
///
/// Only phone and birthday edits go through. The record cannot be replaced
/// or swapped out, since its name is the key it is stored under. Reads go
/// through `Deref`.
///
/// ```compile_fail
/// use contact_book::{ContactDirectory, ContactRecord};
///
/// let mut book = ContactDirectory::new();
/// book.add_record(ContactRecord::new("Ann", None).unwrap());
/// *book.find_mut("Ann").unwrap() = ContactRecord::new("Bob", None).unwrap();
/// ```
#[derive(Debug)]
pub struct RecordMut<'a> {
    record: &'a mut ContactRecord,
}

impl<'a> RecordMut<'a> {
    pub(crate) fn new(record: &'a mut ContactRecord) -> Self {
        Self { record }
    }

    /// See [`ContactRecord::add_phone`].
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.record.add_phone(phone)
    }

    /// See [`ContactRecord::remove_phone`].
    pub fn remove_phone(&mut self, phone: &str) {
        self.record.remove_phone(phone)
    }

    /// See [`ContactRecord::edit_phone`].
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        self.record.edit_phone(old, new)
    }

    /// See [`ContactRecord::set_birthday`].
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> Result<(), ValidationError> {
        self.record.set_birthday(birthday)
    }
}

impl Deref for RecordMut<'_> {
    type Target = ContactRecord;

    fn deref(&self) -> &ContactRecord {
        self.record
    }
}
