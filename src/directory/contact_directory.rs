//! ContactDirectory: records keyed by name, in insertion order.

use super::pages::Pages;
use super::record_mut::RecordMut;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::ContactRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered collection of contact records keyed by name.
///
/// Every key equals the name of the record stored under it. Records are only
/// reachable mutably through [`RecordMut`], which edits phones and the
/// birthday but can neither rename nor replace the record.
///
/// # Example
///
/// ```
/// use contact_book::{ContactDirectory, ContactRecord};
///
/// let mut directory = ContactDirectory::new();
/// directory.add_record(ContactRecord::new("Ann", None).unwrap());
/// directory.add_record(ContactRecord::new("Bob", Some("1990-03-15")).unwrap());
///
/// assert!(directory.find("Ann").is_some());
/// assert_eq!(directory.paginate(1).unwrap().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    records: IndexMap<String, ContactRecord>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// A record already stored under the same name is replaced outright and
    /// keeps its position in iteration order.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().as_str().to_owned();
        let replaced = self.records.insert(name.clone(), record).is_some();

        tracing::debug!(name = %name, replaced = replaced, "Record added");
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by exact name for editing its phones or birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<RecordMut<'_>> {
        self.records.get_mut(name).map(RecordMut::new)
    }

    /// Remove the record stored under `name`. Does nothing if there is none.
    pub fn delete(&mut self, name: &str) {
        if self.records.shift_remove(name).is_some() {
            tracing::debug!(name = %name, "Record deleted");
        }
    }

    /// Split the records, in iteration order, into pages of at most
    /// `page_size` records.
    ///
    /// Each call starts a fresh pass over the current contents.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidArgument` if `page_size` is 0.
    pub fn paginate(&self, page_size: usize) -> DirectoryResult<Pages<'_>> {
        if page_size == 0 {
            return Err(DirectoryError::InvalidArgument(
                "page size must be greater than 0".to_string(),
            ));
        }

        tracing::trace!(
            page_size = page_size,
            records = self.records.len(),
            "Paginating directory"
        );

        Ok(Pages::new(self.records.values(), page_size))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.records.values()
    }

    /// Iterate over record names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }
}

impl FromIterator<ContactRecord> for ContactDirectory {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut directory = Self::new();
        directory.extend(iter);
        directory
    }
}

impl Extend<ContactRecord> for ContactDirectory {
    fn extend<I: IntoIterator<Item = ContactRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

// Serde support - serialize as a sequence of records
impl Serialize for ContactDirectory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - deserialize by re-inserting each record under its own name
impl<'de> Deserialize<'de> for ContactDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<ContactRecord>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
