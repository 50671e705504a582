//! Lazy pagination over directory records.

use crate::models::ContactRecord;
use indexmap::map::Values;
use std::iter::FusedIterator;

/// Iterator over consecutive pages of at most `page_size` records.
///
/// Created by [`ContactDirectory::paginate`](super::ContactDirectory::paginate).
/// Every page except possibly the last is full; an empty directory yields no
/// pages at all.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: Values<'a, String, ContactRecord>,
    page_size: usize,
}

impl<'a> Pages<'a> {
    /// `page_size` must be non-zero; the directory checks it before calling.
    pub(crate) fn new(records: Values<'a, String, ContactRecord>, page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self { records, page_size }
    }

    /// Maximum number of records per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a ContactRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<_> = self.records.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().div_ceil(self.page_size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
