//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and directories so the tests can
//! focus on the behavior under check.

use chrono::{NaiveDate, NaiveDateTime};
use contact_book::{ContactDirectory, ContactRecord};

/// Create a sample record with the given name and phone numbers.
pub fn sample_record(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name, None).unwrap();
    for phone in phones {
        record.add_phone(*phone).unwrap();
    }
    record
}

/// Create a sample record with a birthday.
#[allow(dead_code)]
pub fn sample_record_with_birthday(name: &str, birthday: &str) -> ContactRecord {
    ContactRecord::new(name, Some(birthday)).unwrap()
}

/// Create a directory holding records named `r1..=rN`, inserted in order.
#[allow(dead_code)]
pub fn numbered_directory(count: usize) -> ContactDirectory {
    (1..=count)
        .map(|i| sample_record(&format!("r{i}"), &[]))
        .collect()
}

/// Midnight on the given date.
#[allow(dead_code)]
pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Collect the names of every page, for easy comparison.
#[allow(dead_code)]
pub fn page_names(directory: &ContactDirectory, page_size: usize) -> Vec<Vec<String>> {
    directory
        .paginate(page_size)
        .unwrap()
        .map(|page| page.into_iter().map(|r| r.name().to_string()).collect())
        .collect()
}
