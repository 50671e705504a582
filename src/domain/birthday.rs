//! BirthdayDate field and the next-birthday countdown.

use super::errors::ValidationError;
use super::field::{FieldKind, ValidatedField};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Format birthdays are written in.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono accepts single-digit months and days, so the shape is checked first.
static ISO_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile ISO date regex")
});

/// Field kind for birthdays. The parsed calendar date is kept with the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayKind {}

impl FieldKind for BirthdayKind {
    type Value = String;
    type Parsed = NaiveDate;

    fn validate(value: &String) -> Result<NaiveDate, ValidationError> {
        if !ISO_DATE_REGEX.is_match(value) {
            return Err(ValidationError::InvalidDate(value.clone()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(value.clone()))
    }
}

/// A birthday written as `YYYY-MM-DD`.
///
/// A `BirthdayDate` always holds a date. A contact without a birthday simply
/// has no `BirthdayDate`; see [`BirthdayDate::from_option`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("1990-03-15").unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// assert_eq!(birthday.days_until_next_occurrence_from(reference), 14);
/// ```
pub type BirthdayDate = ValidatedField<BirthdayKind>;

impl ValidatedField<BirthdayKind> {
    /// Create a birthday from a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingDateOfBirth` for `None` and
    /// `ValidationError::InvalidDate` for a malformed date.
    pub fn from_option<S: Into<String>>(value: Option<S>) -> Result<Self, ValidationError> {
        match value {
            Some(value) => Self::new(value),
            None => Err(ValidationError::MissingDateOfBirth),
        }
    }

    /// The stored birthday as a calendar date.
    pub fn date(&self) -> NaiveDate {
        *self.parsed()
    }

    /// Midnight of the birthday's occurrence in `year`.
    ///
    /// A Feb 29 birthday occurs on Mar 1 in common years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDateTime {
        let date = self.date();
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            // only reachable past chrono's supported year range
            .unwrap_or(NaiveDate::MAX)
            .and_time(NaiveTime::MIN)
    }

    /// Whole days from now (local time) until the next birthday.
    pub fn days_until_next_occurrence(&self) -> i64 {
        self.days_until_next_occurrence_from(Local::now().naive_local())
    }

    /// Whole days from `reference` until the next birthday.
    ///
    /// The occurrence is taken at midnight. If this year's occurrence is
    /// strictly before `reference`, next year's is used instead, so the
    /// birthday itself counts as 0 only when `reference` is exactly midnight.
    /// Any partial day is truncated.
    pub fn days_until_next_occurrence_from(&self, reference: NaiveDateTime) -> i64 {
        let year = reference.year();
        let mut occurrence = self.occurrence_in(year);
        if occurrence < reference {
            occurrence = self.occurrence_in(year + 1);
        }
        (occurrence - reference).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
        (to - from).num_days()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = BirthdayDate::new("1990-03-15").unwrap();
        assert_eq!(birthday.as_str(), "1990-03-15");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        for input in [
            "",
            "1990/03/15",
            "15-03-1990",
            "1990-3-15",
            "1990-03-5",
            "90-03-15",
            "1990-03-15T00:00",
            " 1990-03-15",
            "not a date",
        ] {
            assert_eq!(
                BirthdayDate::new(input),
                Err(ValidationError::InvalidDate(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(BirthdayDate::new("2023-02-30").is_err());
        assert!(BirthdayDate::new("2023-02-29").is_err());
        assert!(BirthdayDate::new("2023-13-01").is_err());
        assert!(BirthdayDate::new("2023-00-10").is_err());
        assert!(BirthdayDate::new("2023-04-31").is_err());
        assert!(BirthdayDate::new("2024-02-29").is_ok());
    }

    #[test]
    fn test_birthday_from_option() {
        assert_eq!(
            BirthdayDate::from_option(None::<String>),
            Err(ValidationError::MissingDateOfBirth)
        );
        assert!(BirthdayDate::from_option(Some("1990-03-15")).is_ok());
        assert!(BirthdayDate::from_option(Some("1990-03-32")).is_err());
    }

    #[test]
    fn test_birthday_set_value_keeps_old_on_failure() {
        let mut birthday = BirthdayDate::new("1990-03-15").unwrap();
        assert!(birthday.set_value("1990-02-30").is_err());
        assert_eq!(birthday.as_str(), "1990-03-15");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());

        birthday.set_value("1985-12-01").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1985, 12, 1).unwrap());
    }

    #[test]
    fn test_days_until_upcoming_birthday() {
        let birthday = BirthdayDate::new("1990-03-15").unwrap();
        assert_eq!(birthday.days_until_next_occurrence_from(at(2024, 3, 1, 0)), 14);
    }

    #[test]
    fn test_days_until_birthday_already_passed() {
        let birthday = BirthdayDate::new("1990-03-15").unwrap();
        let reference = at(2024, 3, 20, 0);
        let expected = days_between(reference, at(2025, 3, 15, 0));
        assert_eq!(birthday.days_until_next_occurrence_from(reference), expected);
        assert_eq!(expected, 360);
    }

    #[test]
    fn test_days_until_birthday_today_at_midnight() {
        let birthday = BirthdayDate::new("1990-03-15").unwrap();
        assert_eq!(birthday.days_until_next_occurrence_from(at(2024, 3, 15, 0)), 0);
    }

    #[test]
    fn test_days_until_birthday_later_on_the_day() {
        // Midnight has already passed, so the next occurrence is a year away
        let birthday = BirthdayDate::new("1990-03-15").unwrap();
        let reference = at(2024, 3, 15, 12);
        let expected = days_between(reference, at(2025, 3, 15, 0));
        assert_eq!(birthday.days_until_next_occurrence_from(reference), expected);
        assert_eq!(expected, 364);
    }

    #[test]
    fn test_days_until_birthday_truncates_partial_day() {
        let birthday = BirthdayDate::new("1990-03-15").unwrap();
        assert_eq!(birthday.days_until_next_occurrence_from(at(2024, 3, 14, 18)), 0);
        assert_eq!(birthday.days_until_next_occurrence_from(at(2024, 3, 13, 18)), 1);
    }

    #[test]
    fn test_days_until_birthday_across_new_year() {
        let birthday = BirthdayDate::new("2001-01-02").unwrap();
        assert_eq!(birthday.days_until_next_occurrence_from(at(2024, 12, 31, 0)), 2);
    }

    #[test]
    fn test_leap_day_birthday_in_common_year_falls_on_march_first() {
        let birthday = BirthdayDate::new("2000-02-29").unwrap();
        assert_eq!(birthday.occurrence_in(2023), at(2023, 3, 1, 0));
        assert_eq!(birthday.days_until_next_occurrence_from(at(2023, 2, 28, 0)), 1);
        assert_eq!(birthday.days_until_next_occurrence_from(at(2023, 3, 1, 0)), 0);
    }

    #[test]
    fn test_leap_day_birthday_in_leap_year() {
        let birthday = BirthdayDate::new("2000-02-29").unwrap();
        assert_eq!(birthday.occurrence_in(2024), at(2024, 2, 29, 0));
        assert_eq!(birthday.days_until_next_occurrence_from(at(2024, 2, 28, 0)), 1);
    }

    #[test]
    fn test_leap_day_birthday_passed_rolls_into_common_year() {
        let birthday = BirthdayDate::new("2000-02-29").unwrap();
        let reference = at(2024, 3, 2, 0);
        let expected = days_between(reference, at(2025, 3, 1, 0));
        assert_eq!(birthday.days_until_next_occurrence_from(reference), expected);
    }

    #[test]
    fn test_days_until_next_occurrence_uses_clock() {
        let birthday = BirthdayDate::new("1990-03-15").unwrap();
        let days = birthday.days_until_next_occurrence();
        assert!((0..=366).contains(&days));
    }
}
