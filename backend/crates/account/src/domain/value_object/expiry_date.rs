//! Expiry Date Value Object
//!
//! Card expiry as a calendar month, submitted as `YYYY-MM`.

use chrono::{Datelike, NaiveDate};
use derive_more::Display;

/// Card expiry month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display("{year:04}-{month:02}")]
pub struct ExpiryDate {
    // Field order gives chronological `Ord`
    year: i32,
    month: u32,
}

impl ExpiryDate {
    /// `None` unless `month` is 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Parse `YYYY-MM`; a single-digit month is accepted
    pub fn parse(value: &str) -> Option<Self> {
        let (year, month) = value.trim().split_once('-')?;
        if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    /// The calendar month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Expired once the calendar month of `today` is later than this one
    pub fn is_past(&self, today: NaiveDate) -> bool {
        *self < Self::of(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse() {
        let expiry = ExpiryDate::parse("2030-07").unwrap();
        assert_eq!((expiry.year(), expiry.month()), (2030, 7));
        assert_eq!(ExpiryDate::parse("2030-7"), Some(expiry));
        assert_eq!(expiry.to_string(), "2030-07");
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        for value in ["", "2030", "2030-13", "2030-00", "07/30", "2030-07-01", "abcd-01", "-07"] {
            assert!(ExpiryDate::parse(value).is_none(), "{value}");
        }
    }

    #[test]
    fn test_current_month_is_not_past() {
        let today = date(2024, 5, 31);
        assert!(!ExpiryDate::new(2024, 5).unwrap().is_past(today));
        assert!(!ExpiryDate::new(2024, 6).unwrap().is_past(today));
        assert!(ExpiryDate::new(2024, 4).unwrap().is_past(today));
        assert!(ExpiryDate::new(2023, 12).unwrap().is_past(today));
    }
}
