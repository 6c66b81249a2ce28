//! Calendar date value type and its strict text parser.
//!
//! A `Date` is a plain (year, month, day) triple. There is no calendar
//! validation beyond month in 1..=12 and day in 1..=31, so `2021-02-31`
//! is accepted.

use std::fmt;
use std::str::FromStr;

const DELIMITER: char = '-';
const MONTHS: std::ops::RangeInclusive<i32> = 1..=12;
const DAYS: std::ops::RangeInclusive<i32> = 1..=31;

/// A (year, month, day) triple ordered by year, then month, then day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

/// Why a date literal was rejected
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDateError {
    /// Text does not match `YEAR-MONTH-DAY`; carries the raw text
    #[error("Wrong date format: {0}")]
    Format(String),

    #[error("Month value is invalid: {0}")]
    InvalidMonth(i32),

    #[error("Day value is invalid: {0}")]
    InvalidDay(i32),
}

impl Date {
    /// Build a date without any range checks.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    /// Parse a `YEAR-MONTH-DAY` literal.
    ///
    /// Each component is a run of ASCII digits. Anything that breaks the
    /// shape (missing parts, wrong delimiters, trailing characters, a
    /// number too large for `i32`) is a format error. Range errors on the
    /// month and day are only reported once the shape is known to be right,
    /// month first.
    pub fn parse(text: &str) -> Result<Self, ParseDateError> {
        let format_error = || ParseDateError::Format(text.to_string());
        let mut cursor = Cursor::new(text);

        let year = cursor.number().ok_or_else(format_error)?;
        let first = cursor.next_char().ok_or_else(format_error)?;
        // A date that stops right after the first delimiter has no day.
        if cursor.is_exhausted() {
            return Err(format_error());
        }

        let month = cursor.number().ok_or_else(format_error)?;
        let second = cursor.next_char().ok_or_else(format_error)?;
        if cursor.is_exhausted() {
            return Err(format_error());
        }

        let day = cursor.number().ok_or_else(format_error)?;
        if !cursor.is_exhausted() {
            return Err(format_error());
        }

        if first != DELIMITER || second != DELIMITER {
            return Err(format_error());
        }
        if !MONTHS.contains(&month) {
            return Err(ParseDateError::InvalidMonth(month));
        }
        if !DAYS.contains(&day) {
            return Err(ParseDateError::InvalidDay(day));
        }

        Ok(Self::new(year, month, day))
    }
}

impl FromStr for Date {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Left-to-right reader over the unconsumed part of a literal
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }

    /// Consume the longest run of ASCII digits and read it as an `i32`.
    fn number(&mut self) -> Option<i32> {
        let len = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if len == 0 {
            return None;
        }
        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        digits.parse().ok()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.rest.chars().next()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_error(text: &str) -> ParseDateError {
        ParseDateError::Format(text.to_string())
    }

    #[test]
    fn test_parse_valid_dates() {
        assert_eq!(Date::parse("2020-1-1").unwrap(), Date::new(2020, 1, 1));
        assert_eq!(Date::parse("2020-01-01").unwrap(), Date::new(2020, 1, 1));
        assert_eq!(Date::parse("0-12-31").unwrap(), Date::new(0, 12, 31));
        assert_eq!(Date::parse("99999-6-15").unwrap(), Date::new(99999, 6, 15));

        let date = Date::parse("0042-07-09").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (42, 7, 9));
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(Date::parse("2021-2-31").unwrap(), Date::new(2021, 2, 31));
        assert_eq!(Date::parse("2019-2-29").unwrap(), Date::new(2019, 2, 29));
    }

    #[test]
    fn test_textual_forms_are_equal_keys() {
        let short: Date = "2020-1-1".parse().unwrap();
        let padded: Date = "2020-01-01".parse().unwrap();
        assert_eq!(short, padded);
    }

    #[test]
    fn test_missing_parts_are_format_errors() {
        for text in ["", "2020", "2020-", "2020-1", "2020-1-", "-1-1", "2020--1"] {
            assert_eq!(Date::parse(text), Err(format_error(text)), "input {:?}", text);
        }
    }

    #[test]
    fn test_trailing_text_is_format_error() {
        for text in ["2020-1-1-1", "2020-1-1 ", "2020-1-1x", "2020-1-1\t"] {
            assert_eq!(Date::parse(text), Err(format_error(text)), "input {:?}", text);
        }
    }

    #[test]
    fn test_sign_is_not_a_number() {
        assert_eq!(Date::parse("+2020-1-1"), Err(format_error("+2020-1-1")));
        assert_eq!(Date::parse("2020-+1-1"), Err(format_error("2020-+1-1")));
        assert_eq!(Date::parse("2020-1--1"), Err(format_error("2020-1--1")));
    }

    #[test]
    fn test_wrong_delimiters_win_over_range_errors() {
        assert_eq!(Date::parse("2020/13/40"), Err(format_error("2020/13/40")));
        assert_eq!(Date::parse("2020-13.1"), Err(format_error("2020-13.1")));
        assert_eq!(Date::parse("2020é1-1"), Err(format_error("2020é1-1")));
    }

    #[test]
    fn test_overflow_is_format_error() {
        let text = "99999999999-1-1";
        assert_eq!(Date::parse(text), Err(format_error(text)));
    }

    #[test]
    fn test_month_out_of_range() {
        assert_eq!(Date::parse("2020-13-1"), Err(ParseDateError::InvalidMonth(13)));
        assert_eq!(Date::parse("2020-0-1"), Err(ParseDateError::InvalidMonth(0)));
        // Month is checked before day
        assert_eq!(Date::parse("2020-0-0"), Err(ParseDateError::InvalidMonth(0)));
    }

    #[test]
    fn test_day_out_of_range() {
        assert_eq!(Date::parse("2020-1-32"), Err(ParseDateError::InvalidDay(32)));
        assert_eq!(Date::parse("2020-12-0"), Err(ParseDateError::InvalidDay(0)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(format_error("x").to_string(), "Wrong date format: x");
        assert_eq!(
            ParseDateError::InvalidMonth(13).to_string(),
            "Month value is invalid: 13"
        );
        assert_eq!(ParseDateError::InvalidDay(0).to_string(), "Day value is invalid: 0");
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(Date::new(5, 1, 2).to_string(), "0005-01-02");
        assert_eq!(Date::new(2020, 12, 31).to_string(), "2020-12-31");
        assert_eq!(Date::new(12345, 6, 7).to_string(), "12345-06-07");
    }

    #[test]
    fn test_ordering() {
        let a = Date::new(2020, 1, 1);
        assert!(a < Date::new(2021, 1, 1));
        assert!(a < Date::new(2020, 2, 1));
        assert!(a < Date::new(2020, 1, 2));
        assert!(Date::new(2020, 12, 31) < Date::new(2021, 1, 1));
        assert_eq!(Date::default(), Date::new(0, 0, 0));
    }
}
