//! Compact `YYYYMMDD` dates.
//!
//! Task dates travel as 8-digit strings with no separators, timezone or time
//! of day. Parsing is strict: exactly eight ASCII digits, years 0001–9999.

use chrono::{Datelike, NaiveDate};

use crate::constants::COMPACT_DATE_FORMAT;
use crate::error::RuleError;

/// Gregorian leap year test.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Parse a compact `YYYYMMDD` string into a calendar date.
pub fn parse_compact(text: &str) -> Result<NaiveDate, RuleError> {
    split_digits(text)
        .and_then(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or_else(|| RuleError::InvalidDateFormat(text.to_string()))
}

/// Format a date in the compact `YYYYMMDD` form.
///
/// Only meaningful for years 0001–9999; see [`in_compact_range`].
pub fn format_compact(date: NaiveDate) -> String {
    date.format(COMPACT_DATE_FORMAT).to_string()
}

/// Whether a date can be written with a four-digit year.
pub fn in_compact_range(date: NaiveDate) -> bool {
    (1..=9999).contains(&date.year())
}

/// Split eight ASCII digits into year, month and day without validating the day.
fn split_digits(text: &str) -> Option<(i32, u32, u32)> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = text[0..4].parse().ok()?;
    let month: u32 = text[4..6].parse().ok()?;
    let day: u32 = text[6..8].parse().ok()?;

    if year < 1 {
        return None;
    }

    Some((year, month, day))
}

/// A year/month/day triple used as a recurrence anchor.
///
/// Unlike [`NaiveDate`] it can hold February 29 of a non-leap year (a
/// "floating" leap day), so an annual task anchored on a leap day keeps
/// landing on Feb 29 in leap years instead of drifting to March 1 for good.
/// Field order gives the derived ordering calendar semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDay {
    pub fn parse(text: &str) -> Result<Self, RuleError> {
        let (year, month, day) =
            split_digits(text).ok_or_else(|| RuleError::InvalidDateFormat(text.to_string()))?;

        let candidate = CalendarDay { year, month, day };
        if NaiveDate::from_ymd_opt(year, month, day).is_none() && !candidate.is_leap_day() {
            return Err(RuleError::InvalidDateFormat(text.to_string()));
        }

        Ok(candidate)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        CalendarDay {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn with_year(self, year: i32) -> Self {
        CalendarDay { year, ..self }
    }

    /// February 29, regardless of whether `year` is a leap year.
    pub fn is_leap_day(self) -> bool {
        self.month == 2 && self.day == 29
    }

    /// Convert to a real date. A floating leap day becomes March 1.
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).or_else(|| {
            if self.is_leap_day() && !is_leap_year(self.year) {
                NaiveDate::from_ymd_opt(self.year, 3, 1)
            } else {
                None
            }
        })
    }
}
