//! Reporting periods and record filtering.
//!
//! Reports compare a current period against a comparison period. A period
//! is either a calendar month or an inclusive custom date range. Records
//! carry their date as a `YYYY-MM-DD` string; anything that does not match
//! that shape exactly is silently left out of every period.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced when building or validating periods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Start {start} is after end {end}")]
    StartAfterEnd { start: String, end: String },

    #[error("Range of {months} months exceeds the limit of {max} months")]
    RangeTooLong { months: u32, max: u32 },
}

/// Anything with a `YYYY-MM-DD` date string that periods can filter on.
pub trait Dated {
    fn date_str(&self) -> &str;
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(format!("{}-{}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// Parses `YYYY-MM`.
    pub fn parse(value: &str) -> Result<Self, PeriodError> {
        let invalid = || PeriodError::InvalidMonth(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before, wrapping January to December of the previous year.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The `YYYY-MM` prefix shared by every date in this month.
    pub fn prefix(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Human-readable label, e.g. `September 2024`.
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(day) => day.format("%B %Y").to_string(),
            None => self.prefix(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Checks that a date string is exactly `YYYY-MM-DD` and a real date.
pub fn is_iso_date(value: &str) -> bool {
    parse_iso_date(value).is_some()
}

/// Parses a strict `YYYY-MM-DD` date string.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Keeps the records dated inside the given month.
pub fn filter_by_month<T: Dated>(records: &[T], month: YearMonth) -> Vec<&T> {
    let prefix = month.prefix();
    records
        .iter()
        .filter(|r| is_iso_date(r.date_str()) && r.date_str().starts_with(&prefix))
        .collect()
}

/// A reporting period: one calendar month or an inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Period {
    Month(YearMonth),
    Range { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// Builds a custom range, rejecting `start > end`.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::StartAfterEnd {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Period::Range { start, end })
    }

    /// The month this period covers, if it is a month period.
    pub fn month(&self) -> Option<YearMonth> {
        match self {
            Period::Month(month) => Some(*month),
            Period::Range { .. } => None,
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        match self {
            Period::Month(month) => is_iso_date(date) && date.starts_with(&month.prefix()),
            Period::Range { start, end } => match parse_iso_date(date) {
                Some(d) => d >= *start && d <= *end,
                None => false,
            },
        }
    }

    /// The default comparison period.
    ///
    /// For a month this is the previous month. For a range it is the range
    /// of equal length ending the day before `start`.
    pub fn previous(&self) -> Period {
        match self {
            Period::Month(month) => Period::Month(month.previous()),
            Period::Range { start, end } => {
                let length = *end - *start;
                let prev_end = *start - Duration::days(1);
                Period::Range {
                    start: prev_end - length,
                    end: prev_end,
                }
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            Period::Month(month) => month.label(),
            Period::Range { start, end } => format!("{} to {}", start, end),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Keeps the records dated inside the period.
pub fn filter_by_period<'a, T: Dated>(records: &'a [T], period: &Period) -> Vec<&'a T> {
    match period {
        Period::Month(month) => filter_by_month(records, *month),
        Period::Range { .. } => records.iter().filter(|r| period.contains(r.date_str())).collect(),
    }
}

/// Lists every month from `start` to `end`, both included.
///
/// Ranges where `start` comes after `end`, or that span more than
/// `max_months` months, are rejected rather than clamped.
///
/// # Examples
///
/// ```rust
/// use sitewatch::libs::period::{month_range, YearMonth};
///
/// let start = YearMonth::new(2024, 11).unwrap();
/// let end = YearMonth::new(2025, 2).unwrap();
/// let months = month_range(start, end, 6).unwrap();
/// assert_eq!(months.len(), 4);
/// assert_eq!(months[2], YearMonth::new(2025, 1).unwrap());
/// ```
pub fn month_range(start: YearMonth, end: YearMonth, max_months: u32) -> Result<Vec<YearMonth>, PeriodError> {
    if start > end {
        return Err(PeriodError::StartAfterEnd {
            start: start.prefix(),
            end: end.prefix(),
        });
    }

    let span = (end.year - start.year) * 12 + end.month as i32 - start.month as i32 + 1;
    let span = span as u32;
    if span > max_months {
        return Err(PeriodError::RangeTooLong {
            months: span,
            max: max_months,
        });
    }

    let mut months = Vec::with_capacity(span as usize);
    let mut current = start;
    while current <= end {
        months.push(current);
        current = current.next();
    }
    Ok(months)
}
