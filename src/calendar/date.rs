use chrono::{Days, NaiveDate};

use crate::errors::AppError;

/// Canonical wire format for calendar days, as used by the booking backend.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn parse_day(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, DAY_FORMAT)
        .map_err(|_| AppError::InvalidDateFormat(s.to_string()))
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn add_days(day: NaiveDate, n: i64) -> NaiveDate {
    if n >= 0 {
        day.checked_add_days(Days::new(n as u64)).unwrap_or(day)
    } else {
        day.checked_sub_days(Days::new(n.unsigned_abs())).unwrap_or(day)
    }
}

/// Ascending iterator over every day from `start` to `end` inclusive.
/// Empty when `end < start`.
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> DayRange {
    DayRange {
        next: (start <= end).then_some(start),
        end,
    }
}

impl Iterator for DayRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let day = self.next?;
        self.next = if day < self.end {
            day.succ_opt()
        } else {
            None
        };
        Some(day)
    }
}
