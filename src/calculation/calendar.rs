//! Calendar arithmetic on naive dates.
//!
//! This module provides date parsing, weekend detection, ISO week alignment,
//! and the per-month day counts used by payroll proration. All arithmetic is
//! on [`NaiveDate`], so no timezone or daylight-saving shift can move a date.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// A trailing time part separated by `T` or a space is accepted and dropped,
/// keeping the calendar date exactly as written. No timezone conversion is
/// applied, so `2024-03-04T23:30:00-05:00` is still March 4th.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] for anything else.
///
/// # Example
///
/// ```
/// use labor_planning_engine::calculation::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// assert_eq!(parse_calendar_date("2024-03-04").unwrap(), expected);
/// assert_eq!(parse_calendar_date("2024-03-04T23:30:00Z").unwrap(), expected);
/// assert!(parse_calendar_date("not-a-date").is_err());
/// ```
pub fn parse_calendar_date(input: &str) -> EngineResult<NaiveDate> {
    let invalid = || EngineError::InvalidDate {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let (date, remainder) =
        NaiveDate::parse_and_remainder(trimmed, "%Y-%m-%d").map_err(|_| invalid())?;

    if remainder.is_empty() {
        return Ok(date);
    }

    // A time part must at least carry hours and minutes.
    let time_part = remainder
        .strip_prefix('T')
        .or_else(|| remainder.strip_prefix(' '))
        .ok_or_else(invalid)?;
    NaiveTime::parse_and_remainder(time_part, "%H:%M").map_err(|_| invalid())?;

    Ok(date)
}

/// Returns true if `date` is a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The Monday on or before `date`.
///
/// Returns `None` only at the lower edge of the supported calendar.
pub fn iso_week_start(date: NaiveDate) -> Option<NaiveDate> {
    // Monday = 0 ... Sunday = 6
    let offset = date.weekday().num_days_from_monday();
    date.checked_sub_days(Days::new(u64::from(offset)))
}

/// The Sunday on or after `date`.
///
/// Returns `None` only at the upper edge of the supported calendar.
pub fn iso_week_end(date: NaiveDate) -> Option<NaiveDate> {
    let offset = 6 - date.weekday().num_days_from_monday();
    date.checked_add_days(Days::new(u64::from(offset)))
}

/// Day counts for one calendar month.
///
/// # Example
///
/// ```
/// use labor_planning_engine::calculation::MonthCalendar;
/// use chrono::NaiveDate;
///
/// let april = MonthCalendar::for_date(NaiveDate::from_ymd_opt(2024, 4, 17).unwrap());
/// assert_eq!(april.days_in_month, 30);
/// assert_eq!(april.business_days, 22);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthCalendar {
    /// The calendar year.
    pub year: i32,
    /// The month, 1 to 12.
    pub month: u32,
    /// Number of calendar days in the month.
    pub days_in_month: u32,
    /// Number of Monday-to-Friday days in the month.
    pub business_days: u32,
}

impl MonthCalendar {
    /// Computes the calendar of the month containing `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        let year = date.year();
        let month = date.month();
        let days_in_month = days_in_month(year, month);
        let business_days = (1..=days_in_month)
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .filter(|d| !is_weekend(*d))
            .count() as u32;

        Self {
            year,
            month,
            days_in_month,
            business_days,
        }
    }

    /// Computes the calendar of `month` in `year`, or `None` for an invalid month.
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::for_date)
    }

    /// Checks whether `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 0,
    }
}
