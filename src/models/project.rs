//! Project date range and active-date set models.
//!
//! This module contains the [`ProjectDateRange`] that bounds week generation
//! and the [`ActiveDateSet`] that decides which days enter cost aggregation.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_calendar_date;
use crate::error::{EngineError, EngineResult};

use super::PlanWarning;

/// The inclusive start and end dates of a project.
///
/// The invariant `start_date <= end_date` is enforced on every construction
/// path, deserialization included.
///
/// # Example
///
/// ```
/// use labor_planning_engine::models::ProjectDateRange;
///
/// let range = ProjectDateRange::parse("2024-03-06", "2024-03-08").unwrap();
/// assert_eq!(range.num_days(), 3);
///
/// assert!(ProjectDateRange::parse("2024-05-10", "2024-05-01").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct ProjectDateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

/// Unvalidated wire shape of a project date range.
#[derive(Debug, Clone, Deserialize)]
struct RawDateRange {
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
}

impl TryFrom<RawDateRange> for ProjectDateRange {
    type Error = EngineError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::from_optional(raw.start_date.as_deref(), raw.end_date.as_deref())
    }
}

impl ProjectDateRange {
    /// Creates a range from typed dates.
    ///
    /// Returns `InvalidRange` when `start_date > end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
                message: "start date is after end date".to_string(),
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Creates a range from ISO calendar date strings (`YYYY-MM-DD`).
    pub fn parse(start_date: &str, end_date: &str) -> EngineResult<Self> {
        Self::from_optional(Some(start_date), Some(end_date))
    }

    /// Creates a range from possibly-absent date strings.
    ///
    /// An absent or unparseable bound is reported as `InvalidRange`.
    pub fn from_optional(start_date: Option<&str>, end_date: Option<&str>) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidRange {
            start: start_date.unwrap_or("<missing>").to_string(),
            end: end_date.unwrap_or("<missing>").to_string(),
            message: message.to_string(),
        };

        let start = start_date.ok_or_else(|| invalid("start date is missing"))?;
        let end = end_date.ok_or_else(|| invalid("end date is missing"))?;
        let start =
            parse_calendar_date(start).map_err(|_| invalid("start date is not a calendar date"))?;
        let end =
            parse_calendar_date(end).map_err(|_| invalid("end date is not a calendar date"))?;

        Self::new(start, end)
    }

    /// The first day of the project.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The last day of the project.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Checks whether `date` falls within the project, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The number of calendar days in the project, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// The set of dates that have at least one planned activity.
///
/// Dates are kept ordered so aggregation output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveDateSet {
    dates: BTreeSet<NaiveDate>,
}

impl ActiveDateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from ISO date strings, skipping entries that do not parse.
    ///
    /// Every skipped entry is reported as an `ACTIVE_DATE_INVALID` warning.
    ///
    /// # Example
    ///
    /// ```
    /// use labor_planning_engine::models::ActiveDateSet;
    ///
    /// let (dates, warnings) =
    ///     ActiveDateSet::from_iso_strings(["2024-03-04", "soon", "2024-03-05"]);
    /// assert_eq!(dates.len(), 2);
    /// assert_eq!(warnings.len(), 1);
    /// assert_eq!(warnings[0].code, "ACTIVE_DATE_INVALID");
    /// ```
    pub fn from_iso_strings<I, S>(values: I) -> (Self, Vec<PlanWarning>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        let mut warnings = Vec::new();

        for value in values {
            let value = value.as_ref();
            match parse_calendar_date(value) {
                Ok(date) => {
                    set.insert(date);
                }
                Err(err) => warnings.push(PlanWarning::active_date_invalid(value, &err)),
            }
        }

        (set, warnings)
    }

    /// Adds a date, returning true if it was not already present.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Checks whether `date` is active.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// The number of active dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no date is active.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates the active dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for ActiveDateSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for ActiveDateSet {
    fn extend<T: IntoIterator<Item = NaiveDate>>(&mut self, iter: T) {
        self.dates.extend(iter);
    }
}
