//! Calendar week model.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{ActiveDateSet, ProjectDateRange};

/// One Monday-to-Sunday week of a project's calendar.
///
/// `week_start` is always a Monday, `week_end` the following Sunday, and
/// `days[i]` is `week_start + i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekSpan {
    /// 1-based position of the week within the project.
    pub week_number: u32,
    /// The Monday opening the week.
    pub week_start: NaiveDate,
    /// The Sunday closing the week.
    pub week_end: NaiveDate,
    /// The seven days of the week, Monday first.
    pub days: [NaiveDate; 7],
}

impl WeekSpan {
    /// Builds the week opened by `monday`.
    ///
    /// Callers guarantee `monday` is a Monday and that `monday + 6` is
    /// representable.
    pub(crate) fn from_monday(week_number: u32, monday: NaiveDate) -> Self {
        debug_assert_eq!(monday.weekday(), Weekday::Mon);
        let days: [NaiveDate; 7] = std::array::from_fn(|i| monday + Days::new(i as u64));
        Self {
            week_number,
            week_start: monday,
            week_end: days[6],
            days,
        }
    }

    /// Checks whether `date` falls within this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date <= self.week_end
    }

    /// The days of this week present in `active_dates`, in order.
    pub fn active_days(&self, active_dates: &ActiveDateSet) -> Vec<NaiveDate> {
        self.days
            .iter()
            .copied()
            .filter(|day| active_dates.contains(*day))
            .collect()
    }

    /// The days of this week that fall inside `range`, in order.
    ///
    /// Only the first and last week of a project can have fewer than seven.
    pub fn days_within(&self, range: &ProjectDateRange) -> Vec<NaiveDate> {
        self.days
            .iter()
            .copied()
            .filter(|day| range.contains(*day))
            .collect()
    }
}
