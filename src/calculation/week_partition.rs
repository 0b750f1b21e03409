//! Project week partitioning.
//!
//! This module splits a project's lifetime into consecutive Monday-to-Sunday
//! weeks. The first week is padded back to a Monday and the last forward to
//! a Sunday, so every week has exactly seven days.

use chrono::Days;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ProjectDateRange, WeekSpan};

use super::calendar::{iso_week_end, iso_week_start};

/// Partitions a project's date range into numbered calendar weeks.
///
/// # Arguments
///
/// * `range` - The project's inclusive start and end dates
///
/// # Returns
///
/// A non-empty, ordered list of weeks numbered from 1 that covers every day
/// of `range` with no gaps or overlaps. A range inside a single week yields
/// one week, and a range that is exactly Monday to Sunday gets no padding.
///
/// # Errors
///
/// Returns `InvalidRange` only if the aligned weeks would fall outside the
/// supported calendar. Inverted or missing bounds are already rejected when
/// the [`ProjectDateRange`] is built.
///
/// # Example
///
/// ```
/// use labor_planning_engine::calculation::generate_weeks;
/// use labor_planning_engine::models::ProjectDateRange;
/// use chrono::NaiveDate;
///
/// // Wednesday to Friday
/// let range = ProjectDateRange::parse("2024-03-06", "2024-03-08").unwrap();
/// let weeks = generate_weeks(&range).unwrap();
///
/// assert_eq!(weeks.len(), 1);
/// assert_eq!(weeks[0].week_start, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
/// assert_eq!(weeks[0].week_end, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
/// ```
pub fn generate_weeks(range: &ProjectDateRange) -> EngineResult<Vec<WeekSpan>> {
    let out_of_calendar = || EngineError::InvalidRange {
        start: range.start_date().to_string(),
        end: range.end_date().to_string(),
        message: "weeks extend beyond the supported calendar".to_string(),
    };

    let aligned_start = iso_week_start(range.start_date()).ok_or_else(out_of_calendar)?;
    let aligned_end = iso_week_end(range.end_date()).ok_or_else(out_of_calendar)?;

    let mut weeks = Vec::new();
    let mut week_start = aligned_start;
    let mut week_number: u32 = 1;

    while week_start <= aligned_end {
        weeks.push(WeekSpan::from_monday(week_number, week_start));
        week_number += 1;

        // The last Monday is aligned_end - 6, so stepping past the calendar
        // edge only happens once every week has been emitted.
        match week_start.checked_add_days(Days::new(7)) {
            Some(next) => week_start = next,
            None => break,
        }
    }

    debug!(
        start = %range.start_date(),
        end = %range.end_date(),
        aligned_start = %aligned_start,
        aligned_end = %aligned_end,
        weeks = weeks.len(),
        "Generated project weeks"
    );

    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn weeks_for(start: &str, end: &str) -> Vec<WeekSpan> {
        generate_weeks(&ProjectDateRange::parse(start, end).unwrap()).unwrap()
    }

    // ==========================================================================
    // WP-001: Span within one week yields exactly one week
    // ==========================================================================
    #[test]
    fn test_wp_001_single_week_containment() {
        // Wednesday to Friday
        let weeks = weeks_for("2024-03-06", "2024-03-08");
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].week_number, 1);
        assert_eq!(weeks[0].week_start, make_date("2024-03-04"));
        assert_eq!(weeks[0].week_end, make_date("2024-03-10"));
    }

    // ==========================================================================
    // WP-002: Exact Monday-Sunday range adds no padding week
    // ==========================================================================
    #[test]
    fn test_wp_002_exact_boundary_has_no_padding() {
        let weeks = weeks_for("2024-03-04", "2024-03-10");
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].week_start, make_date("2024-03-04"));
        assert_eq!(weeks[0].week_end, make_date("2024-03-10"));
    }

    // ==========================================================================
    // WP-003: Single-day project
    // ==========================================================================
    #[test]
    fn test_wp_003_single_day_project() {
        // A Sunday alone still gets its whole Monday-Sunday week
        let weeks = weeks_for("2024-03-10", "2024-03-10");
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].week_start, make_date("2024-03-04"));
        assert!(weeks[0].contains(make_date("2024-03-10")));
    }

    // ==========================================================================
    // WP-004: Multi-week project crossing a month boundary
    // ==========================================================================
    #[test]
    fn test_wp_004_month_boundary() {
        // Thursday 2024-02-22 to Tuesday 2024-03-12
        let weeks = weeks_for("2024-02-22", "2024-03-12");
        assert_eq!(weeks.len(), 4);

        let starts: Vec<_> = weeks.iter().map(|w| w.week_start).collect();
        assert_eq!(
            starts,
            vec![
                make_date("2024-02-19"),
                make_date("2024-02-26"),
                make_date("2024-03-04"),
                make_date("2024-03-11"),
            ]
        );
        assert_eq!(weeks[1].days[3], make_date("2024-02-29"));
        assert_eq!(weeks[3].week_end, make_date("2024-03-17"));
    }

    // ==========================================================================
    // WP-005: Sunday start and Monday end pad on both sides
    // ==========================================================================
    #[test]
    fn test_wp_005_sunday_start_monday_end() {
        let weeks = weeks_for("2024-03-10", "2024-03-11");
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, make_date("2024-03-04"));
        assert_eq!(weeks[1].week_end, make_date("2024-03-17"));
    }

    // ==========================================================================
    // WP-006: Weeks are contiguous, aligned and numbered without gaps
    // ==========================================================================
    #[test]
    fn test_wp_006_contiguous_aligned_numbered() {
        let weeks = weeks_for("2023-12-27", "2024-02-03");

        for (i, week) in weeks.iter().enumerate() {
            assert_eq!(week.week_number, i as u32 + 1);
            assert_eq!(week.week_start.weekday(), Weekday::Mon);
            assert_eq!(week.week_end.weekday(), Weekday::Sun);
            assert_eq!(week.week_end, week.week_start + Days::new(6));
            for (offset, day) in week.days.iter().enumerate() {
                assert_eq!(*day, week.week_start + Days::new(offset as u64));
            }
        }

        for pair in weeks.windows(2) {
            assert_eq!(pair[1].week_start, pair[0].week_end + Days::new(1));
        }
    }

    // ==========================================================================
    // WP-007: Year boundary
    // ==========================================================================
    #[test]
    fn test_wp_007_year_boundary() {
        // Sunday 2023-12-31 to Monday 2024-01-01
        let weeks = weeks_for("2023-12-31", "2024-01-01");
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, make_date("2023-12-25"));
        assert_eq!(weeks[1].week_start, make_date("2024-01-01"));
    }
}
