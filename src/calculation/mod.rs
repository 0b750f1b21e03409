//! Calculation logic for the Labor Planning Engine.
//!
//! This module contains the calendar helpers, the week partitioner that
//! splits a project into Monday-aligned weeks, the payroll prorator that
//! costs one employee on one day, and the labor plan builder that combines
//! them into weekly aggregates.

mod calendar;
mod daily_cost;
mod labor_plan;
mod week_partition;

pub use calendar::{MonthCalendar, is_weekend, iso_week_end, iso_week_start, parse_calendar_date};
pub use daily_cost::{
    WEEKLY_SALARY_WORKDAYS, compute_daily_cost, daily_cost_for, prorate_with_calendar,
    select_policy,
};
pub use labor_plan::build_labor_plan;
pub use week_partition::generate_weeks;
