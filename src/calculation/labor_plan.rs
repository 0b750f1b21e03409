//! Weekly labor plan aggregation.
//!
//! This module combines week partitioning and daily proration into a
//! project-wide plan: for every week, each active day is costed for every
//! employee whose status counts as active, and the results are summed into
//! day, week, and plan totals.

use std::collections::HashMap;

use chrono::{Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::PlanningConfig;
use crate::error::EngineResult;
use crate::models::{
    ActiveDateSet, DayCost, EmployeeDayCost, LaborPlan, PlanTotals, PlanWarning, ProjectDateRange,
    ProjectEmployee, ProrationPolicy, WeekCost,
};

use super::calendar::{MonthCalendar, is_weekend};
use super::daily_cost::{prorate_with_calendar, select_policy};
use super::week_partition::generate_weeks;

/// Builds the weekly labor plan for a project.
///
/// # Arguments
///
/// * `range` - The project's start and end dates
/// * `employees` - Personnel records; only active statuses are costed
/// * `active_dates` - Days with at least one planned activity
/// * `config` - Status filter, clipping, and rounding settings
///
/// # Returns
///
/// A [`LaborPlan`] with one [`WeekCost`] per project week. Weeks without
/// active days are kept with an empty day list and a zero total. Employees
/// left out or costed at zero are reported as warnings, never as errors.
///
/// # Errors
///
/// Only week generation can fail (see [`generate_weeks`]).
///
/// # Example
///
/// ```
/// use labor_planning_engine::calculation::build_labor_plan;
/// use labor_planning_engine::config::PlanningConfig;
/// use labor_planning_engine::models::{
///     ActiveDateSet, EmployeePayrollProfile, EmploymentStatus, ProjectDateRange, ProjectEmployee,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let range = ProjectDateRange::parse("2024-03-04", "2024-03-17").unwrap();
/// let crew = vec![ProjectEmployee {
///     id: "emp_001".to_string(),
///     name: None,
///     status: EmploymentStatus::Active,
///     payroll: EmployeePayrollProfile::contractor(Decimal::from(50)),
/// }];
/// let active: ActiveDateSet = [
///     NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
/// ]
/// .into_iter()
/// .collect();
///
/// let plan = build_labor_plan(&range, &crew, &active, &PlanningConfig::default()).unwrap();
/// assert_eq!(plan.weeks.len(), 2);
/// assert_eq!(plan.totals.total_cost, Decimal::from(100));
/// ```
pub fn build_labor_plan(
    range: &ProjectDateRange,
    employees: &[ProjectEmployee],
    active_dates: &ActiveDateSet,
    config: &PlanningConfig,
) -> EngineResult<LaborPlan> {
    let plan_id = Uuid::new_v4();
    let weeks = generate_weeks(range)?;
    let mut warnings: Vec<PlanWarning> = Vec::new();

    // Status filter
    let mut included: Vec<&ProjectEmployee> = Vec::with_capacity(employees.len());
    for (position, employee) in employees.iter().enumerate() {
        if config.is_active_status(employee.status) {
            if employee.id.trim().is_empty() {
                warn!(plan_id = %plan_id, position, "Employee record has no id");
                warnings.push(PlanWarning::employee_id_missing(position));
            }
            if select_policy(&employee.payroll) == ProrationPolicy::NoApplicablePolicy {
                warn!(
                    plan_id = %plan_id,
                    employee_id = %employee.id,
                    "Employee has no applicable payroll policy"
                );
                warnings.push(PlanWarning::no_payroll_policy(employee));
            }
            included.push(employee);
        } else {
            debug!(
                plan_id = %plan_id,
                employee_id = %employee.id,
                status = ?employee.status,
                "Employee excluded by status"
            );
            warnings.push(PlanWarning::employee_excluded(employee));
        }
    }

    let mut calendars: HashMap<(i32, u32), MonthCalendar> = HashMap::new();
    let mut week_costs: Vec<WeekCost> = Vec::with_capacity(weeks.len());
    let mut plan_raw_total = Decimal::ZERO;
    let mut active_days: u32 = 0;
    let mut saturated: Vec<&'static str> = Vec::new();

    for week in weeks {
        let mut day_costs: Vec<DayCost> = Vec::new();
        let mut week_raw_total = Decimal::ZERO;

        for date in week.active_days(active_dates) {
            if config.clip_to_project_range && !range.contains(date) {
                debug!(
                    plan_id = %plan_id,
                    date = %date,
                    "Active date outside project range skipped"
                );
                continue;
            }

            let calendar = *calendars
                .entry((date.year(), date.month()))
                .or_insert_with(|| MonthCalendar::for_date(date));

            let lines: Vec<EmployeeDayCost> = included
                .iter()
                .map(|employee| {
                    let cost = prorate_with_calendar(&employee.payroll, date, &calendar);
                    EmployeeDayCost {
                        employee_id: employee.id.clone(),
                        amount: cost.amount,
                        policy: cost.policy,
                    }
                })
                .collect();

            let mut day_raw_total = Decimal::ZERO;
            for line in &lines {
                if !accumulate(&mut day_raw_total, line.amount) {
                    note_saturation(&mut saturated, "day", plan_id);
                }
            }
            if !accumulate(&mut week_raw_total, day_raw_total) {
                note_saturation(&mut saturated, "week", plan_id);
            }
            active_days += 1;

            day_costs.push(DayCost {
                date,
                is_weekend: is_weekend(date),
                lines,
                total: round_amount(day_raw_total, config.amount_scale),
            });
        }

        if !accumulate(&mut plan_raw_total, week_raw_total) {
            note_saturation(&mut saturated, "plan", plan_id);
        }
        week_costs.push(WeekCost {
            week,
            days: day_costs,
            total: round_amount(week_raw_total, config.amount_scale),
        });
    }

    if let (Some(first), Some(last)) = (week_costs.first(), week_costs.last()) {
        let (plan_start, plan_end) = (first.week.week_start, last.week.week_end);
        let outside = active_dates
            .iter()
            .filter(|d| *d < plan_start || *d > plan_end)
            .count();
        if outside > 0 {
            debug!(
                plan_id = %plan_id,
                count = outside,
                "Active dates outside project weeks ignored"
            );
        }
    }

    warnings.extend(saturated.into_iter().map(PlanWarning::total_saturated));

    let totals = PlanTotals {
        total_cost: round_amount(plan_raw_total, config.amount_scale),
        active_days,
        weeks: week_costs.len() as u32,
        employees_included: included.len() as u32,
        employees_excluded: (employees.len() - included.len()) as u32,
    };

    info!(
        plan_id = %plan_id,
        start = %range.start_date(),
        end = %range.end_date(),
        weeks = totals.weeks,
        active_days = totals.active_days,
        employees = totals.employees_included,
        total_cost = %totals.total_cost,
        warnings = warnings.len(),
        "Labor plan built"
    );

    Ok(LaborPlan {
        plan_id,
        generated_at: Utc::now(),
        project: *range,
        weeks: week_costs,
        totals,
        warnings,
    })
}

/// Adds `amount` into `total`, capping at [`Decimal::MAX`]. Returns false when capped.
fn accumulate(total: &mut Decimal, amount: Decimal) -> bool {
    match total.checked_add(amount) {
        Some(sum) => {
            *total = sum;
            true
        }
        None => {
            *total = Decimal::MAX;
            false
        }
    }
}

fn note_saturation(saturated: &mut Vec<&'static str>, scope: &'static str, plan_id: Uuid) {
    if !saturated.contains(&scope) {
        warn!(
            plan_id = %plan_id,
            scope,
            "Total exceeded the largest representable amount; capped"
        );
        saturated.push(scope);
    }
}

fn round_amount(amount: Decimal, scale: u32) -> Decimal {
    amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}
