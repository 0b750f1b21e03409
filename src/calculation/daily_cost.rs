//! Daily payroll proration.
//!
//! This module computes the labor cost attributable to one employee on one
//! calendar day. Monthly amounts are spread over business days for weekly
//! pay cycles and over calendar days for biweekly ones.
//!
//! Weekend days accrue cost at the normal daily rate under every policy.
//! `is_weekend` is reported on each result but never zeroes an amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{
    DailyLaborCost, EmployeePayrollProfile, PaymentFrequency, PayrollType, ProrationPolicy,
    SalaryBasis,
};

use super::calendar::{MonthCalendar, is_weekend, parse_calendar_date};

/// Working days a weekly base salary is spread over.
pub const WEEKLY_SALARY_WORKDAYS: u32 = 5;

/// Selects the proration rule for a payroll profile.
///
/// The rule depends only on payroll type, payment frequency, and salary
/// basis, never on the date.
///
/// # Example
///
/// ```
/// use labor_planning_engine::calculation::select_policy;
/// use labor_planning_engine::models::{EmployeePayrollProfile, ProrationPolicy};
/// use rust_decimal::Decimal;
///
/// let profile = EmployeePayrollProfile::contractor(Decimal::from(50));
/// assert_eq!(select_policy(&profile), ProrationPolicy::ContractorDailyRate);
/// ```
pub fn select_policy(profile: &EmployeePayrollProfile) -> ProrationPolicy {
    let weekly = profile.payment_frequency == PaymentFrequency::Weekly;

    match (profile.payroll_type, profile.salary_basis) {
        (PayrollType::Contractor, _) => ProrationPolicy::ContractorDailyRate,
        (PayrollType::Administrative | PayrollType::Execution, _) if weekly => {
            ProrationPolicy::MonthlyPackageOverBusinessDays
        }
        (PayrollType::Administrative | PayrollType::Execution, _) => {
            ProrationPolicy::MonthlyPackageOverCalendarDays
        }
        (PayrollType::Other, SalaryBasis::Daily) => ProrationPolicy::DailyBase,
        (PayrollType::Other, SalaryBasis::Weekly) => ProrationPolicy::WeeklyBaseFifth,
        (PayrollType::Other, SalaryBasis::Monthly) if weekly => {
            ProrationPolicy::MonthlyBaseOverBusinessDays
        }
        (PayrollType::Other, SalaryBasis::Monthly) => ProrationPolicy::MonthlyBaseOverCalendarDays,
        (PayrollType::Other, SalaryBasis::Unspecified) => ProrationPolicy::NoApplicablePolicy,
    }
}

/// Computes one employee's labor cost for one calendar day.
///
/// Month day counts are recomputed for the month containing `date` on every
/// call. See [`prorate_with_calendar`] to reuse a precomputed month.
///
/// # Arguments
///
/// * `profile` - The employee's payroll attributes
/// * `date` - The day to cost
///
/// # Returns
///
/// A [`DailyLaborCost`] whose amount is finite and non-negative for
/// non-negative inputs. Division by a zero day count yields zero.
///
/// # Example
///
/// ```
/// use labor_planning_engine::calculation::compute_daily_cost;
/// use labor_planning_engine::models::{EmployeePayrollProfile, PaymentFrequency, PayrollType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let profile = EmployeePayrollProfile::monthly_package(
///     PayrollType::Administrative,
///     PaymentFrequency::Weekly,
///     Decimal::from(600),
///     Decimal::ZERO,
/// );
///
/// // April 2024 has 22 business days; Saturdays accrue too.
/// let saturday = NaiveDate::from_ymd_opt(2024, 4, 6).unwrap();
/// let cost = compute_daily_cost(&profile, saturday);
/// assert_eq!(cost.amount, Decimal::from(600) / Decimal::from(22));
/// assert!(cost.is_weekend);
/// ```
pub fn compute_daily_cost(profile: &EmployeePayrollProfile, date: NaiveDate) -> DailyLaborCost {
    prorate_with_calendar(profile, date, &MonthCalendar::for_date(date))
}

/// Computes one employee's labor cost for one day against a precomputed month.
///
/// `calendar` is expected to be the month containing `date`; with that, the
/// result is identical to [`compute_daily_cost`].
pub fn prorate_with_calendar(
    profile: &EmployeePayrollProfile,
    date: NaiveDate,
    calendar: &MonthCalendar,
) -> DailyLaborCost {
    let policy = select_policy(profile);

    let amount = match policy {
        ProrationPolicy::ContractorDailyRate | ProrationPolicy::DailyBase => {
            profile.base_salary_amount
        }
        ProrationPolicy::MonthlyPackageOverBusinessDays => {
            per_day(profile.monthly_package_total(), calendar.business_days)
        }
        ProrationPolicy::MonthlyPackageOverCalendarDays => {
            per_day(profile.monthly_package_total(), calendar.days_in_month)
        }
        ProrationPolicy::WeeklyBaseFifth => {
            per_day(profile.base_salary_amount, WEEKLY_SALARY_WORKDAYS)
        }
        ProrationPolicy::MonthlyBaseOverBusinessDays => {
            per_day(profile.base_salary_amount, calendar.business_days)
        }
        ProrationPolicy::MonthlyBaseOverCalendarDays => {
            per_day(profile.base_salary_amount, calendar.days_in_month)
        }
        ProrationPolicy::NoApplicablePolicy => Decimal::ZERO,
    };

    DailyLaborCost {
        date,
        amount,
        policy,
        is_weekend: is_weekend(date),
    }
}

/// Computes a daily cost from a raw date string and an optional profile.
///
/// An absent profile costs zero under [`ProrationPolicy::NoApplicablePolicy`].
///
/// # Errors
///
/// Returns `InvalidDate` when `date` is not a calendar date.
///
/// # Example
///
/// ```
/// use labor_planning_engine::calculation::daily_cost_for;
/// use labor_planning_engine::error::EngineError;
/// use labor_planning_engine::models::EmployeePayrollProfile;
/// use rust_decimal::Decimal;
///
/// let profile = EmployeePayrollProfile::contractor(Decimal::from(50));
/// assert!(matches!(
///     daily_cost_for(Some(&profile), "not-a-date"),
///     Err(EngineError::InvalidDate { .. })
/// ));
/// assert_eq!(daily_cost_for(None, "2024-03-09").unwrap().amount, Decimal::ZERO);
/// ```
pub fn daily_cost_for(
    profile: Option<&EmployeePayrollProfile>,
    date: &str,
) -> EngineResult<DailyLaborCost> {
    let date = parse_calendar_date(date)?;
    Ok(match profile {
        Some(profile) => compute_daily_cost(profile, date),
        None => DailyLaborCost::zero(date, is_weekend(date)),
    })
}

fn per_day(total: Decimal, days: u32) -> Decimal {
    total
        .checked_div(Decimal::from(days))
        .unwrap_or(Decimal::ZERO)
}
