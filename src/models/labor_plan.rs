//! Weekly labor plan models.
//!
//! This module contains the [`LaborPlan`] type and its associated structures
//! that capture the output of a plan build: per-week and per-day cost
//! aggregates, totals, and warnings about records left out or zeroed.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

use super::{ProjectDateRange, ProjectEmployee, ProrationPolicy, WeekSpan};

/// One employee's cost on one active day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDayCost {
    /// The employee the cost belongs to.
    pub employee_id: String,
    /// The cost, at full decimal precision.
    pub amount: Decimal,
    /// The rule that produced the amount.
    pub policy: ProrationPolicy,
}

/// The aggregated cost of one active day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCost {
    /// The active day.
    pub date: NaiveDate,
    /// Whether the day is a Saturday or Sunday.
    pub is_weekend: bool,
    /// One line per included employee.
    pub lines: Vec<EmployeeDayCost>,
    /// Sum of all lines, rounded to the configured scale.
    pub total: Decimal,
}

/// The aggregated cost of one project week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCost {
    /// The calendar week.
    pub week: WeekSpan,
    /// The active days of the week that were costed.
    pub days: Vec<DayCost>,
    /// Sum of all day costs at full precision, rounded to the configured scale.
    pub total: Decimal,
}

/// Plan-wide totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTotals {
    /// Total labor cost across every week, rounded to the configured scale.
    pub total_cost: Decimal,
    /// Number of days that were costed.
    pub active_days: u32,
    /// Number of project weeks.
    pub weeks: u32,
    /// Employees whose status made them eligible.
    pub employees_included: u32,
    /// Employees left out because of their status.
    pub employees_excluded: u32,
}

/// How serious a plan warning is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Expected filtering, for information only.
    Low,
    /// The plan is complete but a record contributed nothing.
    Medium,
    /// Input was dropped.
    High,
}

/// A non-fatal problem found while building a plan.
///
/// Warnings indicate records that were skipped or zeroed so that one bad
/// record never aborts the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

impl PlanWarning {
    /// An employee left out because of their employment status.
    pub fn employee_excluded(employee: &ProjectEmployee) -> Self {
        Self {
            code: "EMPLOYEE_EXCLUDED".to_string(),
            message: format!(
                "Employee '{}' excluded: status {:?} is not an active status",
                employee.id, employee.status
            ),
            severity: WarningSeverity::Low,
        }
    }

    /// An included employee whose payroll profile matches no proration rule.
    pub fn no_payroll_policy(employee: &ProjectEmployee) -> Self {
        Self {
            code: "NO_PAYROLL_POLICY".to_string(),
            message: format!(
                "Employee '{}' has no applicable payroll policy (salary basis {:?}); cost is zero",
                employee.id, employee.payroll.salary_basis
            ),
            severity: WarningSeverity::Medium,
        }
    }

    /// An included employee whose record carries no identifier.
    pub fn employee_id_missing(position: usize) -> Self {
        Self {
            code: "EMPLOYEE_ID_MISSING".to_string(),
            message: format!(
                "Employee at position {} has no id; costed under an empty id",
                position
            ),
            severity: WarningSeverity::Medium,
        }
    }

    /// A day, week, or plan total that exceeded the representable maximum.
    pub fn total_saturated(scope: &str) -> Self {
        Self {
            code: "TOTAL_SATURATED".to_string(),
            message: format!(
                "A {} total exceeded the largest representable amount and was capped",
                scope
            ),
            severity: WarningSeverity::High,
        }
    }

    /// An active-date entry that could not be parsed.
    pub fn active_date_invalid(raw: &str, error: &EngineError) -> Self {
        Self {
            code: "ACTIVE_DATE_INVALID".to_string(),
            message: format!("Active date skipped: {}", error),
            severity: if raw.trim().is_empty() {
                WarningSeverity::Low
            } else {
                WarningSeverity::High
            },
        }
    }
}

/// The complete weekly labor plan for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborPlan {
    /// Unique identifier for this plan build.
    pub plan_id: Uuid,
    /// When the plan was built.
    pub generated_at: DateTime<Utc>,
    /// The project the plan covers.
    pub project: ProjectDateRange,
    /// One entry per project week, in order.
    pub weeks: Vec<WeekCost>,
    /// Plan-wide totals.
    pub totals: PlanTotals,
    /// Non-fatal problems found while building.
    pub warnings: Vec<PlanWarning>,
}

impl LaborPlan {
    /// Looks up a week by its 1-based number.
    pub fn week(&self, week_number: u32) -> Option<&WeekCost> {
        self.weeks
            .iter()
            .find(|w| w.week.week_number == week_number)
    }

    /// Looks up the cost of a single active day.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCost> {
        self.weeks
            .iter()
            .filter(|w| w.week.contains(date))
            .flat_map(|w| w.days.iter())
            .find(|d| d.date == date)
    }

    /// Sums one employee's lines across the plan, at full precision.
    ///
    /// The sum saturates at [`Decimal::MAX`].
    pub fn employee_total(&self, employee_id: &str) -> Decimal {
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .flat_map(|d| d.lines.iter())
            .filter(|l| l.employee_id == employee_id)
            .fold(Decimal::ZERO, |total, l| total.saturating_add(l.amount))
    }

    /// Returns true if any warning carries `code`.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}
