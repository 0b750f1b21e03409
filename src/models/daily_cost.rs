//! Daily labor cost result model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The proration rule that produced a daily cost.
///
/// Each variant corresponds to exactly one branch of the payroll policy
/// table; the branches are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProrationPolicy {
    /// Contractor: the base amount is paid every day.
    ContractorDailyRate,
    /// Monthly legal salary plus bonus over the month's business days.
    MonthlyPackageOverBusinessDays,
    /// Monthly legal salary plus bonus over the month's calendar days.
    MonthlyPackageOverCalendarDays,
    /// Base amount is a daily rate.
    DailyBase,
    /// Weekly base amount divided by five.
    WeeklyBaseFifth,
    /// Monthly base amount over the month's business days.
    MonthlyBaseOverBusinessDays,
    /// Monthly base amount over the month's calendar days.
    MonthlyBaseOverCalendarDays,
    /// No rule applies; the cost is zero.
    NoApplicablePolicy,
}

impl std::fmt::Display for ProrationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ProrationPolicy::ContractorDailyRate => "contractor daily rate",
            ProrationPolicy::MonthlyPackageOverBusinessDays => {
                "monthly package / business days in month"
            }
            ProrationPolicy::MonthlyPackageOverCalendarDays => {
                "monthly package / calendar days in month"
            }
            ProrationPolicy::DailyBase => "daily base salary",
            ProrationPolicy::WeeklyBaseFifth => "weekly base salary / 5",
            ProrationPolicy::MonthlyBaseOverBusinessDays => {
                "monthly base salary / business days in month"
            }
            ProrationPolicy::MonthlyBaseOverCalendarDays => {
                "monthly base salary / calendar days in month"
            }
            ProrationPolicy::NoApplicablePolicy => "no applicable policy",
        };
        f.write_str(text)
    }
}

/// The labor cost of one employee on one calendar day.
///
/// `is_weekend` is informational: no policy zeroes weekend days.
///
/// # Example
///
/// ```
/// use labor_planning_engine::models::{DailyLaborCost, ProrationPolicy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let cost = DailyLaborCost {
///     date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
///     amount: Decimal::from(50),
///     policy: ProrationPolicy::ContractorDailyRate,
///     is_weekend: true,
/// };
/// assert_eq!(cost.policy.to_string(), "contractor daily rate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLaborCost {
    /// The day the cost is attributed to.
    pub date: NaiveDate,
    /// The cost, at full decimal precision.
    pub amount: Decimal,
    /// The rule that produced the amount.
    pub policy: ProrationPolicy,
    /// Whether the day is a Saturday or Sunday.
    pub is_weekend: bool,
}

impl DailyLaborCost {
    /// A zero cost with no applicable policy.
    pub fn zero(date: NaiveDate, is_weekend: bool) -> Self {
        Self {
            date,
            amount: Decimal::ZERO,
            policy: ProrationPolicy::NoApplicablePolicy,
            is_weekend,
        }
    }
}
