//! Employee payroll profile and related types.
//!
//! Personnel records carry free-form labels for payroll type, payment
//! frequency, salary basis, and employment status. Each label is mapped onto
//! a closed enum with an explicit fallback variant, so an unrecognized value
//! selects the zero-cost default instead of failing the record.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::lenient;

/// How an employee is engaged for payroll purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollType {
    /// Paid a flat daily rate.
    Contractor,
    /// Administrative staff paid from a monthly legal salary plus bonus.
    Administrative,
    /// Field execution staff paid from a monthly legal salary plus bonus.
    Execution,
    /// Any other arrangement; cost follows the salary basis.
    #[default]
    Other,
}

impl PayrollType {
    /// Maps a free-form label onto a payroll type.
    ///
    /// # Example
    ///
    /// ```
    /// use labor_planning_engine::models::PayrollType;
    ///
    /// assert_eq!(PayrollType::from_label(" Contractor "), PayrollType::Contractor);
    /// assert_eq!(PayrollType::from_label("intern"), PayrollType::Other);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match lenient::normalize_label(label).as_str() {
            "contractor" => PayrollType::Contractor,
            "administrative" => PayrollType::Administrative,
            "execution" => PayrollType::Execution,
            _ => PayrollType::Other,
        }
    }

    /// Returns true for the payroll types paid from a monthly package.
    pub fn is_monthly_package(&self) -> bool {
        matches!(self, PayrollType::Administrative | PayrollType::Execution)
    }
}

/// How often an employee is paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    /// Paid every week; monthly amounts spread over business days.
    Weekly,
    /// Paid every two weeks; monthly amounts spread over calendar days.
    #[default]
    Biweekly,
}

impl PaymentFrequency {
    /// Maps a free-form label onto a payment frequency.
    ///
    /// Anything other than a weekly label is treated as biweekly.
    pub fn from_label(label: &str) -> Self {
        match lenient::normalize_label(label).as_str() {
            "weekly" => PaymentFrequency::Weekly,
            _ => PaymentFrequency::Biweekly,
        }
    }
}

/// The period a base salary amount is quoted for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBasis {
    /// The base amount is a daily rate.
    Daily,
    /// The base amount covers a five-day week.
    Weekly,
    /// The base amount covers a calendar month.
    Monthly,
    /// Missing or unrecognized basis.
    #[default]
    Unspecified,
}

impl SalaryBasis {
    /// Maps a free-form label onto a salary basis.
    pub fn from_label(label: &str) -> Self {
        match lenient::normalize_label(label).as_str() {
            "daily" => SalaryBasis::Daily,
            "weekly" => SalaryBasis::Weekly,
            "monthly" => SalaryBasis::Monthly,
            _ => SalaryBasis::Unspecified,
        }
    }
}

/// Employment status as recorded in personnel data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Actively employed.
    Active,
    /// On leave.
    OnLeave,
    /// On medical rest.
    MedicalRest,
    /// Suspended.
    Suspended,
    /// No longer employed.
    Terminated,
    /// Missing or unrecognized status.
    #[default]
    Unknown,
}

impl EmploymentStatus {
    /// Maps a free-form label onto an employment status.
    ///
    /// # Example
    ///
    /// ```
    /// use labor_planning_engine::models::EmploymentStatus;
    ///
    /// assert_eq!(EmploymentStatus::from_label("On Leave"), EmploymentStatus::OnLeave);
    /// assert_eq!(EmploymentStatus::from_label("retired?"), EmploymentStatus::Unknown);
    /// ```
    pub fn from_label(label: &str) -> Self {
        match lenient::normalize_label(label).as_str() {
            "active" => EmploymentStatus::Active,
            "on_leave" => EmploymentStatus::OnLeave,
            "medical_rest" => EmploymentStatus::MedicalRest,
            "suspended" => EmploymentStatus::Suspended,
            "terminated" => EmploymentStatus::Terminated,
            _ => EmploymentStatus::Unknown,
        }
    }
}

macro_rules! lenient_label_deserialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    Ok(lenient::label(deserializer)?
                        .map(|label| <$ty>::from_label(&label))
                        .unwrap_or_default())
                }
            }
        )*
    };
}

lenient_label_deserialize!(PayrollType, PaymentFrequency, SalaryBasis, EmploymentStatus);

/// The payroll attributes of one employee.
///
/// Every field is optional on the wire. Missing or malformed amounts become
/// zero and unrecognized labels select the fallback variant.
///
/// # Example
///
/// ```
/// use labor_planning_engine::models::{EmployeePayrollProfile, PayrollType};
/// use rust_decimal::Decimal;
///
/// let profile: EmployeePayrollProfile = serde_json::from_str(r#"{
///     "payroll_type": "contractor",
///     "base_salary_amount": "n/a"
/// }"#).unwrap();
///
/// assert_eq!(profile.payroll_type, PayrollType::Contractor);
/// assert_eq!(profile.base_salary_amount, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayrollProfile {
    /// Base salary, quoted per [`SalaryBasis`] (a daily rate for contractors).
    #[serde(default, deserialize_with = "lenient::amount")]
    pub base_salary_amount: Decimal,
    /// Monthly legal salary for administrative and execution staff.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_legal_amount: Decimal,
    /// Monthly company bonus for administrative and execution staff.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_company_bonus: Decimal,
    /// The payroll type.
    #[serde(default)]
    pub payroll_type: PayrollType,
    /// The payment frequency.
    #[serde(default)]
    pub payment_frequency: PaymentFrequency,
    /// The salary basis.
    #[serde(default)]
    pub salary_basis: SalaryBasis,
}

impl EmployeePayrollProfile {
    /// Creates a contractor profile paid `daily_rate` every day.
    pub fn contractor(daily_rate: Decimal) -> Self {
        Self {
            base_salary_amount: daily_rate,
            payroll_type: PayrollType::Contractor,
            ..Self::default()
        }
    }

    /// Creates a monthly-package profile for administrative or execution staff.
    pub fn monthly_package(
        payroll_type: PayrollType,
        payment_frequency: PaymentFrequency,
        monthly_legal_amount: Decimal,
        monthly_company_bonus: Decimal,
    ) -> Self {
        Self {
            monthly_legal_amount,
            monthly_company_bonus,
            payroll_type,
            payment_frequency,
            ..Self::default()
        }
    }

    /// Creates a profile paid from a base salary quoted per `salary_basis`.
    pub fn base_salary(
        salary_basis: SalaryBasis,
        payment_frequency: PaymentFrequency,
        base_salary_amount: Decimal,
    ) -> Self {
        Self {
            base_salary_amount,
            payroll_type: PayrollType::Other,
            payment_frequency,
            salary_basis,
            ..Self::default()
        }
    }

    /// The monthly legal salary plus the monthly company bonus.
    ///
    /// A sum beyond [`Decimal::MAX`] is treated as an unusable package and
    /// yields zero.
    pub fn monthly_package_total(&self) -> Decimal {
        self.monthly_legal_amount
            .checked_add(self.monthly_company_bonus)
            .unwrap_or_else(|| {
                warn!(
                    legal = %self.monthly_legal_amount,
                    bonus = %self.monthly_company_bonus,
                    "Monthly package total overflowed; coerced to zero"
                );
                Decimal::ZERO
            })
    }
}

/// A personnel record as consumed by the weekly labor plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEmployee {
    /// Unique identifier for the employee; empty when the record has none.
    #[serde(default)]
    pub id: String,
    /// Display name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current employment status.
    #[serde(default)]
    pub status: EmploymentStatus,
    /// Payroll attributes.
    #[serde(default)]
    pub payroll: EmployeePayrollProfile,
}
