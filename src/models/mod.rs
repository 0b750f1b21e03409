//! Core data models for the Labor Planning Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod daily_cost;
mod employee;
mod labor_plan;
mod lenient;
mod project;
mod week;

pub use daily_cost::{DailyLaborCost, ProrationPolicy};
pub use employee::{
    EmployeePayrollProfile, EmploymentStatus, PaymentFrequency, PayrollType, ProjectEmployee,
    SalaryBasis,
};
pub use labor_plan::{
    DayCost, EmployeeDayCost, LaborPlan, PlanTotals, PlanWarning, WarningSeverity, WeekCost,
};
pub use project::{ActiveDateSet, ProjectDateRange};
pub use week::WeekSpan;
