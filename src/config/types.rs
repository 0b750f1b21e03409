//! Configuration types for weekly labor planning.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from `planning.yaml`.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentStatus;

/// Largest scale a [`rust_decimal::Decimal`] can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Settings that shape how a labor plan is aggregated.
///
/// Every key is optional; missing keys take the values of
/// [`PlanningConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Employment statuses whose employees are included in plans.
    pub active_statuses: Vec<EmploymentStatus>,
    /// Whether active dates in the padding days of the first and last
    /// week are ignored.
    pub clip_to_project_range: bool,
    /// Decimal places for day, week, and plan totals.
    pub amount_scale: u32,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            active_statuses: vec![
                EmploymentStatus::Active,
                EmploymentStatus::OnLeave,
                EmploymentStatus::MedicalRest,
            ],
            clip_to_project_range: true,
            amount_scale: 2,
        }
    }
}

impl PlanningConfig {
    /// Returns true if employees with `status` are included in plans.
    pub fn is_active_status(&self, status: EmploymentStatus) -> bool {
        self.active_statuses.contains(&status)
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when no status is active or the amount scale
    /// exceeds what a decimal can hold.
    pub fn validate(&self) -> EngineResult<()> {
        if self.active_statuses.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "active_statuses".to_string(),
                message: "at least one status must be active".to_string(),
            });
        }
        if self.amount_scale > MAX_DECIMAL_SCALE {
            return Err(EngineError::InvalidConfig {
                field: "amount_scale".to_string(),
                message: format!("must be at most {}", MAX_DECIMAL_SCALE),
            });
        }
        Ok(())
    }
}
