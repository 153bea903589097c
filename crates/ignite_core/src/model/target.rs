//! Monthly income target domain model.
//!
//! # Responsibility
//! - Define the singleton target record and its derived readings.
//! - Keep the achievement/remaining math defined for degenerate inputs.
//!
//! # Invariants
//! - `current_progress` is owned by the transaction projection; this
//!   module exposes no setter for it.
//! - `percentage_achieved` is clamped to 0-100; a non-positive target
//!   reads as 0% achieved.
//! - `remaining` is never negative.

use serde::{Deserialize, Serialize};

/// Required run-rate amounts supplied by the caller, not derived here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunRateBreakdown {
    pub daily: f64,
    pub weekly: f64,
}

/// Singleton monthly income goal with projection-fed progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTarget {
    /// Goal amount for the month.
    pub monthly_target: f64,
    /// Sum of income transactions. Written only by the projection.
    ///
    /// Note: the sum is all-time, not scoped to the current month,
    /// despite the field living on a "monthly" target. Preserved as-is.
    pub current_progress: f64,
    /// Externally supplied daily/weekly run-rate figures.
    pub breakdown: RunRateBreakdown,
    /// Ordered free-text action plan.
    pub strategies: Vec<String>,
}

impl IncomeTarget {
    /// Creates a target with zero progress and an empty action plan.
    pub fn new(monthly_target: f64) -> Self {
        Self {
            monthly_target,
            current_progress: 0.0,
            breakdown: RunRateBreakdown::default(),
            strategies: Vec::new(),
        }
    }

    /// Rounded achievement percentage, clamped to 0-100.
    ///
    /// A non-positive `monthly_target` reads as 0% rather than dividing
    /// by zero.
    pub fn percentage_achieved(&self) -> u8 {
        if self.monthly_target <= 0.0 {
            return 0;
        }
        let raw = (100.0 * self.current_progress / self.monthly_target).round();
        raw.clamp(0.0, 100.0) as u8
    }

    /// Amount still missing toward the goal, floored at zero.
    pub fn remaining(&self) -> f64 {
        (self.monthly_target - self.current_progress).max(0.0)
    }
}

impl Default for IncomeTarget {
    fn default() -> Self {
        Self::new(0.0)
    }
}
