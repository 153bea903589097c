//! Core state-derivation engine for the IGNITE dashboard.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod dashboard;
pub mod logging;
pub mod model;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dashboard::Dashboard;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::skill::{mastery_percentage, Skill, SkillId, SkillStage, StageId};
pub use model::target::{IncomeTarget, RunRateBreakdown};
pub use model::task::{Priority, Task, TaskId, TaskValidationError, DEFAULT_TASK_TIME};
pub use model::transaction::{
    Transaction, TransactionId, TransactionKind, TransactionValidationError,
    DEFAULT_TRANSACTION_CATEGORY,
};
pub use store::skill_store::SkillStore;
pub use store::task_store::TaskStore;
pub use store::transaction_store::{Totals, TransactionStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
