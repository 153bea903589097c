//! Dashboard use-case aggregate.
//!
//! # Responsibility
//! - Own the four domain stores behind one entry point for callers.
//! - Run the transactions-to-target income projection at every
//!   transaction mutation site.
//!
//! # Invariants
//! - `target.current_progress` always equals the ledger's income total
//!   by the time any transaction mutation returns; there is no window
//!   where a caller observes a fresh ledger with stale progress.
//! - The projection is one-directional: the target never influences the
//!   transaction store.
//! - Stores other than transactions are exposed mutably; the transaction
//!   store is only reachable through the projecting wrappers and a
//!   read-only accessor.

use crate::clock::{Clock, SystemClock};
use crate::model::skill::StageId;
use crate::model::target::{IncomeTarget, RunRateBreakdown};
use crate::model::transaction::{TransactionId, TransactionKind, TransactionValidationError};
use crate::store::skill_store::SkillStore;
use crate::store::task_store::TaskStore;
use crate::store::transaction_store::TransactionStore;
use log::info;

/// Top-level engine state: four stores plus the income projection.
#[derive(Debug, Clone)]
pub struct Dashboard<C: Clock = SystemClock> {
    pub tasks: TaskStore,
    transactions: TransactionStore<C>,
    pub skills: SkillStore,
    target: IncomeTarget,
}

impl Dashboard<SystemClock> {
    /// Creates an empty dashboard on the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Seeded demo state matching the stock presentation fixtures.
    pub fn sample() -> Self {
        let mut dashboard = Self::new();

        // Mock order is oldest-at-bottom; front insertion reverses it.
        let _ = dashboard.tasks.add_task("Client Meeting", Some("02:00 PM"));
        let _ = dashboard.tasks.add_task("Read Technical Docs", Some("08:00 AM"));
        if let Ok(id) = dashboard.tasks.add_task("Morning Workout", Some("06:00 AM")) {
            dashboard.tasks.toggle_task(id);
        }

        let _ = dashboard.add_transaction(
            "Server Costs",
            50.0,
            TransactionKind::Expense,
            Some("Business"),
        );
        let _ = dashboard.add_transaction("Grocery", 150.0, TransactionKind::Expense, Some("Food"));
        let _ = dashboard.add_transaction(
            "Freelance Project",
            1200.0,
            TransactionKind::Income,
            Some("Freelance"),
        );

        let android = dashboard.skills.add_skill(
            "Android Development",
            "Programming",
            &["Java Basics", "XML Layouts", "Room Database", "MVVM Architecture"],
        );
        let done: Vec<StageId> = dashboard
            .skills
            .skill(android)
            .map(|skill| skill.stages.iter().take(2).map(|stage| stage.uuid).collect())
            .unwrap_or_default();
        for stage in done {
            dashboard.skills.toggle_stage(android, stage);
        }

        let design = dashboard.skills.add_skill(
            "UI/UX Design",
            "Design",
            &["Color Theory", "Typography", "Figma Prototyping"],
        );
        let first: Option<StageId> = dashboard
            .skills
            .skill(design)
            .and_then(|skill| skill.stages.first())
            .map(|stage| stage.uuid);
        if let Some(stage) = first {
            dashboard.skills.toggle_stage(design, stage);
        }

        dashboard.set_monthly_target(5000.0);
        dashboard.set_breakdown(RunRateBreakdown {
            daily: 166.0,
            weekly: 1250.0,
        });
        dashboard.add_strategy("Increase Freelance Rates");
        dashboard.add_strategy("Launch Side Project");
        dashboard.add_strategy("Reduce Subscriptions");

        dashboard
    }
}

impl Default for Dashboard<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Dashboard<C> {
    /// Creates an empty dashboard using the provided clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            tasks: TaskStore::new(),
            transactions: TransactionStore::with_clock(clock),
            skills: SkillStore::new(),
            target: IncomeTarget::default(),
        }
    }

    /// Adds a ledger entry, then refreshes the target projection before
    /// returning.
    ///
    /// # Errors
    /// - [`TransactionValidationError`] when the store rejects the entry;
    ///   neither the ledger nor the target changes.
    pub fn add_transaction(
        &mut self,
        title: &str,
        amount: f64,
        kind: TransactionKind,
        category: Option<&str>,
    ) -> Result<TransactionId, TransactionValidationError> {
        let id = self.transactions.add_transaction(title, amount, kind, category)?;
        self.project_income();
        Ok(id)
    }

    /// Deletes a ledger entry, refreshing the projection when anything
    /// was removed. Returns `false` when `id` is absent.
    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        let removed = self.transactions.delete_transaction(id);
        if removed {
            self.project_income();
        }
        removed
    }

    /// Read-only view of the ledger.
    pub fn transactions(&self) -> &TransactionStore<C> {
        &self.transactions
    }

    /// Read-only view of the target with projection-fed progress.
    pub fn target(&self) -> &IncomeTarget {
        &self.target
    }

    /// Sets the monthly goal amount. Progress is untouched.
    pub fn set_monthly_target(&mut self, amount: f64) {
        self.target.monthly_target = amount;
        info!(
            "event=target_updated module=target monthly_target={amount} achieved_pct={}",
            self.target.percentage_achieved()
        );
    }

    /// Replaces the externally supplied run-rate breakdown.
    pub fn set_breakdown(&mut self, breakdown: RunRateBreakdown) {
        self.target.breakdown = breakdown;
    }

    /// Appends a free-text strategy note to the action plan.
    pub fn add_strategy(&mut self, strategy: impl Into<String>) {
        self.target.strategies.push(strategy.into());
    }

    fn project_income(&mut self) {
        self.target.current_progress = self.transactions.income_total();
    }
}
