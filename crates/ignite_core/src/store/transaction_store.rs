//! Finance transaction store.
//!
//! # Responsibility
//! - Own the ordered ledger (newest first) and its add/delete operations.
//! - Derive income/expense totals and balance from the raw list.
//!
//! # Invariants
//! - Totals are recomputed fresh on every call; the raw list is the only
//!   source of truth.
//! - Entries are immutable after creation.
//! - Timestamps come from the injected [`Clock`], never from the store.

use crate::clock::{Clock, SystemClock};
use crate::model::transaction::{
    Transaction, TransactionId, TransactionKind, TransactionValidationError,
};
use log::debug;

/// Income and expense sums over the full ledger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

/// Owned collection of ledger entries with an injected time source.
#[derive(Debug, Clone)]
pub struct TransactionStore<C: Clock = SystemClock> {
    transactions: Vec<Transaction>,
    clock: C,
}

impl TransactionStore<SystemClock> {
    /// Creates an empty store on the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TransactionStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TransactionStore<C> {
    /// Creates an empty store using the provided clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            transactions: Vec::new(),
            clock,
        }
    }

    /// Inserts a new entry at the front of the ledger, stamped with the
    /// clock's current time. A missing or blank `category` falls back to
    /// `"General"`.
    ///
    /// # Errors
    /// - [`TransactionValidationError`] for a blank title or a
    ///   non-finite/negative amount; the ledger is unchanged.
    pub fn add_transaction(
        &mut self,
        title: &str,
        amount: f64,
        kind: TransactionKind,
        category: Option<&str>,
    ) -> Result<TransactionId, TransactionValidationError> {
        let entry = Transaction::new(title, amount, kind, category, self.clock.now_epoch_ms())?;
        let id = entry.uuid;
        self.transactions.insert(0, entry);
        debug!(
            "event=transaction_added module=finance uuid={id} kind={kind:?} amount={amount} total={}",
            self.transactions.len()
        );
        Ok(id)
    }

    /// Removes the entry with `id`. Returns `false` when `id` is absent.
    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.uuid != id);
        let removed = self.transactions.len() < before;
        if removed {
            debug!(
                "event=transaction_deleted module=finance uuid={id} total={}",
                self.transactions.len()
            );
        }
        removed
    }

    /// Income and expense sums over the full ledger.
    pub fn totals(&self) -> Totals {
        self.transactions
            .iter()
            .fold(Totals::default(), |mut acc, entry| {
                match entry.kind {
                    TransactionKind::Income => acc.income += entry.amount,
                    TransactionKind::Expense => acc.expense += entry.amount,
                }
                acc
            })
    }

    /// `income − expense` over the full ledger. May be negative.
    pub fn balance(&self) -> f64 {
        let totals = self.totals();
        totals.income - totals.expense
    }

    /// Sum of income entries only. Feeds the target projection.
    pub fn income_total(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum()
    }

    /// Entries in display order, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
