//! Finance transaction domain model.
//!
//! # Responsibility
//! - Define the immutable ledger entry tracked by the finance view.
//! - Provide the title/amount validation rules shared by write paths.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another transaction.
//! - `amount` is finite and non-negative; the sign lives in `kind`.
//! - A transaction is never mutated after creation, only deleted.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a transaction.
pub type TransactionId = Uuid;

/// Default category when the caller does not supply one.
pub const DEFAULT_TRANSACTION_CATEGORY: &str = "General";

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Validation failure for transaction write operations.
///
/// An `Err` guarantees no store state changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransactionValidationError {
    /// Title is empty after trimming.
    BlankTitle,
    /// Amount is NaN or infinite.
    NonFiniteAmount(f64),
    /// Amount is below zero.
    NegativeAmount(f64),
}

impl Display for TransactionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "transaction title must not be blank"),
            Self::NonFiniteAmount(amount) => {
                write!(f, "transaction amount must be finite, got {amount}")
            }
            Self::NegativeAmount(amount) => {
                write!(f, "transaction amount must not be negative, got {amount}")
            }
        }
    }
}

impl Error for TransactionValidationError {}

/// One immutable entry in the income/expense ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable global ID.
    pub uuid: TransactionId,
    /// Non-blank display title.
    pub title: String,
    /// Absolute amount; direction is carried by `kind`.
    pub amount: f64,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Creation time in unix epoch milliseconds. Immutable.
    pub created_at_ms: i64,
    /// Free-text grouping label, defaults to `"General"`.
    pub category: String,
}

impl Transaction {
    /// Creates a transaction with a generated stable ID.
    ///
    /// The caller supplies `created_at_ms` from its clock so stores stay
    /// deterministic under test clocks.
    ///
    /// # Errors
    /// - [`TransactionValidationError::BlankTitle`] when `title` trims to empty.
    /// - [`TransactionValidationError::NonFiniteAmount`] for NaN/infinite amounts.
    /// - [`TransactionValidationError::NegativeAmount`] for amounts below zero.
    pub fn new(
        title: &str,
        amount: f64,
        kind: TransactionKind,
        category: Option<&str>,
        created_at_ms: i64,
    ) -> Result<Self, TransactionValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TransactionValidationError::BlankTitle);
        }
        if !amount.is_finite() {
            return Err(TransactionValidationError::NonFiniteAmount(amount));
        }
        if amount < 0.0 {
            return Err(TransactionValidationError::NegativeAmount(amount));
        }
        let category = match category.map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => DEFAULT_TRANSACTION_CATEGORY,
        };
        Ok(Self {
            uuid: Uuid::new_v4(),
            title: title.to_string(),
            amount,
            kind,
            created_at_ms,
            category: category.to_string(),
        })
    }

    /// Returns whether this entry counts toward income totals.
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}
