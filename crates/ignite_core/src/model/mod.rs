//! Domain model for the four dashboard aggregates.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep derived-field invariants next to the types that carry them.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - `Skill::progress` and `IncomeTarget::current_progress` are cached
//!   derivations, never independently settable sources of truth.

pub mod skill;
pub mod target;
pub mod task;
pub mod transaction;
