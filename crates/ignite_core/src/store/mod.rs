//! Store layer: owned in-memory collections plus permitted operations.
//!
//! # Responsibility
//! - Hold each aggregate's entity collection and expose its mutation and
//!   derivation operations.
//! - Keep derivations pure: aggregates are recomputed from the raw list
//!   on every call, never from incremental counters.
//!
//! # Invariants
//! - A rejected write leaves the collection untouched.
//! - Toggle/delete with an unknown ID is a benign no-op, not an error.
//! - Stores never reach across aggregate boundaries; cross-store
//!   derivation lives in [`crate::dashboard`].

pub mod skill_store;
pub mod task_store;
pub mod transaction_store;
