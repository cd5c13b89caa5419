//! Core business logic - framework-agnostic inventory operations.
//!
//! All functions are async, take a database handle explicitly (no global
//! connection), and return crate `Result` types. The ledger module is the sole
//! writer of transaction rows; the status and history modules are read-only
//! projections over them.

pub mod employee;
pub mod history;
pub mod item;
pub mod ledger;
pub mod status;

/// Outcome of a lookup that may create the record as a side effect.
///
/// Operations that implicitly create entities (stock-in for items, issue and
/// return for employees) report through this so callers can distinguish a
/// fresh record from an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    /// The record did not exist and was created by this operation
    Created(T),
    /// The record already existed
    Existing(T),
}

impl<T> Resolved<T> {
    /// Returns the resolved record, discarding the created/existing tag.
    pub fn into_inner(self) -> T {
        match self {
            Self::Created(value) | Self::Existing(value) => value,
        }
    }

    /// Borrows the resolved record.
    pub const fn as_inner(&self) -> &T {
        match self {
            Self::Created(value) | Self::Existing(value) => value,
        }
    }

    /// True when the record was created by the operation that returned this.
    pub const fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
