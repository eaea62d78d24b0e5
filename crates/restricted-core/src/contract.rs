//! Validated construction and the uninitialized guard.
//!
//! A restricted value wraps a [`Slot`]: either the sentinel produced by
//! `Default` (for types whose zero representation is not valid), or a
//! representation that passed the type's predicate. The only way to fill a
//! slot is [`RestrictedValue::from_value`], which hands the declaring type a
//! [`Validated`] token that cannot be forged outside this crate.

use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::errors::{UninitializedValueError, ValidationError};
use crate::repr::Representation;

/// Two-state storage of a restricted value.
///
/// The sentinel sorts before every initialized value and compares equal only
/// to itself, so default instances in collections never fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot<T> {
    /// Never constructed.
    Uninitialized,
    /// Holds a representation that satisfied the predicate at construction.
    Initialized(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Uninitialized
    }
}

impl<T> Slot<T> {
    /// Returns `true` once a representation has been stored.
    pub fn is_initialized(&self) -> bool {
        matches!(self, Slot::Initialized(_))
    }

    /// Borrows the stored representation, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            Slot::Initialized(value) => Some(value),
            Slot::Uninitialized => None,
        }
    }
}

/// Proof that a representation passed a type's predicate.
///
/// Only [`RestrictedValue::from_value`] creates these.
#[derive(Debug)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    /// Borrows the validated representation.
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Unwraps the validated representation.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Contract shared by every restricted value type.
///
/// Implementations are normally emitted by [`restricted_value!`](crate::restricted_value).
pub trait RestrictedValue: Sized + Clone + Eq + Hash + Default + fmt::Debug {
    /// Underlying representation.
    type Repr: Representation;

    /// Type name used in diagnostics and typed fingerprints.
    const NAME: &'static str;

    /// Whether the all-zero representation satisfies the predicate.
    ///
    /// When `true`, `Default` yields an initialized zero and no guard is needed.
    const ZERO_IS_VALID: bool;

    /// Validity predicate.
    fn is_valid_value(value: &Self::Repr) -> bool;

    /// Normalization applied before validation (e.g. case folding).
    fn normalize(value: Self::Repr) -> Self::Repr {
        value
    }

    /// Wraps a validated representation.
    fn from_validated(value: Validated<Self::Repr>) -> Self;

    /// Borrows the underlying slot.
    fn slot(&self) -> &Slot<Self::Repr>;

    /// Normalizes and validates `value`, failing with [`ValidationError`].
    fn from_value(value: Self::Repr) -> Result<Self, ValidationError> {
        let value = Self::normalize(value);
        if !Self::is_valid_value(&value) {
            debug!(type_name = Self::NAME, value = ?value, "rejected restricted value");
            return Err(ValidationError::new(Self::NAME, &value));
        }
        Ok(Self::from_validated(Validated(value)))
    }

    /// Like [`from_value`](Self::from_value) but never fails; `None` on rejection.
    ///
    /// Callers wanting the default instance on failure use `unwrap_or_default()`.
    fn try_from_value(value: Self::Repr) -> Option<Self> {
        Self::from_value(value).ok()
    }

    /// Returns `true` unless this is the uninitialized sentinel.
    fn is_initialized(&self) -> bool {
        self.slot().is_initialized()
    }

    /// Borrows the representation, guarding against the sentinel.
    fn value(&self) -> Result<&Self::Repr, UninitializedValueError> {
        self.slot().get().ok_or(UninitializedValueError {
            type_name: Self::NAME,
        })
    }

    /// Consumes the value and returns its representation.
    fn into_value(self) -> Result<Self::Repr, UninitializedValueError> {
        match self.slot() {
            Slot::Initialized(value) => Ok(value.clone()),
            Slot::Uninitialized => Err(UninitializedValueError {
                type_name: Self::NAME,
            }),
        }
    }

    /// Checks `ZERO_IS_VALID` against the predicate itself.
    fn zero_declaration_is_consistent() -> bool {
        Self::ZERO_IS_VALID == Self::is_valid_value(&Self::Repr::zero())
    }
}
