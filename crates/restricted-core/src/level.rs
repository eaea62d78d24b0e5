//! Measurement levels: nominal, ordinal, interval, ratio.
//!
//! Each level is a trait requiring the one below it, so a generic algorithm
//! states the weakest scale it needs. Arithmetic is checked: results go back
//! through the type's predicate and report [`ValueError`] instead of
//! wrapping or producing an invalid value.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::contract::RestrictedValue;
use crate::errors::{UninitializedValueError, ValueError};
use crate::repr::{IntervalRepr, RatioRepr};

/// Scale a restricted type is declared at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementLevel {
    /// Labels; equality only.
    Nominal,
    /// Ranked labels; adds a total order.
    Ordinal,
    /// Differences are meaningful; adds addition and subtraction.
    Interval,
    /// True zero; adds multiplication, division and remainder.
    Ratio,
}

impl MeasurementLevel {
    /// Whether this level offers every operation of `other`.
    pub fn includes(self, other: MeasurementLevel) -> bool {
        self >= other
    }

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            MeasurementLevel::Nominal => "nominal",
            MeasurementLevel::Ordinal => "ordinal",
            MeasurementLevel::Interval => "interval",
            MeasurementLevel::Ratio => "ratio",
        }
    }
}

/// Values compared by label only.
pub trait Nominal: RestrictedValue {
    /// Declared level of the implementing type.
    const LEVEL: MeasurementLevel;
}

/// Values with a total order consistent with equality.
///
/// The derived [`Ord`] places the sentinel first so containers can hold
/// default values; [`compare`](Ordinal::compare) is the guarded form.
pub trait Ordinal: Nominal + Ord {
    /// Total order; `Equal` exactly when the values are equal.
    ///
    /// # Errors
    ///
    /// Returns [`UninitializedValueError`] when either operand is the sentinel.
    fn compare(&self, other: &Self) -> Result<Ordering, UninitializedValueError> {
        self.value()?;
        other.value()?;
        Ok(self.cmp(other))
    }
}

/// Values supporting addition and subtraction.
pub trait Interval: Ordinal {
    /// `self + rhs`.
    fn checked_add(&self, rhs: &Self) -> Result<Self, ValueError>;
    /// `self - rhs`.
    fn checked_sub(&self, rhs: &Self) -> Result<Self, ValueError>;
    /// Unary minus.
    fn checked_neg(&self) -> Result<Self, ValueError>;
    /// Unary plus; fails only on the uninitialized sentinel.
    fn plus(&self) -> Result<Self, ValueError>;
    /// Adds one unit.
    fn increment(&self) -> Result<Self, ValueError>;
    /// Subtracts one unit.
    fn decrement(&self) -> Result<Self, ValueError>;
}

/// Values with a true zero, supporting multiplication and division.
pub trait Ratio: Interval {
    /// `self * rhs`.
    fn checked_mul(&self, rhs: &Self) -> Result<Self, ValueError>;
    /// `self / rhs`.
    fn checked_div(&self, rhs: &Self) -> Result<Self, ValueError>;
    /// `self % rhs`.
    fn checked_rem(&self, rhs: &Self) -> Result<Self, ValueError>;
}

/// Sums an iterator of interval values; `None` when it is empty.
pub fn total<T: Interval>(values: impl IntoIterator<Item = T>) -> Result<Option<T>, ValueError> {
    let mut values = values.into_iter();
    let Some(first) = values.next() else {
        return Ok(None);
    };
    values
        .try_fold(first, |acc, value| acc.checked_add(&value))
        .map(Some)
}

fn unary<T: RestrictedValue>(
    value: &T,
    operation: &'static str,
    op: impl FnOnce(&T::Repr) -> Option<T::Repr>,
) -> Result<T, ValueError> {
    let result = op(value.value()?).ok_or(ValueError::Arithmetic {
        type_name: T::NAME,
        operation,
    })?;
    Ok(T::from_value(result)?)
}

fn binary<T: RestrictedValue>(
    lhs: &T,
    rhs: &T,
    operation: &'static str,
    op: impl FnOnce(&T::Repr, &T::Repr) -> Option<T::Repr>,
) -> Result<T, ValueError> {
    let result = op(lhs.value()?, rhs.value()?).ok_or(ValueError::Arithmetic {
        type_name: T::NAME,
        operation,
    })?;
    Ok(T::from_value(result)?)
}

/// Checked addition through the representation.
pub fn add<T>(lhs: &T, rhs: &T) -> Result<T, ValueError>
where
    T: RestrictedValue,
    T::Repr: IntervalRepr,
{
    binary(lhs, rhs, "add", <T::Repr as IntervalRepr>::checked_add)
}

/// Checked subtraction through the representation.
pub fn sub<T>(lhs: &T, rhs: &T) -> Result<T, ValueError>
where
    T: RestrictedValue,
    T::Repr: IntervalRepr,
{
    binary(lhs, rhs, "sub", <T::Repr as IntervalRepr>::checked_sub)
}

/// Checked negation through the representation.
pub fn neg<T>(value: &T) -> Result<T, ValueError>
where
    T: RestrictedValue,
    T::Repr: IntervalRepr,
{
    unary(value, "neg", <T::Repr as IntervalRepr>::checked_neg)
}

/// Unary plus.
pub fn plus<T: RestrictedValue>(value: &T) -> Result<T, ValueError> {
    unary(value, "plus", |repr| Some(repr.clone()))
}

/// Adds the representation's unit step.
pub fn increment<T>(value: &T) -> Result<T, ValueError>
where
    T: RestrictedValue,
    T::Repr: IntervalRepr,
{
    unary(value, "increment", |repr| repr.checked_add(&<T::Repr as IntervalRepr>::one()))
}

/// Subtracts the representation's unit step.
pub fn decrement<T>(value: &T) -> Result<T, ValueError>
where
    T: RestrictedValue,
    T::Repr: IntervalRepr,
{
    unary(value, "decrement", |repr| repr.checked_sub(&<T::Repr as IntervalRepr>::one()))
}

/// Checked multiplication through the representation.
pub fn mul<T>(lhs: &T, rhs: &T) -> Result<T, ValueError>
where
    T: RestrictedValue,
    T::Repr: RatioRepr,
{
    binary(lhs, rhs, "mul", <T::Repr as RatioRepr>::checked_mul)
}

/// Checked division through the representation.
pub fn div<T>(lhs: &T, rhs: &T) -> Result<T, ValueError>
where
    T: RestrictedValue,
    T::Repr: RatioRepr,
{
    binary(lhs, rhs, "div", <T::Repr as RatioRepr>::checked_div)
}

/// Checked remainder through the representation.
pub fn rem<T>(lhs: &T, rhs: &T) -> Result<T, ValueError>
where
    T: RestrictedValue,
    T::Repr: RatioRepr,
{
    binary(lhs, rhs, "rem", <T::Repr as RatioRepr>::checked_rem)
}
