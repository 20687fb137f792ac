//! Numeric constraints checked once, at construction.
//!
//! Every stage of the resistance network validates its own inputs before it
//! computes anything. Rather than sprinkle `if x <= 0.0` checks through the
//! physics, the stages wrap quantities in [`Constrained<T, C>`], which can
//! only be built from a value that satisfies the marker constraint `C`.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: zero or greater (resistance terms, air velocity)
//! - [`StrictlyPositive`]: greater than zero (lengths, conductivities, power)
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1` (fin efficiency)
//!
//! Each marker also offers a `new()` shortcut, e.g. `StrictlyPositive::new(5.0)`.
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for a zero-sized marker type to add a new
//! invariant.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::{iter::Sum, marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen};

/// A numeric invariant that can be checked against a value.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The way a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use heatsink_network::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let fin_height = Length::new::<millimeter>(24.5);
/// let fin_height = Constrained::<_, StrictlyPositive>::new(fin_height).unwrap();
/// assert!(fin_height.into_inner().get::<millimeter>() > 24.0);
///
/// assert!(StrictlyPositive::new(Length::new::<millimeter>(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Sums constrained values for constraints preserved under addition.
impl<T, C> Sum for Constrained<T, C>
where
    C: Constraint<T>,
    Constrained<T, C>: Add<Output = Self> + Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}
