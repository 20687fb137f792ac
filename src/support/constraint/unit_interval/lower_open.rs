use std::{cmp::Ordering, marker::PhantomData};

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker for values in the lower-open unit interval `0 < x ≤ 1`.
///
/// A fin efficiency lives here: a fin can never conduct better than a fin at
/// base temperature, and a fin with zero efficiency would not be a fin.
///
/// # Examples
///
/// ```
/// use heatsink_network::support::constraint::UnitIntervalLowerOpen;
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let eta = UnitIntervalLowerOpen::new(Ratio::new::<ratio>(0.93)).unwrap();
/// assert!((eta.into_inner().get::<percent>() - 93.0).abs() < 1e-12);
///
/// let ideal = UnitIntervalLowerOpen::one::<f64>();
/// assert_eq!(ideal.into_inner(), 1.0);
///
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// assert!(UnitIntervalLowerOpen::new(1.2).is_err());
/// assert!(UnitIntervalLowerOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs `Constrained<T, UnitIntervalLowerOpen>` if `0 < value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined.
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLowerOpen>::new(value)
    }

    /// Returns the upper bound (one) as a constrained value.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitIntervalLowerOpen> {
        Constrained::<T, UnitIntervalLowerOpen> {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
