use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that are zero or greater.
///
/// Air velocity is allowed to be zero (still air), and every term of a
/// resistance network is non-negative.
///
/// # Examples
///
/// ```
/// use heatsink_network::support::constraint::NonNegative;
/// use uom::si::{f64::Velocity, velocity::meter_per_second};
///
/// assert!(NonNegative::new(Velocity::new::<meter_per_second>(0.0)).is_ok());
/// assert!(NonNegative::new(Velocity::new::<meter_per_second>(-1.0)).is_err());
///
/// let zero = NonNegative::zero::<f64>();
/// assert_eq!(zero.into_inner(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative>::zero()
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two non-negative values.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "sum of non-negative values must stay non-negative"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: PartialOrd + Zero,
{
    fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Velocity, velocity::meter_per_second};

    #[test]
    fn floats() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(2.5).is_ok());
        assert_eq!(NonNegative::new(-0.1), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn still_air_is_allowed() {
        let still = Velocity::new::<meter_per_second>(0.0);
        assert!(NonNegative::new(still).is_ok());

        let reversed = Velocity::new::<meter_per_second>(-2.0);
        assert!(NonNegative::new(reversed).is_err());
    }

    #[test]
    fn sums_through_iterator() {
        let total: Constrained<f64, NonNegative> = [0.2, 0.0, 0.15]
            .into_iter()
            .map(|r| NonNegative::new(r).unwrap())
            .sum();
        assert!((total.into_inner() - 0.35).abs() < 1e-15);
    }
}
