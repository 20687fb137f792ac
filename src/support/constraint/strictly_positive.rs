use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values greater than zero.
///
/// Geometric lengths, conductivities and dissipated power all carry this
/// constraint: a zero in any of them would turn a resistance into a division
/// by zero.
///
/// # Examples
///
/// ```
/// use heatsink_network::support::constraint::StrictlyPositive;
/// use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};
///
/// let k_tim = ThermalConductivity::new::<watt_per_meter_kelvin>(4.0);
/// assert!(StrictlyPositive::new(k_tim).is_ok());
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two strictly positive values.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly non-positive.
impl<T> Add for Constrained<T, StrictlyPositive>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value > T::zero(),
            "sum of strictly positive values must stay positive"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, Power},
        length::millimeter,
        power::watt,
    };

    #[test]
    fn fin_count() {
        let fins = StrictlyPositive::new(60_u32).unwrap();
        assert_eq!(fins.into_inner(), 60);
        assert!(StrictlyPositive::new(0_u32).is_err());
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn lengths_and_power() {
        assert!(StrictlyPositive::new(Length::new::<millimeter>(0.8)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<millimeter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Power::new::<watt>(-150.0)).is_err());
    }

    #[test]
    fn sum_stays_positive() {
        let a = StrictlyPositive::new(Power::new::<watt>(100.0)).unwrap();
        let b = StrictlyPositive::new(Power::new::<watt>(50.0)).unwrap();
        assert_eq!((a + b).into_inner(), Power::new::<watt>(150.0));
    }
}
