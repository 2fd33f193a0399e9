use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Positive infinity is accepted, which is how an unbounded (semi-infinite)
/// layer thickness is expressed.
///
/// # Examples
///
/// ```
/// use three_omega_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let k = Constrained::<_, StrictlyPositive>::new(148.0).unwrap();
/// assert_eq!(k.into_inner(), 148.0);
///
/// assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
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
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
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

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, ThermalConductivity},
        length::micrometer,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn conductivities() {
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(1.4);
        assert!(StrictlyPositive::new(k).is_ok());

        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);
        assert!(StrictlyPositive::new(k).is_err());
    }

    #[test]
    fn thicknesses() {
        let d = Length::new::<micrometer>(3.0);
        let checked = StrictlyPositive::new(d).unwrap();
        assert_eq!(checked.as_ref(), &d);

        assert!(StrictlyPositive::new(Length::new::<micrometer>(-3.0)).is_err());
    }
}
