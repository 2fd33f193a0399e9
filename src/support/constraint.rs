//! Type-level numeric constraints checked once at construction.
//!
//! Material properties in a layer stack are only meaningful within certain
//! ranges: conductivities, heat capacities and thicknesses must be strictly
//! positive, while a contact resistance may be zero but never negative.
//! The types in this module encode those invariants so they are checked once,
//! where a value enters the crate, instead of at every use.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//!
//! Both work on plain `f64` values and on uom quantities, so a layer can be
//! validated either from SI arrays or from typed inputs. Markers wrap values
//! in [`Constrained<T, C>`] and offer a shorthand constructor such as
//! `StrictlyPositive::new(1.4)`.
//!
//! Infinity passes both checks. Semi-infinite layers rely on this.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant implemented by a zero-sized marker type.
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use three_omega_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let half_width = Constrained::<_, StrictlyPositive>::new(17.0e-6).unwrap();
/// assert_eq!(half_width.into_inner(), 17.0e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
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

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
