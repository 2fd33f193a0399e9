use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P3, Z0},
};

/// Thermal insulance (area-specific thermal resistance), m²·K/W in SI.
pub type ThermalInsulance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// SI conversions for [`ThermalInsulance`].
///
/// [`uom`] defines no units for this quantity, so values enter and leave the
/// crate through this trait.
pub trait InsulanceUnits {
    /// Creates an insulance from a value in m²·K/W.
    fn from_square_meter_kelvin_per_watt(value: f64) -> Self;

    /// Returns the insulance in m²·K/W.
    fn square_meter_kelvin_per_watt(&self) -> f64;
}

impl InsulanceUnits for ThermalInsulance {
    fn from_square_meter_kelvin_per_watt(value: f64) -> Self {
        Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }

    fn square_meter_kelvin_per_watt(&self) -> f64 {
        self.value
    }
}
