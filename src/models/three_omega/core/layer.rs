use uom::si::{
    f64::{Length, Ratio, ThermalConductivity, VolumetricHeatCapacity},
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
    volumetric_heat_capacity::joule_per_cubic_meter_kelvin,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    units::{InsulanceUnits, ThermalInsulance},
};

use super::EvaluationError;

/// One homogeneous, possibly anisotropic, material layer.
///
/// Values are stored in SI units. The in-plane conductivity is kept as the
/// ratio `ψ = kx/ky`, which is the form both recursions consume; the absolute
/// in-plane conductivity is available through [`Layer::in_plane_conductivity`].
///
/// The contact resistance belongs to the interface directly above this layer
/// and is only read by the Olson-Graham-Chen formulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub(crate) thickness: f64,
    pub(crate) ky: f64,
    pub(crate) psi: f64,
    pub(crate) cv: f64,
    pub(crate) rc: f64,
}

impl Layer {
    /// Creates an isotropic layer with no contact resistance.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Constraint`] if any value is not strictly positive.
    pub fn new(
        thickness: Length,
        conductivity: ThermalConductivity,
        heat_capacity: VolumetricHeatCapacity,
    ) -> Result<Self, EvaluationError> {
        Self::from_si(
            thickness.get::<meter>(),
            conductivity.get::<watt_per_meter_kelvin>(),
            1.0,
            heat_capacity.get::<joule_per_cubic_meter_kelvin>(),
            0.0,
        )
    }

    /// Creates an isotropic layer of unbounded thickness.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Constraint`] if any value is not strictly positive.
    pub fn semi_infinite(
        conductivity: ThermalConductivity,
        heat_capacity: VolumetricHeatCapacity,
    ) -> Result<Self, EvaluationError> {
        Self::new(
            Length::new::<meter>(f64::INFINITY),
            conductivity,
            heat_capacity,
        )
    }

    /// Sets the in-plane conductivity `kx`, keeping the cross-plane `ky`.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Constraint`] if `kx` is not strictly positive.
    pub fn with_in_plane_conductivity(
        self,
        kx: ThermalConductivity,
    ) -> Result<Self, EvaluationError> {
        let kx = kx.get::<watt_per_meter_kelvin>();
        Self::from_si(self.thickness, self.ky, kx / self.ky, self.cv, self.rc)
    }

    /// Sets the anisotropy ratio `ψ = kx/ky`.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Constraint`] if `ψ` is not strictly positive.
    pub fn with_anisotropy(self, psi: Ratio) -> Result<Self, EvaluationError> {
        Self::from_si(self.thickness, self.ky, psi.get::<ratio>(), self.cv, self.rc)
    }

    /// Sets the contact resistance of the interface above this layer.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Constraint`] if the resistance is negative.
    pub fn with_contact_resistance(self, rc: ThermalInsulance) -> Result<Self, EvaluationError> {
        Self::from_si(
            self.thickness,
            self.ky,
            self.psi,
            self.cv,
            rc.square_meter_kelvin_per_watt(),
        )
    }

    /// Builds a layer from SI values, checking every physical constraint.
    ///
    /// `thickness` may be `f64::INFINITY` for an unbounded layer.
    pub(crate) fn from_si(
        thickness: f64,
        ky: f64,
        psi: f64,
        cv: f64,
        rc: f64,
    ) -> Result<Self, EvaluationError> {
        Ok(Self {
            thickness: positive(thickness, "thickness")?,
            ky: finite_positive(ky, "cross-plane conductivity")?,
            psi: finite_positive(psi, "anisotropy ratio")?,
            cv: finite_positive(cv, "heat capacity")?,
            rc: NonNegative::new(rc)
                .map_err(EvaluationError::constraint("contact resistance"))?
                .into_inner(),
        })
    }

    /// Layer thickness; infinite for an unbounded layer.
    #[must_use]
    pub fn thickness(&self) -> Length {
        Length::new::<meter>(self.thickness)
    }

    /// Whether this layer extends without bound.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.thickness.is_infinite()
    }

    /// Cross-plane conductivity `ky`.
    #[must_use]
    pub fn cross_plane_conductivity(&self) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(self.ky)
    }

    /// In-plane conductivity `kx = ψ·ky`.
    #[must_use]
    pub fn in_plane_conductivity(&self) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(self.psi * self.ky)
    }

    /// Anisotropy ratio `ψ = kx/ky`.
    #[must_use]
    pub fn anisotropy(&self) -> Ratio {
        Ratio::new::<ratio>(self.psi)
    }

    /// Volumetric heat capacity `Cv`.
    #[must_use]
    pub fn heat_capacity(&self) -> VolumetricHeatCapacity {
        VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(self.cv)
    }

    /// Contact resistance of the interface above this layer.
    #[must_use]
    pub fn contact_resistance(&self) -> ThermalInsulance {
        ThermalInsulance::from_square_meter_kelvin_per_watt(self.rc)
    }
}

fn positive(value: f64, quantity: &'static str) -> Result<f64, EvaluationError> {
    StrictlyPositive::new(value)
        .map(|v| v.into_inner())
        .map_err(EvaluationError::constraint(quantity))
}

/// Like `positive`, but also rejects infinity.
pub(super) fn finite_positive(
    value: f64,
    quantity: &'static str,
) -> Result<f64, EvaluationError> {
    let value = positive(value, quantity)?;
    if value.is_infinite() {
        return Err(EvaluationError::constraint(quantity)(ConstraintError::Infinite));
    }
    Ok(value)
}
