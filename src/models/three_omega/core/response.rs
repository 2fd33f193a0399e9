use std::{f64::consts::PI, fmt};

use num_complex::Complex64;
use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::watt,
};

/// Which layer-stack formulation produced a [`Response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formulation {
    /// Transfer-ratio recursion over `λ`, without contact resistance.
    BorcaTasciuc,

    /// Surface-impedance recursion over `χ = b·λ`, with contact resistance.
    OlsonGrahamChen,
}

impl fmt::Display for Formulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BorcaTasciuc => "borca-tasciuc",
            Self::OlsonGrahamChen => "olson-graham-chen",
        })
    }
}

/// Integrated response of a stack, one complex value per angular frequency.
///
/// Values are the raw wavenumber integrals and follow the frequency order of
/// the session that produced them. A value may be non-finite when the stack
/// is numerically degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    formulation: Formulation,
    omegas: Vec<f64>,
    values: Vec<Complex64>,
    top_ky: f64,
    half_width: f64,
}

impl Response {
    pub(super) fn new(
        formulation: Formulation,
        omegas: Vec<f64>,
        values: Vec<Complex64>,
        top_ky: f64,
        half_width: f64,
    ) -> Self {
        Self {
            formulation,
            omegas,
            values,
            top_ky,
            half_width,
        }
    }

    #[must_use]
    pub fn formulation(&self) -> Formulation {
        self.formulation
    }

    /// Raw integrals, aligned with [`Response::angular_frequencies`].
    #[must_use]
    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    /// Angular frequencies in rad/s.
    #[must_use]
    pub fn angular_frequencies(&self) -> &[f64] {
        &self.omegas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Heater half-width `b` in m.
    pub(super) fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Complex amplitude of the 2ω temperature oscillation, in kelvin.
    ///
    /// `power` is the RMS heater power and `length` the heater length. The two
    /// formulations scale their integrals differently and agree here:
    ///
    /// - Borca-Tasciuc: `ΔT = -P/(π·l·ky₀) · I`
    /// - Olson-Graham-Chen: `ΔT = -P/(2b·l) · I`
    #[must_use]
    pub fn temperature_rise(&self, power: Power, length: Length) -> Vec<Complex64> {
        let p_over_l = power.get::<watt>() / length.get::<meter>();
        let scale = match self.formulation {
            Formulation::BorcaTasciuc => -p_over_l / (PI * self.top_ky),
            Formulation::OlsonGrahamChen => -p_over_l / (2.0 * self.half_width),
        };
        self.values.iter().map(|&v| scale * v).collect()
    }
}
