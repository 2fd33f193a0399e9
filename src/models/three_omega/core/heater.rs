use num_complex::Complex64;
use uom::si::{
    f64::{Length, Power, VolumetricHeatCapacity},
    length::meter,
    power::watt,
    volumetric_heat_capacity::joule_per_cubic_meter_kelvin,
};

use crate::support::{
    constraint::NonNegative,
    units::{InsulanceUnits, ThermalInsulance},
};

use super::{EvaluationError, Response};

/// Thermal mass and interface resistance of a finite heater line.
///
/// A real heater stores heat and is separated from the sample by a thermal
/// resistance, both of which lag and damp the measured oscillation relative
/// to an ideal line source:
///
/// ```text
/// T = (T₀ + R·P/A) / (1 + 2jω·Cv·h·(R + T₀·A/P))
/// ```
///
/// with `T₀` the ideal temperature rise, `A = 2b·l` the heater area and `h`
/// the heater height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaterMass {
    height: f64,
    heat_capacity: f64,
    resistance: f64,
}

impl HeaterMass {
    /// # Errors
    ///
    /// Returns [`EvaluationError::Constraint`] if any value is negative.
    pub fn new(
        height: Length,
        heat_capacity: VolumetricHeatCapacity,
        resistance: ThermalInsulance,
    ) -> Result<Self, EvaluationError> {
        let check = |value: f64, quantity| {
            NonNegative::new(value)
                .map(|v| v.into_inner())
                .map_err(EvaluationError::constraint(quantity))
        };

        Ok(Self {
            height: check(height.get::<meter>(), "heater height")?,
            heat_capacity: check(
                heat_capacity.get::<joule_per_cubic_meter_kelvin>(),
                "heater heat capacity",
            )?,
            resistance: check(resistance.square_meter_kelvin_per_watt(), "heater resistance")?,
        })
    }

    /// Temperature rise of `response` corrected for this heater, in kelvin.
    ///
    /// See [`Response::temperature_rise`] for `power` and `length`.
    #[must_use]
    pub fn temperature_rise(
        &self,
        response: &Response,
        power: Power,
        length: Length,
    ) -> Vec<Complex64> {
        let ideal = response.temperature_rise(power, length);
        let area = 2.0 * response.half_width() * length.get::<meter>();
        let p_over_a = power.get::<watt>() / area;
        let mass = self.heat_capacity * self.height;

        ideal
            .iter()
            .zip(response.angular_frequencies())
            .map(|(&t, &omega)| {
                let lag = Complex64::new(0.0, 2.0 * omega * mass) * (self.resistance + t / p_over_a);
                (t + self.resistance * p_over_a) / (1.0 + lag)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::three_omega::core::Formulation;

    fn response() -> Response {
        Response::new(
            Formulation::OlsonGrahamChen,
            vec![1.0e3, 1.0e4, 1.0e5],
            vec![
                Complex64::new(-2.0e-6, 1.0e-6),
                Complex64::new(-1.5e-6, 0.8e-6),
                Complex64::new(-1.0e-6, 0.6e-6),
            ],
            1.4,
            1.0e-5,
        )
    }

    #[test]
    fn massless_ideal_heater_is_identity() {
        let heater = HeaterMass::new(
            Length::new::<meter>(0.0),
            VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(2.5e6),
            ThermalInsulance::from_square_meter_kelvin_per_watt(0.0),
        )
        .unwrap();

        let power = Power::new::<watt>(0.05);
        let length = Length::new::<meter>(1.0e-3);
        let response = response();

        let ideal = response.temperature_rise(power, length);
        let corrected = heater.temperature_rise(&response, power, length);
        for (c, i) in corrected.iter().zip(&ideal) {
            assert_relative_eq!(c.re, i.re, max_relative = 1e-14);
            assert_relative_eq!(c.im, i.im, max_relative = 1e-14);
        }
    }

    #[test]
    fn heater_mass_damps_high_frequencies() {
        let heater = HeaterMass::new(
            Length::new::<meter>(1.0e-7),
            VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(2.5e6),
            ThermalInsulance::from_square_meter_kelvin_per_watt(0.0),
        )
        .unwrap();

        let power = Power::new::<watt>(0.05);
        let length = Length::new::<meter>(1.0e-3);
        let response = response();

        let ideal = response.temperature_rise(power, length);
        let corrected = heater.temperature_rise(&response, power, length);

        let ratio = |k: usize| corrected[k].norm() / ideal[k].norm();
        assert!(ratio(0) > ratio(2));
        assert!(ratio(2) < 1.0);
    }

    #[test]
    fn rejects_negative_values() {
        let result = HeaterMass::new(
            Length::new::<meter>(-1.0e-7),
            VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(2.5e6),
            ThermalInsulance::from_square_meter_kelvin_per_watt(0.0),
        );
        assert!(matches!(
            result,
            Err(EvaluationError::Constraint { quantity: "heater height", .. })
        ));
    }
}
