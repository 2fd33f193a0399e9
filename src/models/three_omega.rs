//! 3ω thermal response models.
//!
//! This module provides [`twine_core::Model`] implementations that map a
//! [`LayerStack`] to its integrated frequency response. Each adapter owns a
//! [`Session`] holding the frequencies and integration grid, so the same
//! model can be called repeatedly with candidate stacks.
//!
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use three_omega_models::models::three_omega::{
//!     BorcaTasciuc, BoundaryCondition, IntegrationConfig, Layer, LayerStack, Session,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     angular_velocity::radian_per_second,
//!     f64::{AngularVelocity, Length, ThermalConductivity, VolumetricHeatCapacity},
//!     length::micrometer,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     volumetric_heat_capacity::joule_per_cubic_meter_kelvin,
//! };
//!
//! let film = Layer::new(
//!     Length::new::<micrometer>(0.2),
//!     ThermalConductivity::new::<watt_per_meter_kelvin>(1.4),
//!     VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(1.6e6),
//! )?;
//! let substrate = Layer::semi_infinite(
//!     ThermalConductivity::new::<watt_per_meter_kelvin>(148.0),
//!     VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(1.65e6),
//! )?;
//! let stack = LayerStack::new(
//!     vec![film, substrate],
//!     Length::new::<micrometer>(10.0),
//!     BoundaryCondition::SemiInfinite,
//! )?;
//!
//! let session = Session::builder()
//!     .frequencies([1.0e3, 1.0e4].map(AngularVelocity::new::<radian_per_second>))
//!     .integration(IntegrationConfig::borca_tasciuc())
//!     .build()?;
//!
//! let response = BorcaTasciuc::new(session).call(&stack)?;
//! assert_eq!(response.len(), 2);
//! assert!(response.is_finite());
//! # Ok::<(), three_omega_models::models::three_omega::EvaluationError>(())
//! ```

mod core;

pub use self::core::{
    BoundaryCondition, EvaluationError, Formulation, HeaterMass, InPlane, IntegrationConfig,
    Jacobian, Layer, LayerColumns, LayerStack, Limits, Parameter, ParameterSelector, Response,
    Session, SessionBuilder,
};

use twine_core::Model;

/// Borca-Tasciuc response of a stack, integrated over `λ`.
#[derive(Debug, Clone)]
pub struct BorcaTasciuc {
    session: Session,
}

impl BorcaTasciuc {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Model for BorcaTasciuc {
    type Input = LayerStack;
    type Output = Response;
    type Error = EvaluationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.session.borca_tasciuc(input)
    }
}

/// Olson-Graham-Chen response of a stack, integrated over `χ`.
#[derive(Debug, Clone)]
pub struct OlsonGrahamChen {
    session: Session,
}

impl OlsonGrahamChen {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Model for OlsonGrahamChen {
    type Input = LayerStack;
    type Output = Response;
    type Error = EvaluationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.session.olson_graham_chen(input)
    }
}

/// Olson-Graham-Chen sensitivities for a fixed set of parameters.
///
/// Fitting loops typically pair this with [`OlsonGrahamChen`] on the same
/// session to obtain residuals and their Jacobian.
#[derive(Debug, Clone)]
pub struct OlsonGrahamChenJacobian {
    session: Session,
    selectors: Vec<ParameterSelector>,
}

impl OlsonGrahamChenJacobian {
    #[must_use]
    pub fn new(session: Session, selectors: Vec<ParameterSelector>) -> Self {
        Self { session, selectors }
    }

    #[must_use]
    pub fn selectors(&self) -> &[ParameterSelector] {
        &self.selectors
    }
}

impl Model for OlsonGrahamChenJacobian {
    type Input = LayerStack;
    type Output = Jacobian;
    type Error = EvaluationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.session.olson_graham_chen_jacobian(input, &self.selectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        angular_velocity::radian_per_second,
        f64::{AngularVelocity, Length},
        length::micrometer,
    };

    fn stack() -> LayerStack {
        LayerStack::from_columns(
            LayerColumns {
                thickness: &[1.0e-7, 2.0e-6, f64::INFINITY],
                ky: &[1.2, 30.0, 148.0],
                in_plane: InPlane::Conductivity(&[1.2, 45.0, 148.0]),
                cv: &[1.6e6, 2.1e6, 1.65e6],
                rc: Some(&[0.0, 1.0e-8, 2.0e-9]),
            },
            Length::new::<micrometer>(12.0),
            BoundaryCondition::SemiInfinite,
        )
        .unwrap()
    }

    fn session(config: IntegrationConfig) -> Session {
        Session::builder()
            .frequencies([500.0, 5.0e3, 5.0e4].map(AngularVelocity::new::<radian_per_second>))
            .integration(config)
            .build()
            .unwrap()
    }

    #[test]
    fn adapters_delegate_to_the_session() {
        let stack = stack();

        let bt_session = session(IntegrationConfig::borca_tasciuc());
        let bt = BorcaTasciuc::new(bt_session.clone());
        assert_eq!(bt.call(&stack).unwrap(), bt_session.borca_tasciuc(&stack).unwrap());

        let ogc_session = session(IntegrationConfig::olson_graham_chen());
        let ogc = OlsonGrahamChen::new(ogc_session.clone());
        assert_eq!(
            ogc.call(&stack).unwrap(),
            ogc_session.olson_graham_chen(&stack).unwrap()
        );

        let selectors = ParameterSelector::all(stack.len());
        let jacobian = OlsonGrahamChenJacobian::new(ogc_session.clone(), selectors.clone());
        assert_eq!(
            jacobian.call(&stack).unwrap(),
            ogc_session
                .olson_graham_chen_jacobian(&stack, &selectors)
                .unwrap()
        );
    }

    #[test]
    fn adapter_errors_propagate() {
        let stack = stack();
        let selectors = vec![ParameterSelector::new(Parameter::HeatCapacity, 7)];
        let jacobian =
            OlsonGrahamChenJacobian::new(session(IntegrationConfig::olson_graham_chen()), selectors);

        assert!(matches!(
            jacobian.call(&stack),
            Err(EvaluationError::InvalidParameterSelector { parameter: 2, layer: 7 })
        ));
    }
}
