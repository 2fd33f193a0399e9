//! Frequency-domain response of layered samples under a line heater.
//!
//! A periodic heater of half-width `b` drives the top of a stack of
//! anisotropic layers. For each angular frequency the response is an integral
//! over a spatial wavenumber of a quantity obtained by collapsing the stack,
//! bottom to top, into one complex coefficient at the surface.
//!
//! Two formulations are provided:
//!
//! - Borca-Tasciuc: a transfer-ratio recursion over the wavenumber `λ`,
//!   without interface resistance.
//! - Olson-Graham-Chen: a surface-impedance recursion over `χ = b·λ` with a
//!   contact resistance at every interface, plus closed-form sensitivities
//!   with respect to each layer's `ky`, `ψ`, `Cv` and `Rc`.
//!
//! Both integrate with the composite trapezoid rule on a fixed log-spaced
//! grid held by a [`Session`].

mod boundary;
mod borca_tasciuc;
mod config;
mod error;
mod heater;
mod layer;
mod olson_graham_chen;
mod response;
mod sensitivity;
mod session;
mod stack;

#[cfg(test)]
mod test_support;

pub use boundary::BoundaryCondition;
pub use config::{IntegrationConfig, Limits};
pub use error::EvaluationError;
pub use heater::HeaterMass;
pub use layer::Layer;
pub use response::{Formulation, Response};
pub use sensitivity::Jacobian;
pub use session::{Session, SessionBuilder};
pub use stack::{InPlane, LayerColumns, LayerStack, Parameter, ParameterSelector};
