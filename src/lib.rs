//! # Three Omega Models
//!
//! Frequency-domain thermal response of anisotropic layer stacks heated by a
//! periodic line heater, as measured with the 3ω technique.
//!
//! ## Crate layout
//!
//! - [`models`]: The 3ω forward models (Borca-Tasciuc and Olson-Graham-Chen),
//!   their parameter sensitivities, and [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful outside of that model (for example, the
//! logspace grid and trapezoid rule in [`support::quadrature`]).

pub mod models;
pub mod support;
