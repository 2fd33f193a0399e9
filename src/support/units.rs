//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for the physical inputs of a layer stack
//! (thickness, conductivity, heat capacity, heater geometry and power).
//! This module provides quantities that are useful for 3ω modeling but
//! aren't included in [`uom`].
//!
//! ## Thermal insulance
//!
//! Interface contact resistances and the surface impedance of a layer stack
//! are area-specific thermal resistances (m²·K/W). [`ThermalInsulance`] is
//! the quantity for them and [`InsulanceUnits`] converts to and from SI values:
//!
//! ```
//! use three_omega_models::support::units::{InsulanceUnits, ThermalInsulance};
//!
//! let rc = ThermalInsulance::from_square_meter_kelvin_per_watt(1.0e-8);
//! assert_eq!(rc.square_meter_kelvin_per_watt(), 1.0e-8);
//! ```

mod quantities;

pub use quantities::{InsulanceUnits, ThermalInsulance};
