//! Supporting utilities used by models.
//!
//! These modules are public but their APIs are not stable.

pub mod constraint;
pub mod math;
pub mod quadrature;
pub mod units;
