//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; the types callers need are re-exported from the
//! model module itself.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the model-specific core API.

pub mod three_omega;
