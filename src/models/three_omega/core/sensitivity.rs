//! Parameter sensitivities of the Olson-Graham-Chen surface impedance.
//!
//! With `F = z[0] - Rc[0]`, a parameter of layer `i` moves `F` through the
//! impedance chain above it. Each step contributes `Ξ = ∂z[i]/∂z̃[i]`, so the
//! chain factor of layer `i` is the product of `Ξ` over all shallower layers.
//! The local partials follow from differentiating the forward recursion:
//!
//! ```text
//! u      = K·z̃
//! Ξ      = (1 - T²) / (1 - u·T)²
//! ∂z/∂K  = (Ξ·z̃ - z) / K
//! ∂z/∂T  = (u² - 1) / (K·(1 - u·T)²)
//! ∂z/∂Φ  = ∂z/∂K·ky/b + ∂z/∂T·(d/b)·(1 - T²)
//! ```
//!
//! and `∂Φ/∂ky = -jωb²Cv/(ky²Φ)`, `∂Φ/∂ψ = χ²/(2Φ)`, `∂Φ/∂Cv = jωb²/(kyΦ)`.
//! The deepest layer has `Ξ = 0`, `∂z/∂K = -z/K`, and `∂z/∂T` set by its
//! boundary condition.

use std::f64::consts::FRAC_2_PI;

use num_complex::Complex64;

use crate::support::math::sinc_sq;

use super::{
    BoundaryCondition, LayerStack, ParameterSelector,
    olson_graham_chen::{LayerState, surface_impedance},
};

/// Sensitivities of `F` to `[ky, ψ, Cv, Rc]` of one layer.
type Gradient = [Complex64; 4];

/// Scratch buffers reused across grid points by one worker.
#[derive(Debug, Default)]
pub(super) struct Workspace {
    states: Vec<LayerState>,
    gradients: Vec<Gradient>,
}

impl Workspace {
    pub(super) fn with_layers(layers: usize) -> Self {
        Self {
            states: Vec::with_capacity(layers),
            gradients: Vec::with_capacity(layers),
        }
    }
}

/// Fills `ws.gradients` with `∂F/∂X` for every parameter of every layer.
fn gradients(stack: &LayerStack, chi: f64, omega: f64, ws: &mut Workspace) {
    let Workspace { states, gradients } = ws;
    surface_impedance(stack, chi, omega, states);
    gradients.clear();

    let b = stack.b();
    let deepest = stack.len().saturating_sub(1);
    let j = Complex64::i();
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);

    let mut chain = one;
    for (i, (layer, s)) in stack.layers().iter().zip(states.iter()).enumerate() {
        let (dz_dk, dz_dt, xi) = if i == deepest {
            let dz_dt = match stack.boundary() {
                BoundaryCondition::SemiInfinite => zero,
                BoundaryCondition::Isothermal => -s.k.inv(),
                BoundaryCondition::Adiabatic => -s.z / s.tanh,
            };
            (-s.z / s.k, dz_dt, zero)
        } else {
            let u = s.k * s.z_below;
            let denom = (one - u * s.tanh).powi(2);
            let xi = (one - s.tanh * s.tanh) / denom;
            ((xi * s.z_below - s.z) / s.k, (u * u - one) / (s.k * denom), xi)
        };

        // A saturated tanh has no thickness dependence; skipping the product
        // also avoids 0·∞ for unbounded layers.
        let sech_sq = one - s.tanh * s.tanh;
        let dt_dphi = if sech_sq == zero {
            zero
        } else {
            sech_sq * (layer.thickness / b)
        };
        let dz_dphi = dz_dk * (layer.ky / b) + dz_dt * dt_dphi;

        let w = omega * b * b;
        let dphi_dky = -j * w * layer.cv / (layer.ky * layer.ky * s.phi);
        let dphi_dpsi = chi * chi / (2.0 * s.phi);
        let dphi_dcv = j * w / (layer.ky * s.phi);

        gradients.push([
            chain * (dz_dk * s.phi / b + dz_dphi * dphi_dky),
            chain * dz_dphi * dphi_dpsi,
            chain * dz_dphi * dphi_dcv,
            -chain,
        ]);

        chain *= xi;
    }
}

/// Jacobian integrands `(2/π)·sinc²(χ)·∂F/∂X` for each selector.
///
/// Selectors must refer to layers of `stack`.
pub(super) fn integrands(
    stack: &LayerStack,
    chi: f64,
    omega: f64,
    selectors: &[ParameterSelector],
    ws: &mut Workspace,
    values: &mut [Complex64],
) {
    gradients(stack, chi, omega, ws);
    let weight = FRAC_2_PI * sinc_sq(chi);

    for (value, selector) in values.iter_mut().zip(selectors) {
        *value = weight * ws.gradients[selector.layer][selector.parameter.id()];
    }
}

/// Integrated sensitivities, one row per selector and one column per frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Jacobian {
    selectors: Vec<ParameterSelector>,
    columns: usize,
    values: Vec<Complex64>,
}

impl Jacobian {
    /// Assembles a Jacobian from per-frequency rows of integrals.
    pub(super) fn from_frequency_rows(
        selectors: Vec<ParameterSelector>,
        per_frequency: &[Vec<Complex64>],
    ) -> Self {
        let columns = per_frequency.len();
        let mut values = vec![Complex64::new(0.0, 0.0); selectors.len() * columns];
        for (c, column) in per_frequency.iter().enumerate() {
            for (r, value) in column.iter().enumerate() {
                values[r * columns + c] = *value;
            }
        }

        Self {
            selectors,
            columns,
            values,
        }
    }

    /// `(rows, columns)`: selectors by frequencies.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.selectors.len(), self.columns)
    }

    /// The selector of each row.
    #[must_use]
    pub fn selectors(&self) -> &[ParameterSelector] {
        &self.selectors
    }

    /// Sensitivities for one selector across all frequencies.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Complex64]> {
        let start = row.checked_mul(self.columns)?;
        self.values.get(start..start + self.columns)
    }

    /// Sensitivities for the row matching `selector`, if it was requested.
    #[must_use]
    pub fn row_for(&self, selector: ParameterSelector) -> Option<&[Complex64]> {
        let row = self.selectors.iter().position(|s| *s == selector)?;
        self.row(row)
    }

    /// One sensitivity.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Complex64> {
        if column >= self.columns {
            return None;
        }
        self.row(row).map(|r| r[column])
    }

    /// Rows in selector order.
    pub fn rows(&self) -> impl Iterator<Item = &[Complex64]> {
        self.values.chunks(self.columns.max(1))
    }

    /// Row-major values.
    #[must_use]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.values
    }
}
