//! Surface-impedance recursion with interface contact resistance.
//!
//! Works in the dimensionless wavenumber `χ`. For each layer,
//! `Φ = sqrt(ψ·χ² + j·2ω·b²·Cv/ky)`, `K = ky·Φ/b` and `T = tanh(Φ·d/b)`.
//! The impedance `z` is seeded at the deepest layer and carried upward,
//! subtracting the contact resistance of each interface on the way:
//!
//! ```text
//! z̃[i] = z[i+1] - Rc[i+1]
//! z[i] = (K·z̃ - T) / (K - K²·z̃·T)
//! ```

use std::f64::consts::FRAC_2_PI;

use num_complex::Complex64;

use crate::support::math::{sinc_sq, tanh};

use super::{BoundaryCondition, Layer, LayerStack};

/// Per-layer recursion values at one `(χ, ω)` point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct LayerState {
    pub phi: Complex64,
    pub k: Complex64,
    pub tanh: Complex64,
    pub z: Complex64,
    /// Impedance seen below this layer's bottom interface; zero for the deepest layer.
    pub z_below: Complex64,
}

/// Fills `states` (one entry per layer, top first) and returns `z[0] - Rc[0]`.
///
/// An empty stack yields a non-finite value.
pub(super) fn surface_impedance(
    stack: &LayerStack,
    chi: f64,
    omega: f64,
    states: &mut Vec<LayerState>,
) -> Complex64 {
    let b = stack.b();
    let layers = stack.layers();
    states.clear();

    let Some((deepest, above)) = layers.split_last() else {
        return Complex64::new(f64::NAN, f64::NAN);
    };

    let mut state = seed(deepest, stack.boundary(), b, chi, omega);
    states.push(state);

    let mut rc_below = deepest.rc;
    for layer in above.iter().rev() {
        let (phi, k) = wave(layer, b, chi, omega);
        let th = tanh(phi * (layer.thickness / b));
        let z_below = state.z - rc_below;
        let z = (k * z_below - th) / (k - k * k * z_below * th);

        state = LayerState {
            phi,
            k,
            tanh: th,
            z,
            z_below,
        };
        states.push(state);
        rc_below = layer.rc;
    }

    states.reverse();
    state.z - rc_below
}

/// Integrand `(2/π)·(z[0] - Rc[0])·sinc²(χ)` at one `(χ, ω)` point.
pub(super) fn integrand(
    stack: &LayerStack,
    chi: f64,
    omega: f64,
    states: &mut Vec<LayerState>,
) -> Complex64 {
    FRAC_2_PI * sinc_sq(chi) * surface_impedance(stack, chi, omega, states)
}

/// `Φ` and `K = ky·Φ/b` of a layer.
pub(super) fn wave(layer: &Layer, b: f64, chi: f64, omega: f64) -> (Complex64, Complex64) {
    let phi = Complex64::new(
        layer.psi * chi * chi,
        2.0 * omega * b * b * layer.cv / layer.ky,
    )
    .sqrt();
    (phi, phi * (layer.ky / b))
}

fn seed(
    layer: &Layer,
    boundary: BoundaryCondition,
    b: f64,
    chi: f64,
    omega: f64,
) -> LayerState {
    let (phi, k) = wave(layer, b, chi, omega);
    let one = Complex64::new(1.0, 0.0);

    let (th, z) = match boundary {
        BoundaryCondition::SemiInfinite => (one, -k.inv()),
        BoundaryCondition::Isothermal => {
            let th = tanh(phi * (layer.thickness / b));
            (th, -th / k)
        }
        BoundaryCondition::Adiabatic => {
            let th = tanh(phi * (layer.thickness / b));
            (th, -(k * th).inv())
        }
    };

    LayerState {
        phi,
        k,
        tanh: th,
        z,
        z_below: Complex64::new(0.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::three_omega::core::{
        Parameter, ParameterSelector, borca_tasciuc,
        test_support::{ideal_stack, micrometers, resistive_stack},
    };

    fn assert_close(actual: Complex64, expected: Complex64, tol: f64) {
        assert_relative_eq!(actual.re, expected.re, max_relative = tol);
        assert_relative_eq!(actual.im, expected.im, max_relative = tol);
    }

    #[test]
    fn single_semi_infinite_layer_matches_closed_form() {
        let layer = Layer::from_si(f64::INFINITY, 2.0, 1.5, 1.7e6, 0.0).unwrap();
        let stack =
            LayerStack::new(vec![layer], micrometers(15.0), BoundaryCondition::SemiInfinite)
                .unwrap();
        let b = 15.0e-6;
        let mut states = Vec::new();

        for (chi, omega) in [(1.0e-6, 100.0), (0.3, 5.0e3), (12.0, 1.0e5)] {
            let phi = Complex64::new(1.5 * chi * chi, 2.0 * omega * b * b * 1.7e6 / 2.0).sqrt();
            let expected = -b / (2.0 * phi);
            assert_close(surface_impedance(&stack, chi, omega, &mut states), expected, 1e-12);
            assert_eq!(states.len(), 1);
        }
    }

    #[test]
    fn matches_transfer_ratio_without_contact_resistance() {
        let (lambda, omega) = (4.0e4, 3.0e3);
        let mut states = Vec::new();

        for boundary in [
            BoundaryCondition::SemiInfinite,
            BoundaryCondition::Adiabatic,
            BoundaryCondition::Isothermal,
        ] {
            let stack = ideal_stack(boundary);
            let b = stack.b();
            let (a, big_b) = borca_tasciuc::top_coefficients(stack.layers(), boundary, lambda, omega);
            let expected = 1.0 / (stack.layers()[0].ky * big_b * a);

            let z = surface_impedance(&stack, b * lambda, omega, &mut states);
            assert_close(z, expected, 1e-10);
        }
    }

    #[test]
    fn contact_resistance_at_the_top_shifts_the_impedance() {
        let ideal = ideal_stack(BoundaryCondition::SemiInfinite);
        let rc = 3.0e-8;
        let shifted = ideal
            .with_parameter(ParameterSelector::new(Parameter::ContactResistance, 0), rc)
            .unwrap();

        let mut states = Vec::new();
        let base = surface_impedance(&ideal, 0.2, 1.0e4, &mut states);
        let moved = surface_impedance(&shifted, 0.2, 1.0e4, &mut states);
        assert_close(moved, base - rc, 1e-12);
    }

    #[test]
    fn states_are_ordered_top_first() {
        let stack = resistive_stack(BoundaryCondition::Isothermal);
        let mut states = Vec::new();
        let top = surface_impedance(&stack, 0.5, 2.0e3, &mut states);

        assert_eq!(states.len(), 3);
        assert_eq!(top, states[0].z - stack.layers()[0].rc);
        assert_eq!(states[2].z_below, Complex64::new(0.0, 0.0));
        assert_eq!(states[1].z_below, states[2].z - stack.layers()[2].rc);
    }

    #[test]
    fn integrand_stays_finite_across_the_grid() {
        let stack = resistive_stack(BoundaryCondition::SemiInfinite);
        let mut states = Vec::new();
        for chi in [1.0e-6, 1.0e-3, 1.0, 15.0, 1.0e3] {
            assert!(integrand(&stack, chi, 1.0e5, &mut states).is_finite());
        }
    }
}
