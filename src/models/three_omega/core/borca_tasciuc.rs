//! Transfer-ratio recursion without contact resistance.
//!
//! For a wavenumber `λ` and angular frequency `ω`, each layer has the decay
//! coefficient `B = sqrt(ψ·λ² + j·2ω·Cv/ky)`. The transfer ratio `A` is seeded
//! at the deepest layer by the boundary condition and carried upward:
//!
//! ```text
//! t   = A[i+1]·ky[i+1]·B[i+1] / (ky[i]·B[i])
//! A[i] = (t - tanh(B[i]·d[i])) / (1 - t·tanh(B[i]·d[i]))
//! ```

use num_complex::Complex64;

use crate::support::math::{sinc_sq, tanh};

use super::{BoundaryCondition, Layer, LayerStack};

/// Decay coefficient `B` of a layer.
fn decay(layer: &Layer, lambda: f64, omega: f64) -> Complex64 {
    Complex64::new(
        layer.psi * lambda * lambda,
        2.0 * omega * layer.cv / layer.ky,
    )
    .sqrt()
}

/// Transfer ratio `A` and decay coefficient `B` of the topmost layer.
///
/// An empty stack yields non-finite values.
pub(super) fn top_coefficients(
    layers: &[Layer],
    boundary: BoundaryCondition,
    lambda: f64,
    omega: f64,
) -> (Complex64, Complex64) {
    let Some((deepest, above)) = layers.split_last() else {
        let nan = Complex64::new(f64::NAN, f64::NAN);
        return (nan, nan);
    };

    let mut b = decay(deepest, lambda, omega);
    let mut a = match boundary {
        BoundaryCondition::SemiInfinite => Complex64::new(-1.0, 0.0),
        BoundaryCondition::Adiabatic => -tanh(b * deepest.thickness),
        BoundaryCondition::Isothermal => -tanh(b * deepest.thickness).inv(),
    };
    let mut ky = deepest.ky;

    for layer in above.iter().rev() {
        let b_here = decay(layer, lambda, omega);
        let t = a * ky * b / (layer.ky * b_here);
        let th = tanh(b_here * layer.thickness);

        a = (t - th) / (1.0 - t * th);
        b = b_here;
        ky = layer.ky;
    }

    (a, b)
}

/// Integrand `sinc²(b·λ) / (A·B)` at one `(λ, ω)` point.
pub(super) fn integrand(stack: &LayerStack, lambda: f64, omega: f64) -> Complex64 {
    let (a, b) = top_coefficients(stack.layers(), stack.boundary(), lambda, omega);
    sinc_sq(stack.b() * lambda) / (a * b)
}
