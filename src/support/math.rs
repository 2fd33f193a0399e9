//! Elementary functions used by the layer-stack recursions.
//!
//! The hyperbolic tangent in [`num_complex`] is evaluated through
//! `sinh(2x)/cosh(2x)`, which overflows to `NaN` once the real part passes a
//! few hundred. Layer recursions routinely evaluate `tanh(B·d)` with real
//! parts in the thousands (thick substrates at large wavenumbers), so this
//! module provides an overflow-safe replacement.

use num_complex::Complex64;

/// Real part beyond which `tanh(z)` equals `±1` to double precision.
const TANH_SATURATION: f64 = 20.0;

/// Modulus below which `tanh(z)` is taken from its Taylor series.
const TANH_SERIES: f64 = 1.0e-4;

/// Complex hyperbolic tangent that stays finite for large real parts.
///
/// # Example
///
/// ```
/// use num_complex::Complex64;
/// use three_omega_models::support::math::tanh;
///
/// let z = Complex64::new(3.0e3, 0.7);
/// assert_eq!(tanh(z), Complex64::new(1.0, 0.0));
/// ```
#[must_use]
pub fn tanh(z: Complex64) -> Complex64 {
    if z.re > TANH_SATURATION {
        return Complex64::new(1.0, 0.0);
    }
    if z.re < -TANH_SATURATION {
        return Complex64::new(-1.0, 0.0);
    }
    if z.norm() < TANH_SERIES {
        // 1 - e cancels for tiny z; the next term is O(z⁷).
        let z2 = z * z;
        return z * (1.0 - z2 / 3.0 + 2.0 * z2 * z2 / 15.0);
    }
    if z.re < 0.0 {
        return -tanh(-z);
    }

    // |e| <= 1 for a non-negative real part.
    let e = (-2.0 * z).exp();
    (1.0 - e) / (1.0 + e)
}

/// The unnormalized sinc function, `sin(x)/x`, with `sinc(0) = 1`.
#[must_use]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 { 1.0 } else { x.sin() / x }
}

/// The square of [`sinc`].
#[must_use]
pub fn sinc_sq(x: f64) -> f64 {
    let s = sinc(x);
    s * s
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn tanh_matches_num_complex_for_moderate_arguments() {
        let points = [
            Complex64::new(0.0, 0.0),
            Complex64::new(0.3, -1.2),
            Complex64::new(-2.5, 0.4),
            Complex64::new(7.0, 3.0),
            Complex64::new(1.0e-3, 1.0e-3),
        ];

        for z in points {
            let expected = z.tanh();
            let actual = tanh(z);
            assert_relative_eq!(actual.re, expected.re, max_relative = 1e-12, epsilon = 1e-15);
            assert_relative_eq!(actual.im, expected.im, max_relative = 1e-12, epsilon = 1e-15);
        }
    }

    #[test]
    fn tanh_keeps_relative_precision_near_zero() {
        for z in [
            Complex64::new(1.0e-12, 0.0),
            Complex64::new(3.0e-9, -4.0e-9),
            Complex64::new(-2.0e-6, 5.0e-7),
            Complex64::new(0.0, 9.0e-5),
        ] {
            let expected = z - z * z * z / 3.0;
            let actual = tanh(z);
            assert_relative_eq!(actual.re, expected.re, max_relative = 1e-14, epsilon = 1e-300);
            assert_relative_eq!(actual.im, expected.im, max_relative = 1e-14, epsilon = 1e-300);
        }

        let z = Complex64::new(9.0e-5, 1.0e-5);
        let below = tanh(z);
        let above = tanh(z * 1.2);
        assert_relative_eq!(below.re, z.tanh().re, max_relative = 1e-10);
        assert_relative_eq!(above.re, (z * 1.2).tanh().re, max_relative = 1e-10);
    }

    #[test]
    fn tanh_saturates_without_overflow() {
        let big = Complex64::new(5.0e3, 2.0e3);
        assert_eq!(tanh(big), Complex64::new(1.0, 0.0));
        assert_eq!(tanh(-big), Complex64::new(-1.0, 0.0));
    }

    #[test]
    fn tanh_accepts_unbounded_arguments() {
        let z = Complex64::new(f64::INFINITY, f64::INFINITY);
        assert_eq!(tanh(z), Complex64::new(1.0, 0.0));
    }

    #[test]
    fn sinc_has_removable_singularity() {
        assert_eq!(sinc(0.0), 1.0);
        assert_relative_eq!(sinc(1.0e-9), 1.0);
        assert_relative_eq!(sinc(std::f64::consts::PI), 0.0, epsilon = 1e-15);
        assert_relative_eq!(sinc_sq(2.0), (2.0_f64.sin() / 2.0).powi(2));
    }
}
