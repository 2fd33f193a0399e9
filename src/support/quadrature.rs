//! Fixed-grid quadrature over geometrically spaced sample points.
//!
//! The 3ω integrals run over wavenumbers spanning ten or more decades, so the
//! sample points are spaced evenly in log-space ([`LogGrid`]) and combined with
//! the composite trapezoid rule. No adaptive refinement is performed: accuracy
//! is governed by the grid bounds and point count alone.
//!
//! The per-frequency helpers ([`integrate_each`], [`integrate_rows_each`])
//! integrate independently for every frequency in parallel. Accumulation
//! along the grid is always sequential within one frequency.
//!
//! # Example
//!
//! ```
//! use num_complex::Complex64;
//! use three_omega_models::support::quadrature::{LogGrid, trapezoid};
//!
//! let grid = LogGrid::new(1.0e-3, 10.0, 400).unwrap();
//! let area = trapezoid(&grid, |_| Complex64::new(2.0, 0.0));
//! assert!((area.re - 2.0 * (10.0 - 1.0e-3)).abs() < 1e-12);
//! ```

use std::ops::Deref;

use num_complex::Complex64;
use rayon::prelude::*;
use thiserror::Error;

use crate::support::constraint::{ConstraintError, StrictlyPositive};

/// Errors that can occur while building a [`LogGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// The lower bound is not strictly positive.
    #[error("lower bound must be strictly positive")]
    Lower(#[source] ConstraintError),

    /// A bound is not finite, or the upper bound does not exceed the lower.
    #[error("bounds must be finite with upper {upper} above lower {lower}")]
    Bounds { lower: f64, upper: f64 },

    /// Fewer than two points were requested.
    #[error("a grid needs at least 2 points, got {0}")]
    TooFewPoints(usize),
}

/// Geometrically spaced, strictly increasing sample points.
///
/// Point `k` of `n` is `lower * (upper / lower)^(k / (n - 1))`.
/// The first and last points equal the requested bounds exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct LogGrid(Vec<f64>);

impl LogGrid {
    /// Builds a grid of `points` samples between `lower` and `upper`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `lower <= 0`, either bound is not finite,
    /// `upper <= lower`, or `points < 2`.
    pub fn new(lower: f64, upper: f64, points: usize) -> Result<Self, GridError> {
        let lower = StrictlyPositive::new(lower)
            .map_err(GridError::Lower)?
            .into_inner();
        if !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(GridError::Bounds { lower, upper });
        }
        if points < 2 {
            return Err(GridError::TooFewPoints(points));
        }

        let ratio = upper / lower;
        let last = (points - 1) as f64;
        let mut xs: Vec<f64> = (0..points)
            .map(|k| lower * ratio.powf(k as f64 / last))
            .collect();

        xs[0] = lower;
        xs[points - 1] = upper;

        Ok(Self(xs))
    }

    /// Smallest grid point.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.0[0]
    }

    /// Largest grid point.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.0[self.0.len() - 1]
    }
}

impl Deref for LogGrid {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Integrates `f` over the sample points `xs` with the composite trapezoid rule.
///
/// Returns zero for fewer than two points.
pub fn trapezoid(xs: &[f64], mut f: impl FnMut(f64) -> Complex64) -> Complex64 {
    let mut sum = Complex64::new(0.0, 0.0);
    let Some((&first, rest)) = xs.split_first() else {
        return sum;
    };

    let mut x_prev = first;
    let mut f_prev = f(first);
    for &x in rest {
        let fx = f(x);
        sum += (x - x_prev) / 2.0 * (fx + f_prev);
        x_prev = x;
        f_prev = fx;
    }
    sum
}

/// Integrates `rows` integrands at once with the composite trapezoid rule.
///
/// At each sample point `f(x, values)` must fill `values` (length `rows`)
/// with every integrand evaluated at `x`. The integrands share whatever work
/// `f` does per point; each row accumulates independently.
pub fn trapezoid_rows(
    xs: &[f64],
    rows: usize,
    mut f: impl FnMut(f64, &mut [Complex64]),
) -> Vec<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    let mut sum = vec![zero; rows];
    let Some((&first, rest)) = xs.split_first() else {
        return sum;
    };

    let mut prev = vec![zero; rows];
    let mut curr = vec![zero; rows];

    let mut x_prev = first;
    f(first, &mut prev);
    for &x in rest {
        f(x, &mut curr);
        let half_dx = (x - x_prev) / 2.0;
        for ((s, c), p) in sum.iter_mut().zip(&curr).zip(&prev) {
            *s += half_dx * (c + p);
        }
        std::mem::swap(&mut prev, &mut curr);
        x_prev = x;
    }
    sum
}

/// Integrates `f(x, ω)` over `xs` independently for every `ω` in `omegas`.
///
/// Frequencies are processed in parallel. Each worker creates its own scratch
/// state with `init` and passes it to every evaluation of `f`, so recursion
/// buffers are reused across grid points without being shared across threads.
/// Results are returned in the order of `omegas`.
pub fn integrate_each<S, I, F>(xs: &[f64], omegas: &[f64], init: I, f: F) -> Vec<Complex64>
where
    I: Fn() -> S + Sync + Send,
    F: Fn(&mut S, f64, f64) -> Complex64 + Sync + Send,
{
    omegas
        .par_iter()
        .map_init(init, |state, &omega| {
            trapezoid(xs, |x| f(state, x, omega))
        })
        .collect()
}

/// Integrates `rows` integrands over `xs` for every `ω` in `omegas`.
///
/// Returns one vector of `rows` integrals per frequency, in the order of
/// `omegas`. See [`integrate_each`] for the threading model and
/// [`trapezoid_rows`] for the contract of `f`.
pub fn integrate_rows_each<S, I, F>(
    xs: &[f64],
    omegas: &[f64],
    rows: usize,
    init: I,
    f: F,
) -> Vec<Vec<Complex64>>
where
    I: Fn() -> S + Sync + Send,
    F: Fn(&mut S, f64, f64, &mut [Complex64]) + Sync + Send,
{
    omegas
        .par_iter()
        .map_init(init, |state, &omega| {
            trapezoid_rows(xs, rows, |x, values| f(state, x, omega, values))
        })
        .collect()
}
