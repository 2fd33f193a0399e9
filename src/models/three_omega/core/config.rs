use crate::support::quadrature::{GridError, LogGrid};

/// Integration bounds and sample count for the wavenumber quadrature.
///
/// The bounds are in the variable of the chosen formulation: the dimensional
/// wavenumber `λ` (1/m) for Borca-Tasciuc, the dimensionless `χ = b·λ` for
/// Olson-Graham-Chen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationConfig {
    /// Smallest sample point.
    pub lower: f64,

    /// Largest sample point.
    pub upper: f64,

    /// Number of geometrically spaced sample points.
    pub points: usize,
}

impl IntegrationConfig {
    /// Default bounds for the Borca-Tasciuc formulation, `λ ∈ [1e-3, 1e7]` 1/m.
    #[must_use]
    pub fn borca_tasciuc() -> Self {
        Self {
            lower: 1.0e-3,
            upper: 1.0e7,
            points: 200,
        }
    }

    /// Default bounds for the Olson-Graham-Chen formulation, `χ ∈ [1e-6, 15]`.
    #[must_use]
    pub fn olson_graham_chen() -> Self {
        Self {
            lower: 1.0e-6,
            upper: 15.0,
            points: 200,
        }
    }

    /// Builds the sample grid described by this configuration.
    pub(super) fn grid(&self) -> Result<LogGrid, GridError> {
        LogGrid::new(self.lower, self.upper, self.points)
    }
}

/// Upper bounds on problem size accepted by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of layers in a stack.
    pub max_layers: usize,

    /// Maximum number of angular frequencies in a session.
    pub max_frequencies: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_layers: 10,
            max_frequencies: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_build_valid_grids() {
        for config in [
            IntegrationConfig::borca_tasciuc(),
            IntegrationConfig::olson_graham_chen(),
        ] {
            let grid = config.grid().unwrap();
            assert_eq!(grid.len(), config.points);
            assert_eq!(grid.lower(), config.lower);
            assert_eq!(grid.upper(), config.upper);
        }
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        let config = IntegrationConfig {
            lower: 10.0,
            upper: 1.0,
            points: 50,
        };
        assert!(matches!(config.grid(), Err(GridError::Bounds { .. })));
    }
}
