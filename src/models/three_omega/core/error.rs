use thiserror::Error;

use crate::support::{constraint::ConstraintError, quadrature::GridError};

/// Errors that can occur while configuring or running a 3ω evaluation.
///
/// Every variant aborts the whole evaluation; no partial results are returned.
/// Numerically degenerate inputs are not reported here and surface as
/// non-finite values in the result instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// An evaluation session was built without frequencies or integration bounds.
    #[error("session is missing {missing}")]
    ConfigurationNotInitialized {
        /// The setting that was never supplied.
        missing: &'static str,
    },

    /// The layer count is zero or exceeds the configured maximum.
    #[error("layer count {count} is outside 1..={max}")]
    InvalidLayerCount { count: usize, max: usize },

    /// The frequency count is zero or exceeds the configured maximum.
    #[error("frequency count {count} is outside 1..={max}")]
    InvalidFrequencyCount { count: usize, max: usize },

    /// A per-layer array does not match the expected layer count.
    #[error("{field} has {found} entries, expected {expected}")]
    LengthMismatch {
        /// Name of the offending column.
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A boundary-condition selector was not recognized.
    #[error("unknown boundary condition {0:?}")]
    UnknownBoundaryCondition(String),

    /// A sensitivity request names an unknown parameter or a missing layer.
    #[error("invalid parameter selector: parameter {parameter}, layer {layer}")]
    InvalidParameterSelector { parameter: usize, layer: usize },

    /// The integration bounds do not describe a valid grid.
    #[error("invalid integration grid")]
    Grid(#[from] GridError),

    /// A physical input violates its numeric constraint.
    #[error("invalid {quantity}")]
    Constraint {
        /// Name of the offending quantity.
        quantity: &'static str,
        #[source]
        source: ConstraintError,
    },
}

impl EvaluationError {
    /// Wraps a constraint violation with the name of the quantity that failed.
    pub(crate) fn constraint(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Constraint { quantity, source }
    }
}
