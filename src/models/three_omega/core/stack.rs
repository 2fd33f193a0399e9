use std::fmt;

use uom::si::{f64::Length, length::meter};

use super::{BoundaryCondition, EvaluationError, Layer, layer::finite_positive};

/// A sample: ordered layers below a line heater.
///
/// Layer 0 sits directly under the heater; the last layer is the deepest and
/// terminates the stack according to the [`BoundaryCondition`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    layers: Vec<Layer>,
    half_width: f64,
    boundary: BoundaryCondition,
}

/// In-plane conductivity column, given either absolutely or as a ratio.
#[derive(Debug, Clone, Copy)]
pub enum InPlane<'a> {
    /// Absolute in-plane conductivities `kx` in W/(m·K).
    Conductivity(&'a [f64]),

    /// Anisotropy ratios `ψ = kx/ky`.
    Ratio(&'a [f64]),
}

/// Per-layer SI columns, the shape in which external callers hold a sample.
#[derive(Debug, Clone, Copy)]
pub struct LayerColumns<'a> {
    /// Thicknesses in m. The deepest entry may be infinite.
    pub thickness: &'a [f64],

    /// Cross-plane conductivities in W/(m·K).
    pub ky: &'a [f64],

    /// In-plane conductivities or anisotropy ratios.
    pub in_plane: InPlane<'a>,

    /// Volumetric heat capacities in J/(m³·K).
    pub cv: &'a [f64],

    /// Contact resistances in m²·K/W; all zero when absent.
    pub rc: Option<&'a [f64]>,
}

impl LayerStack {
    /// Creates a stack from layers ordered top to bottom.
    ///
    /// The layer count is validated against a session's [`super::Limits`]
    /// when the stack is evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Constraint`] if `half_width` is not strictly
    /// positive and finite.
    pub fn new(
        layers: Vec<Layer>,
        half_width: Length,
        boundary: BoundaryCondition,
    ) -> Result<Self, EvaluationError> {
        let half_width = finite_positive(half_width.get::<meter>(), "heater half-width")?;

        Ok(Self {
            layers,
            half_width,
            boundary,
        })
    }

    /// Creates a stack from per-layer SI columns.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::LengthMismatch`] if the columns differ in
    /// length, or [`EvaluationError::Constraint`] if a value is unphysical.
    pub fn from_columns(
        columns: LayerColumns<'_>,
        half_width: Length,
        boundary: BoundaryCondition,
    ) -> Result<Self, EvaluationError> {
        let n = columns.thickness.len();

        let (in_plane_name, in_plane) = match columns.in_plane {
            InPlane::Conductivity(kx) => ("kx", kx),
            InPlane::Ratio(psi) => ("psi", psi),
        };

        check_len("ky", columns.ky, n)?;
        check_len(in_plane_name, in_plane, n)?;
        check_len("cv", columns.cv, n)?;
        if let Some(rc) = columns.rc {
            check_len("rc", rc, n)?;
        }

        let layers = (0..n)
            .map(|i| {
                let ky = columns.ky[i];
                let psi = match columns.in_plane {
                    InPlane::Conductivity(kx) => kx[i] / ky,
                    InPlane::Ratio(psi) => psi[i],
                };
                let rc = columns.rc.map_or(0.0, |rc| rc[i]);
                Layer::from_si(columns.thickness[i], ky, psi, columns.cv[i], rc)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(layers, half_width, boundary)
    }

    /// Returns this stack with a different boundary condition.
    #[must_use]
    pub fn with_boundary(mut self, boundary: BoundaryCondition) -> Self {
        self.boundary = boundary;
        self
    }

    /// Layers, top to bottom.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the stack has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Heater half-width `b`.
    #[must_use]
    pub fn half_width(&self) -> Length {
        Length::new::<meter>(self.half_width)
    }

    /// Condition at the bottom of the deepest layer.
    #[must_use]
    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    /// Heater half-width in m.
    pub(crate) fn b(&self) -> f64 {
        self.half_width
    }

    /// Reads one SI parameter.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::InvalidParameterSelector`] if the layer does not exist.
    pub fn parameter(&self, selector: ParameterSelector) -> Result<f64, EvaluationError> {
        let layer = self.layer(selector)?;
        Ok(match selector.parameter {
            Parameter::CrossPlaneConductivity => layer.ky,
            Parameter::Anisotropy => layer.psi,
            Parameter::HeatCapacity => layer.cv,
            Parameter::ContactResistance => layer.rc,
        })
    }

    /// Returns a copy of this stack with one SI parameter replaced.
    ///
    /// Replacing the cross-plane conductivity keeps the anisotropy ratio.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::InvalidParameterSelector`] if the layer does
    /// not exist, or [`EvaluationError::Constraint`] if the value is unphysical.
    pub fn with_parameter(
        &self,
        selector: ParameterSelector,
        value: f64,
    ) -> Result<Self, EvaluationError> {
        let old = *self.layer(selector)?;
        let (mut ky, mut psi, mut cv, mut rc) = (old.ky, old.psi, old.cv, old.rc);
        match selector.parameter {
            Parameter::CrossPlaneConductivity => ky = value,
            Parameter::Anisotropy => psi = value,
            Parameter::HeatCapacity => cv = value,
            Parameter::ContactResistance => rc = value,
        }

        let mut stack = self.clone();
        stack.layers[selector.layer] = Layer::from_si(old.thickness, ky, psi, cv, rc)?;
        Ok(stack)
    }

    fn layer(&self, selector: ParameterSelector) -> Result<&Layer, EvaluationError> {
        self.layers
            .get(selector.layer)
            .ok_or(EvaluationError::InvalidParameterSelector {
                parameter: selector.parameter.id(),
                layer: selector.layer,
            })
    }
}

fn check_len(field: &'static str, column: &[f64], expected: usize) -> Result<(), EvaluationError> {
    if column.len() == expected {
        Ok(())
    } else {
        Err(EvaluationError::LengthMismatch {
            field,
            expected,
            found: column.len(),
        })
    }
}

/// A per-layer material parameter that a sensitivity can be taken against.
///
/// The numeric ids are stable: `0 = ky`, `1 = ψ`, `2 = Cv`, `3 = Rc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Cross-plane conductivity `ky`.
    CrossPlaneConductivity,

    /// Anisotropy ratio `ψ = kx/ky`.
    Anisotropy,

    /// Volumetric heat capacity `Cv`.
    HeatCapacity,

    /// Contact resistance `Rc` of the interface above the layer.
    ContactResistance,
}

impl Parameter {
    /// All parameters, in id order.
    pub const ALL: [Self; 4] = [
        Self::CrossPlaneConductivity,
        Self::Anisotropy,
        Self::HeatCapacity,
        Self::ContactResistance,
    ];

    /// Stable numeric id.
    #[must_use]
    pub fn id(self) -> usize {
        match self {
            Self::CrossPlaneConductivity => 0,
            Self::Anisotropy => 1,
            Self::HeatCapacity => 2,
            Self::ContactResistance => 3,
        }
    }

    /// Looks up a parameter by its numeric id.
    #[must_use]
    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CrossPlaneConductivity => "ky",
            Self::Anisotropy => "psi",
            Self::HeatCapacity => "cv",
            Self::ContactResistance => "rc",
        };
        f.write_str(name)
    }
}

/// Identifies one parameter of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterSelector {
    pub parameter: Parameter,
    pub layer: usize,
}

impl ParameterSelector {
    #[must_use]
    pub fn new(parameter: Parameter, layer: usize) -> Self {
        Self { parameter, layer }
    }

    /// Builds a selector from a numeric parameter id and a layer index.
    ///
    /// The layer index is checked against a stack when the selector is used.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::InvalidParameterSelector`] for an unknown id.
    pub fn from_ids(parameter: usize, layer: usize) -> Result<Self, EvaluationError> {
        Parameter::from_id(parameter)
            .map(|p| Self::new(p, layer))
            .ok_or(EvaluationError::InvalidParameterSelector { parameter, layer })
    }

    /// Every parameter of every layer in a stack of `layers` layers,
    /// grouped by parameter.
    #[must_use]
    pub fn all(layers: usize) -> Vec<Self> {
        Parameter::ALL
            .into_iter()
            .flat_map(|p| (0..layers).map(move |layer| Self::new(p, layer)))
            .collect()
    }
}
