//! Evaluation sessions: a fixed frequency set and integration grid.

use num_complex::Complex64;
use tracing::{debug, warn};
use uom::si::{angular_velocity::radian_per_second, f64::AngularVelocity};

use crate::support::quadrature::{LogGrid, integrate_each, integrate_rows_each};

use super::{
    EvaluationError, Formulation, IntegrationConfig, Jacobian, LayerStack, Limits,
    ParameterSelector, Response, borca_tasciuc,
    layer::finite_positive,
    olson_graham_chen,
    sensitivity::{self, Workspace},
};

/// Frequencies and integration grid shared by every evaluation.
///
/// A session is immutable once built, so one session can evaluate many
/// stacks (for example inside a fitting loop) and can be shared across threads.
/// The grid is interpreted as `λ` by the Borca-Tasciuc methods and as `χ` by
/// the Olson-Graham-Chen methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    omegas: Vec<f64>,
    grid: LogGrid,
    limits: Limits,
    layer_count: Option<usize>,
}

/// Collects the settings of a [`Session`].
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    omegas: Option<Vec<f64>>,
    integration: Option<IntegrationConfig>,
    limits: Limits,
    layer_count: Option<usize>,
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Angular frequencies, in the order results should be reported.
    #[must_use]
    pub fn frequencies(mut self, omegas: impl IntoIterator<Item = AngularVelocity>) -> Self {
        self.omegas = Some(
            omegas
                .into_iter()
                .map(|w| w.get::<radian_per_second>())
                .collect(),
        );
        self
    }

    /// Integration bounds and sample count.
    #[must_use]
    pub fn integration(mut self, config: IntegrationConfig) -> Self {
        self.integration = Some(config);
        self
    }

    #[must_use]
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Requires every evaluated stack to have exactly `layers` layers.
    #[must_use]
    pub fn layer_count(mut self, layers: usize) -> Self {
        self.layer_count = Some(layers);
        self
    }

    /// Validates the settings and builds the integration grid.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::ConfigurationNotInitialized`] if frequencies
    /// or integration bounds were never supplied, and the matching
    /// [`EvaluationError`] variant if any setting is out of range.
    pub fn build(self) -> Result<Session, EvaluationError> {
        let omegas = self
            .omegas
            .ok_or(EvaluationError::ConfigurationNotInitialized {
                missing: "frequencies",
            })?;
        let integration = self
            .integration
            .ok_or(EvaluationError::ConfigurationNotInitialized {
                missing: "integration bounds",
            })?;

        let max = self.limits.max_frequencies;
        if omegas.is_empty() || omegas.len() > max {
            return Err(EvaluationError::InvalidFrequencyCount {
                count: omegas.len(),
                max,
            });
        }
        for &omega in &omegas {
            finite_positive(omega, "angular frequency")?;
        }

        if let Some(count) = self.layer_count {
            check_layer_count(count, self.limits)?;
        }

        let grid = integration.grid()?;

        debug!(
            frequencies = omegas.len(),
            lower = grid.lower(),
            upper = grid.upper(),
            points = grid.len(),
            "built 3ω session"
        );

        Ok(Session {
            omegas,
            grid,
            limits: self.limits,
            layer_count: self.layer_count,
        })
    }
}

fn check_layer_count(count: usize, limits: Limits) -> Result<(), EvaluationError> {
    if count == 0 || count > limits.max_layers {
        return Err(EvaluationError::InvalidLayerCount {
            count,
            max: limits.max_layers,
        });
    }
    Ok(())
}

impl Session {
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Angular frequencies in rad/s.
    #[must_use]
    pub fn frequencies(&self) -> &[f64] {
        &self.omegas
    }

    /// Integration sample points.
    #[must_use]
    pub fn grid(&self) -> &LogGrid {
        &self.grid
    }

    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Integrates the stack's response in the given formulation.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if the stack does not fit this session.
    pub fn evaluate(
        &self,
        formulation: Formulation,
        stack: &LayerStack,
    ) -> Result<Response, EvaluationError> {
        match formulation {
            Formulation::BorcaTasciuc => self.borca_tasciuc(stack),
            Formulation::OlsonGrahamChen => self.olson_graham_chen(stack),
        }
    }

    /// Borca-Tasciuc integral over `λ` for every frequency.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if the stack does not fit this session.
    pub fn borca_tasciuc(&self, stack: &LayerStack) -> Result<Response, EvaluationError> {
        self.check_stack(stack)?;
        self.log_evaluation(Formulation::BorcaTasciuc, stack);

        let values = integrate_each(&self.grid, &self.omegas, || (), |_, lambda, omega| {
            borca_tasciuc::integrand(stack, lambda, omega)
        });

        Ok(self.respond(Formulation::BorcaTasciuc, stack, values))
    }

    /// Olson-Graham-Chen integral over `χ` for every frequency.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if the stack does not fit this session.
    pub fn olson_graham_chen(&self, stack: &LayerStack) -> Result<Response, EvaluationError> {
        self.check_stack(stack)?;
        self.log_evaluation(Formulation::OlsonGrahamChen, stack);

        let values = integrate_each(
            &self.grid,
            &self.omegas,
            || Vec::with_capacity(stack.len()),
            |states, chi, omega| olson_graham_chen::integrand(stack, chi, omega, states),
        );

        Ok(self.respond(Formulation::OlsonGrahamChen, stack, values))
    }

    /// Sensitivities of the Olson-Graham-Chen integral.
    ///
    /// Row `r` of the result holds the derivative with respect to
    /// `selectors[r]` at every frequency.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::InvalidParameterSelector`] if a selector
    /// names a layer the stack does not have, or another [`EvaluationError`]
    /// if the stack does not fit this session.
    pub fn olson_graham_chen_jacobian(
        &self,
        stack: &LayerStack,
        selectors: &[ParameterSelector],
    ) -> Result<Jacobian, EvaluationError> {
        self.check_stack(stack)?;
        if let Some(bad) = selectors.iter().find(|s| s.layer >= stack.len()) {
            return Err(EvaluationError::InvalidParameterSelector {
                parameter: bad.parameter.id(),
                layer: bad.layer,
            });
        }

        debug!(
            layers = stack.len(),
            frequencies = self.omegas.len(),
            parameters = selectors.len(),
            "evaluating olson-graham-chen sensitivities"
        );

        let per_frequency = integrate_rows_each(
            &self.grid,
            &self.omegas,
            selectors.len(),
            || Workspace::with_layers(stack.len()),
            |ws, chi, omega, values| {
                sensitivity::integrands(stack, chi, omega, selectors, ws, values);
            },
        );

        let jacobian = Jacobian::from_frequency_rows(selectors.to_vec(), &per_frequency);
        if !jacobian.as_slice().iter().all(|v| v.is_finite()) {
            warn!(
                layers = stack.len(),
                "olson-graham-chen sensitivities contain non-finite values"
            );
        }
        Ok(jacobian)
    }

    /// Borca-Tasciuc integrand at one `λ`, for every frequency.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if the stack does not fit this session.
    pub fn borca_tasciuc_integrand(
        &self,
        stack: &LayerStack,
        lambda: f64,
    ) -> Result<Vec<Complex64>, EvaluationError> {
        self.check_stack(stack)?;
        Ok(self
            .omegas
            .iter()
            .map(|&omega| borca_tasciuc::integrand(stack, lambda, omega))
            .collect())
    }

    /// Olson-Graham-Chen integrand at one `χ`, for every frequency.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if the stack does not fit this session.
    pub fn olson_graham_chen_integrand(
        &self,
        stack: &LayerStack,
        chi: f64,
    ) -> Result<Vec<Complex64>, EvaluationError> {
        self.check_stack(stack)?;
        let mut states = Vec::with_capacity(stack.len());
        Ok(self
            .omegas
            .iter()
            .map(|&omega| olson_graham_chen::integrand(stack, chi, omega, &mut states))
            .collect())
    }

    fn check_stack(&self, stack: &LayerStack) -> Result<(), EvaluationError> {
        check_layer_count(stack.len(), self.limits)?;
        if let Some(expected) = self.layer_count {
            if stack.len() != expected {
                return Err(EvaluationError::LengthMismatch {
                    field: "layers",
                    expected,
                    found: stack.len(),
                });
            }
        }
        Ok(())
    }

    fn log_evaluation(&self, formulation: Formulation, stack: &LayerStack) {
        debug!(
            %formulation,
            layers = stack.len(),
            frequencies = self.omegas.len(),
            boundary = %stack.boundary(),
            "evaluating 3ω response"
        );
    }

    fn respond(
        &self,
        formulation: Formulation,
        stack: &LayerStack,
        values: Vec<Complex64>,
    ) -> Response {
        let response = Response::new(
            formulation,
            self.omegas.clone(),
            values,
            stack.layers()[0].ky,
            stack.b(),
        );
        if !response.is_finite() {
            warn!(
                %formulation,
                layers = stack.len(),
                "3ω response contains non-finite values"
            );
        }
        response
    }
}
