use twine_solvers::equation::bisection;
use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

/// Solver configuration for the orifice mass flow solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassFlowConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Relative tolerance on the mass flow rate search variable.
    pub mass_flow_rel_tol: f64,

    /// Absolute tolerance for the mass flow residual (guess - calculated).
    pub residual_tol: MassRate,
}

impl Default for MassFlowConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            mass_flow_rel_tol: 1e-12,
            residual_tol: MassRate::new::<kilogram_per_second>(1e-15),
        }
    }
}

impl MassFlowConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: 0.0,
            x_rel_tol: self.mass_flow_rel_tol,
            residual_tol: self.residual_tol.get::<kilogram_per_second>(),
        }
    }
}
