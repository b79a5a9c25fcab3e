//! Numerical solvers used by the sizing loops.
//!
//! Residual and objective closures are fallible: they return `Result<_, E>` for any error type
//! that can absorb a [`SolverError`], so model failures and solver failures travel through the
//! same channel.

pub mod maximize;
pub mod newton;

use thiserror::Error;

pub use maximize::{Maximum, maximize_1d};
pub use newton::{NewtonOptions, Root, solve_scalar, solve_system};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("no convergence after {iterations} iterations (residual norm {residual:e})")]
    NotConverged { iterations: usize, residual: f64 },
    #[error("line search stalled at iteration {iteration} (residual norm {residual:e})")]
    Stalled { iteration: usize, residual: f64 },
    #[error("singular jacobian at iteration {0}")]
    SingularJacobian(usize),
    #[error("residual is not finite at the initial guess")]
    NonFiniteResidual,
    #[error("residual has {equations} equations for {unknowns} unknowns")]
    DimensionMismatch { unknowns: usize, equations: usize },
    #[error("no maximum bracketed within {0} steps")]
    NoBracket(usize),
    #[error("bracket points do not define a parabola")]
    DegenerateParabola,
    #[error("optimizer failed: {0}")]
    Backend(String),
}
