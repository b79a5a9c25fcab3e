//! Newton root finding on top of argmin's line-searched Gauss-Newton solver.
//!
//! For a square system Gauss-Newton reduces to Newton's method. The backtracking line search
//! rejects trial points whose residual is not finite, which keeps the iterate inside the model's
//! domain.

use std::cell::{Cell, RefCell};

use argmin::core::{Error, Executor, Jacobian, Operator, State, TerminationReason};
use argmin::solver::gaussnewton::GaussNewtonLS;
use argmin::solver::linesearch::BacktrackingLineSearch;
use argmin::solver::linesearch::condition::ArmijoCondition;
use nalgebra::{DMatrix, DVector};
use tracing::trace;

use crate::SolverError;

type LineSearch = BacktrackingLineSearch<DVector<f64>, DVector<f64>, ArmijoCondition<f64>, f64>;

/// Iteration controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOptions {
    /// Residual norm accepted once the solver stops making progress.
    pub ftol: f64,
    pub max_iterations: usize,
    /// Relative finite-difference perturbation.
    pub fd_step: f64,
    /// Step contraction factor of the backtracking line search.
    pub backtrack: f64,
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self {
            ftol: 1e-3,
            max_iterations: 100,
            fd_step: 1.49012e-8,
            backtrack: 0.5,
        }
    }
}

/// Converged solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Root<T> {
    pub x: T,
    pub residual_norm: f64,
    pub iterations: usize,
}

/// Solve `residual(x) = 0` for a single unknown starting from `x0`.
pub fn solve_scalar<F, E>(mut residual: F, x0: f64, options: &NewtonOptions) -> Result<Root<f64>, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    let root = solve_system(|x: &[f64]| Ok::<_, E>(vec![residual(x[0])?]), &[x0], options)?;
    Ok(Root {
        x: root.x[0],
        residual_norm: root.residual_norm,
        iterations: root.iterations,
    })
}

/// Solve the square system `residual(x) = 0` starting from `x0`.
///
/// The Jacobian is built by forward differences. Errors raised by `residual` abort the
/// iteration and are returned unchanged.
pub fn solve_system<F, E>(mut residual: F, x0: &[f64], options: &NewtonOptions) -> Result<Root<Vec<f64>>, E>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
    E: From<SolverError>,
{
    let n = x0.len();
    let f0 = residual(x0)?;
    if f0.len() != n {
        return Err(SolverError::DimensionMismatch {
            unknowns: n,
            equations: f0.len(),
        }
        .into());
    }
    if f0.iter().any(|v| !v.is_finite()) {
        return Err(SolverError::NonFiniteResidual.into());
    }
    let norm0 = f0.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm0 == 0.0 {
        return Ok(Root {
            x: x0.to_vec(),
            residual_norm: 0.0,
            iterations: 0,
        });
    }

    let system = ResidualSystem {
        residual: RefCell::new(residual),
        failure: RefCell::new(None),
        unknowns: n,
        fd_step: options.fd_step,
        jacobians: Cell::new(0),
    };
    let solver = line_searched_solver(options).map_err(|e| SolverError::Backend(e.to_string()))?;

    let outcome = Executor::new(&system, solver)
        .configure(|state| {
            state
                .param(DVector::from_column_slice(x0))
                .max_iters(options.max_iterations as u64)
        })
        .run();

    if let Some(err) = system.failure.take() {
        return Err(err);
    }
    let result = outcome.map_err(|e| SolverError::Backend(e.to_string()))?;
    let state = result.state();
    let iterations = state.get_iter() as usize;
    let x: Vec<f64> = match state.get_param() {
        Some(x) => x.iter().copied().collect(),
        None => x0.to_vec(),
    };
    let fx = (system.residual.borrow_mut())(&x)?;
    let residual_norm = fx.iter().map(|v| v * v).sum::<f64>().sqrt();

    if matches!(state.get_termination_reason(), Some(TerminationReason::MaxItersReached)) {
        return Err(SolverError::NotConverged {
            iterations,
            residual: residual_norm,
        }
        .into());
    }
    if residual_norm.is_nan() || residual_norm > options.ftol {
        return Err(SolverError::Stalled {
            iteration: iterations,
            residual: residual_norm,
        }
        .into());
    }
    Ok(Root {
        x,
        residual_norm,
        iterations,
    })
}

fn line_searched_solver(options: &NewtonOptions) -> Result<GaussNewtonLS<LineSearch, f64>, Error> {
    let linesearch = BacktrackingLineSearch::new(ArmijoCondition::new(1e-4)?).rho(options.backtrack)?;
    Ok(GaussNewtonLS::new(linesearch))
}

/// Adapts a fallible residual closure to argmin's `Operator` and `Jacobian` traits.
///
/// argmin evaluates through `&self`, so the closure sits behind a `RefCell`. The first error it
/// returns is kept in `failure` and surfaces as a generic argmin error to stop the executor.
struct ResidualSystem<F, E> {
    residual: RefCell<F>,
    failure: RefCell<Option<E>>,
    unknowns: usize,
    fd_step: f64,
    jacobians: Cell<usize>,
}

impl<F, E> ResidualSystem<F, E>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
    E: From<SolverError>,
{
    fn evaluate(&self, x: &[f64]) -> Result<DVector<f64>, Error> {
        let values = (self.residual.borrow_mut())(x).and_then(|values| {
            if values.len() == self.unknowns {
                Ok(values)
            } else {
                Err(SolverError::DimensionMismatch {
                    unknowns: self.unknowns,
                    equations: values.len(),
                }
                .into())
            }
        });
        match values {
            Ok(values) => Ok(DVector::from_vec(values)),
            Err(err) => Err(self.fail(err)),
        }
    }

    fn fail(&self, err: E) -> Error {
        let mut failure = self.failure.borrow_mut();
        if failure.is_none() {
            *failure = Some(err);
        }
        Error::msg("residual evaluation failed")
    }
}

impl<F, E> Operator for &ResidualSystem<F, E>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
    E: From<SolverError>,
{
    type Param = DVector<f64>;
    type Output = DVector<f64>;

    fn apply(&self, param: &Self::Param) -> Result<Self::Output, Error> {
        self.evaluate(param.as_slice())
    }
}

impl<F, E> Jacobian for &ResidualSystem<F, E>
where
    F: FnMut(&[f64]) -> Result<Vec<f64>, E>,
    E: From<SolverError>,
{
    type Param = DVector<f64>;
    type Jacobian = DMatrix<f64>;

    fn jacobian(&self, param: &Self::Param) -> Result<Self::Jacobian, Error> {
        let iteration = self.jacobians.get();
        self.jacobians.set(iteration + 1);

        let fx = self.evaluate(param.as_slice())?;
        let mut jacobian = DMatrix::zeros(self.unknowns, self.unknowns);
        for j in 0..self.unknowns {
            let h = self.fd_step * param[j].abs().max(1.0);
            let mut shifted = param.clone();
            shifted[j] += h;
            let fp = self.evaluate(shifted.as_slice())?;
            jacobian.set_column(j, &((fp - &fx) / h));
        }
        trace!(iteration, residual = fx.norm(), "newton jacobian");

        let det = jacobian.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(self.fail(SolverError::SingularJacobian(iteration).into()));
        }
        Ok(jacobian)
    }
}
