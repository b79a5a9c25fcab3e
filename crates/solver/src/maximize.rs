//! One-dimensional maximisation by uphill walking and a parabolic fit.

use tracing::trace;

use crate::SolverError;

/// Objective evaluations allowed while walking towards the maximum.
pub const MAX_WALK_STEPS: usize = 10_000;

/// Located maximum of a one-dimensional objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Maximum {
    pub x: f64,
    pub value: f64,
    pub evaluations: usize,
}

/// Maximise `objective` starting from `x0` with step `dx`.
///
/// The walk starts uphill (the step direction flips when `f(x0 + dx) < f(x0)`) and keeps
/// stepping while the objective increases. The last three points bracket the maximum and a
/// parabola through them gives the returned abscissa.
pub fn maximize_1d<F, E>(x0: f64, dx: f64, mut objective: F) -> Result<Maximum, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    let mut step = dx;
    let (mut xa, mut xb) = (x0, x0 + step);
    let (mut ya, mut yb) = (objective(xa)?, objective(xb)?);
    let mut evaluations = 2;

    if ya > yb {
        step = -step;
        std::mem::swap(&mut xa, &mut xb);
        std::mem::swap(&mut ya, &mut yb);
    }

    let mut xc = xb + step;
    let mut yc = objective(xc)?;
    evaluations += 1;

    while yb < yc {
        if evaluations >= MAX_WALK_STEPS {
            return Err(SolverError::NoBracket(evaluations).into());
        }
        (xa, xb) = (xb, xc);
        (ya, yb) = (yb, yc);
        xc = xb + step;
        yc = objective(xc)?;
        evaluations += 1;
        trace!(x = xc, value = yc, "uphill step");
    }

    let (a, b, _) = parabola([xa, xb, xc], [ya, yb, yc]).ok_or(SolverError::DegenerateParabola)?;
    if a == 0.0 {
        return Err(SolverError::DegenerateParabola.into());
    }
    let x = -b / (2.0 * a);
    let value = objective(x)?;
    Ok(Maximum {
        x,
        value,
        evaluations: evaluations + 1,
    })
}

/// Coefficients `(a, b, c)` of `a x^2 + b x + c` through three points, by Cramer's rule.
fn parabola(x: [f64; 3], y: [f64; 3]) -> Option<(f64, f64, f64)> {
    let det3 = |m: [[f64; 3]; 3]| {
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    };
    let rows = |col: Option<usize>| {
        let mut m = [[0.0; 3]; 3];
        for i in 0..3 {
            m[i] = [x[i] * x[i], x[i], 1.0];
            if let Some(c) = col {
                m[i][c] = y[i];
            }
        }
        m
    };
    let det = det3(rows(None));
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    Some((
        det3(rows(Some(0))) / det,
        det3(rows(Some(1))) / det,
        det3(rows(Some(2))) / det,
    ))
}
