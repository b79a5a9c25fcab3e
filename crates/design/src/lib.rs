//! Airplane design façade: mission resolution, mass-mission balance and the studies built on a
//! converged design.

pub mod calibration;
pub mod cost;
pub mod flight;
pub mod inputs;
pub mod mass;
pub mod mission;
pub mod payload_range;
pub mod record;
pub mod sizing;

use gam_atmosphere::AtmosphereError;
use gam_core::kinds::Category;
use gam_propulsion::PowerSystemError;
use gam_solver::SolverError;
use thiserror::Error;

pub use facade::*;
pub use gam_propulsion as propulsion;

mod facade;

/// Missing or contradictory inputs, detected before any solve starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("no category given; npax and range are both needed to guess one")]
    MissingCategoryInputs,
    #[error("no category covers {npax} passengers over {range_km:.0} km")]
    NoMatchingCategory { npax: u32, range_km: f64 },
    #[error("either npax or payload must be given")]
    MissingLoad,
    #[error("category {0} has no default cruise speed; give one explicitly")]
    MissingSpeed(Category),
    #[error("a design range is required")]
    MissingRange,
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("seat cost criterion needs a passenger count")]
    NoPassengers,
    #[error("invalid power system: {0}")]
    PowerSystem(#[from] PowerSystemError),
}

/// Failures of the design computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("convergence problem: {0}")]
    Convergence(#[from] SolverError),
    #[error("convergence problem: {quantity} ended at non-physical value {value}")]
    NonPhysical { quantity: &'static str, value: f64 },
    #[error("atmosphere model failed: {0}")]
    Atmosphere(#[from] AtmosphereError),
}

impl From<PowerSystemError> for DesignError {
    fn from(err: PowerSystemError) -> Self {
        DesignError::Input(err.into())
    }
}

impl DesignError {
    /// Solver failures and non-physical roots both mean the balance could not be closed.
    pub fn is_convergence(&self) -> bool {
        matches!(self, DesignError::Convergence(_) | DesignError::NonPhysical { .. })
    }
}
