//! Inverse design: tune model factors until the model reproduces an existing airplane.

use gam_config::ModelParameters;
use gam_propulsion::{PowerSystem, reference_power};
use gam_solver::{NewtonOptions, solve_scalar, solve_system};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inputs::{DesignMission, ResolvedMission, resolve_mission};
use crate::record::AirplaneDesign;
use crate::sizing::{Balance, design_from_mtow};
use crate::{DesignError, InputError};

/// Known characteristics of the airplane to reproduce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationTarget {
    pub mission: DesignMission,
    pub mtow_kg: f64,
    pub owe_kg: f64,
    #[serde(default)]
    pub payload_max_kg: Option<f64>,
}

/// Tuned parameters and the design they produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub parameters: ModelParameters,
    pub design: AirplaneDesign,
}

/// Tune `lod_factor` and `stdm_factor` (only `lod_factor` for battery airplanes) so that both OWE
/// estimates match the target OWE at the target MTOW and design range.
///
/// The returned parameters also pin the passenger mass and, when a maximum payload is given, the
/// max payload factor. `params` itself is left untouched.
pub fn tune_design(
    params: &ModelParameters,
    power_system: &PowerSystem,
    target: &CalibrationTarget,
) -> Result<Calibration, DesignError> {
    let resolved = resolve_mission(params, &target.mission)?;
    let range = resolved.require_range()?;
    for (field, value) in [("target mtow", target.mtow_kg), ("target owe", target.owe_kg)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(InputError::NonPositive { field, value }.into());
        }
    }

    let mut tuned = params.clone();
    tuned.tuning.pax_mass_kg = Some(resolved.pax_mass_kg);
    if let Some(payload_max) = target.payload_max_kg {
        tuned.tuning.max_payload_factor = payload_max / resolved.payload_kg;
    }

    let mtow = target.mtow_kg;
    let owe = target.owe_kg;
    let seed = design_from_mtow(&tuned, power_system, &target.mission, mtow)?;
    let options = NewtonOptions::default();

    if power_system.is_battery() {
        debug!(mtow, owe, seed = seed.lod_factor, "battery calibration");
        let root = solve_scalar(
            |lod_factor| {
                let mut trial = tuned.clone();
                trial.tuning.lod_factor = lod_factor;
                let point = evaluate(&trial, power_system, &resolved, mtow, range)?;
                Ok::<_, DesignError>(owe - point.owe_structure)
            },
            seed.lod_factor,
            &options,
        )?;
        tuned.tuning.lod_factor = root.x;
    } else {
        debug!(mtow, owe, lod = seed.lod_factor, stdm = seed.stdm_factor, "calibration");
        let root = solve_system(
            |x: &[f64]| {
                let mut trial = tuned.clone();
                trial.tuning.lod_factor = x[0];
                trial.tuning.stdm_factor = x[1];
                let point = evaluate(&trial, power_system, &resolved, mtow, range)?;
                Ok::<_, DesignError>(vec![owe - point.owe_performance, owe - point.owe_structure])
            },
            &[seed.lod_factor, seed.stdm_factor],
            &options,
        )?;
        tuned.tuning.lod_factor = root.x[0];
        tuned.tuning.stdm_factor = root.x[1];
    }
    for (quantity, value) in [
        ("lod factor", tuned.tuning.lod_factor),
        ("stdm factor", tuned.tuning.stdm_factor),
    ] {
        if value <= 0.0 {
            return Err(DesignError::NonPhysical { quantity, value });
        }
    }
    debug!(
        lod_factor = tuned.tuning.lod_factor,
        stdm_factor = tuned.tuning.stdm_factor,
        "calibration converged"
    );

    let design = AirplaneDesign::assemble(&tuned, power_system, &target.mission, &resolved, mtow, range)?;
    Ok(Calibration {
        parameters: tuned,
        design,
    })
}

fn evaluate(
    params: &ModelParameters,
    power_system: &PowerSystem,
    mission: &ResolvedMission,
    mtow: f64,
    range_m: f64,
) -> Result<crate::sizing::BalancePoint, DesignError> {
    Balance {
        params,
        power_system,
        mission,
    }
    .evaluate(mtow, range_m, reference_power(params, mtow))
}
