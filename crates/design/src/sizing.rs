//! Mass-mission balance: the solves that turn a mission into an airplane.

use gam_config::ModelParameters;
use gam_core::kinds::TrafficZone;
use gam_core::units::km_to_m;
use gam_propulsion::{PowerSystem, reference_power};
use gam_solver::{NewtonOptions, maximize_1d, solve_scalar};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cost::operating_cost;
use crate::inputs::{DesignMission, ResolvedMission, resolve_mission};
use crate::mass::{owe_performance, owe_structure};
use crate::mission::MissionContext;
use crate::record::AirplaneDesign;
use crate::{DesignError, InputError};

/// First range tried by [`best_design`].
pub const BEST_DESIGN_START_KM: f64 = 400.0;
/// Range step of the uphill walk in [`best_design`].
pub const BEST_DESIGN_STEP_KM: f64 = 50.0;

/// Difference between the OWE implied by the mission and the OWE built from the structure.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Balance<'a> {
    pub params: &'a ModelParameters,
    pub power_system: &'a PowerSystem,
    pub mission: &'a ResolvedMission,
}

/// Both OWE estimates at one `(mtow, range)` point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BalancePoint {
    pub owe_performance: f64,
    pub owe_structure: f64,
}

impl BalancePoint {
    pub fn residual(&self) -> f64 {
        self.owe_performance - self.owe_structure
    }
}

impl Balance<'_> {
    pub fn evaluate(&self, mtow: f64, range_m: f64, total_power: f64) -> Result<BalancePoint, DesignError> {
        let ctx = MissionContext {
            params: self.params,
            power_system: self.power_system,
            mtow,
            total_power,
            cruise_speed: self.mission.cruise_speed,
            altitudes: self.mission.altitudes,
            reserve: self.mission.reserve,
        };
        let perf = owe_performance(&ctx, self.mission.payload_kg, range_m)?;
        let structure = owe_structure(
            self.params,
            self.power_system,
            self.mission.category,
            self.mission.npax,
            mtow,
            range_m,
            total_power,
            perf.max_fuel_kg,
            perf.max_energy_j,
        )?;
        Ok(BalancePoint {
            owe_performance: perf.owe_kg,
            owe_structure: structure.owe_kg,
        })
    }
}

/// Size the airplane for its design range: find the MTOW where both OWE estimates agree.
pub fn design_airplane(
    params: &ModelParameters,
    power_system: &PowerSystem,
    mission: &DesignMission,
) -> Result<AirplaneDesign, DesignError> {
    let resolved = resolve_mission(params, mission)?;
    let range = resolved.require_range()?;
    let balance = Balance {
        params,
        power_system,
        mission: &resolved,
    };

    let seed = 0.9e-3 * (resolved.payload_kg / resolved.pax_mass_kg) * range;
    debug!(category = %resolved.category, payload = resolved.payload_kg, range, seed, "mass-mission balance");
    let root = solve_scalar(
        |mtow| Ok::<_, DesignError>(balance.evaluate(mtow, range, reference_power(params, mtow))?.residual()),
        seed,
        &NewtonOptions::default(),
    )?;
    if root.x <= 0.0 {
        return Err(DesignError::NonPhysical {
            quantity: "mtow",
            value: root.x,
        });
    }
    debug!(mtow = root.x, iterations = root.iterations, "balance converged");

    AirplaneDesign::assemble(params, power_system, mission, &resolved, root.x, range)
}

/// Size the airplane for a fixed MTOW: find the design range where both OWE estimates agree.
///
/// The mission range, when given, only serves the category guess.
pub fn design_from_mtow(
    params: &ModelParameters,
    power_system: &PowerSystem,
    mission: &DesignMission,
    mtow: f64,
) -> Result<AirplaneDesign, DesignError> {
    if !(mtow.is_finite() && mtow > 0.0) {
        return Err(InputError::NonPositive {
            field: "mtow",
            value: mtow,
        }
        .into());
    }
    let resolved = resolve_mission(params, mission)?;
    let balance = Balance {
        params,
        power_system,
        mission: &resolved,
    };
    let total_power = reference_power(params, mtow);

    debug!(category = %resolved.category, mtow, "range balance");
    let root = solve_scalar(
        |range| Ok::<_, DesignError>(balance.evaluate(mtow, range, total_power)?.residual()),
        40.0 * mtow,
        &NewtonOptions::default(),
    )?;
    if root.x <= 0.0 {
        return Err(DesignError::NonPhysical {
            quantity: "design range",
            value: root.x,
        });
    }
    debug!(range = root.x, iterations = root.iterations, "range balance converged");

    let mission = mission.clone().with_range(root.x);
    AirplaneDesign::assemble(params, power_system, &mission, &resolved, mtow, root.x)
}

/// Figure of merit maximised by [`best_design`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignCriterion {
    /// Passenger-metres per kg of OWE.
    PkOverMass,
    /// Passenger-metres per joule of mission energy.
    PkOverEnergy,
    /// Negated direct operating cost per seat and flight.
    SeatCostEfficiency,
}

impl DesignCriterion {
    pub fn evaluate(self, params: &ModelParameters, design: &AirplaneDesign) -> Result<f64, DesignError> {
        match self {
            DesignCriterion::PkOverMass => Ok(design.pk_o_mass),
            DesignCriterion::PkOverEnergy => Ok(design.pk_o_energy),
            DesignCriterion::SeatCostEfficiency => {
                if design.npax == 0 {
                    return Err(InputError::NoPassengers.into());
                }
                let cost = operating_cost(params, design, TrafficZone::default())?;
                Ok(-cost.flight_direct_operating_cost / f64::from(design.npax))
            }
        }
    }
}

/// Outcome of a design range optimisation.
#[derive(Debug, Clone, PartialEq)]
pub struct BestDesign {
    pub range_m: f64,
    pub criterion: DesignCriterion,
    pub value: f64,
    pub design: AirplaneDesign,
}

/// Design range maximising `criterion` for the mission's capacity.
pub fn best_design(
    params: &ModelParameters,
    power_system: &PowerSystem,
    mission: &DesignMission,
    criterion: DesignCriterion,
) -> Result<BestDesign, DesignError> {
    let objective = |range: f64| {
        let design = design_airplane(params, power_system, &mission.clone().with_range(range))?;
        criterion.evaluate(params, &design)
    };
    let best = maximize_1d(km_to_m(BEST_DESIGN_START_KM), km_to_m(BEST_DESIGN_STEP_KM), objective)?;
    debug!(?criterion, range = best.x, value = best.value, evaluations = best.evaluations, "best design");

    let design = design_airplane(params, power_system, &mission.clone().with_range(best.x))?;
    Ok(BestDesign {
        range_m: best.x,
        criterion,
        value: best.value,
        design,
    })
}
