//! What-if missions flown by an existing design.

use gam_config::ModelParameters;
use gam_solver::{NewtonOptions, solve_scalar};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::DesignError;
use crate::mission::MissionFuel;
use crate::record::AirplaneDesign;

/// Payload expressed in passengers or in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Load {
    Passengers(u32),
    Mass(f64),
}

impl Load {
    /// Payload mass for a given passenger allowance.
    pub fn payload_kg(self, pax_mass_kg: f64) -> f64 {
        match self {
            Load::Passengers(npax) => f64::from(npax) * pax_mass_kg,
            Load::Mass(kg) => kg,
        }
    }

    /// Passenger equivalent, fractional when the load is a mass.
    pub fn passengers(self, pax_mass_kg: f64) -> f64 {
        match self {
            Load::Passengers(npax) => f64::from(npax),
            Load::Mass(kg) => kg / pax_mass_kg,
        }
    }
}

/// One evaluated mission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightResult {
    pub payload_kg: f64,
    pub fuel: MissionFuel,
    pub pk_o_mass: f64,
    pub pk_o_energy: f64,
}

impl FlightResult {
    fn new(design: &AirplaneDesign, fuel: MissionFuel, payload_kg: f64, npax: f64) -> Self {
        Self {
            payload_kg,
            pk_o_mass: npax * fuel.distance_m / design.owe(),
            pk_o_energy: npax * fuel.distance_m / fuel.total_energy_j,
            fuel,
        }
    }

    pub fn tow_kg(&self) -> f64 {
        self.fuel.tow_kg
    }

    pub fn distance_m(&self) -> f64 {
        self.fuel.distance_m
    }
}

/// Fly `distance_m` from `tow`; the payload is whatever mass is left.
pub fn fly_tow_n_distance(
    params: &ModelParameters,
    design: &AirplaneDesign,
    tow: f64,
    distance_m: f64,
) -> Result<FlightResult, DesignError> {
    let fuel = design.context(params).total_fuel(tow, distance_m)?;
    let payload = tow - design.owe() - fuel.total_fuel_kg;
    Ok(FlightResult::new(design, fuel, payload, payload / design.pax_mass_kg))
}

/// Distance reachable from `tow` with `load` on board.
///
/// Battery airplanes carry the design mission energy whatever the payload.
pub fn fly_tow(
    params: &ModelParameters,
    design: &AirplaneDesign,
    tow: f64,
    load: Load,
) -> Result<FlightResult, DesignError> {
    let payload = load.payload_kg(design.pax_mass_kg);
    let distance = solve_distance(params, design, tow, payload)?;
    if distance < 0.0 {
        return Err(DesignError::NonPhysical {
            quantity: "distance",
            value: distance,
        });
    }
    let fuel = design.context(params).total_fuel(tow, distance)?;
    Ok(FlightResult::new(
        design,
        fuel,
        payload,
        load.passengers(design.pax_mass_kg),
    ))
}

/// Take-off weight needed to fly `distance_m` with `load` on board.
pub fn fly_distance(
    params: &ModelParameters,
    design: &AirplaneDesign,
    distance_m: f64,
    load: Load,
) -> Result<FlightResult, DesignError> {
    let payload = load.payload_kg(design.pax_mass_kg);
    let ctx = design.context(params);
    let owe = design.owe();

    let tow = if design.power_system.is_battery() {
        owe + payload
    } else {
        debug!(distance_m, payload, "take-off weight solve");
        let root = solve_scalar(
            |tow| Ok::<_, DesignError>(tow - (owe + payload + ctx.total_fuel(tow, distance_m)?.total_fuel_kg)),
            0.75 * design.mtow(),
            &NewtonOptions::default(),
        )?;
        if root.x <= 0.0 {
            return Err(DesignError::NonPhysical {
                quantity: "take-off weight",
                value: root.x,
            });
        }
        root.x
    };

    let fuel = ctx.total_fuel(tow, distance_m)?;
    Ok(FlightResult::new(
        design,
        fuel,
        payload,
        load.passengers(design.pax_mass_kg),
    ))
}

/// Root of the take-off weight balance on distance, without sign check.
pub(crate) fn solve_distance(
    params: &ModelParameters,
    design: &AirplaneDesign,
    tow: f64,
    payload: f64,
) -> Result<f64, DesignError> {
    let ctx = design.context(params);
    let owe = design.owe();
    let design_energy = design.energy.total_energy_j;
    let battery = design.power_system.is_battery();

    debug!(tow, payload, "distance solve");
    let root = solve_scalar(
        |distance| {
            let fuel = ctx.total_fuel(tow, distance)?;
            let residual = if battery {
                design_energy - fuel.total_energy_j
            } else {
                tow - (owe + payload + fuel.total_fuel_kg)
            };
            Ok::<_, DesignError>(residual)
        },
        0.75 * design.nominal_range_m,
        &NewtonOptions::default(),
    )?;
    Ok(root.x)
}
