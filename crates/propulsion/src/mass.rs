//! Installed power, propulsion system mass and energy storage mass.

use gam_atmosphere::{AtmosphereError, fuel_density};
use gam_config::{ModelParameters, PropulsionParameters, StorageTechnology};
use gam_core::kinds::{EnergyType, EngineType, ThrusterType};
use gam_core::units::kw_to_w;

use crate::PowerSystem;

/// Propulsion chain mass split.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PropulsionMass {
    /// Engines, power electronics and thrusters (kg).
    pub propulsion_kg: f64,
    /// Fuel cell stacks and their balance of plant (kg).
    pub fuel_cell_kg: f64,
}

/// Tank or battery mass together with the density of what it stores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyStorage {
    pub mass_kg: f64,
    /// Fuel (or battery cell) density (kg/m³).
    pub fuel_density: f64,
}

/// Total installed power for an airplane of the given MTOW (W).
pub fn reference_power(params: &ModelParameters, mtow: f64) -> f64 {
    let [a, b, c] = params.propulsion.ref_power_factors;
    (a * mtow + b) * mtow + c + params.tuning.delta_power_w
}

/// Mass of the propulsion chain delivering `total_power` (W).
pub fn propulsion_mass(params: &PropulsionParameters, ps: &PowerSystem, total_power: f64) -> PropulsionMass {
    let pd = &params.power_density_kw_kg;
    let per = |density_kw_kg: f64| total_power / kw_to_w(density_kw_kg);

    let propulsion_kg = match ps.engine_type() {
        EngineType::Piston => per(pd.piston) + per(pd.propeller),
        EngineType::Turboprop => per(pd.turboprop) + per(pd.propeller),
        EngineType::Turbofan => per(pd.turbofan),
        EngineType::Emotor => {
            let thruster = match ps.thruster_type() {
                ThrusterType::Fan => pd.fan,
                _ => pd.propeller,
            };
            per(pd.emotor) + per(pd.power_electronics) + per(thruster)
        }
    };
    let fuel_cell_kg = if ps.has_fuel_cell() {
        (total_power / params.emotor_efficiency) / kw_to_w(pd.fuel_cell)
    } else {
        0.0
    };

    PropulsionMass {
        propulsion_kg,
        fuel_cell_kg,
    }
}

/// Stored fuel mass over fuel plus tank mass; `None` when the tank is folded into the structure.
pub fn tank_gravimetric_index(storage: &StorageTechnology, energy: EnergyType) -> Result<Option<f64>, AtmosphereError> {
    let pressure_vessel = |pressure: f64, density: f64| {
        1.0 / (1.0 + pressure / (storage.tank_efficiency_factor() * density))
    };
    let index = match energy {
        EnergyType::CompressedH2 => {
            let pressure = storage.gh2_pressure();
            Some(pressure_vessel(pressure, fuel_density(energy, Some(pressure))?))
        }
        EnergyType::LiquidH2 => Some(storage.lh2_tank_gravimetric_index),
        EnergyType::LiquidCh4 => {
            let ratio = fuel_density(EnergyType::LiquidH2, None)? / fuel_density(energy, None)?;
            Some(1.0 / (1.0 + ratio * (1.0 / storage.lh2_tank_gravimetric_index - 1.0)))
        }
        EnergyType::LiquidNh3 => Some(pressure_vessel(
            storage.lnh3_pressure(),
            fuel_density(energy, None)?,
        )),
        EnergyType::Petrol
        | EnergyType::Kerosene
        | EnergyType::Gasoline
        | EnergyType::EFuel
        | EnergyType::Battery => None,
    };
    Ok(index)
}

/// Mass of the tanks or battery sized for `max_fuel` (kg) or `max_energy` (J).
pub fn energy_storage_mass(
    storage: &StorageTechnology,
    ps: &PowerSystem,
    max_fuel: f64,
    max_energy: f64,
) -> Result<EnergyStorage, AtmosphereError> {
    let energy = ps.energy_type();
    let pressure = (energy == EnergyType::CompressedH2).then(|| storage.gh2_pressure());
    let density = fuel_density(energy, pressure)?;

    let mass_kg = if energy.is_battery() {
        max_energy / storage.battery_energy_density()
    } else {
        match tank_gravimetric_index(storage, energy)? {
            Some(index) => max_fuel * (1.0 / index - 1.0),
            None => 0.0,
        }
    };

    Ok(EnergyStorage {
        mass_kg,
        fuel_density: density,
    })
}
