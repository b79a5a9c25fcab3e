//! Operating weight empty seen from the structure and from the mission.

use gam_config::ModelParameters;
use gam_core::kinds::Category;
use gam_propulsion::{PowerSystem, energy_storage_mass, propulsion_mass};
use serde::{Deserialize, Serialize};

use crate::DesignError;
use crate::mission::{MissionContext, MissionFuel};

/// Standard manufacturer empty weight regression: MWE without furnishing (kg).
pub fn standard_mass(params: &ModelParameters, mtow: f64) -> f64 {
    let [a, b, c] = params.airframe.standard_mass_factors;
    (a * mtow + b) * mtow + c
}

pub fn furnishing(params: &ModelParameters, category: Category, npax: u32) -> f64 {
    params.category(category).furnishing_per_pax_kg * f64::from(npax)
}

/// Operator items, proportional to passengers and design distance.
pub fn operator_items(params: &ModelParameters, npax: u32, distance_m: f64) -> f64 {
    params.operations.operator_item_index * f64::from(npax) * distance_m
}

/// Bottom-up empty weight build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralMass {
    pub owe_kg: f64,
    pub operator_items_kg: f64,
    pub mwe_kg: f64,
    pub furnishing_kg: f64,
    pub std_mwe_kg: f64,
    /// Standard mass after the structural tuning factor and shift.
    pub basic_mwe_kg: f64,
    pub propulsion_kg: f64,
    pub fuel_cell_kg: f64,
    pub energy_storage_kg: f64,
    pub fuel_density: f64,
}

/// OWE from the structure: basic airframe, propulsion, storage, fuel cell, furnishing and items.
pub fn owe_structure(
    params: &ModelParameters,
    ps: &PowerSystem,
    category: Category,
    npax: u32,
    mtow: f64,
    distance_m: f64,
    total_power: f64,
    max_fuel: f64,
    max_energy: f64,
) -> Result<StructuralMass, DesignError> {
    let furnishing_kg = furnishing(params, category, npax);
    let operator_items_kg = operator_items(params, npax, distance_m);
    let propulsion = propulsion_mass(&params.propulsion, ps, total_power);
    let storage = energy_storage_mass(&params.storage, ps, max_fuel, max_energy)?;

    let basic_mwe_kg = standard_mass(params, mtow) * params.tuning.stdm_factor + params.tuning.stdm_shift_kg;
    let std_mwe_kg = basic_mwe_kg + propulsion.propulsion_kg + storage.mass_kg + propulsion.fuel_cell_kg;
    let mwe_kg = std_mwe_kg + furnishing_kg;

    Ok(StructuralMass {
        owe_kg: mwe_kg + operator_items_kg,
        operator_items_kg,
        mwe_kg,
        furnishing_kg,
        std_mwe_kg,
        basic_mwe_kg,
        propulsion_kg: propulsion.propulsion_kg,
        fuel_cell_kg: propulsion.fuel_cell_kg,
        energy_storage_kg: storage.mass_kg,
        fuel_density: storage.fuel_density,
    })
}

/// OWE implied by flying the design mission at MTOW.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceMass {
    pub owe_kg: f64,
    pub payload_kg: f64,
    /// Tank capacity (kg).
    pub max_fuel_kg: f64,
    /// Battery capacity (J).
    pub max_energy_j: f64,
    pub mission: MissionFuel,
}

/// OWE from the mission: `mtow - payload - total_fuel`, with storage sized by the max fuel factor.
pub fn owe_performance(ctx: &MissionContext<'_>, payload: f64, range_m: f64) -> Result<PerformanceMass, DesignError> {
    let mission = ctx.total_fuel(ctx.mtow, range_m)?;
    let factor = ctx.params.tuning.max_fuel_factor;
    Ok(PerformanceMass {
        owe_kg: ctx.mtow - payload - mission.total_fuel_kg,
        payload_kg: payload,
        max_fuel_kg: mission.total_fuel_kg * factor,
        max_energy_j: mission.total_energy_j * factor,
        mission,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standard_mass_regression() {
        let params = ModelParameters::default();
        let mtow = 70_000.0;
        let expected = (-3.189_523_59e-7 * mtow + 0.422_840_552) * mtow - 30.0;
        assert_relative_eq!(standard_mass(&params, mtow), expected, epsilon = 1e-9);
    }

    #[test]
    fn allowances_scale_with_passengers() {
        let params = ModelParameters::default();
        assert_eq!(furnishing(&params, Category::LongRange, 300), 9_000.0);
        assert_relative_eq!(operator_items(&params, 100, 5.0e6), 2_500.0, epsilon = 1e-9);
    }
}
