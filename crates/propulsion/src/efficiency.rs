//! Overall propulsion efficiency and specific consumption by engine architecture.

use gam_atmosphere::fuel_heating_value;
use gam_config::ModelParameters;
use gam_core::kinds::{EnergyType, EngineType, ThrusterType};
use gam_core::units::{kg_per_kwh_to_kg_per_j, w_to_kw};
use serde::{Deserialize, Serialize};

use crate::PowerSystem;

/// Fuel on which the piston PSFC is quoted.
const PISTON_REFERENCE_FUEL: EnergyType = EnergyType::Gasoline;
/// Fuel on which the turboshaft PSFC regression is quoted.
const TURBOSHAFT_REFERENCE_FUEL: EnergyType = EnergyType::Kerosene;

/// Specific consumption at cruise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SpecificConsumption {
    /// Power specific fuel consumption (kg/s/W).
    Power(f64),
    /// Thrust specific fuel consumption (kg/s/N).
    Thrust(f64),
    /// Electric motors burn nothing.
    None,
}

/// Efficiency from fuel (or battery) energy to propulsive work.
///
/// `tas` is the cruise true airspeed (m/s) and `max_power` the installed power of one engine (W).
pub fn overall_efficiency(params: &ModelParameters, ps: &PowerSystem, tas: f64, max_power: f64) -> f64 {
    let prop = &params.propulsion;
    let pse = params.tuning.prop_system_efficiency;
    match ps.engine_type() {
        EngineType::Piston => {
            let fhv = reference_heating_value(PISTON_REFERENCE_FUEL);
            prop.propeller_efficiency * pse / (fhv * prop.piston_psfc())
        }
        EngineType::Turboprop => {
            let fhv = reference_heating_value(TURBOSHAFT_REFERENCE_FUEL);
            prop.propeller_efficiency * pse / (fhv * turboshaft_psfc(params, max_power))
        }
        EngineType::Turbofan => {
            // Turbofans are validated to burn fuel.
            let fhv = ps.heating_value().unwrap_or(0.0);
            let eff_th = prop.turbofan_thermal_efficiency;
            let bpr = ps.bypass_ratio().unwrap_or(0.0);
            let eff_pr = 1.0
                / (0.5
                    + (0.25 + (prop.fuel_mixture * eff_th * fhv) / (2.0 * (1.0 + bpr) * tas * tas)).sqrt());
            eff_th * eff_pr * pse
        }
        EngineType::Emotor => {
            let thruster = match ps.thruster_type() {
                ThrusterType::Fan => prop.fan_efficiency,
                _ => prop.propeller_efficiency,
            };
            let fuel_cell = if ps.has_fuel_cell() {
                prop.fuel_cell_efficiency
            } else {
                1.0
            };
            thruster * prop.emotor_efficiency * fuel_cell * pse
        }
    }
}

/// Specific consumption companion of [`overall_efficiency`].
pub fn specific_consumption(
    params: &ModelParameters,
    ps: &PowerSystem,
    tas: f64,
    max_power: f64,
) -> SpecificConsumption {
    let Some(fhv) = ps.heating_value() else {
        return SpecificConsumption::None;
    };
    let eff = overall_efficiency(params, ps, tas, max_power);
    match ps.engine_type() {
        EngineType::Piston | EngineType::Turboprop => {
            SpecificConsumption::Power(params.propulsion.propeller_efficiency / (fhv * eff))
        }
        EngineType::Turbofan => SpecificConsumption::Thrust(tas / (eff * fhv)),
        EngineType::Emotor => SpecificConsumption::None,
    }
}

/// Turboshaft PSFC `a + b / P^c` with `P` in kW, returned in kg/J.
fn turboshaft_psfc(params: &ModelParameters, max_power: f64) -> f64 {
    let [a, b, c] = params.propulsion.turboshaft_psfc_coefficients;
    kg_per_kwh_to_kg_per_j(a + b / w_to_kw(max_power).powf(c))
}

fn reference_heating_value(fuel: EnergyType) -> f64 {
    fuel_heating_value(fuel).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gam_config::PowerSystemSpec;

    fn system(energy: EnergyType, engine: EngineType, thruster: ThrusterType, bpr: Option<f64>) -> PowerSystem {
        PowerSystem::try_from(&PowerSystemSpec {
            energy_type: energy,
            engine_count: 2,
            engine_type: engine,
            thruster_type: thruster,
            bypass_ratio: bpr,
        })
        .unwrap()
    }

    #[test]
    fn piston_efficiency_is_constant() {
        let params = ModelParameters::default();
        let ps = system(EnergyType::Gasoline, EngineType::Piston, ThrusterType::Propeller, None);
        let eff = overall_efficiency(&params, &ps, 80.0, 150e3);
        assert_relative_eq!(eff, 0.8 / (46.41e6 * 0.25 / 3.6e6), epsilon = 1e-12);
        assert_eq!(eff, overall_efficiency(&params, &ps, 120.0, 300e3));
    }

    #[test]
    fn turboprop_improves_with_engine_size() {
        let params = ModelParameters::default();
        let ps = system(EnergyType::Kerosene, EngineType::Turboprop, ThrusterType::Propeller, None);
        let small = overall_efficiency(&params, &ps, 150.0, 500e3);
        let large = overall_efficiency(&params, &ps, 150.0, 3_000e3);
        assert!(large > small);
        let psfc = (0.2 + 10.0 / 500.0_f64.powf(0.65)) / 3.6e6;
        assert_relative_eq!(small, 0.8 / (43.1e6 * psfc), epsilon = 1e-12);
    }

    #[test]
    fn turbofan_propulsive_efficiency_closed_form() {
        let params = ModelParameters::default();
        let ps = system(EnergyType::Kerosene, EngineType::Turbofan, ThrusterType::Fan, Some(12.0));
        let tas: f64 = 230.0;
        let eff_pr = 1.0 / (0.5 + (0.25 + (0.02 * 0.474 * 43.1e6) / (2.0 * 13.0 * tas * tas)).sqrt());
        assert_relative_eq!(overall_efficiency(&params, &ps, tas, 0.0), 0.474 * eff_pr, epsilon = 1e-12);
        match specific_consumption(&params, &ps, tas, 0.0) {
            SpecificConsumption::Thrust(tsfc) => {
                assert_relative_eq!(tsfc, tas / (0.474 * eff_pr * 43.1e6), epsilon = 1e-15)
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn electric_efficiency_chain() {
        let params = ModelParameters::default();
        let battery = system(EnergyType::Battery, EngineType::Emotor, ThrusterType::Propeller, None);
        assert_relative_eq!(overall_efficiency(&params, &battery, 70.0, 0.0), 0.8 * 0.9, epsilon = 1e-12);
        assert_eq!(specific_consumption(&params, &battery, 70.0, 0.0), SpecificConsumption::None);
        let fuel_cell = system(EnergyType::CompressedH2, EngineType::Emotor, ThrusterType::Fan, None);
        assert_relative_eq!(overall_efficiency(&params, &fuel_cell, 70.0, 0.0), 0.82 * 0.9 * 0.5, epsilon = 1e-12);
    }
}
