//! Converged design record.

use gam_config::ModelParameters;
use gam_core::kinds::Category;
use gam_propulsion::{PowerSystem, SpecificConsumption, reference_power, specific_consumption};
use serde::{Deserialize, Serialize};

use crate::DesignError;
use crate::inputs::{DesignMission, FlightAltitudes, ReservePolicy, ResolvedMission, Speed};
use crate::mass::{StructuralMass, owe_performance, owe_structure};
use crate::mission::MissionContext;

/// ICAO-style wake turbulence class from MTOW alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WakeTurbulenceClass {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl WakeTurbulenceClass {
    /// Lightest first, matching the threshold order.
    const BY_MASS: [WakeTurbulenceClass; 6] = [
        WakeTurbulenceClass::F,
        WakeTurbulenceClass::E,
        WakeTurbulenceClass::D,
        WakeTurbulenceClass::C,
        WakeTurbulenceClass::B,
        WakeTurbulenceClass::A,
    ];

    /// A mass equal to a threshold falls in the heavier class.
    pub fn from_mtow(thresholds_kg: &[f64; 5], mtow: f64) -> Self {
        let heavier = thresholds_kg.iter().filter(|t| **t <= mtow).count();
        Self::BY_MASS[heavier]
    }
}

/// Characteristic weights (kg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub mtow: f64,
    pub mlw: f64,
    pub mzfw: f64,
    pub owe: f64,
    pub payload_max: f64,
    pub structure: StructuralMass,
}

/// Design mission fuel and energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBudget {
    pub mission_fuel_kg: f64,
    pub reserve_fuel_kg: f64,
    pub total_fuel_kg: f64,
    pub mission_energy_j: f64,
    pub reserve_energy_j: f64,
    pub total_energy_j: f64,
    /// Fuel volume per passenger per metre (m³/pax/m).
    pub fuel_consumption: Option<f64>,
    /// Energy per passenger per metre (J/pax/m).
    pub energy_consumption: Option<f64>,
    /// Energy over storage plus fuel mass (J/kg).
    pub storage_energy_density: f64,
}

/// Converged airplane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirplaneDesign {
    pub power_system: PowerSystem,
    pub mission: DesignMission,
    pub category: Category,
    pub npax: u32,
    pub pax_mass_kg: f64,
    pub delta_payload_kg: f64,
    pub payload_kg: f64,
    pub max_payload_factor: f64,

    pub nominal_range_m: f64,
    pub cruise_speed: Speed,
    pub cruise_tas_m_s: f64,
    pub nominal_time_s: f64,
    pub altitudes: FlightAltitudes,
    pub reserve: ReservePolicy,

    pub weights: Weights,
    pub energy: EnergyBudget,

    /// Installed power per engine (W).
    pub max_power_w: f64,
    pub total_power_w: f64,
    /// Installed power over propulsion and fuel cell mass (W/kg).
    pub propulsion_power_density: f64,

    pub lod_factor: f64,
    pub stdm_factor: f64,
    pub stdm_shift_kg: f64,
    pub aerodynamic_efficiency: f64,
    pub propulsion_system_efficiency: f64,
    pub specific_consumption: SpecificConsumption,
    pub structural_factor: f64,
    pub wake_turbulence_class: WakeTurbulenceClass,

    /// Passenger-metres per kg of OWE.
    pub pk_o_mass: f64,
    /// Passenger-metres per joule of design mission energy.
    pub pk_o_energy: f64,
}

impl AirplaneDesign {
    /// Rebuild the mission context of this airplane under `params`.
    pub fn context<'a>(&'a self, params: &'a ModelParameters) -> MissionContext<'a> {
        MissionContext {
            params,
            power_system: &self.power_system,
            mtow: self.weights.mtow,
            total_power: self.total_power_w,
            cruise_speed: self.cruise_speed,
            altitudes: self.altitudes,
            reserve: self.reserve,
        }
    }

    /// Recompute every derived quantity at a converged `(mtow, range)` point.
    pub(crate) fn assemble(
        params: &ModelParameters,
        ps: &PowerSystem,
        mission: &DesignMission,
        resolved: &ResolvedMission,
        mtow: f64,
        range_m: f64,
    ) -> Result<Self, DesignError> {
        let total_power = reference_power(params, mtow);
        let ctx = MissionContext {
            params,
            power_system: ps,
            mtow,
            total_power,
            cruise_speed: resolved.cruise_speed,
            altitudes: resolved.altitudes,
            reserve: resolved.reserve,
        };
        let max_power = ctx.max_power();
        let perf = owe_performance(&ctx, resolved.payload_kg, range_m)?;
        let structure = owe_structure(
            params,
            ps,
            resolved.category,
            resolved.npax,
            mtow,
            range_m,
            total_power,
            perf.max_fuel_kg,
            perf.max_energy_j,
        )?;
        let owe = structure.owe_kg;

        let zero_range = ctx.total_fuel(mtow, 0.0)?;
        let payload_max = (mtow - owe - zero_range.total_fuel_kg)
            .min(resolved.payload_kg * params.tuning.max_payload_factor);
        let mzfw = owe + payload_max;
        let mlw = mzfw * params.tuning.mlw_factor;

        let fuel = &perf.mission;
        let storage_energy_density = fuel.total_energy_j / (structure.energy_storage_kg + fuel.total_fuel_kg);
        let propulsion_power_density = total_power / (structure.propulsion_kg + structure.fuel_cell_kg);

        let tas = ctx.tas(resolved.altitudes.cruise_m)?;
        let npax = f64::from(resolved.npax);
        let per_pax_metre = |quantity: f64| (resolved.npax > 0).then(|| quantity / npax / range_m);

        Ok(Self {
            power_system: ps.clone(),
            mission: mission.clone(),
            category: resolved.category,
            npax: resolved.npax,
            pax_mass_kg: resolved.pax_mass_kg,
            delta_payload_kg: params.tuning.delta_payload_kg,
            payload_kg: resolved.payload_kg,
            max_payload_factor: params.tuning.max_payload_factor,
            nominal_range_m: range_m,
            cruise_speed: resolved.cruise_speed,
            cruise_tas_m_s: tas,
            nominal_time_s: range_m / tas,
            altitudes: resolved.altitudes,
            reserve: resolved.reserve,
            weights: Weights {
                mtow,
                mlw,
                mzfw,
                owe,
                payload_max,
                structure,
            },
            energy: EnergyBudget {
                mission_fuel_kg: fuel.mission_fuel_kg,
                reserve_fuel_kg: fuel.reserve_fuel_kg,
                total_fuel_kg: fuel.total_fuel_kg,
                mission_energy_j: fuel.mission_energy_j,
                reserve_energy_j: fuel.reserve_energy_j,
                total_energy_j: fuel.total_energy_j,
                fuel_consumption: per_pax_metre(fuel.mission_fuel_kg / structure.fuel_density),
                energy_consumption: per_pax_metre(fuel.mission_energy_j),
                storage_energy_density,
            },
            max_power_w: max_power,
            total_power_w: total_power,
            propulsion_power_density,
            lod_factor: params.tuning.lod_factor,
            stdm_factor: params.tuning.stdm_factor,
            stdm_shift_kg: params.tuning.stdm_shift_kg,
            aerodynamic_efficiency: fuel.lod,
            propulsion_system_efficiency: fuel.efficiency,
            specific_consumption: specific_consumption(params, ps, tas, max_power),
            structural_factor: owe / mtow,
            wake_turbulence_class: WakeTurbulenceClass::from_mtow(
                &params.airframe.wake_turbulence_thresholds_kg,
                mtow,
            ),
            pk_o_mass: npax * range_m / owe,
            pk_o_energy: npax * range_m / fuel.total_energy_j,
        })
    }

    pub fn mtow(&self) -> f64 {
        self.weights.mtow
    }

    pub fn owe(&self) -> f64 {
        self.weights.owe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wake_class_boundaries_go_to_heavier_class() {
        let thresholds = [15_000.0, 60_000.0, 100_000.0, 270_000.0, 560_000.0];
        assert_eq!(WakeTurbulenceClass::from_mtow(&thresholds, 14_999.0), WakeTurbulenceClass::F);
        assert_eq!(WakeTurbulenceClass::from_mtow(&thresholds, 15_000.0), WakeTurbulenceClass::E);
        assert_eq!(WakeTurbulenceClass::from_mtow(&thresholds, 80_000.0), WakeTurbulenceClass::D);
        assert_eq!(WakeTurbulenceClass::from_mtow(&thresholds, 270_000.0), WakeTurbulenceClass::B);
        assert_eq!(WakeTurbulenceClass::from_mtow(&thresholds, 600_000.0), WakeTurbulenceClass::A);
    }
}
