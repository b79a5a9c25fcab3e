//! Power system architectures and the propulsion sub-models selected by them.

pub mod efficiency;
pub mod mass;

use gam_atmosphere::fuel_heating_value;
use gam_config::PowerSystemSpec;
use gam_core::kinds::{EnergyType, EngineType, ThrusterType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use efficiency::{SpecificConsumption, overall_efficiency, specific_consumption};
pub use mass::{
    EnergyStorage, PropulsionMass, energy_storage_mass, propulsion_mass, reference_power,
    tank_gravimetric_index,
};

/// Combinations rejected when building a [`PowerSystem`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PowerSystemError {
    #[error("a power system needs at least one engine")]
    NoEngines,
    #[error("turbofan engines require a bypass ratio")]
    MissingBypassRatio,
    #[error("bypass ratio {0} is not a finite non-negative number")]
    InvalidBypassRatio(f64),
    #[error("{engine} engines cannot drive a {thruster} thruster")]
    ThrusterMismatch {
        engine: EngineType,
        thruster: ThrusterType,
    },
    #[error("{engine} engines cannot run on {energy}")]
    EnergyMismatch {
        engine: EngineType,
        energy: EnergyType,
    },
}

/// Validated propulsion architecture.
///
/// Built from a [`PowerSystemSpec`]; the bypass ratio is kept only for turbofans and the thruster
/// of piston and turboprop engines is always a propeller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PowerSystemSpec", into = "PowerSystemSpec")]
pub struct PowerSystem {
    energy_type: EnergyType,
    engine_count: u32,
    engine_type: EngineType,
    thruster_type: ThrusterType,
    bypass_ratio: Option<f64>,
}

impl PowerSystem {
    pub fn energy_type(&self) -> EnergyType {
        self.energy_type
    }

    pub fn engine_count(&self) -> u32 {
        self.engine_count
    }

    pub fn engine_type(&self) -> EngineType {
        self.engine_type
    }

    pub fn thruster_type(&self) -> ThrusterType {
        self.thruster_type
    }

    pub fn bypass_ratio(&self) -> Option<f64> {
        self.bypass_ratio
    }

    /// Hydrogen-electric systems carry a fuel cell between tank and motors.
    pub fn has_fuel_cell(&self) -> bool {
        self.engine_type == EngineType::Emotor && self.energy_type.is_hydrogen()
    }

    pub fn is_battery(&self) -> bool {
        self.energy_type.is_battery()
    }

    /// Heating value of the fuel burnt on board (J/kg), `None` when flying on batteries.
    pub fn heating_value(&self) -> Option<f64> {
        fuel_heating_value(self.energy_type)
    }
}

impl TryFrom<&PowerSystemSpec> for PowerSystem {
    type Error = PowerSystemError;

    fn try_from(spec: &PowerSystemSpec) -> Result<Self, Self::Error> {
        if spec.engine_count == 0 {
            return Err(PowerSystemError::NoEngines);
        }
        let engine = spec.engine_type;
        let energy = spec.energy_type;
        let thruster_mismatch = || PowerSystemError::ThrusterMismatch {
            engine,
            thruster: spec.thruster_type,
        };
        let energy_mismatch = || PowerSystemError::EnergyMismatch { engine, energy };

        let (thruster_type, bypass_ratio) = match engine {
            EngineType::Piston | EngineType::Turboprop => {
                if energy.is_battery() {
                    return Err(energy_mismatch());
                }
                match spec.thruster_type {
                    ThrusterType::Propeller | ThrusterType::None => (ThrusterType::Propeller, None),
                    ThrusterType::Fan => return Err(thruster_mismatch()),
                }
            }
            EngineType::Turbofan => {
                if energy.is_battery() {
                    return Err(energy_mismatch());
                }
                if spec.thruster_type == ThrusterType::Propeller {
                    return Err(thruster_mismatch());
                }
                let bpr = spec.bypass_ratio.ok_or(PowerSystemError::MissingBypassRatio)?;
                if !(bpr.is_finite() && bpr >= 0.0) {
                    return Err(PowerSystemError::InvalidBypassRatio(bpr));
                }
                (ThrusterType::Fan, Some(bpr))
            }
            EngineType::Emotor => {
                if !(energy.is_battery() || energy.is_hydrogen()) {
                    return Err(energy_mismatch());
                }
                match spec.thruster_type {
                    ThrusterType::None => return Err(thruster_mismatch()),
                    thruster => (thruster, None),
                }
            }
        };

        Ok(Self {
            energy_type: energy,
            engine_count: spec.engine_count,
            engine_type: engine,
            thruster_type,
            bypass_ratio,
        })
    }
}

impl TryFrom<PowerSystemSpec> for PowerSystem {
    type Error = PowerSystemError;

    fn try_from(spec: PowerSystemSpec) -> Result<Self, Self::Error> {
        Self::try_from(&spec)
    }
}

impl From<PowerSystem> for PowerSystemSpec {
    fn from(ps: PowerSystem) -> Self {
        PowerSystemSpec {
            energy_type: ps.energy_type,
            engine_count: ps.engine_count,
            engine_type: ps.engine_type,
            thruster_type: ps.thruster_type,
            bypass_ratio: ps.bypass_ratio,
        }
    }
}
