//! Power system descriptions and reference aircraft catalog entries.

use gam_core::kinds::{Category, EngineType, EnergyType, ThrusterType};
use serde::{Deserialize, Serialize};

/// Flat, unvalidated power system description as written in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerSystemSpec {
    pub energy_type: EnergyType,
    pub engine_count: u32,
    pub engine_type: EngineType,
    #[serde(default = "default_thruster")]
    pub thruster_type: ThrusterType,
    #[serde(default, alias = "bpr")]
    pub bypass_ratio: Option<f64>,
}

fn default_thruster() -> ThrusterType {
    ThrusterType::None
}

/// Existing airplane used to calibrate the model.
#[derive(Debug, Clone, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    pub power_system: PowerSystemSpec,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub npax: Option<u32>,
    #[serde(default)]
    pub payload_kg: Option<f64>,
    /// Mach when not above 1, true airspeed in m/s otherwise.
    #[serde(default)]
    pub cruise_speed: Option<f64>,
    pub design_range_km: f64,
    #[serde(default)]
    pub cruise_altitude_ft: Option<f64>,
    pub mtow_kg: f64,
    pub owe_kg: f64,
    #[serde(default)]
    pub max_payload_kg: Option<f64>,
}
