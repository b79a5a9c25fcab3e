//! Re-exported APIs for consumers of the design crate.

pub use crate::calibration::{Calibration, CalibrationTarget, tune_design};
pub use crate::cost::{CostBreakdown, operating_cost};
pub use crate::flight::{FlightResult, Load, fly_distance, fly_tow, fly_tow_n_distance};
pub use crate::inputs::{DesignMission, ResolvedMission, Speed, resolve_mission};
pub use crate::mission::MissionFuel;
pub use crate::payload_range::{Capacity, Feasibility, PayloadRangeEnvelope, build_payload_range};
pub use crate::record::{AirplaneDesign, WakeTurbulenceClass};
pub use crate::sizing::{BestDesign, DesignCriterion, best_design, design_airplane, design_from_mtow};
pub use gam_propulsion::PowerSystem;

pub mod aircraft {
    use gam_config::AircraftConfig;
    use gam_core::units::{ft_to_m, km_to_m};
    use gam_propulsion::{PowerSystem, PowerSystemError};
    use thiserror::Error;

    use crate::calibration::CalibrationTarget;
    use crate::inputs::{DesignMission, Speed};

    /// Errors surfaced when selecting or converting reference aircraft.
    #[derive(Debug, Error)]
    pub enum CatalogError {
        #[error("aircraft '{0}' not found in catalog")]
        NotFound(String),
        #[error("aircraft catalog is empty")]
        EmptyCatalog,
        #[error("aircraft power system is invalid: {0}")]
        PowerSystem(#[from] PowerSystemError),
    }

    /// Convert a catalog entry into its power system and calibration target.
    pub fn from_config(config: &AircraftConfig) -> Result<(PowerSystem, CalibrationTarget), CatalogError> {
        let power_system = PowerSystem::try_from(&config.power_system)?;
        let mission = DesignMission {
            category: config.category,
            npax: config.npax,
            payload_kg: config.payload_kg,
            cruise_speed: config.cruise_speed.map(Speed::from_value),
            range_m: Some(km_to_m(config.design_range_km)),
            cruise_altitude_m: config.cruise_altitude_ft.map(ft_to_m),
        };
        Ok((
            power_system,
            CalibrationTarget {
                mission,
                mtow_kg: config.mtow_kg,
                owe_kg: config.owe_kg,
                payload_max_kg: config.max_payload_kg,
            },
        ))
    }

    /// Select an aircraft by case-insensitive name, defaulting to the first entry.
    pub fn select<'a>(
        configs: &'a [AircraftConfig],
        requested: Option<&str>,
    ) -> Result<&'a AircraftConfig, CatalogError> {
        let first = configs.first().ok_or(CatalogError::EmptyCatalog)?;
        match requested {
            Some(name) => configs
                .iter()
                .find(|cfg| cfg.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| CatalogError::NotFound(name.to_string())),
            None => Ok(first),
        }
    }
}
