//! Design mission inputs and their resolution against the category tables.

use gam_atmosphere::sound_speed;
use gam_config::ModelParameters;
use gam_core::kinds::Category;
use gam_core::units::m_to_km;
use serde::{Deserialize, Serialize};

use crate::InputError;

/// Cruise speed, either a Mach number or a true airspeed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Mach(f64),
    /// True airspeed (m/s).
    TrueAirspeed(f64),
}

impl Speed {
    /// Values not above 1 are Mach numbers, larger ones are true airspeeds in m/s.
    pub fn from_value(value: f64) -> Self {
        if value > 1.0 {
            Speed::TrueAirspeed(value)
        } else {
            Speed::Mach(value)
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Speed::Mach(v) | Speed::TrueAirspeed(v) => v,
        }
    }

    /// True airspeed at the given static temperature (m/s).
    pub fn tas(self, temperature_k: f64) -> f64 {
        match self {
            Speed::Mach(mach) => mach * sound_speed(temperature_k),
            Speed::TrueAirspeed(tas) => tas,
        }
    }
}

/// What the airplane is designed for. Absent fields fall back to category defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignMission {
    pub category: Option<Category>,
    pub npax: Option<u32>,
    pub payload_kg: Option<f64>,
    pub cruise_speed: Option<Speed>,
    pub range_m: Option<f64>,
    pub cruise_altitude_m: Option<f64>,
}

impl DesignMission {
    /// Passenger mission over `range_m`, everything else defaulted.
    pub fn new(npax: u32, range_m: f64) -> Self {
        Self {
            npax: Some(npax),
            range_m: Some(range_m),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.cruise_speed = Some(speed);
        self
    }

    pub fn with_altitude(mut self, altitude_m: f64) -> Self {
        self.cruise_altitude_m = Some(altitude_m);
        self
    }

    pub fn with_payload(mut self, payload_kg: f64) -> Self {
        self.payload_kg = Some(payload_kg);
        self
    }

    pub fn with_range(mut self, range_m: f64) -> Self {
        self.range_m = Some(range_m);
        self
    }
}

/// Cruise, diversion and holding altitudes (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightAltitudes {
    pub cruise_m: f64,
    pub diversion_m: f64,
    pub holding_m: f64,
}

/// Reserve policy; each item is disabled when zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReservePolicy {
    pub fuel_factor: f64,
    pub diversion_leg_m: f64,
    pub holding_time_s: f64,
}

/// Design mission with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMission {
    pub category: Category,
    pub npax: u32,
    pub pax_mass_kg: f64,
    pub payload_kg: f64,
    pub cruise_speed: Speed,
    pub altitudes: FlightAltitudes,
    pub reserve: ReservePolicy,
    pub range_m: Option<f64>,
}

impl ResolvedMission {
    pub fn require_range(&self) -> Result<f64, InputError> {
        self.range_m.ok_or(InputError::MissingRange)
    }
}

/// Fill in category, speed, altitude and payload from the parameter tables.
///
/// An explicit category wins over the guessed one. With both npax and payload, the passenger
/// mass becomes `payload / npax`; with payload only, npax is zero.
pub fn resolve_mission(params: &ModelParameters, mission: &DesignMission) -> Result<ResolvedMission, InputError> {
    if let Some(range) = mission.range_m {
        positive("range", range)?;
    }
    if let Some(payload) = mission.payload_kg {
        positive("payload", payload)?;
    }

    let category = match mission.category {
        Some(category) => category,
        None => match (mission.npax, mission.range_m) {
            (Some(npax), Some(range)) => params
                .categories
                .guess(npax, range)
                .ok_or(InputError::NoMatchingCategory {
                    npax,
                    range_km: m_to_km(range),
                })?,
            _ => return Err(InputError::MissingCategoryInputs),
        },
    };
    let table = params.category(category);

    let cruise_speed = match mission.cruise_speed {
        Some(speed) => speed,
        None => Speed::from_value(table.cruise_speed.ok_or(InputError::MissingSpeed(category))?),
    };
    positive("cruise speed", cruise_speed.value())?;

    let cruise_m = mission.cruise_altitude_m.unwrap_or(table.cruise_altitude_m);
    let altitudes = FlightAltitudes {
        cruise_m,
        diversion_m: table.diversion_altitude_m,
        holding_m: table.holding_altitude_m,
    };
    let reserve = ReservePolicy {
        fuel_factor: table.reserve_fuel_factor,
        diversion_leg_m: table.diversion_leg_m,
        holding_time_s: table.holding_time_s,
    };

    let allowance = params.pax_mass(category);
    let (npax, pax_mass_kg, payload_kg) = match (mission.npax, mission.payload_kg) {
        (Some(npax), Some(payload)) if npax > 0 => (npax, payload / f64::from(npax), payload),
        (_, Some(payload)) => (0, allowance, payload),
        (Some(npax), None) => (
            npax,
            allowance,
            f64::from(npax) * allowance + params.tuning.delta_payload_kg,
        ),
        (None, None) => return Err(InputError::MissingLoad),
    };

    Ok(ResolvedMission {
        category,
        npax,
        pax_mass_kg,
        payload_kg,
        cruise_speed,
        altitudes,
        reserve,
        range_m: mission.range_m,
    })
}

fn positive(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InputError::NonPositive { field, value })
    }
}
