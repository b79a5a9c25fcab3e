//! Mission fuel and energy integration: cruise, diversion and holding legs.

use gam_atmosphere::{AmbientConditions, AtmosphereError, atmosphere};
use gam_config::ModelParameters;
use gam_propulsion::{PowerSystem, overall_efficiency};
use serde::{Deserialize, Serialize};

use crate::DesignError;
use crate::inputs::{FlightAltitudes, ReservePolicy, Speed};

/// Lift-to-drag ratio: the MTOW regression scaled by the tuning factor, unless overridden.
pub fn lod(params: &ModelParameters, mtow: f64) -> f64 {
    if let Some(forced) = params.tuning.lod_override {
        return forced;
    }
    interpolate(&params.airframe.lod_table, mtow) * params.tuning.lod_factor
}

/// Piecewise-linear interpolation clamped at both ends.
fn interpolate(table: &[[f64; 2]], x: f64) -> f64 {
    let (Some(first), Some(last)) = (table.first(), table.last()) else {
        return f64::NAN;
    };
    if x <= first[0] {
        return first[1];
    }
    if x >= last[0] {
        return last[1];
    }
    table
        .windows(2)
        .find(|w| x <= w[1][0])
        .map(|w| w[0][1] + (w[1][1] - w[0][1]) * (x - w[0][0]) / (w[1][0] - w[0][0]))
        .unwrap_or(last[1])
}

/// Ambient conditions with the configured temperature shift.
pub fn ambient(params: &ModelParameters, altitude_m: f64) -> Result<AmbientConditions, AtmosphereError> {
    atmosphere(altitude_m, params.operations.disa_k)
}

/// Fuel and energy burnt over one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegResult {
    pub fuel_kg: f64,
    pub energy_j: f64,
    pub lod: f64,
    pub efficiency: f64,
    pub time_s: f64,
}

/// Fuel and energy for a complete mission, reserves included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionFuel {
    pub tow_kg: f64,
    pub distance_m: f64,
    pub total_fuel_kg: f64,
    pub mission_fuel_kg: f64,
    pub reserve_fuel_kg: f64,
    pub total_energy_j: f64,
    pub mission_energy_j: f64,
    pub reserve_energy_j: f64,
    /// Cruise lift-to-drag ratio.
    pub lod: f64,
    /// Cruise propulsion system efficiency.
    pub efficiency: f64,
    /// Cruise leg duration (s).
    pub time_s: f64,
}

/// Everything a mission evaluation needs besides take-off weight and distance.
#[derive(Debug, Clone, Copy)]
pub struct MissionContext<'a> {
    pub params: &'a ModelParameters,
    pub power_system: &'a PowerSystem,
    /// Drives the L/D regression.
    pub mtow: f64,
    pub total_power: f64,
    pub cruise_speed: Speed,
    pub altitudes: FlightAltitudes,
    pub reserve: ReservePolicy,
}

impl MissionContext<'_> {
    /// Installed power of a single engine (W).
    pub fn max_power(&self) -> f64 {
        self.total_power / f64::from(self.power_system.engine_count())
    }

    /// Cruise true airspeed at `altitude_m`.
    pub fn tas(&self, altitude_m: f64) -> Result<f64, AtmosphereError> {
        Ok(self.cruise_speed.tas(ambient(self.params, altitude_m)?.temperature_k))
    }

    /// Fuel (Breguet) or battery energy over `distance_m` starting at `start_mass`.
    pub fn leg_fuel(&self, start_mass: f64, distance_m: f64, altitude_m: f64) -> Result<LegResult, DesignError> {
        let amb = ambient(self.params, altitude_m)?;
        let tas = self.cruise_speed.tas(amb.temperature_k);
        let lod = lod(self.params, self.mtow);
        let efficiency = overall_efficiency(self.params, self.power_system, tas, self.max_power());
        let g = amb.gravity_m_s2;

        let (fuel_kg, energy_j) = match self.power_system.heating_value() {
            None => (0.0, start_mass * g * distance_m / (efficiency * lod)),
            Some(fhv) => {
                let fuel = start_mass * (1.0 - (-(g * distance_m) / (efficiency * fhv * lod)).exp());
                (fuel, fuel * fhv)
            }
        };

        Ok(LegResult {
            fuel_kg,
            energy_j,
            lod,
            efficiency,
            time_s: distance_m / tas,
        })
    }

    /// Holding for `time_s` at cruise speed; the leg distance is `tas × time`.
    pub fn holding_fuel(&self, start_mass: f64, time_s: f64, altitude_m: f64) -> Result<LegResult, DesignError> {
        let tas = self.tas(altitude_m)?;
        self.leg_fuel(start_mass, tas * time_s, altitude_m)
    }

    /// Take-off, climb and cruise from `tow`, followed by the reserve policy.
    pub fn total_fuel(&self, tow: f64, distance_m: f64) -> Result<MissionFuel, DesignError> {
        let prop = &self.params.propulsion;
        let cruise_altitude = self.altitudes.cruise_m;
        let g = ambient(self.params, cruise_altitude)?.gravity_m_s2;

        let mut mission_energy = self.params.operations.take_off_time_s * self.total_power;
        mission_energy += tow * g * cruise_altitude;
        let mut mission_fuel = match self.power_system.heating_value() {
            Some(fhv) => mission_energy * prop.fuel_energy_ratio / fhv,
            None => 0.0,
        };

        let cruise = self.leg_fuel(tow, distance_m, cruise_altitude)?;
        mission_fuel += cruise.fuel_kg;
        mission_energy += cruise.energy_j;

        let landing_weight = if self.power_system.is_battery() {
            tow
        } else {
            tow - mission_fuel
        };

        let mut reserve_fuel = 0.0;
        let mut reserve_energy = 0.0;
        if self.reserve.fuel_factor > 0.0 {
            reserve_fuel += self.reserve.fuel_factor * mission_fuel;
            reserve_energy += self.reserve.fuel_factor * mission_energy;
        }
        if self.reserve.diversion_leg_m > 0.0 {
            let leg = self.leg_fuel(landing_weight, self.reserve.diversion_leg_m, self.altitudes.diversion_m)?;
            reserve_fuel += leg.fuel_kg;
            reserve_energy += leg.energy_j;
        }
        if self.reserve.holding_time_s > 0.0 {
            let hold = self.holding_fuel(landing_weight, self.reserve.holding_time_s, self.altitudes.holding_m)?;
            reserve_fuel += hold.fuel_kg;
            reserve_energy += hold.energy_j;
        }

        Ok(MissionFuel {
            tow_kg: tow,
            distance_m,
            total_fuel_kg: mission_fuel + reserve_fuel,
            mission_fuel_kg: mission_fuel,
            reserve_fuel_kg: reserve_fuel,
            total_energy_j: mission_energy + reserve_energy,
            mission_energy_j: mission_energy,
            reserve_energy_j: reserve_energy,
            lod: cruise.lod,
            efficiency: cruise.efficiency,
            time_s: cruise.time_s,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lod_table_is_clamped_and_interpolated() {
        let mut params = ModelParameters::default();
        assert_eq!(lod(&params, 100.0), 13.0);
        assert_eq!(lod(&params, 2e6), 20.0);
        assert_relative_eq!(lod(&params, 120_000.0), 17.5, epsilon = 1e-12);
        params.tuning.lod_factor = 1.1;
        assert_relative_eq!(lod(&params, 40_000.0), 17.6, epsilon = 1e-12);
        params.tuning.lod_override = Some(15.0);
        assert_eq!(lod(&params, 40_000.0), 15.0);
    }
}
