//! International Standard Atmosphere up to 50 km and fuel property tables.

use gam_core::constants::{G0, GAMMA_AIR, P0, R_AIR, T0};
use gam_core::kinds::EnergyType;
use gam_core::units::bar_to_pa;
use thiserror::Error;

/// Layer base altitudes (m); the last entry is the model ceiling.
const LAYER_BASE_M: [f64; 6] = [0.0, 11_000.0, 20_000.0, 32_000.0, 47_000.0, 50_000.0];
/// Temperature lapse rate in each layer (K/m).
const LAPSE_RATE_K_M: [f64; 5] = [-0.0065, 0.0, 0.001, 0.0028, 0.0];

/// Ambient conditions at a pressure altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientConditions {
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub gravity_m_s2: f64,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AtmosphereError {
    #[error("altitude {0} m is above the 50 km model ceiling")]
    AboveCeiling(f64),
    #[error("compressed hydrogen density requires a storage pressure")]
    MissingPressure,
}

/// Constant gravity used across the model (m/s²).
#[inline]
pub fn gravity() -> f64 {
    G0
}

/// Pressure, temperature and gravity at `altitude_m`, with `disa_k` added to the standard temperature.
///
/// Pressure is integrated layer by layer from sea level, using the polytropic relation where the
/// lapse rate is non zero and the isothermal exponential otherwise. The temperature offset does not
/// alter pressure, so the altitude remains a pressure altitude.
pub fn atmosphere(altitude_m: f64, disa_k: f64) -> Result<AmbientConditions, AtmosphereError> {
    let ceiling = LAYER_BASE_M[LAYER_BASE_M.len() - 1];
    if altitude_m > ceiling {
        return Err(AtmosphereError::AboveCeiling(altitude_m));
    }

    // Number of layer tops at or below the altitude; the ceiling itself sits in the last layer.
    let layer = LAYER_BASE_M[1..]
        .iter()
        .take_while(|top| **top <= altitude_m)
        .count()
        .min(LAPSE_RATE_K_M.len() - 1);

    let mut pressure = P0;
    let mut temperature = T0;
    for j in 0..layer {
        let dz = LAYER_BASE_M[j + 1] - LAYER_BASE_M[j];
        pressure = layer_pressure(pressure, temperature, LAPSE_RATE_K_M[j], dz);
        temperature += LAPSE_RATE_K_M[j] * dz;
    }

    let dz = altitude_m - LAYER_BASE_M[layer];
    let pressure_pa = layer_pressure(pressure, temperature, LAPSE_RATE_K_M[layer], dz);
    let temperature_k = temperature + LAPSE_RATE_K_M[layer] * dz + disa_k;

    Ok(AmbientConditions {
        pressure_pa,
        temperature_k,
        gravity_m_s2: G0,
    })
}

fn layer_pressure(base_pressure: f64, base_temperature: f64, lapse: f64, dz: f64) -> f64 {
    if lapse.abs() > 0.0 {
        base_pressure * (1.0 + (lapse / base_temperature) * dz).powf(-G0 / (R_AIR * lapse))
    } else {
        base_pressure * (-(G0 / R_AIR) * (dz / base_temperature)).exp()
    }
}

/// Speed of sound in air at `temperature_k` (m/s).
#[inline]
pub fn sound_speed(temperature_k: f64) -> f64 {
    (GAMMA_AIR * R_AIR * temperature_k).sqrt()
}

/// Fluid (or cell) density in kg/m³.
///
/// Compressed hydrogen density depends on storage pressure (Pa); other carriers ignore it.
pub fn fuel_density(energy: EnergyType, pressure_pa: Option<f64>) -> Result<f64, AtmosphereError> {
    let density = match energy {
        EnergyType::Petrol | EnergyType::Kerosene | EnergyType::EFuel => 803.0,
        EnergyType::Gasoline => 800.0,
        EnergyType::CompressedH2 => {
            let p_bar = pressure_pa.ok_or(AtmosphereError::MissingPressure)? / bar_to_pa(1.0);
            (-3.114_803_62e-5 * p_bar + 7.823_208_91e-2) * p_bar + 1.032_078_22e-1
        }
        EnergyType::LiquidH2 => 70.8,
        EnergyType::LiquidCh4 => 422.6,
        EnergyType::LiquidNh3 => 681.0,
        EnergyType::Battery => 2_800.0,
    };
    Ok(density)
}

/// Lower heating value in J/kg; `None` for batteries, which burn nothing.
pub fn fuel_heating_value(energy: EnergyType) -> Option<f64> {
    match energy {
        EnergyType::Petrol | EnergyType::Kerosene | EnergyType::EFuel => Some(43.1e6),
        EnergyType::Gasoline => Some(46.41e6),
        EnergyType::CompressedH2 | EnergyType::LiquidH2 => Some(121.0e6),
        EnergyType::LiquidCh4 => Some(50.3e6),
        EnergyType::LiquidNh3 => Some(16.89e6),
        EnergyType::Battery => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sea_level_matches_standard_values() {
        let amb = atmosphere(0.0, 0.0).unwrap();
        assert_relative_eq!(amb.pressure_pa, P0);
        assert_relative_eq!(amb.temperature_k, T0);
        assert_relative_eq!(sound_speed(amb.temperature_k), 340.294, epsilon = 1e-3);
    }

    #[test]
    fn tropopause_is_continuous() {
        let below = atmosphere(10_999.999, 0.0).unwrap();
        let at = atmosphere(11_000.0, 0.0).unwrap();
        assert_relative_eq!(below.temperature_k, 216.65, epsilon = 1e-3);
        assert_relative_eq!(at.temperature_k, 216.65, epsilon = 1e-9);
        assert_relative_eq!(below.pressure_pa, at.pressure_pa, max_relative = 1e-6);
        assert_relative_eq!(at.pressure_pa, 22_632.0, max_relative = 1e-3);
    }

    #[test]
    fn temperature_offset_leaves_pressure_unchanged() {
        let std = atmosphere(3_000.0, 0.0).unwrap();
        let hot = atmosphere(3_000.0, 15.0).unwrap();
        assert_relative_eq!(std.pressure_pa, hot.pressure_pa);
        assert_relative_eq!(hot.temperature_k - std.temperature_k, 15.0, epsilon = 1e-12);
    }

    #[test]
    fn ceiling_is_enforced() {
        assert!(atmosphere(50_000.0, 0.0).is_ok());
        assert_eq!(
            atmosphere(50_001.0, 0.0),
            Err(AtmosphereError::AboveCeiling(50_001.0))
        );
    }

    #[test]
    fn compressed_hydrogen_needs_pressure() {
        assert_eq!(
            fuel_density(EnergyType::CompressedH2, None),
            Err(AtmosphereError::MissingPressure)
        );
        let rho = fuel_density(EnergyType::CompressedH2, Some(bar_to_pa(700.0))).unwrap();
        assert_relative_eq!(rho, 39.603, epsilon = 1e-3);
        assert!(fuel_heating_value(EnergyType::Battery).is_none());
    }
}
