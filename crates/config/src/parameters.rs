//! Model parameters: tuning factors, technology levels, regressions and economic tables.
//!
//! Values are stored in the units engineers quote them in (kW/kg, Wh/kg, bar, $/MWh) and the
//! accessor methods hand SI values to the models. Every struct is `#[serde(default)]`, so a
//! configuration file only needs the fields it overrides.

use gam_core::kinds::{Category, EnergyType, TrafficZone};
use gam_core::units::{bar_to_pa, kg_per_kwh_to_kg_per_j, per_mwh_to_per_j, wh_to_j};
use serde::{Deserialize, Serialize};

use crate::categories::{CategoryParameters, CategoryTable};

/// Complete parameter set read by every computation of the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelParameters {
    pub tuning: TuningFactors,
    pub operations: OperationalParameters,
    pub propulsion: PropulsionParameters,
    pub storage: StorageTechnology,
    pub airframe: AirframeParameters,
    pub categories: CategoryTable,
    pub cost: CostParameters,
}

impl ModelParameters {
    pub fn category(&self, category: Category) -> &CategoryParameters {
        self.categories.get(category)
    }

    /// Passenger mass allowance, honouring the user override.
    pub fn pax_mass(&self, category: Category) -> f64 {
        self.tuning
            .pax_mass_kg
            .unwrap_or_else(|| self.categories.get(category).pax_mass_kg)
    }
}

/// Scalars adjusted by calibration and sensitivity studies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningFactors {
    /// Multiplies the L/D regression.
    pub lod_factor: f64,
    /// Replaces the L/D regression altogether when set.
    pub lod_override: Option<f64>,
    pub stdm_factor: f64,
    pub stdm_shift_kg: f64,
    /// Tank or battery capacity relative to the design mission total fuel or energy.
    pub max_fuel_factor: f64,
    /// Maximum payload relative to the design payload.
    pub max_payload_factor: f64,
    pub mlw_factor: f64,
    pub pax_mass_kg: Option<f64>,
    pub prop_system_efficiency: f64,
    pub delta_payload_kg: f64,
    pub delta_power_w: f64,
}

impl Default for TuningFactors {
    fn default() -> Self {
        Self {
            lod_factor: 1.0,
            lod_override: None,
            stdm_factor: 1.0,
            stdm_shift_kg: 0.0,
            max_fuel_factor: 1.25,
            max_payload_factor: 1.15,
            mlw_factor: 1.07,
            pax_mass_kg: None,
            prop_system_efficiency: 1.0,
            delta_payload_kg: 0.0,
            delta_power_w: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalParameters {
    pub take_off_time_s: f64,
    /// Operator items per passenger per metre of design range (kg/pax/m).
    pub operator_item_index: f64,
    /// Temperature shift from the standard day (K).
    pub disa_k: f64,
}

impl Default for OperationalParameters {
    fn default() -> Self {
        Self {
            take_off_time_s: 60.0,
            operator_item_index: 5.0e-6,
            disa_k: 0.0,
        }
    }
}

/// Component power densities (kW/kg).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerDensities {
    pub turbofan: f64,
    pub turboprop: f64,
    pub piston: f64,
    pub emotor: f64,
    pub power_electronics: f64,
    pub fuel_cell: f64,
    pub propeller: f64,
    pub fan: f64,
}

impl Default for PowerDensities {
    fn default() -> Self {
        Self {
            turbofan: 4.3,
            turboprop: 4.3,
            piston: 1.1,
            emotor: 4.5,
            power_electronics: 10.0,
            fuel_cell: 1.0,
            propeller: 10.0,
            fan: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropulsionParameters {
    /// Installed power regression on MTOW: `(a·mtow + b)·mtow + c` (W).
    pub ref_power_factors: [f64; 3],
    pub propeller_efficiency: f64,
    pub fan_efficiency: f64,
    pub emotor_efficiency: f64,
    pub fuel_cell_efficiency: f64,
    /// Fuel burnt per unit of take-off and climb energy, relative to heating value.
    pub fuel_energy_ratio: f64,
    pub piston_psfc_kg_kwh: f64,
    /// Turboshaft PSFC regression `a + b / P_kW^c` (kg/kW/h).
    pub turboshaft_psfc_coefficients: [f64; 3],
    pub turbofan_thermal_efficiency: f64,
    pub fuel_mixture: f64,
    pub power_density_kw_kg: PowerDensities,
}

impl Default for PropulsionParameters {
    fn default() -> Self {
        Self {
            ref_power_factors: [8.316_938_45e-5, 2.030_270_49e2, -1.05e5],
            propeller_efficiency: 0.80,
            fan_efficiency: 0.82,
            emotor_efficiency: 0.90,
            fuel_cell_efficiency: 0.50,
            fuel_energy_ratio: 2.28,
            piston_psfc_kg_kwh: 0.25,
            turboshaft_psfc_coefficients: [0.2, 10.0, 0.65],
            turbofan_thermal_efficiency: 0.474,
            fuel_mixture: 0.02,
            power_density_kw_kg: PowerDensities::default(),
        }
    }
}

impl PropulsionParameters {
    /// Piston PSFC in kg/J.
    pub fn piston_psfc(&self) -> f64 {
        kg_per_kwh_to_kg_per_j(self.piston_psfc_kg_kwh)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageTechnology {
    pub battery_energy_density_wh_kg: f64,
    /// Pressure vessel performance, pressure times volume per unit tank mass (bar·m³/kg).
    pub tank_efficiency_factor_bar: f64,
    pub gh2_pressure_bar: f64,
    pub lh2_tank_gravimetric_index: f64,
    pub lnh3_pressure_bar: f64,
}

impl Default for StorageTechnology {
    fn default() -> Self {
        Self {
            battery_energy_density_wh_kg: 250.0,
            tank_efficiency_factor_bar: 661.0e-3,
            gh2_pressure_bar: 700.0,
            lh2_tank_gravimetric_index: 0.40,
            lnh3_pressure_bar: 30.0,
        }
    }
}

impl StorageTechnology {
    /// Battery energy density in J/kg.
    pub fn battery_energy_density(&self) -> f64 {
        wh_to_j(self.battery_energy_density_wh_kg)
    }

    pub fn tank_efficiency_factor(&self) -> f64 {
        bar_to_pa(self.tank_efficiency_factor_bar)
    }

    pub fn gh2_pressure(&self) -> f64 {
        bar_to_pa(self.gh2_pressure_bar)
    }

    pub fn lnh3_pressure(&self) -> f64 {
        bar_to_pa(self.lnh3_pressure_bar)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirframeParameters {
    /// Standard mass regression on MTOW: `(a·mtow + b)·mtow + c` (kg).
    pub standard_mass_factors: [f64; 3],
    /// `[mtow_kg, lod]` breakpoints, linearly interpolated and clamped at both ends.
    pub lod_table: Vec<[f64; 2]>,
    /// MTOW thresholds separating wake turbulence classes F, E, D, C, B and A.
    pub wake_turbulence_thresholds_kg: [f64; 5],
}

impl Default for AirframeParameters {
    fn default() -> Self {
        Self {
            standard_mass_factors: [-3.189_523_59e-7, 4.228_405_52e-1, -30.0],
            lod_table: vec![
                [200.0, 13.0],
                [40_000.0, 16.0],
                [200_000.0, 19.0],
                [500_000.0, 20.0],
                [1_000_000.0, 20.0],
            ],
            wake_turbulence_thresholds_kg: [15_000.0, 60_000.0, 100_000.0, 270_000.0, 560_000.0],
        }
    }
}

/// Energy prices ($/MWh).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyPrices {
    pub petrol: f64,
    pub kerosene: f64,
    pub gasoline: f64,
    pub e_fuel: f64,
    pub compressed_h2: f64,
    pub liquid_h2: f64,
    pub liquid_ch4: f64,
    pub liquid_nh3: f64,
    pub battery: f64,
}

impl Default for EnergyPrices {
    fn default() -> Self {
        Self {
            petrol: 50.0,
            kerosene: 50.0,
            gasoline: 50.0,
            e_fuel: 125.0,
            compressed_h2: 160.0,
            liquid_h2: 140.0,
            liquid_ch4: 120.0,
            liquid_nh3: 54.0,
            battery: 110.0,
        }
    }
}

impl EnergyPrices {
    /// Price of one joule of `energy` ($/J).
    pub fn per_joule(&self, energy: EnergyType) -> f64 {
        let per_mwh = match energy {
            EnergyType::Petrol => self.petrol,
            EnergyType::Kerosene => self.kerosene,
            EnergyType::Gasoline => self.gasoline,
            EnergyType::EFuel => self.e_fuel,
            EnergyType::CompressedH2 => self.compressed_h2,
            EnergyType::LiquidH2 => self.liquid_h2,
            EnergyType::LiquidCh4 => self.liquid_ch4,
            EnergyType::LiquidNh3 => self.liquid_nh3,
            EnergyType::Battery => self.battery,
        };
        per_mwh_to_per_j(per_mwh)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficZoneFactors {
    pub domestic_europe: f64,
    pub west_bound: f64,
    pub east_bound: f64,
}

impl Default for TrafficZoneFactors {
    fn default() -> Self {
        Self {
            domestic_europe: 1.0,
            west_bound: 0.7,
            east_bound: 0.6,
        }
    }
}

impl TrafficZoneFactors {
    pub fn get(&self, zone: TrafficZone) -> f64 {
        match zone {
            TrafficZone::DomesticEurope => self.domestic_europe,
            TrafficZone::WestBound => self.west_bound,
            TrafficZone::EastBound => self.east_bound,
        }
    }
}

/// Thorbeck-style operating cost constants, in US dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostParameters {
    pub energy_price_per_mwh: EnergyPrices,
    pub airframe_price_per_kg: f64,
    pub thermal_engine_price_per_kg: f64,
    pub depreciation_period_yr: f64,
    pub interest_rate: f64,
    pub residual_value_factor: f64,
    pub insurance_rate: f64,
    pub flight_attendant_salary: f64,
    pub flight_crew_salary: f64,
    pub crew_complement: f64,
    pub handling_fee_per_kg: f64,
    pub landing_fee_per_kg: f64,
    pub labor_cost_per_h: f64,
    pub burden_factor: f64,
    pub emotor_price_per_kw: f64,
    pub fuel_cell_price_per_kw: f64,
    pub battery_price_per_wh: f64,
    pub battery_lifetime_cycles: f64,
    pub gh2_tank_price_per_kg: f64,
    pub cryogenic_tank_price_per_kg: f64,
    pub emotor_maintenance_factor: f64,
    pub traffic_zone_factor: TrafficZoneFactors,
}

const EURO_DOLLAR: f64 = 1.2;

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            energy_price_per_mwh: EnergyPrices::default(),
            airframe_price_per_kg: 1_150.0 * EURO_DOLLAR,
            thermal_engine_price_per_kg: 2_500.0 * EURO_DOLLAR,
            depreciation_period_yr: 14.0,
            interest_rate: 0.05,
            residual_value_factor: 0.1,
            insurance_rate: 0.005,
            flight_attendant_salary: 60_000.0 * EURO_DOLLAR,
            flight_crew_salary: 300_000.0 * EURO_DOLLAR,
            crew_complement: 5.0,
            handling_fee_per_kg: 0.1 * EURO_DOLLAR,
            landing_fee_per_kg: 0.01 * EURO_DOLLAR,
            labor_cost_per_h: 50.0 * EURO_DOLLAR,
            burden_factor: 2.0,
            emotor_price_per_kw: 94.0,
            fuel_cell_price_per_kw: 40.0,
            battery_price_per_wh: 300.0,
            battery_lifetime_cycles: 5_000.0,
            gh2_tank_price_per_kg: 300.0,
            cryogenic_tank_price_per_kg: 245.0,
            emotor_maintenance_factor: 0.75,
            traffic_zone_factor: TrafficZoneFactors::default(),
        }
    }
}
