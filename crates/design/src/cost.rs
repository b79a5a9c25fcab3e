//! Cash and direct operating costs over the category's representative mission.

use gam_config::ModelParameters;
use gam_core::kinds::{EnergyType, EngineType, TrafficZone};
use gam_core::units::{n_to_kgf, s_to_h, w_to_kw};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::DesignError;
use crate::flight::{Load, fly_distance};
use crate::record::AirplaneDesign;

/// Yearly and per-flight cost items, in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub cost_range_m: f64,
    pub block_time_s: f64,
    pub annuity_factor: f64,
    /// Whole flights per year.
    pub flight_cycle_count: f64,
    pub airframe_price: f64,
    pub engine_price: f64,
    pub fuel_cell_price: f64,
    pub tank_price: f64,
    pub battery_yearly_capital_cost: f64,
    pub yearly_capital_cost: f64,
    pub yearly_crew_cost: f64,
    pub airframe_material_cost: f64,
    pub airframe_labor_cost: f64,
    pub engine_maintenance_cost: f64,
    pub yearly_flight_cost: f64,
    pub yearly_cash_operating_cost: f64,
    pub yearly_direct_operating_cost: f64,
    pub flight_cash_operating_cost: f64,
    pub flight_direct_operating_cost: f64,
}

/// Flights per year for an average block time (s).
pub fn yearly_utilization(block_time_s: f64) -> f64 {
    6011.2 / (s_to_h(block_time_s) + 1.83)
}

/// Cabin attendants required for `npax` seats.
pub fn flight_attendant_count(npax: u32) -> u32 {
    if npax < 20 { 0 } else { npax.div_ceil(50) }
}

/// Annuity over `years` with residual value, per unit of price.
fn annuity_factor(interest_rate: f64, residual_value_factor: f64, years: f64) -> f64 {
    let discount = (1.0 / (1.0 + interest_rate)).powf(years);
    interest_rate * (1.0 - residual_value_factor * discount) / (1.0 - discount)
}

/// Operating cost of `design` flying its category's cost mission full of passengers.
pub fn operating_cost(params: &ModelParameters, design: &AirplaneDesign, zone: TrafficZone) -> Result<CostBreakdown, DesignError> {
    let cost = &params.cost;
    let ps = &design.power_system;
    let structure = &design.weights.structure;
    let npax = design.npax;
    let pax_mass = params.pax_mass(design.category);
    let (mtow, owe) = (design.mtow(), design.owe());
    let engine_count = f64::from(ps.engine_count());

    let cost_range = params.category(design.category).cost_range_m;
    let flight = fly_distance(params, design, cost_range, Load::Passengers(npax))?;
    let block_time = flight.fuel.time_s;
    let cycles = yearly_utilization(block_time);
    debug!(cost_range, block_time, cycles, "cost mission");

    let airframe_mass = structure.basic_mwe_kg + structure.furnishing_kg + structure.operator_items_kg;
    let airframe_price = cost.airframe_price_per_kg * airframe_mass;

    let (engine_price, fuel_cell_price) = match ps.engine_type() {
        EngineType::Emotor => {
            let engines = cost.emotor_price_per_kw * w_to_kw(design.max_power_w) * engine_count;
            let stacks = if ps.has_fuel_cell() {
                cost.fuel_cell_price_per_kw
                    * params.propulsion.power_density_kw_kg.fuel_cell
                    * structure.fuel_cell_kg
            } else {
                0.0
            };
            (engines, stacks)
        }
        _ => (cost.thermal_engine_price_per_kg * structure.propulsion_kg, 0.0),
    };

    let mut tank_price = 0.0;
    let mut battery_yearly_capital_cost = 0.0;
    match ps.energy_type() {
        EnergyType::LiquidH2 | EnergyType::LiquidCh4 | EnergyType::LiquidNh3 => {
            tank_price = structure.energy_storage_kg * cost.cryogenic_tank_price_per_kg;
        }
        EnergyType::CompressedH2 => {
            tank_price = structure.energy_storage_kg * cost.gh2_tank_price_per_kg;
        }
        EnergyType::Battery => {
            let battery_price = structure.energy_storage_kg
                * params.storage.battery_energy_density_wh_kg
                * cost.battery_price_per_wh;
            let lifetime_years = cost.battery_lifetime_cycles / cycles;
            let factor = annuity_factor(cost.interest_rate, cost.residual_value_factor, lifetime_years);
            battery_yearly_capital_cost = battery_price * (factor + cost.insurance_rate);
        }
        EnergyType::Petrol | EnergyType::Kerosene | EnergyType::Gasoline | EnergyType::EFuel => {}
    }

    let annuity = annuity_factor(cost.interest_rate, cost.residual_value_factor, cost.depreciation_period_yr);
    let yearly_capital_cost = (airframe_price + engine_price + fuel_cell_price + tank_price)
        * (annuity + cost.insurance_rate)
        + battery_yearly_capital_cost;

    let yearly_crew_cost = cost.crew_complement
        * (cost.flight_attendant_salary * f64::from(flight_attendant_count(npax)) + cost.flight_crew_salary);

    let block_h = s_to_h(block_time);
    let owe_t = owe / 1000.0;
    let airframe_material_cost = owe_t * (0.21 * block_h + 13.7) + 57.5;
    let airframe_labor_cost = cost.labor_cost_per_h
        * (1.0 + cost.burden_factor)
        * ((0.655 + 0.01 * owe_t) * block_h + 0.254 + 0.01 * owe_t);
    // Static thrust proxy: power over a tenth of the cruise speed.
    let static_thrust = design.max_power_w / (0.1 * design.cruise_tas_m_s);
    let mut engine_maintenance_cost = engine_count * (1.5 * n_to_kgf(static_thrust) / 1000.0 + 30.5 * block_h + 10.6);
    if ps.engine_type() == EngineType::Emotor {
        engine_maintenance_cost *= cost.emotor_maintenance_factor;
    }
    let flight_maintenance_cost = airframe_material_cost + airframe_labor_cost + engine_maintenance_cost;

    let energy_cost = flight.fuel.mission_energy_j * cost.energy_price_per_mwh.per_joule(ps.energy_type());
    let handling = pax_mass * f64::from(npax) * cost.handling_fee_per_kg;
    let landing = mtow * cost.landing_fee_per_kg;
    let en_route = cost.traffic_zone_factor.get(zone) * (cost_range / 1000.0) * (mtow / 50_000.0).sqrt();
    let yearly_flight_cost = (energy_cost + handling + landing + en_route + flight_maintenance_cost) * cycles;

    let yearly_cash_operating_cost = yearly_crew_cost + yearly_flight_cost;
    let yearly_direct_operating_cost = yearly_cash_operating_cost + yearly_capital_cost;

    Ok(CostBreakdown {
        cost_range_m: cost_range,
        block_time_s: block_time,
        annuity_factor: annuity,
        flight_cycle_count: cycles.floor(),
        airframe_price,
        engine_price,
        fuel_cell_price,
        tank_price,
        battery_yearly_capital_cost,
        yearly_capital_cost,
        yearly_crew_cost,
        airframe_material_cost,
        airframe_labor_cost,
        engine_maintenance_cost,
        yearly_flight_cost,
        yearly_cash_operating_cost,
        yearly_direct_operating_cost,
        flight_cash_operating_cost: yearly_cash_operating_cost / cycles,
        flight_direct_operating_cost: yearly_direct_operating_cost / cycles,
    })
}
