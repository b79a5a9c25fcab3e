mod common;

use approx::assert_relative_eq;
use generic_airplane_model::config::ModelParameters;
use generic_airplane_model::design::{DesignCriterion, operating_cost};
use generic_airplane_model::kinds::{Category, TrafficZone};

#[test]
fn kerosene_jet_cost_breakdown() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let cost = operating_cost(&params, &design, TrafficZone::WestBound).unwrap();

    assert_eq!(cost.cost_range_m, params.category(Category::Regional).cost_range_m);
    assert!(cost.block_time_s > 0.0);
    assert_eq!(cost.flight_cycle_count, cost.flight_cycle_count.floor());
    assert!(cost.flight_cycle_count > 0.0);

    assert_eq!(cost.fuel_cell_price, 0.0);
    assert_eq!(cost.tank_price, 0.0);
    assert_eq!(cost.battery_yearly_capital_cost, 0.0);
    assert!(cost.airframe_price > cost.engine_price);
    assert_relative_eq!(
        cost.engine_price,
        params.cost.thermal_engine_price_per_kg * design.weights.structure.propulsion_kg,
        max_relative = 1e-12
    );

    let crew = params.cost.crew_complement
        * (4.0 * params.cost.flight_attendant_salary + params.cost.flight_crew_salary);
    assert_relative_eq!(cost.yearly_crew_cost, crew, max_relative = 1e-12);

    assert!(cost.yearly_cash_operating_cost > 0.0);
    assert!(cost.yearly_direct_operating_cost > cost.yearly_cash_operating_cost);
    assert_relative_eq!(
        cost.yearly_direct_operating_cost,
        cost.yearly_cash_operating_cost + cost.yearly_capital_cost,
        max_relative = 1e-12
    );
    assert!(cost.flight_direct_operating_cost > cost.flight_cash_operating_cost);
}

#[test]
fn en_route_charges_follow_the_traffic_zone() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let europe = operating_cost(&params, &design, TrafficZone::DomesticEurope).unwrap();
    let east = operating_cost(&params, &design, TrafficZone::EastBound).unwrap();
    assert!(europe.yearly_flight_cost > east.yearly_flight_cost);
    assert_eq!(europe.yearly_capital_cost, east.yearly_capital_cost);
    assert_eq!(europe.yearly_crew_cost, east.yearly_crew_cost);
}

#[test]
fn battery_airplane_pays_for_its_cells() {
    let params = ModelParameters::default();
    let design = common::electric_four_seater(&params);
    let cost = operating_cost(&params, &design, TrafficZone::DomesticEurope).unwrap();

    assert!(cost.battery_yearly_capital_cost > 0.0);
    assert!(cost.yearly_capital_cost > cost.battery_yearly_capital_cost);
    assert_eq!(cost.tank_price, 0.0);
    assert_eq!(cost.fuel_cell_price, 0.0);
    assert_relative_eq!(
        cost.engine_price,
        params.cost.emotor_price_per_kw * design.max_power_w / 1_000.0 * 2.0,
        max_relative = 1e-12
    );
    // four seats: no cabin crew
    assert_relative_eq!(
        cost.yearly_crew_cost,
        params.cost.crew_complement * params.cost.flight_crew_salary,
        max_relative = 1e-12
    );
}

#[test]
fn seat_cost_criterion_prefers_cheaper_seats() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let cost = operating_cost(&params, &design, TrafficZone::WestBound).unwrap();
    let value = DesignCriterion::SeatCostEfficiency.evaluate(&params, &design).unwrap();
    assert!(value < 0.0);
    assert_relative_eq!(value, -cost.flight_direct_operating_cost / 180.0, max_relative = 1e-12);
}
