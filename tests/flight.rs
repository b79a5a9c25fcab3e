mod common;

use approx::assert_relative_eq;
use generic_airplane_model::config::ModelParameters;
use generic_airplane_model::design::{DesignError, Load, fly_distance, fly_tow, fly_tow_n_distance};

#[test]
fn nominal_mission_reproduces_mtow() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let flight = fly_distance(&params, &design, design.nominal_range_m, Load::Passengers(180)).unwrap();
    assert_relative_eq!(flight.tow_kg(), design.mtow(), max_relative = 1e-6);
    assert_relative_eq!(flight.fuel.total_fuel_kg, design.energy.total_fuel_kg, max_relative = 1e-5);
    assert_eq!(flight.payload_kg, 19_800.0);
}

#[test]
fn fly_tow_inverts_fly_distance() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let flight = fly_tow(&params, &design, design.mtow(), Load::Mass(design.payload_kg)).unwrap();
    assert_relative_eq!(flight.distance_m(), design.nominal_range_m, max_relative = 1e-5);

    let shorter = fly_distance(&params, &design, 2.0e6, Load::Passengers(120)).unwrap();
    let back = fly_tow(&params, &design, shorter.tow_kg(), Load::Passengers(120)).unwrap();
    assert_relative_eq!(back.distance_m(), 2.0e6, max_relative = 1e-5);
    assert!(shorter.tow_kg() < design.mtow());
}

#[test]
fn payload_left_after_a_fixed_weight_and_distance() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let flight = fly_tow_n_distance(&params, &design, design.mtow(), design.nominal_range_m).unwrap();
    assert_relative_eq!(flight.payload_kg, design.payload_kg, max_relative = 1e-4);
    assert_relative_eq!(flight.pk_o_mass, design.pk_o_mass, max_relative = 1e-4);
}

#[test]
fn passengers_and_mass_loads_agree() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let by_pax = fly_distance(&params, &design, 3.0e6, Load::Passengers(100)).unwrap();
    let by_mass = fly_distance(&params, &design, 3.0e6, Load::Mass(100.0 * design.pax_mass_kg)).unwrap();
    assert_relative_eq!(by_pax.tow_kg(), by_mass.tow_kg(), max_relative = 1e-9);
    assert_relative_eq!(by_pax.pk_o_energy, by_mass.pk_o_energy, max_relative = 1e-9);
}

#[test]
fn overloaded_take_off_is_non_physical() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let tow = design.owe() + design.payload_kg - 2_000.0;
    let result = fly_tow(&params, &design, tow, Load::Mass(design.payload_kg));
    assert!(matches!(
        result,
        Err(DesignError::NonPhysical { quantity: "distance", .. })
    ));
}

#[test]
fn battery_take_off_weight_ignores_distance() {
    let params = ModelParameters::default();
    let design = common::electric_four_seater(&params);
    let short = fly_distance(&params, &design, 50_000.0, Load::Passengers(2)).unwrap();
    let long = fly_distance(&params, &design, 90_000.0, Load::Passengers(2)).unwrap();
    assert_relative_eq!(short.tow_kg(), design.owe() + 2.0 * design.pax_mass_kg, max_relative = 1e-12);
    assert_eq!(short.tow_kg(), long.tow_kg());
    assert!(long.fuel.total_energy_j > short.fuel.total_energy_j);
}

#[test]
fn battery_range_is_set_by_design_energy() {
    let params = ModelParameters::default();
    let design = common::electric_four_seater(&params);
    let flight = fly_tow(&params, &design, design.mtow(), Load::Passengers(4)).unwrap();
    assert_relative_eq!(flight.distance_m(), design.nominal_range_m, max_relative = 1e-5);
    assert_relative_eq!(flight.fuel.total_energy_j, design.energy.total_energy_j, max_relative = 1e-6);
}
