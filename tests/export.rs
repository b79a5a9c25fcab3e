mod common;

use approx::assert_relative_eq;
use generic_airplane_model::config::ModelParameters;
use generic_airplane_model::design::{AirplaneDesign, build_payload_range};
use generic_airplane_model::export::{json, payload_range};

#[test]
fn design_record_round_trips_through_json() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("designs/regional.json");

    json::write_record(&path, &design).unwrap();
    let back: AirplaneDesign = json::read_record(&path).unwrap();

    assert_eq!(back.power_system, design.power_system);
    assert_eq!(back.category, design.category);
    assert_eq!(back.npax, design.npax);
    assert_eq!(back.wake_turbulence_class, design.wake_turbulence_class);
    assert_relative_eq!(back.mtow(), design.mtow(), max_relative = 1e-12);
    assert_relative_eq!(back.owe(), design.owe(), max_relative = 1e-12);
    assert_relative_eq!(back.energy.total_energy_j, design.energy.total_energy_j, max_relative = 1e-12);

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["category"], "regional");
    assert!(value["weights"]["mtow"].is_number());
}

#[test]
fn envelope_csv_lists_the_corners() {
    let params = ModelParameters::default();
    let design = common::regional_jet(&params);
    let envelope = build_payload_range(&params, &design).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plr.csv");
    payload_range::write_csv(&path, &envelope).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "corner,range_km,payload_kg,npax");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("zero_range,0.0,"));
    assert!(lines[4].starts_with("no_payload,"));

    let rows = payload_range::rows(&envelope);
    assert_relative_eq!(rows[3].range_km, envelope.range_no_payload_m / 1_000.0, max_relative = 1e-12);
}
