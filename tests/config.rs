use std::fs;

use generic_airplane_model::config::{
    ConfigError, ModelParameters, load_aircraft, load_parameters, save_parameters, validate,
};
use generic_airplane_model::kinds::{Category, EnergyType, EngineType};

const PARAMETERS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/parameters.yaml");
const AIRCRAFT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/aircraft");

#[test]
fn shipped_parameter_file_loads() {
    let params = load_parameters(PARAMETERS).unwrap();
    let defaults = ModelParameters::default();
    assert_eq!(params.tuning, defaults.tuning);
    assert_eq!(params.operations, defaults.operations);
    assert_eq!(params.airframe.lod_table, defaults.airframe.lod_table);
    assert_eq!(params.propulsion.fuel_energy_ratio, 2.28);
    assert_eq!(params.pax_mass(Category::Regional), defaults.pax_mass(Category::Regional));
}

#[test]
fn partial_files_keep_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = dir.path().join("tuned.yaml");
    fs::write(&yaml, "tuning:\n  lod_factor: 1.2\n  pax_mass_kg: 100.0\n").unwrap();
    let params = load_parameters(&yaml).unwrap();
    assert_eq!(params.tuning.lod_factor, 1.2);
    assert_eq!(params.tuning.stdm_factor, 1.0);
    assert_eq!(params.pax_mass(Category::LongRange), 100.0);
    assert_eq!(params.cost, ModelParameters::default().cost);

    let toml = dir.path().join("tuned.toml");
    fs::write(&toml, "[tuning]\nstdm_factor = 0.9\n").unwrap();
    let params = load_parameters(&toml).unwrap();
    assert_eq!(params.tuning.stdm_factor, 0.9);
    assert_eq!(params.tuning.lod_factor, 1.0);
}

#[test]
fn invalid_parameters_are_rejected() {
    let mut params = ModelParameters::default();
    params.airframe.lod_table = vec![[50_000.0, 18.0], [10_000.0, 15.0]];
    assert!(matches!(validate(&params), Err(ConfigError::Invalid(_))));

    let mut params = ModelParameters::default();
    params.tuning.max_fuel_factor = 0.0;
    assert!(matches!(validate(&params), Err(ConfigError::Invalid(_))));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "airframe:\n  lod_table: []\n").unwrap();
    assert!(matches!(load_parameters(&path), Err(ConfigError::Invalid(_))));

    fs::write(&path, "tuning: [not, a, map]\n").unwrap();
    assert!(matches!(load_parameters(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn saved_parameters_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/params.yaml");
    let mut params = ModelParameters::default();
    params.tuning.lod_factor = 1.0834;
    params.tuning.pax_mass_kg = Some(104.5);
    save_parameters(&path, &params).unwrap();
    assert_eq!(load_parameters(&path).unwrap(), params);
}

#[test]
fn aircraft_catalog_is_sorted_by_file_name() {
    let catalog = load_aircraft(AIRCRAFT).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "Electric Trainer");
    assert_eq!(catalog[0].power_system.energy_type, EnergyType::Battery);
    assert_eq!(catalog[1].name, "Reference Narrowbody");
    assert_eq!(catalog[1].power_system.engine_type, EngineType::Turbofan);
    assert_eq!(catalog[1].power_system.bypass_ratio, Some(12.0));
    assert_eq!(catalog[1].category, Some(Category::ShortMedium));
}
