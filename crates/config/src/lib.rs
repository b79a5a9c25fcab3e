//! Configuration models and loaders for the Generic Airplane Model.

pub mod catalog;
pub mod categories;
pub mod parameters;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub use catalog::{AircraftConfig, PowerSystemSpec};
pub use categories::{CategoryParameters, CategoryTable};
pub use parameters::{
    AirframeParameters, CostParameters, EnergyPrices, ModelParameters, OperationalParameters,
    PowerDensities, PropulsionParameters, StorageTechnology, TrafficZoneFactors, TuningFactors,
};

/// Errors that can occur while loading or writing configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to write YAML: {0}")]
    Emit(serde_yaml::Error),
    #[error("invalid model parameters: {0}")]
    Invalid(String),
}

/// Load a (possibly partial) parameter file; `.toml` is read as TOML, anything else as YAML.
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<ModelParameters, ConfigError> {
    let path = path.as_ref();
    let params: ModelParameters = if is_toml(path) {
        toml::from_str(&fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    validate(&params)?;
    Ok(params)
}

/// Write a parameter set as YAML, creating parent directories as needed.
pub fn save_parameters<P: AsRef<Path>>(path: P, params: &ModelParameters) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    serde_yaml::to_writer(file, params).map_err(ConfigError::Emit)
}

/// Load reference aircraft from a directory of TOML files, a single TOML file, or a YAML list.
pub fn load_aircraft<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, ConfigError> {
    load_records(path)
}

/// Reject parameter sets the models cannot evaluate.
pub fn validate(params: &ModelParameters) -> Result<(), ConfigError> {
    let table = &params.airframe.lod_table;
    if table.is_empty() {
        return Err(ConfigError::Invalid("lod_table must not be empty".into()));
    }
    if table.windows(2).any(|w| w[1][0] <= w[0][0]) {
        return Err(ConfigError::Invalid(
            "lod_table MTOW breakpoints must be strictly increasing".into(),
        ));
    }
    let wake = &params.airframe.wake_turbulence_thresholds_kg;
    if wake.windows(2).any(|w| w[1] <= w[0]) {
        return Err(ConfigError::Invalid(
            "wake turbulence thresholds must be strictly increasing".into(),
        ));
    }
    let tuning = &params.tuning;
    if tuning.max_fuel_factor <= 0.0 || tuning.max_payload_factor <= 0.0 {
        return Err(ConfigError::Invalid(
            "max fuel and max payload factors must be positive".into(),
        ));
    }
    let lh2_index = params.storage.lh2_tank_gravimetric_index;
    if !(lh2_index > 0.0 && lh2_index < 1.0) {
        return Err(ConfigError::Invalid(
            "lh2 tank gravimetric index must lie in (0, 1)".into(),
        ));
    }
    Ok(())
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    let mut records = Vec::with_capacity(entries.len());
    for path in entries {
        let contents = fs::read_to_string(&path)?;
        records.push(toml::from_str(&contents)?);
    }
    Ok(records)
}
