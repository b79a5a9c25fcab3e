use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use generic_airplane_model::config::{ModelParameters, load_aircraft, load_parameters, save_parameters};
use generic_airplane_model::design::aircraft;
use generic_airplane_model::design::tune_design;
use generic_airplane_model::export::json;
use generic_airplane_model::units::m_to_km;

#[path = "common/logging.rs"]
mod logging;

/// Tune the model factors until it reproduces a reference airplane.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generic Airplane Model calibration tool")]
struct Cli {
    /// Reference aircraft catalog: directory of TOML files, a TOML file or a YAML list
    #[arg(long, default_value = "configs/aircraft")]
    catalog: PathBuf,

    /// Aircraft name (case-insensitive, defaults to the first catalog entry)
    #[arg(long)]
    aircraft: Option<String>,

    /// Model parameter file to start from; built-in defaults when omitted
    #[arg(long)]
    params: Option<PathBuf>,

    /// Write the tuned parameters as YAML
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the calibrated design record as JSON (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log solver progress to stderr
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let params = match &cli.params {
        Some(path) => load_parameters(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => ModelParameters::default(),
    };
    let catalog = load_aircraft(&cli.catalog)
        .with_context(|| format!("loading aircraft catalog {}", cli.catalog.display()))?;
    let entry = aircraft::select(&catalog, cli.aircraft.as_deref())?;
    let (power_system, target) = aircraft::from_config(entry)?;

    let calibration = tune_design(&params, &power_system, &target)?;
    let tuned = &calibration.parameters.tuning;
    let design = &calibration.design;

    println!("=== Calibration: {} ===", entry.name);
    println!(
        "Target         : MTOW = {:.0} kg, OWE = {:.0} kg, range = {:.0} km",
        target.mtow_kg,
        target.owe_kg,
        m_to_km(design.nominal_range_m)
    );
    println!("L/D factor     : {:.4}", tuned.lod_factor);
    println!("Std mass factor: {:.4}", tuned.stdm_factor);
    println!(
        "Passenger mass : {:.1} kg, max payload factor {:.3}",
        design.pax_mass_kg, tuned.max_payload_factor
    );
    println!(
        "Model          : OWE = {:.0} kg, fuel = {:.0} kg, L/D = {:.2}",
        design.owe(),
        design.energy.total_fuel_kg,
        design.aerodynamic_efficiency
    );

    if let Some(path) = &cli.output {
        save_parameters(path, &calibration.parameters)
            .with_context(|| format!("writing parameters to {}", path.display()))?;
    }
    if let Some(path) = &cli.json {
        json::write_record(path, design)?;
    }

    Ok(())
}
