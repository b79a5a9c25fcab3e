use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use generic_airplane_model::config::{ModelParameters, PowerSystemSpec, load_parameters};
use generic_airplane_model::design::{
    AirplaneDesign, DesignCriterion, DesignMission, PowerSystem, Speed, best_design,
    build_payload_range, design_airplane, design_from_mtow, operating_cost,
};
use generic_airplane_model::export::{json, payload_range as export_plr};
use generic_airplane_model::kinds::{Category, EnergyType, EngineType, ThrusterType, TrafficZone};
use generic_airplane_model::units::{ft_to_m, km_to_m, m_to_ft, m_to_km};

#[path = "common/logging.rs"]
mod logging;

/// Size an airplane for a mission and report its weights, energy and performance.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generic Airplane Model design tool")]
struct Cli {
    /// Energy carrier (kerosene, liquid_h2, battery, ...)
    #[arg(long)]
    energy: EnergyType,

    /// Engine type (piston, turboprop, turbofan, emotor)
    #[arg(long)]
    engine: EngineType,

    /// Number of engines
    #[arg(long, default_value_t = 2)]
    engines: u32,

    /// Thruster type (propeller, fan, none)
    #[arg(long, default_value = "none")]
    thruster: ThrusterType,

    /// Bypass ratio, required for turbofans
    #[arg(long)]
    bpr: Option<f64>,

    /// Airplane category (guessed from npax and range when omitted)
    #[arg(long)]
    category: Option<Category>,

    /// Passenger count
    #[arg(long)]
    npax: Option<u32>,

    /// Payload in kg
    #[arg(long)]
    payload: Option<f64>,

    /// Design range in km
    #[arg(long)]
    range: Option<f64>,

    /// Cruise speed: Mach when not above 1, true airspeed in m/s otherwise
    #[arg(long)]
    speed: Option<f64>,

    /// Cruise altitude in ft
    #[arg(long)]
    altitude: Option<f64>,

    /// Design for a fixed MTOW (kg) instead of a fixed range
    #[arg(long, conflicts_with = "best")]
    mtow: Option<f64>,

    /// Search the design range maximizing a criterion
    #[arg(long, value_enum)]
    best: Option<Criterion>,

    /// Model parameter file (YAML or TOML); built-in defaults when omitted
    #[arg(long)]
    params: Option<PathBuf>,

    /// Compute and print the payload-range envelope
    #[arg(long, default_value_t = false)]
    envelope: bool,

    /// Compute and print the direct operating cost
    #[arg(long, default_value_t = false)]
    cost: bool,

    /// Traffic zone used by the cost model
    #[arg(long, default_value = "west_bound")]
    zone: TrafficZone,

    /// Write the design record as JSON (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the payload-range corners as CSV (use '-' for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Log solver progress to stderr
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Criterion {
    PkOMass,
    PkOEnergy,
    SeatCost,
}

impl From<Criterion> for DesignCriterion {
    fn from(value: Criterion) -> Self {
        match value {
            Criterion::PkOMass => DesignCriterion::PkOverMass,
            Criterion::PkOEnergy => DesignCriterion::PkOverEnergy,
            Criterion::SeatCost => DesignCriterion::SeatCostEfficiency,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let params = match &cli.params {
        Some(path) => load_parameters(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => ModelParameters::default(),
    };
    let power_system = PowerSystem::try_from(PowerSystemSpec {
        energy_type: cli.energy,
        engine_count: cli.engines,
        engine_type: cli.engine,
        thruster_type: cli.thruster,
        bypass_ratio: cli.bpr,
    })?;
    let mission = DesignMission {
        category: cli.category,
        npax: cli.npax,
        payload_kg: cli.payload,
        cruise_speed: cli.speed.map(Speed::from_value),
        range_m: cli.range.map(km_to_m),
        cruise_altitude_m: cli.altitude.map(ft_to_m),
    };

    let design = if let Some(mtow) = cli.mtow {
        design_from_mtow(&params, &power_system, &mission, mtow)?
    } else if let Some(criterion) = cli.best {
        let best = best_design(&params, &power_system, &mission, criterion.into())?;
        println!("=== Best Design Range ===");
        println!("Criterion      : {:?}", best.criterion);
        println!("Range          : {:.0} km", m_to_km(best.range_m));
        println!("Value          : {:.6e}", best.value);
        println!();
        best.design
    } else {
        design_airplane(&params, &power_system, &mission)?
    };

    print_design(&design);

    if cli.envelope || cli.csv.is_some() {
        let envelope = build_payload_range(&params, &design)?;
        println!();
        println!("=== Payload-Range Envelope ===");
        for point in envelope.corners() {
            println!(
                "Range {:>8.0} km : payload {:>9.1} kg ({:.1} pax)",
                m_to_km(point.range_m),
                point.payload_kg,
                point.payload_kg / envelope.pax_mass_kg
            );
        }
        if let Some(path) = &cli.csv {
            export_plr::write_csv(path, &envelope)?;
        }
    }

    if cli.cost {
        let cost = operating_cost(&params, &design, cli.zone)?;
        println!();
        println!("=== Operating Cost ({}) ===", cli.zone);
        println!(
            "Cost mission   : {:.0} km, block time {:.2} h, {:.0} flights/yr",
            m_to_km(cost.cost_range_m),
            cost.block_time_s / 3_600.0,
            cost.flight_cycle_count
        );
        println!("Capital        : {:.0} $/yr", cost.yearly_capital_cost);
        println!("Crew           : {:.0} $/yr", cost.yearly_crew_cost);
        println!("Flight         : {:.0} $/yr", cost.yearly_flight_cost);
        println!(
            "Per flight     : COC = {:.0} $, DOC = {:.0} $",
            cost.flight_cash_operating_cost, cost.flight_direct_operating_cost
        );
    }

    if let Some(path) = &cli.json {
        json::write_record(path, &design)?;
    }

    Ok(())
}

fn print_design(design: &AirplaneDesign) {
    let ps = &design.power_system;
    let w = &design.weights;
    let e = &design.energy;

    println!("=== Airplane Design ===");
    println!(
        "Power system   : {} x {} ({}), {}",
        ps.engine_count(),
        ps.engine_type(),
        ps.thruster_type(),
        ps.energy_type()
    );
    println!(
        "Category       : {}, {} pax, payload {:.0} kg",
        design.category, design.npax, design.payload_kg
    );
    println!(
        "Mission        : {:.0} km at {:.1} m/s TAS, {:.0} ft, {:.2} h",
        m_to_km(design.nominal_range_m),
        design.cruise_tas_m_s,
        m_to_ft(design.altitudes.cruise_m),
        design.nominal_time_s / 3_600.0
    );
    println!(
        "Weights        : MTOW = {:.0} kg, MLW = {:.0} kg, MZFW = {:.0} kg",
        w.mtow, w.mlw, w.mzfw
    );
    println!(
        "                 OWE = {:.0} kg, max payload = {:.0} kg",
        w.owe, w.payload_max
    );
    println!(
        "Energy         : fuel = {:.0} kg (mission {:.0}, reserve {:.0}), energy = {:.1} GJ",
        e.total_fuel_kg,
        e.mission_fuel_kg,
        e.reserve_fuel_kg,
        e.total_energy_j / 1e9
    );
    println!(
        "Power          : {:.0} kW per engine",
        design.max_power_w / 1_000.0
    );
    println!(
        "Efficiencies   : L/D = {:.2}, propulsion = {:.3}",
        design.aerodynamic_efficiency, design.propulsion_system_efficiency
    );
    println!(
        "Figures        : OWE/MTOW = {:.3}, pk/OWE = {:.1} m/kg, wake class {:?}",
        design.structural_factor, design.pk_o_mass, design.wake_turbulence_class
    );
}
