use approx::assert_relative_eq;
use generic_airplane_model::config::{ModelParameters, PowerSystemSpec};
use generic_airplane_model::design::inputs::{DesignMission, ResolvedMission, Speed, resolve_mission};
use generic_airplane_model::design::mission::MissionContext;
use generic_airplane_model::kinds::{Category, EnergyType, EngineType, ThrusterType};
use generic_airplane_model::propulsion::{PowerSystem, overall_efficiency, reference_power};
use generic_airplane_model::units::{ft_to_m, km_to_m};
use proptest::prelude::*;

const G: f64 = 9.80665;

fn turbofan() -> PowerSystem {
    PowerSystem::try_from(PowerSystemSpec {
        energy_type: EnergyType::Kerosene,
        engine_count: 2,
        engine_type: EngineType::Turbofan,
        thruster_type: ThrusterType::Fan,
        bypass_ratio: Some(12.0),
    })
    .unwrap()
}

fn electric() -> PowerSystem {
    PowerSystem::try_from(PowerSystemSpec {
        energy_type: EnergyType::Battery,
        engine_count: 2,
        engine_type: EngineType::Emotor,
        thruster_type: ThrusterType::Propeller,
        bypass_ratio: None,
    })
    .unwrap()
}

fn airliner_mission(params: &ModelParameters) -> ResolvedMission {
    let mission = DesignMission::new(180, km_to_m(5_500.0))
        .with_category(Category::Regional)
        .with_speed(Speed::Mach(0.78))
        .with_altitude(ft_to_m(35_000.0));
    resolve_mission(params, &mission).unwrap()
}

fn context<'a>(params: &'a ModelParameters, ps: &'a PowerSystem, mission: &ResolvedMission, mtow: f64) -> MissionContext<'a> {
    MissionContext {
        params,
        power_system: ps,
        mtow,
        total_power: reference_power(params, mtow),
        cruise_speed: mission.cruise_speed,
        altitudes: mission.altitudes,
        reserve: mission.reserve,
    }
}

#[test]
fn cruise_leg_follows_breguet() {
    let params = ModelParameters::default();
    let ps = turbofan();
    let mission = airliner_mission(&params);
    let ctx = context(&params, &ps, &mission, 80_000.0);

    let altitude = mission.altitudes.cruise_m;
    let leg = ctx.leg_fuel(75_000.0, 4.0e6, altitude).unwrap();
    let tas = ctx.tas(altitude).unwrap();
    let eff = overall_efficiency(&params, &ps, tas, ctx.max_power());
    let expected = 75_000.0 * (1.0 - (-(G * 4.0e6) / (eff * 43.1e6 * leg.lod)).exp());
    assert_relative_eq!(leg.fuel_kg, expected, max_relative = 1e-12);
    assert_relative_eq!(leg.energy_j, expected * 43.1e6, max_relative = 1e-12);
    assert_relative_eq!(leg.time_s, 4.0e6 / tas, max_relative = 1e-12);
}

#[test]
fn battery_leg_energy_is_linear() {
    let params = ModelParameters::default();
    let ps = electric();
    let mission = resolve_mission(
        &params,
        &DesignMission::new(4, km_to_m(100.0))
            .with_category(Category::General)
            .with_speed(Speed::TrueAirspeed(250.0 / 3.6)),
    )
    .unwrap();
    let ctx = context(&params, &ps, &mission, 2_800.0);

    let altitude = mission.altitudes.cruise_m;
    let one = ctx.leg_fuel(2_800.0, 50_000.0, altitude).unwrap();
    let two = ctx.leg_fuel(2_800.0, 100_000.0, altitude).unwrap();
    assert_eq!(one.fuel_kg, 0.0);
    assert_relative_eq!(two.energy_j, 2.0 * one.energy_j, max_relative = 1e-12);
    assert_relative_eq!(one.energy_j, 2_800.0 * G * 50_000.0 / (one.efficiency * one.lod), max_relative = 1e-12);
}

#[test]
fn regional_reserve_is_holding_only() {
    let params = ModelParameters::default();
    let ps = turbofan();
    let mission = airliner_mission(&params);
    let ctx = context(&params, &ps, &mission, 80_000.0);

    let fuel = ctx.total_fuel(80_000.0, 3.0e6).unwrap();
    let landing = 80_000.0 - fuel.mission_fuel_kg;
    let hold = ctx
        .holding_fuel(landing, 45.0 * 60.0, mission.altitudes.holding_m)
        .unwrap();
    assert_relative_eq!(fuel.reserve_fuel_kg, hold.fuel_kg, max_relative = 1e-12);
    assert_relative_eq!(fuel.total_fuel_kg, fuel.mission_fuel_kg + fuel.reserve_fuel_kg, max_relative = 1e-12);
}

#[test]
fn battery_mission_burns_no_fuel() {
    let params = ModelParameters::default();
    let ps = electric();
    let mission = resolve_mission(
        &params,
        &DesignMission::new(4, km_to_m(100.0))
            .with_category(Category::General)
            .with_speed(Speed::TrueAirspeed(250.0 / 3.6)),
    )
    .unwrap();
    let ctx = context(&params, &ps, &mission, 2_800.0);
    let fuel = ctx.total_fuel(2_800.0, 1.0e5).unwrap();
    assert_eq!(fuel.total_fuel_kg, 0.0);
    assert!(fuel.total_energy_j > fuel.mission_energy_j);
}

#[test]
fn zero_range_still_burns_take_off_and_climb_fuel() {
    let params = ModelParameters::default();
    let ps = turbofan();
    let mission = airliner_mission(&params);
    let ctx = context(&params, &ps, &mission, 80_000.0);

    let at_gate = ctx.total_fuel(80_000.0, 0.0).unwrap();
    assert!(at_gate.mission_fuel_kg > 0.0);
    assert!(at_gate.reserve_fuel_kg > 0.0);

    let short = ctx.total_fuel(80_000.0, 1.0e5).unwrap();
    let long = ctx.total_fuel(80_000.0, 1.0e6).unwrap();
    assert!(short.mission_fuel_kg > at_gate.mission_fuel_kg);
    assert!(long.mission_fuel_kg > short.mission_fuel_kg);
}

proptest! {
    #[test]
    fn fuel_grows_with_distance(d1 in 1.0e5..8.0e6f64, d2 in 1.0e5..8.0e6f64) {
        let params = ModelParameters::default();
        let ps = turbofan();
        let mission = airliner_mission(&params);
        let ctx = context(&params, &ps, &mission, 80_000.0);
        let (short, long) = if d1 < d2 { (d1, d2) } else { (d2, d1) };
        prop_assume!(long - short > 1.0);
        let a = ctx.total_fuel(80_000.0, short).unwrap();
        let b = ctx.total_fuel(80_000.0, long).unwrap();
        prop_assert!(b.total_fuel_kg > a.total_fuel_kg);
        prop_assert!(b.mission_energy_j > a.mission_energy_j);
    }

    #[test]
    fn fuel_grows_with_take_off_weight(m1 in 3.0e4..1.2e5f64, m2 in 3.0e4..1.2e5f64) {
        let params = ModelParameters::default();
        let ps = turbofan();
        let mission = airliner_mission(&params);
        let ctx = context(&params, &ps, &mission, 80_000.0);
        let (light, heavy) = if m1 < m2 { (m1, m2) } else { (m2, m1) };
        prop_assume!(heavy - light > 1.0);
        let a = ctx.total_fuel(light, 3.0e6).unwrap();
        let b = ctx.total_fuel(heavy, 3.0e6).unwrap();
        prop_assert!(b.total_fuel_kg > a.total_fuel_kg);
    }
}
