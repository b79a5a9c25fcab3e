#![allow(dead_code)]

use generic_airplane_model::config::{ModelParameters, PowerSystemSpec};
use generic_airplane_model::design::{AirplaneDesign, DesignMission, PowerSystem, Speed, design_airplane};
use generic_airplane_model::kinds::{Category, EnergyType, EngineType, ThrusterType};
use generic_airplane_model::units::{ft_to_m, km_to_m};

/// 180-seat kerosene turbofan sized for 5500 km.
pub fn regional_jet(params: &ModelParameters) -> AirplaneDesign {
    let ps = PowerSystem::try_from(PowerSystemSpec {
        energy_type: EnergyType::Kerosene,
        engine_count: 2,
        engine_type: EngineType::Turbofan,
        thruster_type: ThrusterType::Fan,
        bypass_ratio: Some(12.0),
    })
    .unwrap();
    let mission = DesignMission::new(180, km_to_m(5_500.0))
        .with_category(Category::Regional)
        .with_speed(Speed::Mach(0.78))
        .with_altitude(ft_to_m(35_000.0));
    design_airplane(params, &ps, &mission).unwrap()
}

/// Four-seat battery airplane sized for 100 km.
pub fn electric_four_seater(params: &ModelParameters) -> AirplaneDesign {
    let ps = PowerSystem::try_from(PowerSystemSpec {
        energy_type: EnergyType::Battery,
        engine_count: 2,
        engine_type: EngineType::Emotor,
        thruster_type: ThrusterType::Propeller,
        bypass_ratio: None,
    })
    .unwrap();
    let mission = DesignMission::new(4, km_to_m(100.0))
        .with_category(Category::General)
        .with_speed(Speed::TrueAirspeed(250.0 / 3.6))
        .with_altitude(ft_to_m(5_000.0));
    design_airplane(params, &ps, &mission).unwrap()
}
