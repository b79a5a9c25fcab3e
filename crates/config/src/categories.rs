//! Per-category defaults: design envelope, altitudes, reserve policy and allowances.

use gam_core::kinds::Category;
use gam_core::units::{ft_to_m, km_to_m, kmh_to_ms, min_to_s, nm_to_m};
use serde::{Deserialize, Serialize};

/// Everything the model assumes about one airplane category.
///
/// Entries replaced from a configuration file must be complete; only whole categories fall back
/// to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryParameters {
    /// Largest passenger count for which this category is guessed.
    pub capacity: Option<u32>,
    /// Longest design range for which this category is guessed (m).
    pub max_distance_m: Option<f64>,
    /// Default cruise speed, Mach when not above 1, true airspeed in m/s otherwise.
    pub cruise_speed: Option<f64>,
    pub cruise_altitude_m: f64,
    pub diversion_altitude_m: f64,
    pub holding_altitude_m: f64,
    /// Fraction of mission fuel kept as contingency.
    pub reserve_fuel_factor: f64,
    pub diversion_leg_m: f64,
    pub holding_time_s: f64,
    pub furnishing_per_pax_kg: f64,
    pub pax_mass_kg: f64,
    /// Range of the representative mission flown by the cost model (m).
    pub cost_range_m: f64,
}

/// Category table indexed by [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryTable {
    pub general: CategoryParameters,
    pub commuter: CategoryParameters,
    pub regional: CategoryParameters,
    pub short_medium: CategoryParameters,
    pub long_range: CategoryParameters,
    pub business: CategoryParameters,
}

/// Order in which categories are tried when guessing from capacity and range.
pub const GUESS_ORDER: [Category; 5] = [
    Category::General,
    Category::Commuter,
    Category::Regional,
    Category::ShortMedium,
    Category::LongRange,
];

impl CategoryTable {
    pub fn get(&self, category: Category) -> &CategoryParameters {
        match category {
            Category::General => &self.general,
            Category::Commuter => &self.commuter,
            Category::Regional => &self.regional,
            Category::ShortMedium => &self.short_medium,
            Category::LongRange => &self.long_range,
            Category::Business => &self.business,
        }
    }

    /// First category in [`GUESS_ORDER`] whose envelope covers `npax` over `range_m`.
    pub fn guess(&self, npax: u32, range_m: f64) -> Option<Category> {
        GUESS_ORDER.into_iter().find(|cat| {
            let params = self.get(*cat);
            matches!(
                (params.capacity, params.max_distance_m),
                (Some(capacity), Some(distance)) if npax <= capacity && range_m <= distance
            )
        })
    }
}

fn airliner(
    capacity: u32,
    distance_km: f64,
    mach: f64,
    reserve_fuel_factor: f64,
    furnishing_per_pax_kg: f64,
    pax_mass_kg: f64,
    cost_range_km: f64,
) -> CategoryParameters {
    CategoryParameters {
        capacity: Some(capacity),
        max_distance_m: Some(km_to_m(distance_km)),
        cruise_speed: Some(mach),
        cruise_altitude_m: ft_to_m(35_000.0),
        diversion_altitude_m: ft_to_m(25_000.0),
        holding_altitude_m: ft_to_m(1_500.0),
        reserve_fuel_factor,
        diversion_leg_m: nm_to_m(200.0),
        holding_time_s: min_to_s(30.0),
        furnishing_per_pax_kg,
        pax_mass_kg,
        cost_range_m: km_to_m(cost_range_km),
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            general: CategoryParameters {
                capacity: Some(6),
                max_distance_m: Some(km_to_m(500.0)),
                cruise_speed: Some(kmh_to_ms(300.0)),
                cruise_altitude_m: ft_to_m(5_000.0),
                diversion_altitude_m: ft_to_m(3_000.0),
                holding_altitude_m: ft_to_m(1_500.0),
                reserve_fuel_factor: 0.0,
                diversion_leg_m: 0.0,
                holding_time_s: min_to_s(30.0),
                furnishing_per_pax_kg: 18.0,
                pax_mass_kg: 95.0,
                cost_range_m: km_to_m(200.0),
            },
            commuter: CategoryParameters {
                capacity: Some(19),
                max_distance_m: Some(km_to_m(1_500.0)),
                cruise_speed: Some(kmh_to_ms(400.0)),
                cruise_altitude_m: ft_to_m(10_000.0),
                diversion_altitude_m: ft_to_m(6_000.0),
                holding_altitude_m: ft_to_m(1_500.0),
                reserve_fuel_factor: 0.0,
                diversion_leg_m: 0.0,
                holding_time_s: min_to_s(30.0),
                furnishing_per_pax_kg: 18.0,
                pax_mass_kg: 105.0,
                cost_range_m: km_to_m(400.0),
            },
            regional: CategoryParameters {
                capacity: Some(80),
                max_distance_m: Some(km_to_m(4_500.0)),
                cruise_speed: Some(0.5),
                cruise_altitude_m: ft_to_m(20_000.0),
                diversion_altitude_m: ft_to_m(10_000.0),
                holding_altitude_m: ft_to_m(1_500.0),
                reserve_fuel_factor: 0.0,
                diversion_leg_m: 0.0,
                holding_time_s: min_to_s(45.0),
                furnishing_per_pax_kg: 22.0,
                pax_mass_kg: 110.0,
                cost_range_m: km_to_m(1_000.0),
            },
            short_medium: airliner(250, 8_000.0, 0.78, 0.05, 22.0, 115.0, 3_000.0),
            long_range: airliner(550, 15_000.0, 0.85, 0.03, 30.0, 120.0, 6_000.0),
            business: CategoryParameters {
                capacity: None,
                max_distance_m: None,
                cruise_speed: None,
                ..airliner(0, 0.0, 0.0, 0.05, 40.0, 120.0, 3_000.0)
            },
        }
    }
}
