//! Core units, constants, and shared primitives for the Generic Airplane Model workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at sea level (m/s²).
    pub const G0: f64 = 9.80665;
    /// Specific gas constant of dry air (J/kg/K).
    pub const R_AIR: f64 = 287.053;
    /// Heat capacity ratio of air.
    pub const GAMMA_AIR: f64 = 1.4;
    /// Sea level standard pressure (Pa).
    pub const P0: f64 = 101_325.0;
    /// Sea level standard temperature (K).
    pub const T0: f64 = 288.15;
}

/// Basic unit conversion helpers. Every model works in SI; these only sit at the edges.
pub mod units {
    /// Metres per international foot.
    pub const FOOT: f64 = 0.3048;
    /// Metres per nautical mile.
    pub const NAUTICAL_MILE: f64 = 1_852.0;
    /// Joules per watt-hour.
    pub const WATT_HOUR: f64 = 3_600.0;

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert feet to metres.
    #[inline]
    pub fn ft_to_m(v: f64) -> f64 {
        v * FOOT
    }

    /// Convert metres to feet.
    #[inline]
    pub fn m_to_ft(v: f64) -> f64 {
        v / FOOT
    }

    /// Convert nautical miles to metres.
    #[inline]
    pub fn nm_to_m(v: f64) -> f64 {
        v * NAUTICAL_MILE
    }

    /// Convert kilometres per hour to metres per second.
    #[inline]
    pub fn kmh_to_ms(v: f64) -> f64 {
        v / 3.6
    }

    /// Convert minutes to seconds.
    #[inline]
    pub fn min_to_s(v: f64) -> f64 {
        v * 60.0
    }

    /// Convert seconds to hours.
    #[inline]
    pub fn s_to_h(v: f64) -> f64 {
        v / 3_600.0
    }

    /// Convert watts to kilowatts.
    #[inline]
    pub fn w_to_kw(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilowatts to watts.
    #[inline]
    pub fn kw_to_w(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert watt-hours to joules.
    #[inline]
    pub fn wh_to_j(v: f64) -> f64 {
        v * WATT_HOUR
    }

    /// Convert joules to kilowatt-hours.
    #[inline]
    pub fn j_to_kwh(v: f64) -> f64 {
        v / (1_000.0 * WATT_HOUR)
    }

    /// Convert a price per megawatt-hour into a price per joule.
    #[inline]
    pub fn per_mwh_to_per_j(v: f64) -> f64 {
        v / 3.6e9
    }

    /// Convert a power specific consumption in kg/kW/h to kg/J.
    #[inline]
    pub fn kg_per_kwh_to_kg_per_j(v: f64) -> f64 {
        v / 3.6e6
    }

    /// Convert bar to pascals.
    #[inline]
    pub fn bar_to_pa(v: f64) -> f64 {
        v * 1.0e5
    }

    /// Convert newtons to kilogram-force.
    #[inline]
    pub fn n_to_kgf(v: f64) -> f64 {
        v / super::constants::G0
    }
}

/// Closed enumerations shared by configuration, propulsion, and design crates.
pub mod kinds {
    use std::fmt;
    use std::str::FromStr;

    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    /// Raised when a textual kind does not name a known variant.
    #[derive(Debug, Clone, Error)]
    #[error("unknown {kind} '{value}'")]
    pub struct ParseKindError {
        pub kind: &'static str,
        pub value: String,
    }

    macro_rules! string_enum {
        ($(#[$meta:meta])* $name:ident, $label:literal { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }) => {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(rename_all = "snake_case")]
            pub enum $name {
                $($(#[$vmeta])* $variant),+
            }

            impl $name {
                /// Every variant, in declaration order.
                pub const ALL: &'static [$name] = &[$($name::$variant),+];

                /// Snake-case identifier used in configuration files.
                pub fn as_str(self) -> &'static str {
                    match self {
                        $($name::$variant => $text),+
                    }
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $name {
                type Err = ParseKindError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let lower = s.trim().to_ascii_lowercase();
                    $name::ALL
                        .iter()
                        .copied()
                        .find(|v| v.as_str() == lower)
                        .ok_or_else(|| ParseKindError {
                            kind: $label,
                            value: s.to_string(),
                        })
                }
            }
        };
    }

    string_enum!(
        /// Energy carrier stored on board.
        EnergyType, "energy type" {
            Petrol => "petrol",
            Kerosene => "kerosene",
            Gasoline => "gasoline",
            EFuel => "e_fuel",
            CompressedH2 => "compressed_h2",
            LiquidH2 => "liquid_h2",
            LiquidCh4 => "liquid_ch4",
            LiquidNh3 => "liquid_nh3",
            Battery => "battery",
        }
    );

    impl EnergyType {
        /// Batteries are the only carrier whose mass does not change in flight.
        pub fn is_battery(self) -> bool {
            matches!(self, EnergyType::Battery)
        }

        /// Hydrogen variants feed a fuel cell when coupled to electric motors.
        pub fn is_hydrogen(self) -> bool {
            matches!(self, EnergyType::CompressedH2 | EnergyType::LiquidH2)
        }
    }

    string_enum!(
        /// Engine architecture.
        EngineType, "engine type" {
            Piston => "piston",
            Turboprop => "turboprop",
            Turbofan => "turbofan",
            Emotor => "emotor",
        }
    );

    string_enum!(
        /// Thrust generating device attached to the engine.
        ThrusterType, "thruster type" {
            Propeller => "propeller",
            Fan => "fan",
            None => "none",
        }
    );

    string_enum!(
        /// Airplane category, driving reserves, altitudes and allowances.
        Category, "category" {
            General => "general",
            Commuter => "commuter",
            Regional => "regional",
            ShortMedium => "short_medium",
            LongRange => "long_range",
            Business => "business",
        }
    );

    string_enum!(
        /// Traffic zone used by the en-route fee of the cost model.
        TrafficZone, "traffic zone" {
            DomesticEurope => "domestic_europe",
            WestBound => "west_bound",
            EastBound => "east_bound",
        }
    );

    impl Default for TrafficZone {
        fn default() -> Self {
            TrafficZone::WestBound
        }
    }
}
