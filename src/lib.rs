//! Generic Airplane Model: parametric conceptual sizing of transport airplanes.
//!
//! The physics and solvers live in the workspace crates; this crate stitches them together so
//! front-ends (CLI, notebooks, GUIs) depend on a single library.

pub use gam_atmosphere as atmosphere;
pub use gam_config as config;
pub use gam_core::{constants, kinds, units};
pub use gam_design as design;
pub use gam_export as export;
pub use gam_propulsion as propulsion;
pub use gam_solver as solver;

pub use gam_core::kinds::{Category, EnergyType, EngineType, ThrusterType, TrafficZone};
pub use gam_design::{
    AirplaneDesign, DesignMission, Load, PayloadRangeEnvelope, PowerSystem, Speed,
};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
