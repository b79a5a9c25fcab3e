//! Payload-range envelope and the feasibility queries built on it.

use gam_config::ModelParameters;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::DesignError;
use crate::flight::{Load, solve_distance};
use crate::record::AirplaneDesign;

/// Relative tolerance on the polygon edges used by [`PayloadRangeEnvelope::is_in_plr`].
pub const EDGE_TOLERANCE: f64 = 1e-9;

/// Corner of the payload-range polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint {
    pub range_m: f64,
    pub payload_kg: f64,
}

/// Piecewise-linear payload-range polygon of a design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRangeEnvelope {
    pub pax_mass_kg: f64,
    pub payload_max_kg: f64,
    pub range_payload_max_m: f64,
    pub payload_fuel_max_kg: f64,
    pub range_fuel_max_m: f64,
    pub range_no_payload_m: f64,
}

/// Which limits a mission breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feasibility {
    /// False when payload exceeds what can be carried over the distance.
    pub capacity: bool,
    /// False when the distance exceeds the ferry range.
    pub distance: bool,
}

impl Feasibility {
    pub fn is_feasible(&self) -> bool {
        self.capacity && self.distance
    }
}

/// Payload that fits over a distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    pub payload_kg: f64,
    /// Whole passengers within `payload_kg`.
    pub npax: u32,
}

/// Fly the three limiting missions at MTOW and assemble the polygon.
pub fn build_payload_range(params: &ModelParameters, design: &AirplaneDesign) -> Result<PayloadRangeEnvelope, DesignError> {
    let mtow = design.mtow();
    let payload_max = design.weights.payload_max;

    let mut range_payload_max = solve_distance(params, design, mtow, payload_max)?;
    if range_payload_max < 0.0 {
        warn!(range = range_payload_max, "max payload mission clipped at zero range");
        range_payload_max = 0.0;
    }

    let payload_fuel_max =
        design.payload_kg + design.energy.total_fuel_kg * (1.0 - params.tuning.max_fuel_factor);
    let range_fuel_max = solve_distance(params, design, mtow, payload_fuel_max)?;
    let range_no_payload = solve_distance(params, design, mtow - payload_fuel_max, 0.0)?;

    debug!(
        range_payload_max,
        range_fuel_max, range_no_payload, payload_fuel_max, "payload-range envelope"
    );
    Ok(PayloadRangeEnvelope {
        pax_mass_kg: design.pax_mass_kg,
        payload_max_kg: payload_max,
        range_payload_max_m: range_payload_max,
        payload_fuel_max_kg: payload_fuel_max,
        range_fuel_max_m: range_fuel_max,
        range_no_payload_m: range_no_payload,
    })
}

impl PayloadRangeEnvelope {
    /// Polygon corners from zero range to ferry range.
    pub fn corners(&self) -> [EnvelopePoint; 4] {
        [
            EnvelopePoint {
                range_m: 0.0,
                payload_kg: self.payload_max_kg,
            },
            EnvelopePoint {
                range_m: self.range_payload_max_m,
                payload_kg: self.payload_max_kg,
            },
            EnvelopePoint {
                range_m: self.range_fuel_max_m,
                payload_kg: self.payload_fuel_max_kg,
            },
            EnvelopePoint {
                range_m: self.range_no_payload_m,
                payload_kg: 0.0,
            },
        ]
    }

    /// Check a mission against max payload, MTOW, max fuel and ferry range limits.
    pub fn is_in_plr(&self, distance_m: f64, load: Load) -> Feasibility {
        let payload = load.payload_kg(self.pax_mass_kg);
        let (pm, rpm) = (self.payload_max_kg, self.range_payload_max_m);
        let (pfm, rfm) = (self.payload_fuel_max_kg, self.range_fuel_max_m);
        let rnp = self.range_no_payload_m;

        // Distances within `slack` of an edge count as on it, so points the solver put
        // back onto the polygon are not rejected on rounding.
        let slack = EDGE_TOLERANCE * rnp.max(1.0);
        let max_payload = pm - payload + EDGE_TOLERANCE * pm;
        let mtow_line = (payload - pfm) * (rpm - rfm) - (pm - pfm) * (distance_m - rfm) + (pm - pfm).abs() * slack;
        let max_fuel_line = payload * (rfm - rnp) - pfm * (distance_m - rnp) + pfm * slack;
        let max_range = rnp - distance_m + slack;

        let over_capacity = max_payload < 0.0 || mtow_line < 0.0 || max_fuel_line < 0.0;
        match (over_capacity, max_range >= 0.0) {
            (true, true) => Feasibility {
                capacity: false,
                distance: true,
            },
            (_, false) => Feasibility {
                capacity: max_payload >= 0.0,
                distance: false,
            },
            (false, true) => Feasibility {
                capacity: true,
                distance: true,
            },
        }
    }

    /// Largest payload over `distance_m`; zero beyond the ferry range.
    pub fn max_capacity(&self, distance_m: f64) -> Capacity {
        let (pm, rpm) = (self.payload_max_kg, self.range_payload_max_m);
        let (pfm, rfm) = (self.payload_fuel_max_kg, self.range_fuel_max_m);
        let rnp = self.range_no_payload_m;

        let payload_kg = if distance_m <= rpm {
            pm
        } else if distance_m <= rfm {
            pfm + (pm - pfm) * (distance_m - rfm) / (rpm - rfm)
        } else if distance_m <= rnp {
            pfm * (distance_m - rnp) / (rfm - rnp)
        } else {
            0.0
        };
        Capacity {
            payload_kg,
            npax: (payload_kg / self.pax_mass_kg).floor().max(0.0) as u32,
        }
    }

    /// Longest distance with `load` on board; zero when above max payload.
    pub fn max_distance(&self, load: Load) -> f64 {
        let payload = load.payload_kg(self.pax_mass_kg);
        let (pm, rpm) = (self.payload_max_kg, self.range_payload_max_m);
        let (pfm, rfm) = (self.payload_fuel_max_kg, self.range_fuel_max_m);
        let rnp = self.range_no_payload_m;

        if payload > pm {
            0.0
        } else if payload > pfm {
            rfm + (payload - pfm) * (rpm - rfm) / (pm - pfm)
        } else if pfm > 0.0 {
            rnp + payload * (rfm - rnp) / pfm
        } else {
            rnp
        }
    }
}
