//! Routing query and result types

use geo::Point;
use serde::Serialize;

use crate::VertexId;

/// Single origin/destination request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    /// Start coordinates in kilometers, not necessarily a vertex
    pub origin: Point<f64>,
    /// Target coordinates in kilometers, not necessarily a vertex
    pub destination: Point<f64>,
    /// Maximum length of a single walking leg, meters
    pub radius_m: f64,
}

impl Query {
    pub fn new(origin: Point<f64>, destination: Point<f64>, radius_m: f64) -> Self {
        Self {
            origin,
            destination,
            radius_m,
        }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_m / 1000.0
    }
}

/// Outcome of a single query.
///
/// An unreachable destination is not an error: it is reported with an
/// infinite `time_minutes` and empty path/zero distances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Vertices traveled by vehicle, in travel order. Walking legs at both
    /// ends are implicit.
    pub path: Vec<VertexId>,
    pub time_minutes: f64,
    pub total_distance_km: f64,
    pub walking_distance_km: f64,
    /// Rounded to two decimals
    pub vehicle_distance_km: f64,
}

impl RouteResult {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            time_minutes: f64::INFINITY,
            total_distance_km: 0.0,
            walking_distance_km: 0.0,
            vehicle_distance_km: 0.0,
        }
    }

    /// Walk straight from origin to destination without touching the network
    pub fn direct_walk(distance_km: f64, walking_speed_kmh: f64) -> Self {
        Self {
            path: Vec::new(),
            time_minutes: distance_km / walking_speed_kmh * 60.0,
            total_distance_km: distance_km,
            walking_distance_km: distance_km,
            vehicle_distance_km: 0.0,
        }
    }

    pub(crate) fn with_vehicle(
        path: Vec<VertexId>,
        time_hours: f64,
        walking_distance_km: f64,
        vehicle_distance_km: f64,
    ) -> Self {
        Self {
            path,
            time_minutes: time_hours * 60.0,
            total_distance_km: walking_distance_km + vehicle_distance_km,
            walking_distance_km,
            vehicle_distance_km: round_to_hundredths(vehicle_distance_km),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.time_minutes.is_finite()
    }

    pub fn is_direct_walk(&self) -> bool {
        self.is_reachable() && self.path.is_empty()
    }
}

// f64::round rounds half away from zero
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
