//! Road network components - vertices and vehicle edges

use geo::Point;

use crate::VertexId;

/// Road network vertex
#[derive(Debug, Clone)]
pub struct RoadVertex {
    /// Dense vertex id, same as the graph node index
    pub id: VertexId,
    /// Vertex coordinates in kilometers
    pub geometry: Point<f64>,
}

/// Vehicle edge, traversable in both directions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadEdge {
    /// Segment length in kilometers
    pub length_km: f64,
    /// Vehicle speed on the segment in km/h
    pub speed_kmh: f64,
}

impl RoadEdge {
    pub fn new(length_km: f64, speed_kmh: f64) -> Self {
        Self {
            length_km,
            speed_kmh,
        }
    }

    /// Traversal time in hours
    pub fn travel_time(&self) -> f64 {
        self.length_km / self.speed_kmh
    }
}
