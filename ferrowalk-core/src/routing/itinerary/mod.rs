//! Leg-by-leg breakdown of a computed route, used for rendering

mod to_geojson;

use geo::{Distance, Euclidean, Point};

use crate::{Error, Query, RoadNetwork, RouteResult, SolverOptions, VertexId};

/// Straight walk between two points
#[derive(Debug, Clone)]
pub struct WalkingLeg {
    pub from_location: Point<f64>,
    pub to_location: Point<f64>,
    pub distance_km: f64,
    pub duration_minutes: f64,
}

impl WalkingLeg {
    fn new(from_location: Point<f64>, to_location: Point<f64>, walking_speed_kmh: f64) -> Self {
        let distance_km = Euclidean.distance(from_location, to_location);
        Self {
            from_location,
            to_location,
            distance_km,
            duration_minutes: distance_km / walking_speed_kmh * 60.0,
        }
    }
}

/// Ride along consecutive network vertices
#[derive(Debug, Clone)]
pub struct VehicleLeg {
    pub vertices: Vec<VertexId>,
    pub coordinates: Vec<Point<f64>>,
    pub distance_km: f64,
    pub duration_minutes: f64,
}

/// Complete route with first/last mile walks
#[derive(Debug, Clone)]
pub struct DetailedRoute {
    pub origin: Point<f64>,
    pub destination: Point<f64>,
    pub access_leg: Option<WalkingLeg>,
    pub vehicle_leg: Option<VehicleLeg>,
    pub egress_leg: Option<WalkingLeg>,
    pub total_time_minutes: f64,
    pub walking_distance_km: f64,
    pub vehicle_distance_km: f64,
}

impl DetailedRoute {
    /// Splits a solver result into its walking and vehicle legs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeIndex`] if the path references a vertex
    /// missing from `network`.
    pub fn from_result(
        network: &RoadNetwork,
        query: &Query,
        result: &RouteResult,
        options: &SolverOptions,
    ) -> Result<Self, Error> {
        let mut route = Self {
            origin: query.origin,
            destination: query.destination,
            access_leg: None,
            vehicle_leg: None,
            egress_leg: None,
            total_time_minutes: result.time_minutes,
            walking_distance_km: result.walking_distance_km,
            vehicle_distance_km: result.vehicle_distance_km,
        };

        if !result.is_reachable() {
            return Ok(route);
        }

        let speed = options.walking_speed_kmh;
        let (Some(&first), Some(&last)) = (result.path.first(), result.path.last()) else {
            route.access_leg = Some(WalkingLeg::new(query.origin, query.destination, speed));
            return Ok(route);
        };

        let coordinates = result
            .path
            .iter()
            .map(|&id| {
                network
                    .vertex(id)
                    .map(|vertex| vertex.geometry)
                    .ok_or(Error::InvalidNodeIndex)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let access = WalkingLeg::new(query.origin, network.location(first), speed);
        let egress = WalkingLeg::new(network.location(last), query.destination, speed);

        route.vehicle_leg = Some(VehicleLeg {
            vertices: result.path.clone(),
            coordinates,
            distance_km: result.vehicle_distance_km,
            duration_minutes: result.time_minutes
                - access.duration_minutes
                - egress.duration_minutes,
        });
        route.access_leg = Some(access);
        route.egress_leg = Some(egress);

        Ok(route)
    }

    pub fn is_direct_walk(&self) -> bool {
        self.access_leg.is_some() && self.vehicle_leg.is_none()
    }
}
