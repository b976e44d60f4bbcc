pub use crate::WALKING_SPEED_KMH;

// Re-export key components
pub use crate::Error;
pub use crate::loading::{
    Scenario, ScenarioConfig, load_scenario, parse_map, parse_queries, read_map, read_queries,
};
pub use crate::model::{Query, RoadEdge, RoadNetwork, RoadVertex, RouteResult};
pub use crate::routing::itinerary::{DetailedRoute, VehicleLeg, WalkingLeg};
pub use crate::routing::{SolverOptions, shortest_route, solve, solve_batch};

// Core types for the road network
pub use crate::VertexId;
