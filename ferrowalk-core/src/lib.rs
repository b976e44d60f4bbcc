//! Fastest routes over a hybrid network of free walking and vehicle edges.
//!
//! A route starts with a straight walk (bounded by a radius) from an arbitrary
//! origin to a network vertex, follows vehicle edges, and ends with a straight
//! walk to the destination. The search runs over the road graph with a virtual
//! goal that is reachable from every vertex close enough to the destination.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{Scenario, ScenarioConfig, load_scenario};
pub use model::{Query, RoadNetwork, RouteResult};
pub use routing::{SolverOptions, shortest_route, solve, solve_batch};

/// Dense vertex identifier, equal to the graph node index
pub type VertexId = usize;

/// Default walking speed, km/h
pub const WALKING_SPEED_KMH: f64 = 5.0;
