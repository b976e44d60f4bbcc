//! Data model for walk + vehicle routing
//!
//! Contains the road network and the query/result types exchanged with the solver.

pub mod roads;
pub mod route;

pub use roads::{IndexedPoint, RoadEdge, RoadNetwork, RoadVertex};
pub use route::{Query, RouteResult};
