//! Route search over the walk + vehicle network

pub mod batch;
pub mod dijkstra;
pub mod itinerary;
mod options;

pub use batch::solve_batch;
pub use dijkstra::{shortest_route, solve};
pub use options::SolverOptions;
