mod hybrid_dijkstra;
mod state;

pub use hybrid_dijkstra::{shortest_route, solve};
