//! Road network model: vertices in planar kilometers joined by vehicle edges

pub mod components;
pub mod network;

pub use components::{RoadEdge, RoadVertex};
pub use network::{IndexedPoint, RoadNetwork};
