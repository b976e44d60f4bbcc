use std::cmp::Ordering;

use crate::VertexId;

/// What a queue entry leads to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Target {
    Vertex(VertexId),
    /// Virtual destination, reached by walking from a vertex near it
    Goal,
}

#[derive(Debug, Copy, Clone)]
pub(super) struct State {
    /// Elapsed time in hours
    pub(super) cost: f64,
    pub(super) target: Target,
    pub(super) walked_km: f64,
    pub(super) vehicle_km: f64,
    /// Vertex this entry was reached from; `None` when walked to from the origin
    pub(super) predecessor: Option<VertexId>,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
