use std::collections::BinaryHeap;

use geo::{Distance, Euclidean, Point};
use log::trace;

use super::state::{State, Target};
use crate::{Query, RoadNetwork, RouteResult, SolverOptions, VertexId};

/// Fastest route between two arbitrary points.
///
/// Walking legs are synthesized from straight-line distance: the origin can
/// walk to any vertex within the query radius, and the destination is a
/// virtual goal reachable from any vertex within the radius of it. Between
/// the two, the search follows vehicle edges.
///
/// Returns [`RouteResult::unreachable`] when no combination of legs connects
/// the two points.
pub fn shortest_route(
    network: &RoadNetwork,
    query: &Query,
    options: &SolverOptions,
) -> RouteResult {
    let walking_speed = options.walking_speed_kmh;
    let radius_km = query.radius_km();
    let destination = query.destination;

    let direct_distance = Euclidean.distance(query.origin, destination);
    if direct_distance <= radius_km {
        return RouteResult::direct_walk(direct_distance, walking_speed);
    }

    let vertex_count = network.vertex_count();
    let mut best_time = vec![f64::INFINITY; vertex_count];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut heap = BinaryHeap::new();

    for (vertex, distance) in network.vertices_within(query.origin, radius_km) {
        let cost = distance / walking_speed;
        best_time[vertex] = cost;
        heap.push(State {
            cost,
            target: Target::Vertex(vertex),
            walked_km: distance,
            vehicle_km: 0.0,
            predecessor: None,
        });
    }

    // Best known arrival at the virtual destination
    let mut best_goal = f64::INFINITY;

    while let Some(state) = heap.pop() {
        let vertex = match state.target {
            Target::Goal => {
                let path = reconstruct_path(&predecessors, state.predecessor);
                trace!(
                    "Goal reached in {:.4} h over {} vertices",
                    state.cost,
                    path.len()
                );
                return RouteResult::with_vehicle(
                    path,
                    state.cost,
                    state.walked_km,
                    state.vehicle_km,
                );
            }
            Target::Vertex(vertex) => vertex,
        };

        // Skip if we've found a better path
        if state.cost > best_time[vertex] || state.cost > best_goal {
            continue;
        }

        // Destination is checked on pop, including for seeded vertices
        let egress = Euclidean.distance(network.location(vertex), destination);
        if egress <= radius_km {
            let cost = state.cost + egress / walking_speed;
            if cost < best_goal {
                best_goal = cost;
                heap.push(State {
                    cost,
                    target: Target::Goal,
                    walked_km: state.walked_km + egress,
                    vehicle_km: state.vehicle_km,
                    predecessor: Some(vertex),
                });
            }
        }

        for (next, edge) in network.neighbors(vertex) {
            let next_cost = state.cost + edge.travel_time();
            if next_cost < best_time[next] {
                best_time[next] = next_cost;
                predecessors[next] = Some(vertex);
                heap.push(State {
                    cost: next_cost,
                    target: Target::Vertex(next),
                    walked_km: state.walked_km,
                    vehicle_km: state.vehicle_km + edge.length_km,
                    predecessor: Some(vertex),
                });
            }
        }
    }

    RouteResult::unreachable()
}

/// [`shortest_route`] with the default walking speed
pub fn solve(
    origin: Point<f64>,
    destination: Point<f64>,
    radius_m: f64,
    network: &RoadNetwork,
) -> RouteResult {
    shortest_route(
        network,
        &Query::new(origin, destination, radius_m),
        &SolverOptions::default(),
    )
}

/// Follow predecessors backward from the last vertex before the goal
fn reconstruct_path(predecessors: &[Option<VertexId>], last: Option<VertexId>) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = last;
    while let Some(vertex) = current {
        path.push(vertex);
        current = predecessors[vertex];
    }
    path.reverse(); // Now path is from origin side to destination side
    path
}
