use log::{debug, info, warn};
use rayon::prelude::*;

use crate::{Query, RoadNetwork, RouteResult, SolverOptions, routing::shortest_route};

/// Solve independent queries in parallel over a shared network.
///
/// Each query runs its own search with private state, so the only shared
/// data is the read-only network. Results keep the order of `queries`.
pub fn solve_batch(
    network: &RoadNetwork,
    queries: &[Query],
    options: &SolverOptions,
) -> Vec<RouteResult> {
    info!(
        "Solving {} queries over {} vertices and {} edges",
        queries.len(),
        network.vertex_count(),
        network.edge_count()
    );

    let results: Vec<RouteResult> = queries
        .par_iter()
        .map(|query| shortest_route(network, query, options))
        .collect();

    let direct_walks = results.iter().filter(|r| r.is_direct_walk()).count();
    debug!("{direct_walks} queries answered by a direct walk");

    let unreachable = results.iter().filter(|r| !r.is_reachable()).count();
    if unreachable > 0 {
        warn!(
            "{unreachable} of {} queries have no route within the walking radius",
            queries.len()
        );
    }

    results
}
