use geo::{Distance, Euclidean};
use log::{info, warn};

use super::config::ScenarioConfig;
use super::map::read_map;
use super::queries::read_queries;
use crate::{Error, Query, RoadNetwork};

/// Road network together with the queries to run against it
#[derive(Debug, Clone)]
pub struct Scenario {
    pub network: RoadNetwork,
    pub queries: Vec<Query>,
}

/// Loads the map and the queries of a routing case
///
/// # Errors
///
/// Returns an error if a file is missing or any record is malformed
pub fn load_scenario(config: &ScenarioConfig) -> Result<Scenario, Error> {
    validate_config(config)?;

    info!("Processing map data: {}", config.map_path.display());

    // Parse the map in a separate thread while the queries are read
    let map_path = config.map_path.clone();
    let map_handle = std::thread::spawn(move || read_map(&map_path));

    info!("Processing queries: {}", config.queries_path.display());
    let queries = read_queries(&config.queries_path);

    let network = map_handle
        .join()
        .map_err(|_| Error::UnrecoverableError("Map processing thread panicked"))??;
    let queries = queries?;

    info!(
        "Loaded {} vertices, {} edges and {} queries",
        network.vertex_count(),
        network.edge_count(),
        queries.len()
    );

    validate_query_coverage(&network, &queries);

    Ok(Scenario { network, queries })
}

fn validate_config(config: &ScenarioConfig) -> Result<(), Error> {
    for path in [&config.map_path, &config.queries_path] {
        if !path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Input file not found: {}", path.display()),
            )));
        }
    }

    Ok(())
}

/// Warns about queries whose origin cannot reach any vertex on foot
#[allow(clippy::cast_precision_loss)]
fn validate_query_coverage(network: &RoadNetwork, queries: &[Query]) {
    let stranded = stranded_queries(network, queries);

    if stranded > 0 {
        let total = queries.len();
        let percentage = (stranded as f64 / total as f64) * 100.0;
        warn!(
            "{stranded} of {total} queries ({percentage:.1}%) have no vertex within walking \
        radius of their origin and cannot walk directly. These queries will be unreachable."
        );
    }
}

/// Queries that can neither walk to the destination nor to any vertex
fn stranded_queries(network: &RoadNetwork, queries: &[Query]) -> usize {
    queries
        .iter()
        .filter(|query| {
            let radius_km = query.radius_km();
            let direct = Euclidean.distance(query.origin, query.destination);
            let nearest = network.nearest_vertex(query.origin);
            direct > radius_km && nearest.is_none_or(|(_, distance)| distance > radius_km)
        })
        .count()
}
