use geo::{BoundingRect, Distance, Euclidean, MultiPoint, Point, Rect};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rstar::{RTree, primitives::GeomWithData};

use super::components::{RoadEdge, RoadVertex};
use crate::{Error, VertexId};

/// Vertex coordinate stored in the spatial index, tagged with its vertex id
pub type IndexedPoint = GeomWithData<[f64; 2], VertexId>;

/// Road network with a spatial index over its vertices.
///
/// Node indices of the underlying graph are the dense vertex ids `0..N`,
/// so a `VertexId` can be used both as a graph index and as an array offset.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    pub graph: UnGraph<RoadVertex, RoadEdge>,
    pub rtree: RTree<IndexedPoint>,
}

impl RoadNetwork {
    /// Builds the network from vertices with dense ids and undirected edges.
    ///
    /// # Errors
    ///
    /// Returns an error if vertex ids are not exactly `0..N` or an edge
    /// references a vertex that does not exist.
    pub fn new(
        mut vertices: Vec<RoadVertex>,
        edges: Vec<(VertexId, VertexId, RoadEdge)>,
    ) -> Result<Self, Error> {
        vertices.sort_unstable_by_key(|vertex| vertex.id);
        if let Some((position, vertex)) = vertices
            .iter()
            .enumerate()
            .find(|(position, vertex)| vertex.id != *position)
        {
            return Err(Error::InvalidData(format!(
                "vertex ids must be dense: expected id {position}, found {}",
                vertex.id
            )));
        }

        let vertex_count = vertices.len();
        let mut graph = UnGraph::with_capacity(vertex_count, edges.len());
        let points: Vec<IndexedPoint> = vertices
            .iter()
            .map(|vertex| {
                GeomWithData::new([vertex.geometry.x(), vertex.geometry.y()], vertex.id)
            })
            .collect();

        for vertex in vertices {
            graph.add_node(vertex);
        }

        for (from, to, edge) in edges {
            if from >= vertex_count || to >= vertex_count {
                return Err(Error::InvalidNodeIndex);
            }
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), edge);
        }

        Ok(Self {
            graph,
            rtree: RTree::bulk_load(points),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn vertex(&self, id: VertexId) -> Option<&RoadVertex> {
        self.graph.node_weight(NodeIndex::new(id))
    }

    /// Coordinates of a vertex known to exist
    pub(crate) fn location(&self, id: VertexId) -> Point<f64> {
        self.graph[NodeIndex::new(id)].geometry
    }

    /// Edges leaving `id` in either direction, as `(neighbor, edge)`
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, &RoadEdge)> + '_ {
        self.graph
            .edges(NodeIndex::new(id))
            .map(|edge| (edge.target().index(), edge.weight()))
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.graph
            .find_edge(NodeIndex::new(from), NodeIndex::new(to))
            .is_some()
    }

    /// All vertices whose straight-line distance to `point` is at most
    /// `radius_km`, with that distance. The boundary is inclusive.
    pub fn vertices_within(
        &self,
        point: Point<f64>,
        radius_km: f64,
    ) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        // Slack keeps the exact distance filter below as the only boundary test
        let reach = radius_km + radius_km.abs() * 1e-9 + f64::EPSILON;

        self.rtree
            .locate_within_distance([point.x(), point.y()], reach * reach)
            .filter_map(move |indexed| {
                let distance = Euclidean.distance(point, self.location(indexed.data));
                (distance <= radius_km).then_some((indexed.data, distance))
            })
    }

    /// Nearest vertex to `point` and its straight-line distance
    pub fn nearest_vertex(&self, point: Point<f64>) -> Option<(VertexId, f64)> {
        self.rtree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|indexed| {
                let distance = Euclidean.distance(point, self.location(indexed.data));
                (indexed.data, distance)
            })
    }

    /// Bounding rectangle of all vertices, `None` for an empty network
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        let points: MultiPoint<f64> = self
            .graph
            .node_weights()
            .map(|vertex| vertex.geometry)
            .collect();
        points.bounding_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> RoadNetwork {
        let vertices = vec![
            RoadVertex {
                id: 2,
                geometry: Point::new(10.0, 10.0),
            },
            RoadVertex {
                id: 0,
                geometry: Point::new(0.0, 0.0),
            },
            RoadVertex {
                id: 1,
                geometry: Point::new(10.0, 0.0),
            },
            RoadVertex {
                id: 3,
                geometry: Point::new(0.0, 10.0),
            },
        ];
        let edge = RoadEdge::new(10.0, 50.0);
        let edges = vec![(0, 1, edge), (1, 2, edge), (2, 3, edge), (3, 0, edge)];
        RoadNetwork::new(vertices, edges).unwrap()
    }

    #[test]
    fn test_node_index_matches_vertex_id() {
        let network = square();
        for id in 0..network.vertex_count() {
            assert_eq!(network.vertex(id).unwrap().id, id);
        }
        assert_eq!(network.location(1), Point::new(10.0, 0.0));
    }

    #[test]
    fn test_edges_are_traversable_both_ways() {
        let network = square();
        assert!(network.has_edge(0, 1));
        assert!(network.has_edge(1, 0));
        assert!(!network.has_edge(0, 2));

        let mut neighbors: Vec<VertexId> = network.neighbors(0).map(|(id, _)| id).collect();
        neighbors.sort_unstable();
        assert_eq!(neighbors, vec![1, 3]);
    }

    #[test]
    fn test_vertices_within_is_inclusive() {
        let network = square();
        let mut found: Vec<VertexId> = network
            .vertices_within(Point::new(5.0, 0.0), 5.0)
            .map(|(id, _)| id)
            .collect();
        found.sort_unstable();
        assert_eq!(found, vec![0, 1]);

        let none: Vec<_> = network
            .vertices_within(Point::new(5.0, 0.0), 4.999)
            .collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_zero_radius_matches_only_coincident_vertex() {
        let network = square();
        let found: Vec<_> = network.vertices_within(Point::new(10.0, 10.0), 0.0).collect();
        assert_eq!(found, vec![(2, 0.0)]);
    }

    #[test]
    fn test_nearest_vertex() {
        let network = square();
        let (id, distance) = network.nearest_vertex(Point::new(-3.0, -4.0)).unwrap();
        assert_eq!(id, 0);
        assert!((distance - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_sparse_ids() {
        let vertices = vec![
            RoadVertex {
                id: 0,
                geometry: Point::new(0.0, 0.0),
            },
            RoadVertex {
                id: 5,
                geometry: Point::new(1.0, 0.0),
            },
        ];
        assert!(matches!(
            RoadNetwork::new(vertices, vec![]),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_edge_endpoint() {
        let vertices = vec![RoadVertex {
            id: 0,
            geometry: Point::new(0.0, 0.0),
        }];
        let result = RoadNetwork::new(vertices, vec![(0, 1, RoadEdge::new(1.0, 10.0))]);
        assert!(matches!(result, Err(Error::InvalidNodeIndex)));
    }

    #[test]
    fn test_empty_network() {
        let network = RoadNetwork::new(vec![], vec![]).unwrap();
        assert!(network.is_empty());
        assert!(network.bounding_rect().is_none());
        assert!(network.nearest_vertex(Point::new(0.0, 0.0)).is_none());
        assert_eq!(network.vertices_within(Point::new(0.0, 0.0), 1.0).count(), 0);
    }
}
