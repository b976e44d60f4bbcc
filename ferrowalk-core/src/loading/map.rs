use std::io::BufRead;
use std::path::Path;

use fixedbitset::FixedBitSet;
use geo::Point;

use super::parser::{LineReader, open_file, parse_coordinate, parse_field, split_fields};
use crate::model::{RoadEdge, RoadNetwork, RoadVertex};
use crate::{Error, VertexId};

/// Reads a map file, see [`parse_map`] for the format
pub fn read_map(path: &Path) -> Result<RoadNetwork, Error> {
    parse_map(open_file(path)?)
}

/// Parses a map:
///
/// ```text
/// N
/// id x y          (N lines, ids 0..N in any order, coordinates in km)
/// M
/// from to length speed   (M lines, km and km/h)
/// ```
///
/// Every edge can be traveled in both directions. Fields are separated by
/// whitespace; extra trailing fields are ignored.
///
/// # Errors
///
/// Fails on the first malformed record, reporting its line number.
pub fn parse_map<R: BufRead>(reader: R) -> Result<RoadNetwork, Error> {
    let mut lines = LineReader::new(reader);

    let vertex_count = lines.next_count("vertex count")?;
    let mut seen = FixedBitSet::with_capacity(vertex_count);
    let mut vertices = Vec::with_capacity(vertex_count);

    for _ in 0..vertex_count {
        let (line, text) = lines.next_line("vertex record")?;
        let fields = split_fields(&text, 3, line, "vertex")?;

        let id: VertexId = parse_field(fields[0], line, "vertex id")?;
        if id >= vertex_count {
            return Err(Error::ParseError {
                line,
                message: format!("vertex id {id} out of range 0..{vertex_count}"),
            });
        }
        if seen.put(id) {
            return Err(Error::ParseError {
                line,
                message: format!("duplicate vertex id {id}"),
            });
        }

        let x = parse_coordinate(fields[1], line, "x coordinate")?;
        let y = parse_coordinate(fields[2], line, "y coordinate")?;
        vertices.push(RoadVertex {
            id,
            geometry: Point::new(x, y),
        });
    }

    let edge_count = lines.next_count("edge count")?;
    let mut edges = Vec::with_capacity(edge_count);

    for _ in 0..edge_count {
        let (line, text) = lines.next_line("edge record")?;
        let fields = split_fields(&text, 4, line, "edge")?;

        let from: VertexId = parse_field(fields[0], line, "edge source")?;
        let to: VertexId = parse_field(fields[1], line, "edge target")?;
        for endpoint in [from, to] {
            if endpoint >= vertex_count {
                return Err(Error::ParseError {
                    line,
                    message: format!("edge references unknown vertex {endpoint}"),
                });
            }
        }

        let length_km = parse_coordinate(fields[2], line, "edge length")?;
        if length_km < 0.0 {
            return Err(Error::ParseError {
                line,
                message: format!("edge length must not be negative, got {length_km}"),
            });
        }
        let speed_kmh = parse_coordinate(fields[3], line, "edge speed")?;
        if speed_kmh <= 0.0 {
            return Err(Error::ParseError {
                line,
                message: format!("edge speed must be positive, got {speed_kmh}"),
            });
        }

        edges.push((from, to, RoadEdge::new(length_km, speed_kmh)));
    }

    RoadNetwork::new(vertices, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "4
0 0 0
1 10 0
2 10 10
3 0 10
4
0 1 10 50
1 2 10 50
2 3 10 50
3 0 10 50
";

    fn parse_error_line(input: &str) -> usize {
        match parse_map(input.as_bytes()) {
            Err(Error::ParseError { line, .. }) => line,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_square() {
        let network = parse_map(SQUARE.as_bytes()).unwrap();
        assert_eq!(network.vertex_count(), 4);
        assert_eq!(network.edge_count(), 4);
        assert!(network.has_edge(3, 0));
        assert!(network.has_edge(0, 3));
        assert_eq!(network.vertex(2).unwrap().geometry, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_vertices_in_any_order_with_extra_spacing() {
        let input = "2\n1   4.5\t-2 extra\n  0 1.25 3\n1\n1 0 0.5 20 ignored\n";
        let network = parse_map(input.as_bytes()).unwrap();
        assert_eq!(network.vertex(1).unwrap().geometry, Point::new(4.5, -2.0));
        assert_eq!(network.vertex(0).unwrap().geometry, Point::new(1.25, 3.0));
        assert!(network.has_edge(0, 1));
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let network = parse_map("\u{feff}1\n0 1 0\n0\n".as_bytes()).unwrap();
        assert_eq!(network.vertex_count(), 1);
        assert_eq!(network.vertex(0).unwrap().geometry, Point::new(1.0, 0.0));

        // only the start of the file may carry one
        assert_eq!(parse_error_line("1\n\u{feff}0 1 0\n0\n"), 2);
    }

    #[test]
    fn test_empty_map() {
        let network = parse_map("0\n0\n".as_bytes()).unwrap();
        assert!(network.is_empty());
    }

    #[test]
    fn test_reports_offending_line() {
        assert_eq!(parse_error_line("two\n"), 1);
        assert_eq!(parse_error_line("2\n0 0 0\n1 x 0\n0\n"), 3);
        assert_eq!(parse_error_line("2\n0 0 0\n0 1 1\n0\n"), 3);
        assert_eq!(parse_error_line("2\n0 0 0\n2 1 1\n0\n"), 3);
        assert_eq!(parse_error_line("1\n0 0 0\n1\n0 1 1 1\n"), 4);
        assert_eq!(parse_error_line("1\n0 0 0\n1\n0 0 1\n"), 4);
        assert_eq!(parse_error_line("2\n0 0 0\n1 1 1\n1\n0 1 1 0\n"), 5);
        assert_eq!(parse_error_line("2\n0 0 0\n1 1 1\n1\n0 1 -1 10\n"), 5);
        assert_eq!(parse_error_line("2\n0 0 0\n1 1 1\n1\n0 1 NaN 10\n"), 5);
    }

    #[test]
    fn test_truncated_file() {
        assert_eq!(parse_error_line("3\n0 0 0\n1 1 1\n"), 4);
        assert_eq!(parse_error_line("1\n0 0 0\n"), 3);
        assert_eq!(parse_error_line("1\n0 0 0\n2\n0 0 1 1\n"), 5);
    }

    #[test]
    fn test_missing_file() {
        let result = read_map(Path::new("/definitely/not/here/map.txt"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
