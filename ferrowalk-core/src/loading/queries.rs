use std::io::BufRead;
use std::path::Path;

use geo::Point;

use super::parser::{LineReader, open_file, parse_coordinate, parse_field, split_fields};
use crate::{Error, Query};

const QUERY_FIELDS: usize = 5;

/// Reads a query file, see [`parse_queries`] for the format
pub fn read_queries(path: &Path) -> Result<Vec<Query>, Error> {
    parse_queries(open_file(path)?)
}

/// Parses queries:
///
/// ```text
/// Q
/// origin_x origin_y destination_x destination_y radius   (Q lines)
/// ```
///
/// Coordinates are in kilometers, the walking radius is a whole number of
/// meters.
///
/// # Errors
///
/// Fails on the first malformed query, reporting its line number.
pub fn parse_queries<R: BufRead>(reader: R) -> Result<Vec<Query>, Error> {
    let mut lines = LineReader::new(reader);

    let query_count = lines.next_count("query count")?;
    let mut queries = Vec::with_capacity(query_count);

    for _ in 0..query_count {
        let (line, text) = lines.next_line("query record")?;
        let fields = split_fields(&text, QUERY_FIELDS, line, "query")?;
        if fields.len() > QUERY_FIELDS {
            return Err(Error::ParseError {
                line,
                message: format!(
                    "query record needs {QUERY_FIELDS} fields, found {}",
                    fields.len()
                ),
            });
        }

        let origin_x = parse_coordinate(fields[0], line, "origin x")?;
        let origin_y = parse_coordinate(fields[1], line, "origin y")?;
        let destination_x = parse_coordinate(fields[2], line, "destination x")?;
        let destination_y = parse_coordinate(fields[3], line, "destination y")?;

        let radius_m: i64 = parse_field(fields[4], line, "walking radius")?;
        if radius_m < 0 {
            return Err(Error::ParseError {
                line,
                message: format!("walking radius must not be negative, got {radius_m}"),
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let radius_m = radius_m as f64;
        queries.push(Query::new(
            Point::new(origin_x, origin_y),
            Point::new(destination_x, destination_y),
            radius_m,
        ));
    }

    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_queries() {
        let input = "2\n-1 0 11 0 2000\n0.5  0.25\t3 4 0\n";
        let queries = parse_queries(input.as_bytes()).unwrap();

        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].origin, Point::new(-1.0, 0.0));
        assert_eq!(queries[0].destination, Point::new(11.0, 0.0));
        assert_eq!(queries[0].radius_m, 2000.0);
        assert_eq!(queries[1].origin, Point::new(0.5, 0.25));
        assert_eq!(queries[1].radius_m, 0.0);
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let queries = parse_queries("\u{feff}1\n0 0 3 4 250\n".as_bytes()).unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].destination, Point::new(3.0, 4.0));
        assert_eq!(queries[0].radius_m, 250.0);
    }

    #[test]
    fn test_no_queries() {
        assert!(parse_queries("0\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_malformed_queries() {
        for (input, expected_line) in [
            ("", 1),
            ("1\n0 0 1 1\n", 2),
            ("1\n0 0 1 1 100 7\n", 2),
            ("2\n0 0 1 1 100\n0 0 1 1 1.5\n", 3),
            ("1\n0 0 1 1 -5\n", 2),
            ("1\n0 zero 1 1 5\n", 2),
            ("3\n0 0 1 1 100\n", 3),
        ] {
            match parse_queries(input.as_bytes()) {
                Err(Error::ParseError { line, .. }) => assert_eq!(line, expected_line, "{input:?}"),
                other => panic!("expected parse error for {input:?}, got {other:?}"),
            }
        }
    }
}
