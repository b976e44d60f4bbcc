//! Plain-text report: one block per query, then the timings

use std::io::{self, Write};
use std::time::Duration;

use ferrowalk_core::RouteResult;
use itertools::Itertools;

/// Five lines describing a single result, without the separating blank line
pub fn format_result(result: &RouteResult) -> String {
    format!(
        "{}\n{:.2} mins\n{:.2} km\n{:.2} km\n{:.2} km",
        result.path.iter().join(" "),
        result.time_minutes,
        result.total_distance_km,
        result.walking_distance_km,
        result.vehicle_distance_km,
    )
}

pub fn write_results<W: Write>(writer: &mut W, results: &[RouteResult]) -> io::Result<()> {
    for result in results {
        writeln!(writer, "{}", format_result(result))?;
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_timings<W: Write>(
    writer: &mut W,
    compute: Duration,
    total: Duration,
) -> io::Result<()> {
    writeln!(writer, "{} ms", compute.as_millis())?;
    writeln!(writer, "{} ms", total.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_route() {
        let result = RouteResult {
            path: vec![0, 4, 2],
            time_minutes: 36.0,
            total_distance_km: 12.004,
            walking_distance_km: 2.0,
            vehicle_distance_km: 10.0,
        };
        assert_eq!(
            format_result(&result),
            "0 4 2\n36.00 mins\n12.00 km\n2.00 km\n10.00 km"
        );
    }

    #[test]
    fn test_format_direct_walk_and_unreachable() {
        assert_eq!(
            format_result(&RouteResult::direct_walk(0.5, 5.0)),
            "\n6.00 mins\n0.50 km\n0.50 km\n0.00 km"
        );
        assert_eq!(
            format_result(&RouteResult::unreachable()),
            "\ninf mins\n0.00 km\n0.00 km\n0.00 km"
        );
    }

    #[test]
    fn test_report_layout() {
        let mut buffer = Vec::new();
        write_results(
            &mut buffer,
            &[RouteResult::unreachable(), RouteResult::direct_walk(1.0, 5.0)],
        )
        .unwrap();
        write_timings(&mut buffer, Duration::from_millis(12), Duration::from_millis(345)).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[5], "");
        assert_eq!(lines[7], "12.00 mins");
        assert_eq!(lines[12], "12 ms");
        assert_eq!(lines[13], "345 ms");
    }
}
