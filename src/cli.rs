use std::path::PathBuf;

use clap::Parser;

use crate::AppError;

/// Fastest walk + ride routes for batches of queries
#[derive(Debug, Parser)]
#[command(name = "ferrowalk", version, about)]
pub struct Args {
    /// Input/output files as MAP QUERIES OUTPUT triples, one triple per case
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Walking speed in km/h
    #[arg(long)]
    pub walking_speed: Option<f64>,

    /// Worker threads for solving queries (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// TOML configuration file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the first route of every case as GeoJSON next to its output
    #[arg(long)]
    pub geojson: bool,

    /// Include all network edges and vertices in the GeoJSON output
    #[arg(long)]
    pub with_network: bool,
}

/// Files of one routing case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub map: PathBuf,
    pub queries: PathBuf,
    pub output: PathBuf,
}

impl Args {
    /// Groups positional files into cases
    pub fn cases(&self) -> Result<Vec<Case>, AppError> {
        if self.files.len() % 3 != 0 {
            return Err(AppError::InvalidArguments(format!(
                "expected MAP QUERIES OUTPUT triples, got {} file(s)",
                self.files.len()
            )));
        }

        Ok(self
            .files
            .chunks_exact(3)
            .map(|chunk| Case {
                map: chunk[0].clone(),
                queries: chunk[1].clone(),
                output: chunk[2].clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_triples() {
        let args = Args::try_parse_from([
            "ferrowalk", "m1.txt", "q1.txt", "o1.txt", "m2.txt", "q2.txt", "o2.txt",
        ])
        .unwrap();
        let cases = args.cases().unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].map, PathBuf::from("m2.txt"));
        assert_eq!(cases[1].output, PathBuf::from("o2.txt"));
    }

    #[test]
    fn test_rejects_incomplete_triple() {
        let args = Args::try_parse_from(["ferrowalk", "m1.txt", "q1.txt"]).unwrap();
        assert!(matches!(args.cases(), Err(AppError::InvalidArguments(_))));
    }

    #[test]
    fn test_requires_files() {
        assert!(Args::try_parse_from(["ferrowalk"]).is_err());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "ferrowalk",
            "--walking-speed",
            "4.5",
            "--threads",
            "2",
            "--geojson",
            "m.txt",
            "q.txt",
            "o.txt",
        ])
        .unwrap();
        assert_eq!(args.walking_speed, Some(4.5));
        assert_eq!(args.threads, Some(2));
        assert!(args.geojson);
        assert!(!args.with_network);
    }
}
