use std::path::Path;

use ferrowalk_core::SolverOptions;
use serde::Deserialize;

use crate::{AppError, cli::Args};

/// Optional TOML configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub walking_speed_kmh: Option<f64>,
    pub threads: Option<usize>,
    pub geojson: bool,
    pub with_network: bool,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Effective run settings after merging the config file and flags
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub options: SolverOptions,
    pub threads: Option<usize>,
    pub geojson: bool,
    pub with_network: bool,
}

impl Settings {
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self, AppError> {
        let mut options = SolverOptions::default();
        if let Some(speed) = args.walking_speed.or(file.walking_speed_kmh) {
            options.walking_speed_kmh = speed;
        }
        if !options.walking_speed_kmh.is_finite() || options.walking_speed_kmh <= 0.0 {
            return Err(AppError::InvalidArguments(format!(
                "walking speed must be a positive number, got {}",
                options.walking_speed_kmh
            )));
        }

        let threads = args.threads.or(file.threads);
        if threads == Some(0) {
            return Err(AppError::InvalidArguments(
                "thread count must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            options,
            threads,
            geojson: args.geojson || file.geojson,
            with_network: args.with_network || file.with_network,
        })
    }

    /// Loads the config file named in `args`, if any, and merges it
    pub fn from_args(args: &Args) -> Result<Self, AppError> {
        let file = match &args.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(args, file)
    }
}
