use std::path::PathBuf;

/// Input files of a single routing case
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Map file: vertex table followed by the edge table
    pub map_path: PathBuf,
    /// Query file: origin, destination and walking radius per line
    pub queries_path: PathBuf,
}

impl ScenarioConfig {
    pub fn new(map_path: impl Into<PathBuf>, queries_path: impl Into<PathBuf>) -> Self {
        Self {
            map_path: map_path.into(),
            queries_path: queries_path.into(),
        }
    }
}
