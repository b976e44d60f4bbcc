use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] ferrowalk_core::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("{0} case(s) failed")]
    CasesFailed(usize),
}
