use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid node index")]
    InvalidNodeIndex,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Unrecoverable error: {0}")]
    UnrecoverableError(&'static str),
}
