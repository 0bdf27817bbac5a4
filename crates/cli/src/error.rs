use thiserror::Error;

use common::error::Error as ShortestPathError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(String),

    #[error("Invalid generator settings: {0}")]
    InvalidGeneratorConfig(String),

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Graph processing error: {0}")]
    GraphError(#[from] ShortestPathError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
