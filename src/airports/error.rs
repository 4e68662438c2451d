use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirportLookupError {
    #[error("Airport table '{0}' not found")]
    TableMissing(PathBuf),

    #[error("Failed to read airport table '{0}'")]
    TableRead(PathBuf, #[source] PolarsError),

    #[error("Required column '{0}' not found in airport table")]
    MissingColumn(String),

    #[error("Failed processing airport table")]
    Frame(#[from] PolarsError),

    #[error("ICAO '{0}' not found.")]
    UnknownAirport(String),

    #[error("Airport '{0}' has no coordinates")]
    MissingCoordinates(String),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
