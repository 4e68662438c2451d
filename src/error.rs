use crate::airports::error::AirportLookupError;
use crate::forecast_data::error::ForecastDataError;
use crate::schedule::error::ScheduleLineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlightWxError {
    #[error("Missing ETD or ETA")]
    MissingField,

    #[error(transparent)]
    Schedule(#[from] ScheduleLineError),

    #[error(transparent)]
    Airport(#[from] AirportLookupError),

    #[error(transparent)]
    ForecastData(#[from] ForecastDataError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
