use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastDataError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode forecast response from {0}")]
    Decode(String, #[source] reqwest::Error),

    // The hourly product is queried for exactly this hour, so this should not happen
    #[error("No hourly forecast found for {time} UTC")]
    HourNotFound { time: String },

    #[error("Hourly forecast has no '{variable}' value for {time} UTC")]
    MissingValue { variable: &'static str, time: String },
}
