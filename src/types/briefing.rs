//! Request and response bodies exchanged at the briefing boundary.

use crate::error::FlightWxError;
use serde::{Deserialize, Serialize};

/// Departure (`etd`) and arrival (`eta`) schedule lines.
///
/// Both fields are optional on the wire so that a missing one can be reported
/// as an input error instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub etd: Option<String>,
    #[serde(default)]
    pub eta: Option<String>,
}

impl ForecastRequest {
    pub fn new(etd: impl Into<String>, eta: impl Into<String>) -> Self {
        Self {
            etd: Some(etd.into()),
            eta: Some(eta.into()),
        }
    }

    /// Returns both lines, or `None` when either is absent or empty.
    pub fn lines(&self) -> Option<(&str, &str)> {
        let etd = self.etd.as_deref().filter(|line| !line.is_empty())?;
        let eta = self.eta.as_deref().filter(|line| !line.is_empty())?;
        Some((etd, eta))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub etd_forecast: String,
    pub eta_forecast: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&FlightWxError> for ErrorResponse {
    fn from(err: &FlightWxError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
