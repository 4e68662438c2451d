use chrono::{DateTime, Utc};

/// One end of a trip: the airport and the UTC moment a forecast is wanted for.
///
/// The identifier is kept exactly as it appeared in the schedule line; lookups
/// compare it case-insensitively and the formatted briefing upper-cases it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightPoint {
    airport_id: String,
    target_time: DateTime<Utc>,
}

impl FlightPoint {
    pub fn new(airport_id: impl Into<String>, target_time: DateTime<Utc>) -> Self {
        Self {
            airport_id: airport_id.into(),
            target_time,
        }
    }

    pub fn airport_id(&self) -> &str {
        &self.airport_id
    }

    pub fn target_time(&self) -> DateTime<Utc> {
        self.target_time
    }
}
