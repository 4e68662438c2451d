use crate::types::flight_point::FlightPoint;
use crate::types::hourly_reading::HourlyReading;
use crate::types::wind::Wind;
use chrono::{DateTime, Utc};
use std::fmt;

/// The merged forecast for one [`FlightPoint`], ready to be rendered as a briefing line.
///
/// Its [`Display`](fmt::Display) implementation produces the fixed layout
/// `KJFK 15Jun / 1430 UTC 23012kt 18c 29.92`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedForecast {
    pub airport_id: String,
    pub time: DateTime<Utc>,
    pub wind: Wind,
    pub temperature_c: i32,
    pub pressure_inhg: f64,
}

impl ResolvedForecast {
    /// Takes wind from the TAF when one was found, otherwise from the hourly model.
    /// Temperature and pressure always come from the hourly model.
    pub fn merge(point: &FlightPoint, taf_wind: Option<Wind>, hourly: &HourlyReading) -> Self {
        Self {
            airport_id: point.airport_id().to_string(),
            time: point.target_time(),
            wind: taf_wind.unwrap_or(hourly.wind),
            temperature_c: hourly.temperature_c,
            pressure_inhg: hourly.pressure_inhg,
        }
    }
}

impl fmt::Display for ResolvedForecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:03}{:02}kt {}c {:.2}",
            self.airport_id.to_uppercase(),
            self.time.format("%d%b / %H%M UTC"),
            self.wind.direction,
            self.wind.speed,
            self.temperature_c,
            self.pressure_inhg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(airport: &str) -> FlightPoint {
        FlightPoint::new(airport, Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap())
    }

    fn hourly() -> HourlyReading {
        HourlyReading {
            temperature_c: 18,
            pressure_inhg: 29.92,
            wind: Wind::new(200, 9),
        }
    }

    #[test]
    fn test_format_reference_line() {
        let forecast = ResolvedForecast::merge(&point("kjfk"), Some(Wind::new(230, 12)), &hourly());
        assert_eq!(forecast.to_string(), "KJFK 15Jun / 1430 UTC 23012kt 18c 29.92");
    }

    #[test]
    fn test_hourly_wind_is_the_fallback() {
        let forecast = ResolvedForecast::merge(&point("KJFK"), None, &hourly());
        assert_eq!(forecast.wind, Wind::new(200, 9));
        assert_eq!(forecast.to_string(), "KJFK 15Jun / 1430 UTC 20009kt 18c 29.92");
    }

    #[test]
    fn test_padding_and_signs() {
        let forecast = ResolvedForecast {
            airport_id: "egll".to_string(),
            time: Utc.with_ymd_and_hms(2025, 1, 5, 0, 5, 0).unwrap(),
            wind: Wind::new(0, 3),
            temperature_c: -7,
            pressure_inhg: 30.1,
        };
        assert_eq!(forecast.to_string(), "EGLL 05Jan / 0005 UTC 00003kt -7c 30.10");
    }

    #[test]
    fn test_fast_wind_is_not_truncated() {
        let forecast = ResolvedForecast {
            wind: Wind::new(270, 105),
            ..ResolvedForecast::merge(&point("KJFK"), None, &hourly())
        };
        assert_eq!(forecast.to_string(), "KJFK 15Jun / 1430 UTC 270105kt 18c 29.92");
    }
}
