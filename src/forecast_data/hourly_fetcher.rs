//! Client for the Open-Meteo style hourly model forecast.

use crate::forecast_data::error::ForecastDataError;
use crate::forecast_data::fetch::get_json;
use crate::types::hourly_reading::HourlyReading;
use crate::types::lat_lon::LatLon;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::Client;
use serde::Deserialize;

const HOURLY_VARIABLES: &str = "temperature_2m,pressure_msl,windspeed_10m,winddirection_10m";
const HOUR_KEY_FORMAT: &str = "%Y-%m-%dT%H:00";

#[derive(Debug, Deserialize)]
struct HourlyResponse {
    hourly: HourlySeries,
}

// Parallel arrays, index-aligned with `time`.
#[derive(Debug, Deserialize)]
struct HourlySeries {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    pressure_msl: Vec<Option<f64>>,
    windspeed_10m: Vec<Option<f64>>,
    winddirection_10m: Vec<Option<f64>>,
}

#[derive(Debug, Clone)]
pub struct HourlyFetcher {
    client: Client,
    base_url: String,
}

impl HourlyFetcher {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches temperature, sea-level pressure and 10 m wind for the UTC hour containing `target`.
    ///
    /// # Errors
    ///
    /// * [`ForecastDataError::NetworkRequest`] / [`ForecastDataError::HttpStatus`] if the
    ///   service cannot be reached or answers with an error status.
    /// * [`ForecastDataError::Decode`] if the body is not the expected JSON.
    /// * [`ForecastDataError::HourNotFound`] if the hour is missing from the series.
    /// * [`ForecastDataError::MissingValue`] if a variable is null for that hour.
    pub async fn reading_at(
        &self,
        location: LatLon,
        target: DateTime<Utc>,
    ) -> Result<HourlyReading, ForecastDataError> {
        let hour_key = target.format(HOUR_KEY_FORMAT).to_string();
        let url = format!("{}/v1/forecast", self.base_url.trim_end_matches('/'));
        let request = self.client.get(&url).query(&[
            ("latitude", location.0.to_string()),
            ("longitude", location.1.to_string()),
            ("hourly", HOURLY_VARIABLES.to_string()),
            ("windspeed_unit", "kn".to_string()),
            ("timezone", "UTC".to_string()),
            ("start_hour", hour_key.clone()),
            ("end_hour", hour_key.clone()),
        ]);

        let response: HourlyResponse = get_json(request, &url).await?;
        extract_hour(&response.hourly, &hour_key)
    }
}

fn extract_hour(series: &HourlySeries, hour_key: &str) -> Result<HourlyReading, ForecastDataError> {
    let idx = series
        .time
        .iter()
        .position(|time| time == hour_key)
        .ok_or_else(|| ForecastDataError::HourNotFound {
            time: hour_key.to_string(),
        })?;

    let value = |values: &[Option<f64>], variable: &'static str| {
        values
            .get(idx)
            .copied()
            .flatten()
            .ok_or_else(|| ForecastDataError::MissingValue {
                variable,
                time: hour_key.to_string(),
            })
    };

    let temperature = value(&series.temperature_2m, "temperature_2m")?;
    let pressure = value(&series.pressure_msl, "pressure_msl")?;
    let wind_speed = value(&series.windspeed_10m, "windspeed_10m")?;
    let wind_direction = value(&series.winddirection_10m, "winddirection_10m")?;

    debug!(
        "Hourly forecast for {}: {} C, {} hPa, {} @ {}",
        hour_key, temperature, pressure, wind_direction, wind_speed
    );
    Ok(HourlyReading::from_raw(
        temperature,
        pressure,
        wind_speed,
        wind_direction,
    ))
}
