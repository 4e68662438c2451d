//! Main entry point: turns a pair of schedule lines into departure and arrival
//! weather briefings.
//!
//! For each flight point the TAF for the airport is consulted for wind first.
//! Temperature and pressure, and the wind whenever the TAF has none, come from
//! the hourly model forecast at the airport's coordinates.

use crate::airports::airport_table::AirportTable;
use crate::error::FlightWxError;
use crate::forecast_data::hourly_fetcher::HourlyFetcher;
use crate::forecast_data::taf_fetcher::TafFetcher;
use crate::schedule::parse_line::parse_line;
use crate::types::briefing::{ForecastRequest, ForecastResponse};
use crate::types::flight_point::FlightPoint;
use crate::types::resolved_forecast::ResolvedForecast;
use bon::bon;
use log::info;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TAF_BASE_URL: &str = "https://avwx.rest";
pub const DEFAULT_HOURLY_BASE_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The briefing client.
///
/// Holds the airport table and one HTTP client shared by both forecast
/// services. It has no mutable state, so a single instance can serve any
/// number of requests (wrap it in an `Arc` to share it between tasks).
///
/// # Examples
///
/// ```rust,no_run
/// # use flightwx::{AirportTable, FlightWx, ForecastRequest};
/// # use std::path::Path;
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let airports = AirportTable::load(Path::new("airports.csv")).await?;
/// let client = FlightWx::builder()
///     .avwx_token("my-token")
///     .airports(airports)
///     .build()?;
///
/// let briefing = client
///     .brief(&ForecastRequest::new("ETD KJFK 15Jun / 1430", "ETA EGLL 16Jun / 0230"))
///     .await?;
/// println!("{}\n{}", briefing.etd_forecast, briefing.eta_forecast);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FlightWx {
    airports: AirportTable,
    taf: TafFetcher,
    hourly: HourlyFetcher,
}

#[bon]
impl FlightWx {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `avwx_token` - Bearer token for the TAF service.
    /// * `airports` - The loaded airport coordinate table.
    /// * `taf_base_url` - Optional TAF service root. Defaults to [`DEFAULT_TAF_BASE_URL`].
    /// * `hourly_base_url` - Optional hourly forecast service root. Defaults to [`DEFAULT_HOURLY_BASE_URL`].
    /// * `timeout` - Optional timeout applied to every outbound request. Defaults to 10 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`FlightWxError::HttpClient`] if the HTTP client cannot be built.
    #[builder]
    pub fn new(
        #[builder(into)] avwx_token: String,
        airports: AirportTable,
        #[builder(into, default = DEFAULT_TAF_BASE_URL.to_string())] taf_base_url: String,
        #[builder(into, default = DEFAULT_HOURLY_BASE_URL.to_string())] hourly_base_url: String,
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
    ) -> Result<Self, FlightWxError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FlightWxError::HttpClient)?;

        Ok(Self {
            airports,
            taf: TafFetcher::new(client.clone(), taf_base_url, avwx_token),
            hourly: HourlyFetcher::new(client, hourly_base_url),
        })
    }

    /// Produces the departure and arrival briefing lines for a request.
    ///
    /// Both lines are parsed before any network call is made. The departure is
    /// resolved completely before the arrival; a failure in either fails the
    /// whole briefing.
    ///
    /// # Errors
    ///
    /// * [`FlightWxError::MissingField`] if `etd` or `eta` is absent or empty.
    /// * [`FlightWxError::Schedule`] if a line cannot be parsed.
    /// * [`FlightWxError::Airport`] if an airport is not in the table.
    /// * [`FlightWxError::ForecastData`] if the hourly forecast cannot be obtained.
    pub async fn brief(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, FlightWxError> {
        let (etd, eta) = request.lines().ok_or(FlightWxError::MissingField)?;
        let departure = parse_line(etd)?;
        let arrival = parse_line(eta)?;

        let etd_forecast = self.resolve_point(&departure).await?.to_string();
        let eta_forecast = self.resolve_point(&arrival).await?.to_string();

        Ok(ForecastResponse {
            etd_forecast,
            eta_forecast,
        })
    }

    /// Parses and resolves a single schedule line into its formatted forecast.
    pub async fn forecast_line(&self, line: &str) -> Result<String, FlightWxError> {
        let point = parse_line(line)?;
        Ok(self.resolve_point(&point).await?.to_string())
    }

    /// Resolves the merged forecast for one flight point.
    pub async fn resolve_point(
        &self,
        point: &FlightPoint,
    ) -> Result<ResolvedForecast, FlightWxError> {
        let taf_wind = self
            .taf
            .wind_at(point.airport_id(), point.target_time())
            .await;
        let location = self.airports.resolve(point.airport_id())?;
        let hourly = self
            .hourly
            .reading_at(location, point.target_time())
            .await?;

        let forecast = ResolvedForecast::merge(point, taf_wind, &hourly);
        info!(
            "Resolved {} ({} wind): {}",
            point.airport_id(),
            if taf_wind.is_some() { "TAF" } else { "model" },
            forecast
        );
        Ok(forecast)
    }

    pub fn airports(&self) -> &AirportTable {
        &self.airports
    }
}
