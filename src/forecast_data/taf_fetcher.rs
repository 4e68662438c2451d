use crate::forecast_data::error::ForecastDataError;
use crate::forecast_data::fetch::get_json;
use crate::forecast_data::taf_selector::{select_wind, TafAbsence};
use crate::types::taf_period::{TafPeriod, TafReport};
use crate::types::wind::Wind;
use chrono::{DateTime, Utc};
use log::{info, warn};
use reqwest::Client;

/// Client for the AVWX style terminal forecast service.
#[derive(Debug, Clone)]
pub struct TafFetcher {
    client: Client,
    base_url: String,
    token: String,
}

impl TafFetcher {
    pub fn new(client: Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Fetches the forecast periods of the current TAF for an airport, in upstream order.
    pub async fn fetch_periods(&self, icao: &str) -> Result<Vec<TafPeriod>, ForecastDataError> {
        let url = format!(
            "{}/api/taf/{}",
            self.base_url.trim_end_matches('/'),
            icao.to_uppercase()
        );
        let request = self
            .client
            .get(&url)
            .query(&[("options", "summary")])
            .bearer_auth(&self.token);

        let report: TafReport = get_json(request, &url).await?;
        Ok(report.into_periods())
    }

    /// Fetches the TAF and selects the wind for `target`, keeping the reason when there is none.
    pub async fn select(&self, icao: &str, target: DateTime<Utc>) -> Result<Wind, TafAbsence> {
        let periods = self.fetch_periods(icao).await?;
        select_wind(&periods, target)
    }

    /// TAF wind for `target`, or `None` if the TAF is unavailable or has no usable wind.
    ///
    /// Never fails: every failure is logged and reported as absence.
    pub async fn wind_at(&self, icao: &str, target: DateTime<Utc>) -> Option<Wind> {
        match self.select(icao, target).await {
            Ok(wind) => {
                info!(
                    "TAF wind for {} at {}: {:03}/{:02}",
                    icao, target, wind.direction, wind.speed
                );
                Some(wind)
            }
            Err(absence) => {
                match &absence {
                    TafAbsence::Unavailable(source) => {
                        warn!("TAF fetch failed for {}: {}: {}", icao, absence, source)
                    }
                    _ => warn!("No TAF wind for {} at {}: {}", icao, target, absence),
                }
                None
            }
        }
    }
}
