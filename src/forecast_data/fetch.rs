use crate::forecast_data::error::ForecastDataError;
use log::{info, warn};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

/// Sends a prepared GET request and decodes the JSON body.
///
/// `url` is only used for logging and error context, so it should not carry
/// credentials.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T, ForecastDataError> {
    info!("Requesting {}", url);

    let response = request
        .send()
        .await
        .map_err(|e| ForecastDataError::NetworkRequest(url.to_string(), e))?;

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            warn!("HTTP error for {}: {:?}", url, e);
            return Err(if let Some(status) = e.status() {
                ForecastDataError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                }
            } else {
                ForecastDataError::NetworkRequest(url.to_string(), e)
            });
        }
    };

    response
        .json::<T>()
        .await
        .map_err(|e| ForecastDataError::Decode(url.to_string(), e))
}
