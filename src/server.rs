//! HTTP boundary: `POST /forecast` and `GET /health`.

use crate::error::FlightWxError;
use crate::flightwx::FlightWx;
use crate::types::briefing::{ErrorResponse, ForecastRequest};
use log::{error, info, warn};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

const MAX_BODY_BYTES: u64 = 16 * 1024;

pub async fn run(address: SocketAddr, client: Arc<FlightWx>) {
    info!("Listening on http://{}", address);
    warp::serve(routes(client)).run(address).await
}

pub fn routes(
    client: Arc<FlightWx>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let health_route = warp::path!("health").and(warp::get()).map(|| StatusCode::OK);

    let forecast_route = warp::path!("forecast")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_client(client))
        .and_then(forecast);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    health_route
        .or(forecast_route)
        .with(cors)
        .recover(rejection)
}

fn with_client(
    client: Arc<FlightWx>,
) -> impl Filter<Extract = (Arc<FlightWx>,), Error = Infallible> + Clone {
    warp::any().map(move || client.clone())
}

pub async fn forecast(
    request: ForecastRequest,
    client: Arc<FlightWx>,
) -> Result<impl Reply, Rejection> {
    let reply = match client.brief(&request).await {
        Ok(briefing) => warp::reply::with_status(warp::reply::json(&briefing), StatusCode::OK),
        Err(err) => {
            warn!("Briefing failed: {}", err);
            warp::reply::with_status(
                warp::reply::json(&ErrorResponse::from(&err)),
                status_for(&err),
            )
        }
    };
    Ok(reply)
}

fn status_for(err: &FlightWxError) -> StatusCode {
    match err {
        FlightWxError::MissingField => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.".to_string())
    } else if let Some(e) = err.find::<warp::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if let Some(e) = err.find::<warp::reject::PayloadTooLarge>() {
        (StatusCode::PAYLOAD_TOO_LARGE, e.to_string())
    } else if let Some(e) = err.find::<warp::reject::LengthRequired>() {
        (StatusCode::LENGTH_REQUIRED, e.to_string())
    } else if let Some(e) = err.find::<warp::reject::UnsupportedMediaType>() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, e.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.".to_string())
    } else if let Some(e) = err.find::<warp::cors::CorsForbidden>() {
        (StatusCode::FORBIDDEN, e.to_string())
    } else {
        error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error.".to_string(),
        )
    };

    let json = warp::reply::json(&ErrorResponse { error: message });
    Ok(warp::reply::with_status(json, code))
}
