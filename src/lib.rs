mod airports;
mod config;
mod error;
mod flightwx;
mod forecast_data;
mod schedule;
pub mod server;
mod types;
mod utils;

pub use error::FlightWxError;
pub use flightwx::*;

pub use config::{ConfigError, ServerConfig};

pub use airports::airport_table::AirportTable;
pub use forecast_data::hourly_fetcher::HourlyFetcher;
pub use forecast_data::taf_fetcher::TafFetcher;
pub use forecast_data::taf_selector::{select_wind, TafAbsence};
pub use schedule::parse_line::{parse_line, parse_line_in_year};

pub use types::briefing::{ErrorResponse, ForecastRequest, ForecastResponse};
pub use types::flight_point::FlightPoint;
pub use types::hourly_reading::HourlyReading;
pub use types::lat_lon::LatLon;
pub use types::resolved_forecast::ResolvedForecast;
pub use types::taf_period::{TafPeriod, TafReport};
pub use types::wind::Wind;

pub use airports::error::AirportLookupError;
pub use forecast_data::error::ForecastDataError;
pub use schedule::error::ScheduleLineError;
