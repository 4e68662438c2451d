pub mod briefing;
pub mod flight_point;
pub mod hourly_reading;
pub mod lat_lon;
pub mod resolved_forecast;
pub mod taf_period;
pub mod wind;
