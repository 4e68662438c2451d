//! Process configuration read from `FLIGHTWX_`-prefixed environment variables.

use crate::airports::airport_table::AirportTable;
use crate::error::FlightWxError;
use crate::flightwx::FlightWx;
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const ENV_PREFIX: &str = "FLIGHTWX_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration. Required env vars: FLIGHTWX_AVWX_TOKEN")]
    Env(#[from] envy::Error),

    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String, #[source] AddrParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub avwx_token: String,
    #[serde(default = "default_airports_csv")]
    pub airports_csv: PathBuf,
    #[serde(default = "default_address")]
    pub address: String,
    pub taf_base_url: Option<String>,
    pub hourly_base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_airports_csv() -> PathBuf {
    PathBuf::from("airports.csv")
}

fn default_address() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Self>()?)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.address
            .parse()
            .map_err(|e| ConfigError::InvalidAddress(self.address.clone(), e))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the briefing client around an already loaded airport table.
    pub fn flightwx(&self, airports: AirportTable) -> Result<FlightWx, FlightWxError> {
        FlightWx::builder()
            .avwx_token(self.avwx_token.clone())
            .airports(airports)
            .maybe_taf_base_url(self.taf_base_url.clone())
            .maybe_hourly_base_url(self.hourly_base_url.clone())
            .timeout(self.timeout())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_iter(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        )
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[("FLIGHTWX_AVWX_TOKEN", "secret")]).unwrap();
        assert_eq!(config.avwx_token, "secret");
        assert_eq!(config.airports_csv, PathBuf::from("airports.csv"));
        assert_eq!(config.address, "127.0.0.1:5000");
        assert_eq!(config.taf_base_url, None);
        assert_eq!(config.hourly_base_url, None);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:5000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_overrides_and_foreign_vars() {
        let config = from_pairs(&[
            ("FLIGHTWX_AVWX_TOKEN", "secret"),
            ("FLIGHTWX_AIRPORTS_CSV", "/data/airports.csv"),
            ("FLIGHTWX_ADDRESS", "0.0.0.0:8080"),
            ("FLIGHTWX_TAF_BASE_URL", "http://localhost:9000"),
            ("FLIGHTWX_TIMEOUT_SECS", "3"),
            ("AVWX_TOKEN", "ignored"),
        ])
        .unwrap();
        assert_eq!(config.airports_csv, PathBuf::from("/data/airports.csv"));
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
        assert_eq!(config.taf_base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_token_is_required() {
        assert!(from_pairs(&[("FLIGHTWX_ADDRESS", "0.0.0.0:8080")]).is_err());
    }

    #[test]
    fn test_bad_address() {
        let config = from_pairs(&[
            ("FLIGHTWX_AVWX_TOKEN", "secret"),
            ("FLIGHTWX_ADDRESS", "localhost"),
        ])
        .unwrap();
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress(ref address, _)) if address == "localhost"
        ));
    }
}
