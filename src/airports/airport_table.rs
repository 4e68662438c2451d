//! Static airport coordinate table, read once from an OurAirports style CSV
//! and shared by reference for every lookup.

use crate::airports::error::AirportLookupError;
use crate::types::lat_lon::LatLon;
use log::info;
use polars::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tokio::task;

const CODE_COLUMN: &str = "icao_code";
const LATITUDE_COLUMN: &str = "latitude_deg";
const LONGITUDE_COLUMN: &str = "longitude_deg";

/// Airport identifier to coordinate lookup.
///
/// Only the `icao_code`, `latitude_deg` and `longitude_deg` columns are kept;
/// any other columns in the source file are ignored.
#[derive(Debug, Clone)]
pub struct AirportTable {
    frame: DataFrame,
}

impl AirportTable {
    /// Reads the table from a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns [`AirportLookupError::TableMissing`] if the file does not exist,
    /// [`AirportLookupError::TableRead`] if it cannot be parsed, and
    /// [`AirportLookupError::MissingColumn`] if a required column is absent.
    pub async fn load(path: &Path) -> Result<Self, AirportLookupError> {
        if tokio::fs::metadata(path).await.is_err() {
            return Err(AirportLookupError::TableMissing(path.to_path_buf()));
        }

        let path_buf = path.to_path_buf();
        let frame = task::spawn_blocking(move || Self::read_csv(&path_buf)).await??;
        let table = Self::from_frame(frame)?;
        info!(
            "Loaded {} airports from {}",
            table.frame.height(),
            path.display()
        );
        Ok(table)
    }

    /// Wraps an already loaded frame, normalising the column types.
    pub fn from_frame(frame: DataFrame) -> Result<Self, AirportLookupError> {
        let column = |name: &str| {
            frame
                .column(name)
                .map_err(|_| AirportLookupError::MissingColumn(name.to_string()))
        };

        let codes = column(CODE_COLUMN)?.cast(&DataType::String)?;
        let latitudes = column(LATITUDE_COLUMN)?.cast(&DataType::Float64)?;
        let longitudes = column(LONGITUDE_COLUMN)?.cast(&DataType::Float64)?;

        Ok(Self {
            frame: DataFrame::new(vec![codes, latitudes, longitudes])?,
        })
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Finds the coordinate of an airport by case-insensitive exact match on its ICAO code.
    ///
    /// # Errors
    ///
    /// Returns [`AirportLookupError::UnknownAirport`] if no row matches, or
    /// [`AirportLookupError::MissingCoordinates`] if the matching row has an empty
    /// latitude or longitude.
    pub fn resolve(&self, airport_id: &str) -> Result<LatLon, AirportLookupError> {
        let codes = self.frame.column(CODE_COLUMN)?.str()?;
        let row = codes
            .into_iter()
            .position(|code| {
                code.is_some_and(|code| !code.is_empty() && code.eq_ignore_ascii_case(airport_id))
            })
            .ok_or_else(|| AirportLookupError::UnknownAirport(airport_id.to_string()))?;

        let latitude = self.frame.column(LATITUDE_COLUMN)?.f64()?.get(row);
        let longitude = self.frame.column(LONGITUDE_COLUMN)?.f64()?.get(row);

        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Ok(LatLon(lat, lon)),
            _ => Err(AirportLookupError::MissingCoordinates(
                airport_id.to_string(),
            )),
        }
    }

    fn read_csv(path: &Path) -> Result<DataFrame, AirportLookupError> {
        let columns: Arc<[PlSmallStr]> = Arc::from([
            PlSmallStr::from_static(CODE_COLUMN),
            PlSmallStr::from_static(LATITUDE_COLUMN),
            PlSmallStr::from_static(LONGITUDE_COLUMN),
        ]);

        CsvReadOptions::default()
            .with_has_header(true)
            .with_columns(Some(columns))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| AirportLookupError::TableRead(path.to_path_buf(), e))?
            .finish()
            .map_err(|e| AirportLookupError::TableRead(path.to_path_buf(), e))
    }
}
