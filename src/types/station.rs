//! Defines the data structure representing a DWD precipitation station and its metadata.

use crate::LonLat;
use chrono::NaiveDate;
use serde::Serialize;

/// A single DWD station from the daily precipitation station description file.
///
/// Stations are only ever built while loading the station directory and are
/// never modified afterwards. `Serialize` lets callers export stations and the
/// [`crate::Measurement`]s that borrow them.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Station {
    /// The DWD station identifier, zero-padded to five digits (e.g., "00001").
    pub id: String,
    /// First day covered by the station's data (`von_datum`).
    pub data_since: NaiveDate,
    /// Last day covered by the station's data (`bis_datum`).
    pub data_until: NaiveDate,
    /// Station elevation above sea level in metres (`Stationshoehe`).
    pub height: i32,
    /// Longitude in decimal degrees, WGS84 (`geoLaenge`).
    pub longitude: f64,
    /// Latitude in decimal degrees, WGS84 (`geoBreite`).
    pub latitude: f64,
    /// Station name (e.g., "Aach").
    pub name: String,
    /// Federal state (Bundesland) the station is located in.
    pub state: String,
    /// URL of the zip archive holding the station's historical precipitation series.
    pub archive_url: Option<String>,
}

impl Station {
    pub fn location(&self) -> LonLat {
        LonLat(self.longitude, self.latitude)
    }
}
