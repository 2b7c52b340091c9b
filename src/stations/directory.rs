//! Loads the station description file and joins it with the archive index.

use crate::config::DwdConfig;
use crate::stations::calibration::{FieldExtractor, StationColumns, StationField};
use crate::stations::error::{StationError, StationLineError};
use crate::transport::{decode_text, Transport};
use crate::types::station::Station;
use chrono::NaiveDate;
use log::{info, warn};
use std::collections::HashMap;
use std::str::FromStr;

/// A line of the description file that named a known station but could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStation {
    /// 1-based line number in the description file.
    pub line: usize,
    pub station_id: String,
    pub reason: StationLineError,
}

/// Stations in file order, plus the lines that had to be dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryParse {
    pub stations: Vec<Station>,
    pub skipped: Vec<SkippedStation>,
}

/// Downloads the description file and parses it.
pub fn fetch_stations(
    transport: &dyn Transport,
    config: &DwdConfig,
    columns: &StationColumns,
    archive_urls: &HashMap<String, String>,
) -> Result<DirectoryParse, StationError> {
    let url = config.stations_url();
    let text = decode_text(transport.get(&url)?);
    let parsed = parse_station_directory(&text, config.header_lines, columns, archive_urls);
    info!(
        "Loaded {} stations from {} ({} lines skipped)",
        parsed.stations.len(),
        url,
        parsed.skipped.len()
    );
    Ok(parsed)
}

/// Parses the description file, keeping only stations that have an archive.
///
/// Stations absent from `archive_urls` are dropped silently. Known stations with
/// an unparsable field are dropped with a warning and recorded in
/// [`DirectoryParse::skipped`]; the rest of the file is still loaded.
pub fn parse_station_directory(
    text: &str,
    header_lines: usize,
    columns: &StationColumns,
    archive_urls: &HashMap<String, String>,
) -> DirectoryParse {
    let mut parsed = DirectoryParse::default();
    for (index, line) in text.lines().enumerate().skip(header_lines) {
        if line.trim().is_empty() {
            continue;
        }
        let station_id = columns.id.extract(line);
        let Some(archive_url) = archive_urls.get(station_id) else {
            continue;
        };
        match parse_station_line(line, columns, archive_url) {
            Ok(station) => parsed.stations.push(station),
            Err(reason) => {
                warn!(
                    "Skipping station {} on line {}: {} (line: {:?})",
                    station_id,
                    index + 1,
                    reason,
                    line
                );
                parsed.skipped.push(SkippedStation {
                    line: index + 1,
                    station_id: station_id.to_string(),
                    reason,
                });
            }
        }
    }
    parsed
}

/// Parses one description-file line into a [`Station`] carrying `archive_url`.
pub fn parse_station_line(
    line: &str,
    columns: &StationColumns,
    archive_url: &str,
) -> Result<Station, StationLineError> {
    Ok(Station {
        id: columns.id.extract(line).to_string(),
        data_since: parse_date(line, columns.data_since, StationField::DataSince)?,
        data_until: parse_date(line, columns.data_until, StationField::DataUntil)?,
        height: parse_number(line, columns.height, StationField::Height)?,
        longitude: parse_coordinate(line, columns.longitude, StationField::Longitude, 180.0)?,
        latitude: parse_coordinate(line, columns.latitude, StationField::Latitude, 90.0)?,
        name: columns.name.extract(line).to_string(),
        state: columns.state.extract(line).to_string(),
        archive_url: Some(archive_url.to_string()),
    })
}

fn parse_date(
    line: &str,
    extractor: FieldExtractor,
    field: StationField,
) -> Result<NaiveDate, StationLineError> {
    let value = extractor.extract(line);
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| StationLineError::Unparsable {
        field,
        value: value.to_string(),
    })
}

fn parse_number<T: FromStr>(
    line: &str,
    extractor: FieldExtractor,
    field: StationField,
) -> Result<T, StationLineError> {
    let value = extractor.extract(line);
    value.parse().map_err(|_| StationLineError::Unparsable {
        field,
        value: value.to_string(),
    })
}

/// A coordinate in degrees within `-limit..=limit`. A station outside it could
/// never be ranked by distance.
fn parse_coordinate(
    line: &str,
    extractor: FieldExtractor,
    field: StationField,
    limit: f64,
) -> Result<f64, StationLineError> {
    let value: f64 = parse_number(line, extractor, field)?;
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(StationLineError::OutOfRange { field, value })
    }
}
