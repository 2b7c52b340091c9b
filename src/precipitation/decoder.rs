//! Row-by-row decoding of a station's product file.
//!
//! The product file is `;`-separated text with a header row, e.g.
//!
//! ```text
//! STATIONS_ID;MESS_DATUM;QN_6;  RS;RSF;SH_TAG;NSH_TAG;eor
//!           1;19120101;    1;   0.0;   0;-999;-999;eor
//! ```
//!
//! A row that cannot be turned into a [`Measurement`] is skipped with a
//! [`SkipReason`]; it never aborts the rest of the file.

use crate::precipitation::error::PrecipitationError;
use crate::types::measurement::Measurement;
use crate::types::station::Station;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use std::str::FromStr;
use thiserror::Error;

/// Value DWD writes where no measurement exists.
pub const MISSING_VALUE: f64 = -999.0;

pub const DATE_COLUMN: &str = "MESS_DATUM";
pub const PRECIPITATION_COLUMN: &str = "RS";
pub const FORM_COLUMN: &str = "RSF";
pub const QUALITY_COLUMN: &str = "QN_6";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("precipitation is the missing-value marker -999")]
    MissingValue,

    #[error("column '{0}' is missing")]
    MissingColumn(&'static str),

    #[error("column '{column}' has unparsable value '{value}'")]
    Unparsable { column: &'static str, value: String },

    #[error("row could not be read: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the product file; the header is line 1.
    pub line: usize,
    /// The row's fields joined with `;`, empty if the row could not be read at all.
    pub raw: String,
    pub reason: SkipReason,
}

#[derive(Debug, PartialEq)]
pub enum RowOutcome<'a> {
    Measurement(Measurement<'a>),
    Skipped(SkipReason),
}

/// Everything decoded from one product file, in file order.
#[derive(Debug, Default, PartialEq)]
pub struct DecodedArchive<'a> {
    pub measurements: Vec<Measurement<'a>>,
    pub skipped: Vec<SkippedRow>,
}

/// Positions of the columns we read, looked up once from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductColumns {
    date: Option<usize>,
    precipitation: Option<usize>,
    form: Option<usize>,
    quality: Option<usize>,
}

impl ProductColumns {
    pub fn locate(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|header| header == name);
        Self {
            date: position(DATE_COLUMN),
            precipitation: position(PRECIPITATION_COLUMN),
            form: position(FORM_COLUMN),
            quality: position(QUALITY_COLUMN),
        }
    }
}

fn field<T: FromStr>(
    record: &StringRecord,
    index: Option<usize>,
    column: &'static str,
) -> Result<T, SkipReason> {
    let value = index
        .and_then(|i| record.get(i))
        .ok_or(SkipReason::MissingColumn(column))?;
    value.parse().map_err(|_| SkipReason::Unparsable {
        column,
        value: value.to_string(),
    })
}

fn date_field(record: &StringRecord, index: Option<usize>) -> Result<NaiveDate, SkipReason> {
    let value = index
        .and_then(|i| record.get(i))
        .ok_or(SkipReason::MissingColumn(DATE_COLUMN))?;
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| SkipReason::Unparsable {
        column: DATE_COLUMN,
        value: value.to_string(),
    })
}

/// Decodes one row. All fields are parsed before the missing-value check, so a
/// row that is both -999 and malformed reports the malformation.
pub fn decode_row<'a>(
    station: &'a Station,
    columns: &ProductColumns,
    record: &StringRecord,
) -> RowOutcome<'a> {
    match try_decode_row(station, columns, record) {
        Ok(measurement) => RowOutcome::Measurement(measurement),
        Err(reason) => RowOutcome::Skipped(reason),
    }
}

fn try_decode_row<'a>(
    station: &'a Station,
    columns: &ProductColumns,
    record: &StringRecord,
) -> Result<Measurement<'a>, SkipReason> {
    let precipitation: f64 = field(record, columns.precipitation, PRECIPITATION_COLUMN)?;
    let form: i32 = field(record, columns.form, FORM_COLUMN)?;
    let quality: i32 = field(record, columns.quality, QUALITY_COLUMN)?;
    let date = date_field(record, columns.date)?;
    if precipitation == MISSING_VALUE {
        return Err(SkipReason::MissingValue);
    }
    Ok(Measurement {
        station,
        date,
        precipitation,
        form,
        quality,
    })
}

/// Decodes a whole product file for `station`.
///
/// Only an unreadable header is an error; every other problem skips the row,
/// is logged with the station id and raw row, and is recorded in
/// [`DecodedArchive::skipped`].
pub fn decode_product_file<'a>(
    station: &'a Station,
    text: &str,
) -> Result<DecodedArchive<'a>, PrecipitationError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| PrecipitationError::Header {
            station: station.id.clone(),
            source: e,
        })?
        .clone();
    let columns = ProductColumns::locate(&headers);

    let mut decoded = DecodedArchive::default();
    for (index, result) in reader.records().enumerate() {
        let line = index + 2;
        let (raw, outcome) = match result {
            Ok(record) => {
                let raw = record.iter().collect::<Vec<_>>().join(";");
                (raw, decode_row(station, &columns, &record))
            }
            Err(e) => (
                String::new(),
                RowOutcome::Skipped(SkipReason::Malformed(e.to_string())),
            ),
        };

        match outcome {
            RowOutcome::Measurement(measurement) => decoded.measurements.push(measurement),
            RowOutcome::Skipped(reason) => {
                if reason == SkipReason::MissingValue {
                    info!(
                        "Row without precipitation value, station {}, line {}: {}",
                        station.id, line, raw
                    );
                } else {
                    warn!(
                        "Could not parse row, station {}, line {}: {} ({})",
                        station.id, line, raw, reason
                    );
                }
                decoded.skipped.push(SkippedRow { line, raw, reason });
            }
        }
    }
    Ok(decoded)
}
