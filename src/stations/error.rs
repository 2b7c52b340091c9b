use crate::stations::calibration::StationField;
use crate::transport::FetchError;
use chrono::NaiveDate;
use thiserror::Error;

/// The fixed-width column layout could not be derived from the reference line.
///
/// This means the reference data no longer matches the file format and is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalibrationError {
    #[error("Literal '{literal}' for field {field} does not occur in the reference line")]
    LiteralNotFound {
        field: StationField,
        literal: &'static str,
    },

    #[error("Field {field} calibrates to an empty column span {start}..{end}")]
    EmptySpan {
        field: StationField,
        start: usize,
        end: usize,
    },

    #[error("No calibration entry for field {0}")]
    MissingField(StationField),
}

/// A single line of the station description file that was skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StationLineError {
    #[error("field {field} has unparsable value '{value}'")]
    Unparsable { field: StationField, value: String },

    #[error("field {field} is out of range: {value}")]
    OutOfRange { field: StationField, value: f64 },
}

#[derive(Debug, Error)]
pub enum StationError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid HTML selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateStationError {
    #[error("Invalid coordinate (lon {lon}, lat {lat})")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("The station directory is empty")]
    NoStation,

    #[error("No station reports data after {cutoff}")]
    NoActiveStation { cutoff: NaiveDate },

    #[error("Unknown station id '{0}'")]
    UnknownStation(String),
}
