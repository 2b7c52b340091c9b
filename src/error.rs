use crate::precipitation::error::PrecipitationError;
use crate::stations::error::{CalibrationError, LocateStationError, StationError};
use crate::transport::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DwdError {
    #[error(transparent)]
    Precipitation(#[from] PrecipitationError),

    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    LocateStation(#[from] LocateStationError),

    #[error("Station description layout could not be calibrated")]
    Calibration(#[from] CalibrationError),

    #[error("Failed to set up the HTTP transport")]
    Transport(#[from] FetchError),
}
