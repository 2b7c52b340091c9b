mod cache;
mod config;
mod dwd;
mod error;
mod precipitation;
mod stations;
mod transport;
mod types;

#[cfg(test)]
mod test_support;

pub use cache::OnceCache;
pub use config::*;
pub use dwd::*;
pub use error::DwdError;
pub use transport::{FetchError, HttpTransport, Transport};

pub use types::measurement::Measurement;
pub use types::precipitation_form::PrecipitationForm;
pub use types::station::*;

pub use stations::archive_index::index_archive_urls;
pub use stations::calibration::*;
pub use stations::directory::{
    parse_station_directory, parse_station_line, DirectoryParse, SkippedStation,
};
pub use stations::geodesic::distance_m;
pub use stations::locate_station::{active_cutoff, is_active, nearest};

pub use precipitation::archive::read_product_file;
pub use precipitation::decoder::{
    decode_product_file, decode_row, DecodedArchive, ProductColumns, RowOutcome, SkipReason,
    SkippedRow, MISSING_VALUE,
};

pub use precipitation::error::PrecipitationError;
pub use stations::error::{CalibrationError, LocateStationError, StationError, StationLineError};
