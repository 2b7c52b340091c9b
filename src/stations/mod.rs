pub mod archive_index;
pub mod calibration;
pub mod directory;
pub mod error;
pub mod geodesic;
pub mod locate_station;
