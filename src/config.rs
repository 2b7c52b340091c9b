//! Locations and conventions of the DWD open-data precipitation dataset.

use bon::Builder;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str =
    "https://opendata.dwd.de/climate_environment/CDC/observations_germany/climate/daily/more_precip/historical/";
pub const DEFAULT_STATIONS_FILE: &str = "RR_Tageswerte_Beschreibung_Stationen.txt";
pub const DEFAULT_ARCHIVE_PREFIX: &str = "tageswerte_RR_";
pub const DEFAULT_PRODUCT_PREFIX: &str = "produkt";

/// Settings for a [`crate::Dwd`] client. Every field has a default matching the
/// live DWD server, so `DwdConfig::default()` is usually all you need.
///
/// # Examples
///
/// ```
/// use dwd_precip::DwdConfig;
/// use std::time::Duration;
///
/// let config = DwdConfig::builder()
///     .timeout(Duration::from_secs(60))
///     .active_grace_days(45)
///     .build();
/// assert_eq!(config.header_lines, 2);
/// assert!(config.stations_url().ends_with("RR_Tageswerte_Beschreibung_Stationen.txt"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct DwdConfig {
    /// Directory listing holding the station description file and one zip archive per station.
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    /// File name of the fixed-width station description file inside `base_url`.
    #[builder(into, default = DEFAULT_STATIONS_FILE.to_string())]
    pub stations_file: String,
    /// Archive file names start with this prefix, directly followed by the 5-digit station id.
    #[builder(into, default = DEFAULT_ARCHIVE_PREFIX.to_string())]
    pub archive_prefix: String,
    /// Name prefix of the data file inside each archive.
    #[builder(into, default = DEFAULT_PRODUCT_PREFIX.to_string())]
    pub product_prefix: String,
    /// Lines to skip at the top of the station description file (column names and dashes).
    #[builder(default = 2)]
    pub header_lines: usize,
    /// A station counts as active if its data reaches past today minus this many days.
    #[builder(default = 32)]
    pub active_grace_days: i64,
    pub timeout: Option<Duration>,
}

impl Default for DwdConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DwdConfig {
    pub fn stations_url(&self) -> String {
        format!("{}{}", self.base_url, self.stations_file)
    }
}
