//! The main entry point: a client that finds DWD precipitation stations and
//! loads their historical daily series.

use crate::cache::OnceCache;
use crate::config::DwdConfig;
use crate::error::DwdError;
use crate::precipitation::archive::read_product_file;
use crate::precipitation::decoder::{decode_product_file, DecodedArchive};
use crate::precipitation::error::PrecipitationError;
use crate::stations::archive_index::fetch_archive_urls;
use crate::stations::calibration::StationColumns;
use crate::stations::directory::fetch_stations;
use crate::stations::error::LocateStationError;
use crate::stations::locate_station::{active_cutoff, is_active, nearest};
use crate::transport::{HttpTransport, Transport};
use crate::types::measurement::Measurement;
use crate::types::station::Station;
use bon::bon;
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;

/// A geographical coordinate as longitude and latitude in WGS84 degrees.
///
/// Longitude is the first element (index 0), latitude the second (index 1).
///
/// # Examples
///
/// ```
/// use dwd_precip::LonLat;
///
/// let bielefeld = LonLat(8.53, 52.02);
/// assert_eq!(bielefeld.lon(), 8.53);
/// assert_eq!(bielefeld.lat(), 52.02);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat(pub f64, pub f64);

impl LonLat {
    pub fn lon(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }
}

/// Client for the DWD daily precipitation dataset.
///
/// The archive index and the station directory are downloaded on first use and
/// kept for the lifetime of the client; concurrent first callers share one
/// download. Precipitation series are downloaded on every request.
///
/// # Examples
///
/// ```no_run
/// # use dwd_precip::{Dwd, DwdError};
/// # fn main() -> Result<(), DwdError> {
/// let client = Dwd::new()?;
/// let station = client.nearest_active(8.53, 52.02)?;
/// let series = client.measurements(&station)?;
/// println!("{} days of data for {}", series.len(), station.name);
/// # Ok(())
/// # }
/// ```
pub struct Dwd {
    config: DwdConfig,
    transport: Arc<dyn Transport>,
    columns: StationColumns,
    archive_urls: OnceCache<HashMap<String, String>>,
    stations: OnceCache<Vec<Station>>,
}

#[bon]
impl Dwd {
    /// Creates a client for the live DWD server with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`DwdError::Calibration`] if the station file layout cannot be derived
    /// and [`DwdError::Transport`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, DwdError> {
        Self::with_options().call()
    }

    /// Creates a client with a custom configuration and/or transport.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dwd_precip::{Dwd, DwdConfig, DwdError};
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), DwdError> {
    /// let client = Dwd::with_options()
    ///     .config(DwdConfig::builder().timeout(Duration::from_secs(120)).build())
    ///     .call()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn with_options(
        config: Option<DwdConfig>,
        transport: Option<Arc<dyn Transport>>,
    ) -> Result<Self, DwdError> {
        let config = config.unwrap_or_default();
        // Fail at construction rather than on the first directory load.
        let columns = StationColumns::calibrate()?;
        let transport = match transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(config.timeout)?),
        };
        Ok(Self {
            config,
            transport,
            columns,
            archive_urls: OnceCache::new(),
            stations: OnceCache::new(),
        })
    }

    pub fn config(&self) -> &DwdConfig {
        &self.config
    }

    /// Station id → archive URL, scraped from the dataset listing on first call.
    pub fn archive_urls(&self) -> Result<Arc<HashMap<String, String>>, DwdError> {
        self.archive_urls.get_or_try_init(|| {
            fetch_archive_urls(self.transport.as_ref(), &self.config).map_err(DwdError::from)
        })
    }

    /// All stations that have a precipitation archive, in description-file order.
    pub fn stations(&self) -> Result<Arc<Vec<Station>>, DwdError> {
        self.stations.get_or_try_init(|| {
            let archive_urls = self.archive_urls()?;
            let parsed = fetch_stations(
                self.transport.as_ref(),
                &self.config,
                &self.columns,
                &archive_urls,
            )?;
            Ok::<_, DwdError>(parsed.stations)
        })
    }

    /// Drops the cached archive index and station directory.
    pub fn reset_caches(&self) {
        debug!("Resetting station caches");
        self.stations.reset();
        self.archive_urls.reset();
    }

    /// Looks up a station by its DWD id (e.g., "00044").
    pub fn station(&self, id: &str) -> Result<Station, DwdError> {
        let stations = self.stations()?;
        stations
            .iter()
            .find(|station| station.id == id)
            .cloned()
            .ok_or_else(|| LocateStationError::UnknownStation(id.to_string()).into())
    }

    /// Finds the station nearest to a location, returning it with its distance in metres.
    ///
    /// * `.location(LonLat)`: **Required.** The point to search around.
    /// * `.active_only(bool)`: Only consider stations whose data reaches past
    ///   `today` minus [`DwdConfig::active_grace_days`]. Defaults to `false`.
    /// * `.today(NaiveDate)`: Reference date for `active_only`. Defaults to the local date.
    ///
    /// # Errors
    ///
    /// Returns [`LocateStationError::NoStation`] or [`LocateStationError::NoActiveStation`]
    /// (wrapped in [`DwdError::LocateStation`]) if no station qualifies.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use dwd_precip::{Dwd, DwdError, LonLat};
    /// # fn main() -> Result<(), DwdError> {
    /// let client = Dwd::new()?;
    /// let (station, distance_m) = client
    ///     .nearest_station()
    ///     .location(LonLat(13.405, 52.52))
    ///     .active_only(true)
    ///     .call()?;
    /// println!("{} is {:.1} km away", station.name, distance_m / 1000.0);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn nearest_station(
        &self,
        location: LonLat,
        #[builder(default)] active_only: bool,
        today: Option<NaiveDate>,
    ) -> Result<(Station, f64), DwdError> {
        let stations = self.stations()?;
        let found = if active_only {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let cutoff = active_cutoff(today, self.config.active_grace_days);
            nearest(
                stations.iter().filter(|station| is_active(station, cutoff)),
                location,
            )?
            .ok_or(LocateStationError::NoActiveStation { cutoff })?
        } else {
            nearest(stations.iter(), location)?.ok_or(LocateStationError::NoStation)?
        };

        let (station, distance) = found;
        debug!(
            "Nearest station to {:?} is {} ({}) at {:.0} m",
            location, station.id, station.name, distance
        );
        Ok((station.clone(), distance))
    }

    /// The station nearest to (`lon`, `lat`).
    pub fn nearest(&self, lon: f64, lat: f64) -> Result<Station, DwdError> {
        self.nearest_station()
            .location(LonLat(lon, lat))
            .call()
            .map(|(station, _)| station)
    }

    /// The station nearest to (`lon`, `lat`) that still reports data.
    pub fn nearest_active(&self, lon: f64, lat: f64) -> Result<Station, DwdError> {
        self.nearest_station()
            .location(LonLat(lon, lat))
            .active_only(true)
            .call()
            .map(|(station, _)| station)
    }

    /// Downloads and decodes the full precipitation series of `station`.
    ///
    /// Rows holding the -999 marker or malformed values are logged and left out.
    pub fn measurements<'a>(&self, station: &'a Station) -> Result<Vec<Measurement<'a>>, DwdError> {
        Ok(self.measurements_report(station)?.measurements)
    }

    /// Like [`Dwd::measurements`], but also returns every skipped row with its reason.
    pub fn measurements_report<'a>(
        &self,
        station: &'a Station,
    ) -> Result<DecodedArchive<'a>, DwdError> {
        let url = station
            .archive_url
            .as_deref()
            .ok_or_else(|| PrecipitationError::MissingArchiveUrl(station.id.clone()))?;
        let bytes = self
            .transport
            .get(url)
            .map_err(PrecipitationError::from)?;
        let text = read_product_file(&bytes, &self.config.product_prefix, url)?;
        let decoded = decode_product_file(station, &text)?;
        info!(
            "Decoded {} measurements for station {} ({} rows skipped)",
            decoded.measurements.len(),
            station.id,
            decoded.skipped.len()
        );
        Ok(decoded)
    }
}
