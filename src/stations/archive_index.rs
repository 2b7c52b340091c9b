//! Maps station ids to the URL of their precipitation archive by scraping the
//! dataset's directory listing.
//!
//! Archive names follow `tageswerte_RR_<id>_<since>_<until>_hist.zip`, so the
//! station id is the fixed-length run right after the prefix.

use crate::config::DwdConfig;
use crate::stations::error::StationError;
use crate::transport::{decode_text, Transport};
use log::{debug, info};
use scraper::{Html, Selector};
use std::collections::HashMap;

const STATION_ID_LEN: usize = 5;
const ANCHOR_SELECTOR: &str = "a[href]";

/// Fetches the directory listing at `config.base_url` and indexes its archives.
pub fn fetch_archive_urls(
    transport: &dyn Transport,
    config: &DwdConfig,
) -> Result<HashMap<String, String>, StationError> {
    let body = transport.get(&config.base_url)?;
    let urls = index_archive_urls(&decode_text(body), &config.base_url, &config.archive_prefix)?;
    info!(
        "Indexed {} station archives from {}",
        urls.len(),
        config.base_url
    );
    Ok(urls)
}

/// Builds the station id → archive URL map from a listing page. Links not starting
/// with `archive_prefix`, or too short to hold an id, are ignored.
pub fn index_archive_urls(
    html: &str,
    base_url: &str,
    archive_prefix: &str,
) -> Result<HashMap<String, String>, StationError> {
    let selector = Selector::parse(ANCHOR_SELECTOR).map_err(|e| StationError::Selector {
        selector: ANCHOR_SELECTOR.to_string(),
        message: e.to_string(),
    })?;
    let document = Html::parse_document(html);

    let mut urls = HashMap::new();
    for href in document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
    {
        if !href.starts_with(archive_prefix) {
            continue;
        }
        let id_start = archive_prefix.len();
        let Some(station_id) = href.get(id_start..id_start + STATION_ID_LEN) else {
            debug!("Skipping archive link without station id: {}", href);
            continue;
        };
        urls.insert(station_id.to_string(), format!("{}{}", base_url, href));
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing_html;
    use crate::transport::mock::MockTransport;
    use crate::transport::FetchError;

    const BASE: &str = "https://example.org/daily/more_precip/historical/";

    #[test]
    fn test_indexes_archives_by_station_id() {
        let html = listing_html(&[
            "BESCHREIBUNG_obsgermany_climate_daily_more_precip_historical_de.pdf",
            "RR_Tageswerte_Beschreibung_Stationen.txt",
            "tageswerte_RR_00001_19120101_19860630_hist.zip",
            "tageswerte_RR_00044_19690101_20231231_hist.zip",
        ]);
        let urls = index_archive_urls(&html, BASE, "tageswerte_RR_").unwrap();

        assert_eq!(urls.len(), 2);
        assert_eq!(
            urls["00001"],
            format!("{BASE}tageswerte_RR_00001_19120101_19860630_hist.zip")
        );
        assert!(urls.contains_key("00044"));
    }

    #[test]
    fn test_ignores_truncated_archive_names() {
        let html = listing_html(&["tageswerte_RR_001", "tageswerte_RR_00002_x.zip"]);
        let urls = index_archive_urls(&html, BASE, "tageswerte_RR_").unwrap();
        assert_eq!(urls.keys().collect::<Vec<_>>(), vec!["00002"]);
    }

    #[test]
    fn test_fetch_failure_surfaces() {
        let mock = MockTransport::new();
        let config = DwdConfig::builder().base_url(BASE).build();
        let err = fetch_archive_urls(&mock, &config).unwrap_err();
        assert!(matches!(
            err,
            StationError::Fetch(FetchError::HttpStatus { status: 404, .. })
        ));
    }
}
