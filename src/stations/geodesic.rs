//! Distances on the WGS84 ellipsoid.

use crate::stations::error::LocateStationError;
use crate::LonLat;
use geographiclib_rs::{Geodesic, InverseGeodesic};
use std::sync::OnceLock;

fn wgs84() -> &'static Geodesic {
    static WGS84: OnceLock<Geodesic> = OnceLock::new();
    WGS84.get_or_init(Geodesic::wgs84)
}

fn validate(point: LonLat) -> Result<(), LocateStationError> {
    let LonLat(lon, lat) = point;
    if lon.is_finite() && lat.is_finite() && (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(LocateStationError::InvalidCoordinate { lon, lat })
    }
}

/// Length in metres of the shortest path between two points on the WGS84 ellipsoid.
///
/// Solves the inverse geodesic problem (Karney's method), so the result is accurate
/// to nanometres and unlike a haversine distance does not treat the earth as a sphere.
///
/// # Examples
///
/// ```
/// use dwd_precip::{distance_m, LonLat};
///
/// // One degree of longitude along the equator.
/// let d = distance_m(LonLat(0.0, 0.0), LonLat(1.0, 0.0)).unwrap();
/// assert!((d - 111_319.491).abs() < 0.001);
/// ```
pub fn distance_m(from: LonLat, to: LonLat) -> Result<f64, LocateStationError> {
    validate(from)?;
    validate(to)?;
    let s12: f64 = wgs84().inverse(from.lat(), from.lon(), to.lat(), to.lon());
    Ok(s12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let aach = LonLat(8.8493, 47.8413);
        assert_eq!(distance_m(aach, aach).unwrap(), 0.0);
    }

    #[test]
    fn test_quarter_meridian() {
        let d = distance_m(LonLat(0.0, 0.0), LonLat(0.0, 90.0)).unwrap();
        assert!((d - 10_001_965.729).abs() < 0.001, "got {d}");
    }

    #[test]
    fn test_degree_of_latitude_grows_towards_the_pole() {
        // On a sphere both would be equal; on the ellipsoid the meridian is flatter near the pole.
        let at_equator = distance_m(LonLat(10.0, 0.0), LonLat(10.0, 1.0)).unwrap();
        let near_pole = distance_m(LonLat(10.0, 80.0), LonLat(10.0, 81.0)).unwrap();
        assert!((at_equator - 110_574.4).abs() < 1.0, "got {at_equator}");
        assert!(near_pole - at_equator > 1_000.0);
    }

    #[test]
    fn test_is_symmetric() {
        let aach = LonLat(8.8493, 47.8413);
        let berlin = LonLat(13.4050, 52.5200);
        let there = distance_m(aach, berlin).unwrap();
        let back = distance_m(berlin, aach).unwrap();
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_invalid_latitude() {
        let err = distance_m(LonLat(8.0, 91.0), LonLat(8.0, 50.0)).unwrap_err();
        assert_eq!(
            err,
            LocateStationError::InvalidCoordinate { lon: 8.0, lat: 91.0 }
        );
        assert!(distance_m(LonLat(f64::NAN, 0.0), LonLat(8.0, 50.0)).is_err());
    }
}
