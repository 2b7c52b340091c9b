use crate::stations::error::LocateStationError;
use crate::stations::geodesic::distance_m;
use crate::types::station::Station;
use crate::LonLat;
use chrono::{NaiveDate, TimeDelta};
use ordered_float::OrderedFloat;

/// Finds the station closest to `point` by geodesic distance.
///
/// Returns the station with its distance in metres, or `None` if `stations` is empty.
/// Among stations at the same distance the first one wins, so the result is
/// stable with respect to directory order.
pub fn nearest<'a, I>(
    stations: I,
    point: LonLat,
) -> Result<Option<(&'a Station, f64)>, LocateStationError>
where
    I: IntoIterator<Item = &'a Station>,
{
    let candidates = stations
        .into_iter()
        .map(|station| {
            distance_m(point, station.location()).map(|d| (station, OrderedFloat(d)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // min_by_key keeps the first of several equal minima.
    Ok(candidates
        .into_iter()
        .min_by_key(|(_, distance)| *distance)
        .map(|(station, distance)| (station, distance.into_inner())))
}

/// The date a station's data must reach past to count as active.
///
/// DWD publishes with a lag of up to about a month, hence the grace period.
/// Windows reaching past the representable calendar clamp to its ends.
pub fn active_cutoff(today: NaiveDate, grace_days: i64) -> NaiveDate {
    TimeDelta::try_days(grace_days)
        .and_then(|grace| today.checked_sub_signed(grace))
        .unwrap_or(if grace_days >= 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

pub fn is_active(station: &Station, cutoff: NaiveDate) -> bool {
    station.archive_url.is_some() && station.data_until > cutoff
}
