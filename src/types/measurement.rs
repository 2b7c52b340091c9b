use crate::types::precipitation_form::PrecipitationForm;
use crate::types::station::Station;
use chrono::NaiveDate;
use serde::Serialize;

/// One day of precipitation at a station.
///
/// Borrows the station it was decoded for, so a measurement cannot outlive it.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Measurement<'a> {
    pub station: &'a Station,
    pub date: NaiveDate,     // MESS_DATUM
    pub precipitation: f64,  // RS (mm)
    pub form: i32,           // RSF
    pub quality: i32,        // QN_6
}

impl Measurement<'_> {
    /// The decoded `form` code, or `None` for codes DWD does not define.
    pub fn precipitation_form(&self) -> Option<PrecipitationForm> {
        PrecipitationForm::from_code(self.form)
    }
}
