//! Defines the `PrecipitationForm` enum, mapping DWD's numeric `RSF` codes to
//! descriptive variants.

/// The form of precipitation reported in the `RSF` column of DWD daily precipitation data.
///
/// See the DWD dataset description (`DESCRIPTION_obsgermany_climate_daily_more_precip`)
/// for the official code list. Codes 2, 3 and 5 are not used by the daily dataset.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrecipitationForm {
    /// Code 0: No precipitation fell (conventional or automatic measurement).
    None = 0,
    /// Code 1: Only rain (historical data only).
    HistoricalRain = 1,
    /// Code 4: Precipitation fell, but its form is not known.
    Unknown = 4,
    /// Code 6: Only rain.
    Rain = 6,
    /// Code 7: Only snow.
    Snow = 7,
    /// Code 8: Rain and snow (and/or sleet).
    RainAndSnow = 8,
    /// Code 9: An error or missing value, or the form was not determined.
    Missing = 9,
}

impl PrecipitationForm {
    /// Converts a raw `RSF` code into a `PrecipitationForm`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dwd_precip::PrecipitationForm;
    ///
    /// assert_eq!(PrecipitationForm::from_code(7), Some(PrecipitationForm::Snow));
    /// assert_eq!(PrecipitationForm::from_code(3), None);
    /// ```
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PrecipitationForm::None),
            1 => Some(PrecipitationForm::HistoricalRain),
            4 => Some(PrecipitationForm::Unknown),
            6 => Some(PrecipitationForm::Rain),
            7 => Some(PrecipitationForm::Snow),
            8 => Some(PrecipitationForm::RainAndSnow),
            9 => Some(PrecipitationForm::Missing),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Whether the code says some rain fell, alone or mixed with snow.
    pub fn includes_rain(self) -> bool {
        matches!(
            self,
            PrecipitationForm::HistoricalRain
                | PrecipitationForm::Rain
                | PrecipitationForm::RainAndSnow
        )
    }
}
