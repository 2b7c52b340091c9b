//! Column layout of the fixed-width station description file.
//!
//! DWD does not document the column boundaries of
//! `RR_Tageswerte_Beschreibung_Stationen.txt`. Instead of hard-coding offsets,
//! the layout is derived from a known-good line of that file: each field is
//! located by searching for its value in [`REFERENCE_LINE`], bounded by its
//! neighbour. Fixing a format change only means editing [`STATION_FIELDS`].

use crate::stations::error::CalibrationError;
use std::collections::HashMap;
use std::fmt;

/// A real line of the station description file (station 00001, Aach).
pub const REFERENCE_LINE: &str = "00001 19120101 19860630            478     47.8413    8.8493 Aach                                     Baden-Württemberg                                                                                 ";

/// How a field's column span is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Right-aligned values (numbers, dates): the span starts one column after the
    /// previous field's value and ends with the field's own value.
    Right,
    /// Left-aligned text: the span starts with the field's own value and runs up to
    /// one column before the next field's value, so longer names are not cut off.
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationField {
    Id,
    DataSince,
    DataUntil,
    Height,
    Latitude,
    Longitude,
    Name,
    State,
}

impl StationField {
    /// Column name used in the header of the description file.
    pub fn column_name(&self) -> &'static str {
        match self {
            StationField::Id => "Stations_id",
            StationField::DataSince => "von_datum",
            StationField::DataUntil => "bis_datum",
            StationField::Height => "Stationshoehe",
            StationField::Latitude => "geoBreite",
            StationField::Longitude => "geoLaenge",
            StationField::Name => "Stationsname",
            StationField::State => "Bundesland",
        }
    }
}

impl fmt::Display for StationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: StationField,
    /// The field's value in the reference line.
    pub literal: &'static str,
    /// The previous field's value for [`Alignment::Right`], the next field's value for
    /// [`Alignment::Left`]. `None` for the first or last column.
    pub neighbour: Option<&'static str>,
    pub alignment: Alignment,
}

pub const STATION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: StationField::Id,
        literal: "00001",
        neighbour: None,
        alignment: Alignment::Right,
    },
    FieldSpec {
        field: StationField::DataSince,
        literal: "19120101",
        neighbour: Some("00001"),
        alignment: Alignment::Right,
    },
    FieldSpec {
        field: StationField::DataUntil,
        literal: "19860630",
        neighbour: Some("19120101"),
        alignment: Alignment::Right,
    },
    FieldSpec {
        field: StationField::Height,
        literal: "478",
        neighbour: Some("19860630"),
        alignment: Alignment::Right,
    },
    FieldSpec {
        field: StationField::Latitude,
        literal: "47.8413",
        neighbour: Some("478"),
        alignment: Alignment::Right,
    },
    FieldSpec {
        field: StationField::Longitude,
        literal: "8.8493",
        neighbour: Some("47.8413"),
        alignment: Alignment::Right,
    },
    FieldSpec {
        field: StationField::Name,
        literal: "Aach",
        neighbour: Some("Baden-Württemberg"),
        alignment: Alignment::Left,
    },
    FieldSpec {
        field: StationField::State,
        literal: "Baden-Württemberg",
        neighbour: None,
        alignment: Alignment::Left,
    },
];

/// Extracts one field from a line by character columns `start..end`
/// (`end == None` runs to the end of the line) and trims the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldExtractor {
    start: usize,
    end: Option<usize>,
}

impl FieldExtractor {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Lines shorter than the span yield whatever part of it exists, possibly "".
    pub fn extract<'l>(&self, line: &'l str) -> &'l str {
        let start = byte_offset(line, self.start);
        let end = self
            .end
            .map_or(line.len(), |end| byte_offset(line, end));
        line[start..end].trim()
    }
}

fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

/// Character column of `literal` in `reference`.
fn find_column(
    reference: &str,
    field: StationField,
    literal: &'static str,
) -> Result<usize, CalibrationError> {
    reference
        .find(literal)
        .map(|offset| reference[..offset].chars().count())
        .ok_or(CalibrationError::LiteralNotFound { field, literal })
}

fn char_len(literal: &str) -> usize {
    literal.chars().count()
}

/// Field extractors derived from a reference line.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    extractors: HashMap<StationField, FieldExtractor>,
}

impl Calibration {
    pub fn new(reference: &str, specs: &[FieldSpec]) -> Result<Self, CalibrationError> {
        let mut extractors = HashMap::with_capacity(specs.len());
        for spec in specs {
            let own = find_column(reference, spec.field, spec.literal)?;
            let (start, end) = match spec.alignment {
                Alignment::Right => {
                    let start = match spec.neighbour {
                        Some(previous) => {
                            find_column(reference, spec.field, previous)? + char_len(previous) + 1
                        }
                        None => 0,
                    };
                    (start, Some(own + char_len(spec.literal)))
                }
                Alignment::Left => {
                    let end = match spec.neighbour {
                        Some(next) => Some(find_column(reference, spec.field, next)?.saturating_sub(1)),
                        None => None,
                    };
                    (own, end)
                }
            };
            if let Some(end) = end {
                if end <= start {
                    return Err(CalibrationError::EmptySpan {
                        field: spec.field,
                        start,
                        end,
                    });
                }
            }
            extractors.insert(spec.field, FieldExtractor { start, end });
        }
        Ok(Self { extractors })
    }

    /// The calibration of the DWD station description file.
    pub fn station_fields() -> Result<Self, CalibrationError> {
        Self::new(REFERENCE_LINE, STATION_FIELDS)
    }

    pub fn extractor(&self, field: StationField) -> Result<FieldExtractor, CalibrationError> {
        self.extractors
            .get(&field)
            .copied()
            .ok_or(CalibrationError::MissingField(field))
    }
}

/// One extractor per column of the station description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationColumns {
    pub id: FieldExtractor,
    pub data_since: FieldExtractor,
    pub data_until: FieldExtractor,
    pub height: FieldExtractor,
    pub latitude: FieldExtractor,
    pub longitude: FieldExtractor,
    pub name: FieldExtractor,
    pub state: FieldExtractor,
}

impl StationColumns {
    pub fn calibrate() -> Result<Self, CalibrationError> {
        Self::from_calibration(&Calibration::station_fields()?)
    }

    pub fn from_calibration(calibration: &Calibration) -> Result<Self, CalibrationError> {
        Ok(Self {
            id: calibration.extractor(StationField::Id)?,
            data_since: calibration.extractor(StationField::DataSince)?,
            data_until: calibration.extractor(StationField::DataUntil)?,
            height: calibration.extractor(StationField::Height)?,
            latitude: calibration.extractor(StationField::Latitude)?,
            longitude: calibration.extractor(StationField::Longitude)?,
            name: calibration.extractor(StationField::Name)?,
            state: calibration.extractor(StationField::State)?,
        })
    }
}
