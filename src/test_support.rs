//! Fixtures mimicking the files on the DWD server.

use crate::Station;
use chrono::NaiveDate;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Lays out a station description line with DWD's column widths:
/// id, since, until, height, latitude, longitude, name, state.
pub(crate) fn station_line(fields: [&str; 8]) -> String {
    let [id, since, until, height, lat, lon, name, state] = fields;
    format!(
        "{} {} {} {:>14} {:>11} {:>9} {:<40} {:<97}",
        id, since, until, height, lat, lon, name, state
    )
}

/// A full description file: the two header lines followed by `lines`.
pub(crate) fn stations_file(lines: &[String]) -> String {
    let mut text = String::from(
        "Stations_id von_datum bis_datum Stationshoehe geoBreite geoLaenge Stationsname Bundesland\n\
         ----------- --------- --------- ------------- --------- --------- ----------------------------------------- ----------\n",
    );
    for line in lines {
        text.push_str(line);
        text.push_str("\r\n");
    }
    text
}

/// An nginx-style directory listing linking to the given file names.
pub(crate) fn listing_html(files: &[&str]) -> String {
    let mut html = String::from(
        "<html>\r\n<head><title>Index of /climate_environment/CDC/</title></head>\r\n<body>\r\n<h1>Index of /</h1><hr><pre><a href=\"../\">../</a>\r\n",
    );
    for file in files {
        html.push_str(&format!(
            "<a href=\"{file}\">{file}</a>   18-Mar-2024 10:12    28K\r\n"
        ));
    }
    html.push_str("</pre><hr></body>\r\n</html>\r\n");
    html
}

/// A zip archive holding the given `(name, content)` entries.
pub(crate) fn zip_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub(crate) fn station(id: &str, lon: f64, lat: f64, data_until: NaiveDate) -> Station {
    Station {
        id: id.to_string(),
        data_since: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
        data_until,
        height: 100,
        longitude: lon,
        latitude: lat,
        name: format!("Station {id}"),
        state: "Hessen".to_string(),
        archive_url: Some(format!("https://example.org/tageswerte_RR_{id}_hist.zip")),
    }
}
