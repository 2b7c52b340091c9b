use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dwd_precip::{decode_product_file, parse_station_directory, Station, StationColumns};
use std::collections::HashMap;

const STATIONS: usize = 1_000;
const DAYS: usize = 20_000;

fn station_directory() -> (String, HashMap<String, String>) {
    let mut text = String::from("Stations_id von_datum bis_datum Stationshoehe geoBreite geoLaenge Stationsname Bundesland\n----------- --------- --------- ------------- --------- --------- ----------------------------------------- ----------\n");
    let mut archive_urls = HashMap::new();
    for i in 0..STATIONS {
        let id = format!("{:05}", i + 1);
        let lat = 47.0 + (i % 70) as f64 * 0.1;
        let lon = 6.0 + (i % 90) as f64 * 0.1;
        text.push_str(&format!(
            "{} 19500101 20240229 {:>14} {:>11.4} {:>9.4} {:<40} {:<97}\r\n",
            id,
            i % 1500,
            lat,
            lon,
            format!("Station {id}"),
            "Baden-Württemberg"
        ));
        archive_urls.insert(id.clone(), format!("https://example.org/tageswerte_RR_{id}_hist.zip"));
    }
    (text, archive_urls)
}

fn product_file() -> String {
    let mut text = String::from("STATIONS_ID;MESS_DATUM;QN_6;  RS;RSF;SH_TAG;NSH_TAG;eor\n");
    let start = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    for (i, date) in start.iter_days().take(DAYS).enumerate() {
        let rs = if i % 50 == 0 { -999.0 } else { (i % 37) as f64 * 0.3 };
        text.push_str(&format!(
            "          1;{};    1;{:>6.1};   6;   0;   0;eor\n",
            date.format("%Y%m%d"),
            rs
        ));
    }
    text
}

fn bench_parsing(c: &mut Criterion) {
    let columns = StationColumns::calibrate().unwrap();
    let (directory, archive_urls) = station_directory();
    c.bench_function("parse_station_directory", |b| {
        b.iter(|| parse_station_directory(black_box(&directory), 2, &columns, &archive_urls))
    });

    let station = Station {
        id: "00001".to_string(),
        data_since: NaiveDate::from_ymd_opt(1950, 1, 1).unwrap(),
        data_until: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        height: 478,
        longitude: 8.8493,
        latitude: 47.8413,
        name: "Aach".to_string(),
        state: "Baden-Württemberg".to_string(),
        archive_url: None,
    };
    let product = product_file();
    c.bench_function("decode_product_file", |b| {
        b.iter(|| decode_product_file(&station, black_box(&product)))
    });
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
