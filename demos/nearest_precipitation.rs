use dwd_precip::{Dwd, DwdError};

fn main() -> Result<(), DwdError> {
    env_logger::init();

    let client = Dwd::new()?;
    // Bielefeld
    let station = client.nearest_active(8.53, 52.02)?;
    println!(
        "Nearest active station: {} {} ({}), {} m, data {} to {}",
        station.id, station.name, station.state, station.height, station.data_since, station.data_until
    );

    let series = client.measurements(&station)?;
    let start = series.len().saturating_sub(30);
    for measurement in &series[start..] {
        println!(
            "{}  {:>5.1} mm  form {:?}",
            measurement.date,
            measurement.precipitation,
            measurement.precipitation_form()
        );
    }
    Ok(())
}
