use chrono::{NaiveDate, TimeZone, Utc};
use obs_interchange::{
    missing_date_marker, CodecError, Coordinate, GeoJsonEncoder, Level, ObservationEncoder,
    ObservationRecord, SummaryDecoder, SummaryEncoder, TimeRange, VarCode,
};

fn main() -> Result<(), CodecError> {
    let observed_at = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
    let bologna_lon = Coordinate::from_degrees(11.34);
    let bologna_lat = Coordinate::from_degrees(44.49);

    let temperature = ObservationRecord::builder()
        .lon(bologna_lon)
        .lat(bologna_lat)
        .rep_memo("synop")
        .level(Level::new(Some(103), Some(2000), None, None))
        .trange(TimeRange::new(Some(254), Some(0), Some(0)))
        .var("B12101".parse()?)
        .date(observed_at)
        .value(284.35)
        .build()?;

    // Station constant as exported by the store: dated with the placeholder.
    let station_name = ObservationRecord::builder()
        .lon(bologna_lon)
        .lat(bologna_lat)
        .rep_memo("synop")
        .var(VarCode::REPORT_MNEMONIC)
        .date(missing_date_marker())
        .value("synop")
        .build()?;

    let geojson = GeoJsonEncoder::builder().pretty(true).build();
    println!("{}", geojson.encode(&vec![temperature.clone(), station_name])?);

    let month = |d| {
        NaiveDate::from_ymd_opt(2020, 1, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap()
    };
    let summary = ObservationRecord::builder()
        .lon(bologna_lon)
        .lat(bologna_lat)
        .rep_memo("synop")
        .var(temperature.var())
        .level(temperature.level())
        .trange(temperature.trange())
        .datemin(month(1))
        .datemax(month(31))
        .build()?;

    let text = SummaryEncoder::default().encode(&vec![summary])?;
    println!("{}", text);

    for record in SummaryDecoder::new().decode(&text)? {
        println!(
            "{} at {}/{} over {}",
            record.var(),
            record.lon(),
            record.lat(),
            record.date_extremes()
        );
    }

    Ok(())
}
