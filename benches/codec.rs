use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use obs_interchange::{
    Coordinate, GeoJsonEncoder, Level, ObservationEncoder, ObservationRecord, ObservationTime,
    SummaryDecoder, SummaryEncoder, TimeRange, VarCode,
};

fn observations(n: usize) -> Vec<ObservationRecord> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    (0..n)
        .map(|i| {
            let at = start + chrono::Duration::hours(i as i64);
            ObservationRecord::builder()
                .ident(format!("st{:04}", i % 500))
                .lon(Coordinate::from_units(1_000_000 + (i as i32 % 1000) * 37))
                .lat(Coordinate::from_units(4_400_000 + (i as i32 % 1000) * 11))
                .rep_memo("synop")
                .level(Level::new(Some(103), Some(2000), None, None))
                .trange(TimeRange::new(Some(254), Some(0), Some(0)))
                .var(VarCode::new(12, 101))
                .date(ObservationTime::At(at))
                .datemin(at)
                .datemax(at)
                .value(273.15 + (i % 40) as f64)
                .build()
                .unwrap()
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let records = observations(10_000);
    let geojson = GeoJsonEncoder::default();
    let summary = SummaryEncoder::default();
    let summary_text = summary.encode(&records).unwrap();

    c.bench_function("geojson_encode_10k", |b| {
        b.iter(|| geojson.encode(black_box(&records)))
    });
    c.bench_function("summary_encode_10k", |b| {
        b.iter(|| summary.encode(black_box(&records)))
    });
    c.bench_function("summary_decode_10k", |b| {
        b.iter(|| SummaryDecoder::new().decode(black_box(&summary_text)))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
