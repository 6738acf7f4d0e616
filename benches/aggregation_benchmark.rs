use bikeshare_report::analyzers::{
    aggregate_daily, aggregate_monthly, aggregate_season_changes, aggregate_weather,
    RentalAnalyzer,
};
use bikeshare_report::models::{DateRange, HourlyRecord, RentalDataset};
use bikeshare_report::processors::filter_by_range;
use chrono::{Datelike, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Two years of hourly rows, roughly the size of the public dataset
fn create_test_dataset(days: usize) -> RentalDataset {
    let base_date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    let mut records = Vec::with_capacity(days * 24);

    for day in 0..days {
        let date = base_date + chrono::Duration::days(day as i64);
        let season = ((date.month0() / 3) % 4 + 1) as u8;
        for hour in 0..24u8 {
            let weather = ((day + hour as usize) % 4 + 1) as u8;
            let count = (hour as i64 * 7 + day as i64 % 50) % 400;
            records.push(HourlyRecord::new(date, hour, season, weather, count));
        }
    }

    RentalDataset::new(records)
}

fn benchmark_aggregations(c: &mut Criterion) {
    let dataset = create_test_dataset(731);
    let bounds = dataset.date_bounds().unwrap();
    let table = filter_by_range(&dataset, bounds);

    c.bench_function("aggregate_daily", |b| {
        b.iter(|| black_box(aggregate_daily(&table).len()))
    });
    c.bench_function("aggregate_monthly", |b| {
        b.iter(|| black_box(aggregate_monthly(&table).len()))
    });
    c.bench_function("aggregate_weather", |b| {
        b.iter(|| black_box(aggregate_weather(&table).len()))
    });
    c.bench_function("aggregate_season_changes", |b| {
        b.iter(|| black_box(aggregate_season_changes(&table).len()))
    });
}

fn benchmark_full_report(c: &mut Criterion) {
    let dataset = create_test_dataset(731);
    let analyzer = RentalAnalyzer::new();
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2011, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2012, 9, 30).unwrap(),
    );

    c.bench_function("rental_report", |b| {
        b.iter(|| black_box(analyzer.analyze(&dataset, range).metrics.total_people))
    });
}

criterion_group!(benches, benchmark_aggregations, benchmark_full_report);
criterion_main!(benches);
