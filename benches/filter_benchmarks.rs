use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pharmadash::{
    aggregate::{self, partition_sum},
    filter::{self, DateRange, FilterCriteria},
    models::{Expense, ExpenseStatus, UsageLogEntry},
    store::RecordStore,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(18, 0, 0))
        .unwrap_or_default()
}

/// Sample usage logs repeated `copies` times with shifted timestamps
fn usage_logs(copies: usize) -> Vec<UsageLogEntry> {
    let base = RecordStore::sample().usage_logs;
    (0..copies)
        .flat_map(|i| {
            base.iter().map(move |entry| UsageLogEntry {
                id: (i * base.len()) as u32 + entry.id,
                timestamp: entry.timestamp - Duration::hours(i as i64),
                ..entry.clone()
            })
        })
        .collect()
}

// Benchmark for free-text search combined with field and date filters
fn usage_filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("usage_log_filter");

    for copies in [1usize, 100, 1_000].iter() {
        let logs = usage_logs(*copies);
        group.bench_with_input(BenchmarkId::from_parameter(logs.len()), &logs, |b, logs| {
            b.iter(|| {
                let criteria = FilterCriteria::new()
                    .search(Some("dr."))
                    .field("department", Some("emergency"))
                    .date(DateRange::ThisWeek);
                let matched = filter::apply(logs, &criteria, now());
                black_box(aggregate::totals(matched.iter().copied(), |e: &UsageLogEntry| {
                    e.cost
                }))
            });
        });
    }

    group.finish();
}

// Benchmark for partitioned sums over the expense ledger
fn expense_partition_benchmark(c: &mut Criterion) {
    let expenses = RecordStore::sample().expenses;
    c.bench_function("expense_partition_sum", |b| {
        b.iter(|| {
            black_box(partition_sum(
                &expenses,
                &ExpenseStatus::all(),
                |e: &Expense| e.status,
                |e: &Expense| e.amount,
            ))
        });
    });
}

criterion_group!(benches, usage_filter_benchmark, expense_partition_benchmark);
criterion_main!(benches);
