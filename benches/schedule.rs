use chrono::NaiveDateTime;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crontick::Schedule;

const EXPRESSIONS: &[&str] = &[
    "@hourly",
    "0 * * * * *",
    "0 * * * 1,7 *",
    "0 * * * 2/2 *",
    "0 * * * 6 *",
    "0 * * * 6-12/3 *",
    "0 * * * JAN-DEC *",
    "0 0 0 L * *",
    "0 0 0 ? * 5#3",
];

const NOW: &[&str] = &["1999-12-31T23:59:59", "2000-01-01T00:00:00", "2063-12-31T23:59:59"];
const TAKE_SAMPLES: usize = 10_000;

pub fn new_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("new");
    for expression in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(expression), expression, |b, e| {
            b.iter(|| Schedule::new(*e).unwrap())
        });
    }
    group.finish();
}

pub fn upcoming_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("upcoming");
    for expression in EXPRESSIONS {
        for now_str in NOW {
            let now: NaiveDateTime = now_str.parse().unwrap();
            let schedule = Schedule::new(*expression).unwrap();
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{now_str}/{expression}")),
                &(now, &schedule),
                |b, (now, schedule)| b.iter(|| schedule.upcoming(*now)),
            );
        }
    }
    group.finish();
}

pub fn iter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");
    for expression in EXPRESSIONS {
        for now_str in NOW {
            let now: NaiveDateTime = now_str.parse().unwrap();
            let schedule = Schedule::new(*expression).unwrap();
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{now_str}/{expression}")),
                &(now, &schedule),
                |b, (now, schedule)| b.iter(|| schedule.iter(*now).take(TAKE_SAMPLES).count()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, new_benchmark, upcoming_benchmark, iter_benchmark);
criterion_main!(benches);
