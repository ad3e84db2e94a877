//! Benchmarks for practice-core resolution, sorting and form handling

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use practice_core::{
    BlockType, Exercise, ExerciseBlock, Instrument, LogForm, PracticeDay, PracticeTemplate,
    resolve::{self, DayBlocks},
};
use std::hint::black_box;

fn instruments(count: i64) -> Vec<Instrument> {
    (1..=count)
        .map(|id| Instrument {
            id,
            name: format!("Instrument {id}"),
            description: None,
        })
        .collect()
}

/// Several inactive templates per instrument with the active one last
fn templates(instrument_count: i64) -> Vec<PracticeTemplate> {
    (1..=instrument_count)
        .flat_map(|instrument_id| {
            (0..4).map(move |n| PracticeTemplate {
                id: instrument_id * 10 + n,
                instrument_id,
                name: format!("Rotation {n}"),
                description: None,
                days_count: 7,
                is_active: n == 3,
                practice_days: Vec::new(),
            })
        })
        .collect()
}

fn block(block_type: BlockType, size: i32) -> ExerciseBlock {
    ExerciseBlock {
        id: 1,
        block_type,
        display_order: 1,
        // Reverse display order so every sort does real work
        exercises: (0..size)
            .map(|n| Exercise {
                id: i64::from(n),
                exercise_text: format!("Exercise {n}"),
                display_order: size - n,
            })
            .collect(),
    }
}

fn day(size: i32) -> PracticeDay {
    PracticeDay {
        id: 1,
        day_number: 1,
        title: "Benchmark day".to_string(),
        warmup: None,
        scales: None,
        repertoire: None,
        exercise_blocks: vec![block(BlockType::BlockB, size), block(BlockType::BlockA, size)],
    }
}

/// Benchmark instrument and active template resolution
fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    for count in [4_i64, 32, 256] {
        let instruments = instruments(count);
        let templates = templates(count);
        let wanted = format!("INSTRUMENT {count}");

        group.bench_with_input(BenchmarkId::new("resolve_last", count), &count, |b, _| {
            b.iter(|| {
                resolve::resolve_active_template(
                    black_box(&instruments),
                    black_box(&templates),
                    black_box(&wanted),
                )
                .template()
                .map(|t| t.id)
            });
        });
    }

    group.finish();
}

/// Benchmark exercise sorting and block derivation
fn bench_exercise_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("exercise_sorting");

    for size in [3_i32, 12, 64] {
        let day = day(size);

        group.throughput(Throughput::Elements(u64::try_from(size).unwrap_or(0) * 2));
        group.bench_with_input(BenchmarkId::new("day_blocks", size), &day, |b, day| {
            b.iter(|| DayBlocks::of(black_box(day)).block_a_exercises().len());
        });
    }

    group.finish();
}

/// Benchmark building create-log requests from a filled form
fn bench_form_to_request(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default();
    let form = LogForm {
        duration: "45".to_string(),
        scales: "G major, two octaves".to_string(),
        tech_a: "Long tones".to_string(),
        repertoire: "Bruch Concerto".to_string(),
        notes: "Steady tempo".to_string(),
        ..LogForm::defaults(today)
    };

    c.bench_function("form_to_new_log", |b| {
        b.iter(|| black_box(&form).to_new_log(3));
    });
}

criterion_group!(
    benches,
    bench_resolution,
    bench_exercise_sorting,
    bench_form_to_request
);
criterion_main!(benches);
