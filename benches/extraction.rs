//! Benchmarks for the extraction pipeline.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stagehand::{diff, ExtractorOptions, Granularity, HeuristicExtractor, SceneState};

const PARAGRAPH: &str = "We wandered through the Grand Library just after sunset, tired but \
     hopeful. The air outside had turned cold and the forecast promised a storm rolling in \
     tonight. Let's regroup tomorrow evening at the cafe near the old bridge, around 7ish, \
     and I'm feeling a bit anxious about the whole thing.";

fn bench_extract_short(c: &mut Criterion) {
    let engine = HeuristicExtractor::new(ExtractorOptions {
        granularity: Granularity::DateTime,
        ..ExtractorOptions::default()
    });
    let reference = NaiveDate::from_ymd_opt(2026, 8, 5)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();
    let prev = SceneState::default();

    c.bench_function("extract_short", |b| {
        b.iter(|| {
            black_box(engine.extract(
                black_box("Let's meet tomorrow evening at the cafe."),
                &prev,
                reference,
            ))
        })
    });
}

fn bench_extract_paragraph(c: &mut Criterion) {
    let engine = HeuristicExtractor::new(ExtractorOptions {
        granularity: Granularity::DateTime,
        ..ExtractorOptions::default()
    });
    let reference = NaiveDate::from_ymd_opt(2026, 8, 5)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();
    let prev = SceneState::default();

    c.bench_function("extract_paragraph", |b| {
        b.iter(|| black_box(engine.extract(black_box(PARAGRAPH), &prev, reference)))
    });
}

fn bench_diff(c: &mut Criterion) {
    let prev = SceneState {
        place: "the cafe".to_string(),
        mood: "calm".to_string(),
        ..SceneState::default()
    };
    let next = SceneState {
        place: "the station".to_string(),
        mood: "anxious".to_string(),
        weather: "rainy".to_string(),
        ..SceneState::default()
    };

    c.bench_function("diff_states", |b| {
        b.iter(|| black_box(diff(black_box(&prev), black_box(&next))))
    });
}

criterion_group!(benches, bench_extract_short, bench_extract_paragraph, bench_diff);
criterion_main!(benches);
