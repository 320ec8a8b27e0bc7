//! Benchmarks for contour planning, scheduling and playback.
//!
//! Run with: cargo bench
//!
//! Sounds are usually fired from a game or UI thread and handled at the top of
//! an audio callback, so `play` has to fit inside a block deadline alongside
//! the rest of the callback. Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 256 samples = 5.33ms deadline
//!
//! Benchmark groups:
//!   - contour/*    Planning and periodic scheduling
//!   - param/*      Reading automation back out of a timeline
//!   - player/*     Whole sounds, from settings to scheduled controls

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use saavy_fx::{
    contour::{period_for, plan_contour, schedule, ContourParams, ScheduleInstruction},
    graph::{ParamTimeline, RampCurve},
    presets, FxPlayer,
};

/// Common buffer sizes used in audio applications.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

/// Repeat rates from a single sweep up to the default cap.
const REPEATS: &[f64] = &[0.0, 10.0, 50.0, 100.0];

fn jumpy_params() -> ContourParams {
    ContourParams {
        frequency: 660.0,
        sweep: -0.3,
        jump_at1: 0.2,
        jump_at2: 0.6,
        jump_by1: 0.5,
        jump_by2: -0.25,
    }
}

fn bench_contour(c: &mut Criterion) {
    let mut group = c.benchmark_group("contour");

    let params = jumpy_params();
    group.bench_function("plan", |b| {
        b.iter(|| plan_contour(black_box(&params)));
    });

    let contour = plan_contour(&params);
    let duration = 1.0;
    for &repeat in REPEATS {
        let period = period_for(repeat, duration, 100.0);

        // Recording sink
        let mut recorded: Vec<ScheduleInstruction> = Vec::with_capacity(1024);
        group.bench_with_input(BenchmarkId::new("schedule/record", repeat), &repeat, |b, _| {
            b.iter(|| {
                recorded.clear();
                schedule(&mut recorded, black_box(&contour), period, duration, 0.0)
            })
        });

        // Straight onto a timeline
        group.bench_with_input(BenchmarkId::new("schedule/timeline", repeat), &repeat, |b, _| {
            b.iter(|| {
                let mut timeline = ParamTimeline::new(440.0);
                schedule(&mut timeline, black_box(&contour), period, duration, 0.0);
                timeline
            })
        });
    }

    group.finish();
}

fn bench_param(c: &mut Criterion) {
    let mut group = c.benchmark_group("param");

    // Busy timeline: a fast repeating contour.
    let contour = plan_contour(&jumpy_params());
    let mut frequency = ParamTimeline::new(440.0);
    schedule(&mut frequency, &contour, period_for(100.0, 1.0, 100.0), 1.0, 0.0);

    group.bench_function("value_at", |b| {
        b.iter(|| frequency.value_at(black_box(0.4567)));
    });

    let mut volume = ParamTimeline::new(0.0);
    volume.ramp_to(-12.0, 0.02, 0.0, RampCurve::Linear);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("render/contour", size), &size, |b, _| {
            b.iter(|| frequency.render(black_box(&mut buffer), 0.25, 48_000.0))
        });

        group.bench_with_input(BenchmarkId::new("render/ramp", size), &size, |b, _| {
            b.iter(|| volume.render(black_box(&mut buffer), 0.0, 48_000.0))
        });
    }

    group.finish();
}

fn bench_player(c: &mut Criterion) {
    let mut group = c.benchmark_group("player");

    let sounds = [
        ("coin", presets::coin()),
        ("powerup", presets::powerup()),
        ("explosion", presets::explosion()),
    ];

    for (name, settings) in &sounds {
        let mut player = FxPlayer::default();
        let mut now = 0.0;
        group.bench_function(BenchmarkId::new("play", name), |b| {
            b.iter(|| {
                let report = player.play(black_box(settings), now);
                now += 0.05;
                player.forget_before(now);
                report
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contour, bench_param, bench_player);
criterion_main!(benches);
