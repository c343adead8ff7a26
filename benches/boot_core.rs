use criterion::{black_box, criterion_group, criterion_main, Criterion};

use canvas_boot::core::{compute_screen_profile, ScoreProgression};
use canvas_boot::engine::{EngineViewport, ResizeCoordinator};
use canvas_boot::types::{Platform, ViewportMetrics};

/// Discards viewport calls without accumulating them.
struct SinkViewport;

impl EngineViewport for SinkViewport {
    fn resize(&mut self, width: u32, height: u32) {
        black_box((width, height));
    }

    fn set_zoom(&mut self, zoom: f64) {
        black_box(zoom);
    }
}

fn bench_screen_profile(c: &mut Criterion) {
    let metrics = ViewportMetrics::new(414.0, 896.0, 2.75);

    c.bench_function("compute_screen_profile", |b| {
        b.iter(|| compute_screen_profile(black_box(metrics)))
    });
}

fn bench_progression_update(c: &mut Criterion) {
    let mut progression = ScoreProgression::new();
    progression.on_score_change(|score| {
        black_box(score);
    });
    progression.init();

    c.bench_function("progression_update_16ms", |b| {
        b.iter(|| {
            progression.update(black_box(16.0));
        })
    });
}

fn bench_resize_poll(c: &mut Criterion) {
    let mut coordinator = ResizeCoordinator::new(Platform::Desktop, true);
    let mut viewport = SinkViewport;
    let metrics = ViewportMetrics::new(1280.0, 720.0, 1.0);

    let mut now = 0u64;
    c.bench_function("resize_signal_poll_cycle", |b| {
        b.iter(|| {
            coordinator.signal(now);
            now += 100;
            coordinator.poll(now, black_box(metrics), &mut viewport);
        })
    });
}

criterion_group!(
    benches,
    bench_screen_profile,
    bench_progression_update,
    bench_resize_poll
);
criterion_main!(benches);
