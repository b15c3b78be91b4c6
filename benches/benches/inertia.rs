// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use artboard_event_state::frame::ManualScheduler;
use artboard_event_state::inertia::{InertiaConfig, InertiaSimulator, InertiaStep};
use artboard_navigator::{Navigator, NavigatorConfig, SceneRenderer, TouchContext};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};

struct NoScene;

impl SceneRenderer for NoScene {
    fn active_selection_bounds(&self) -> Option<Rect> {
        None
    }

    fn set_selection_mode_enabled(&mut self, _enabled: bool) {}
}

fn bench_simulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("artboard_event_state/inertia");

    for &speed in &[10.0_f64, 100.0, 1_000.0] {
        group.bench_function(format!("run_to_rest(v={speed})"), |b| {
            let mut sim =
                InertiaSimulator::new(InertiaConfig::default(), ManualScheduler::new()).unwrap();
            b.iter(|| {
                sim.start(Vec2::new(speed, -speed * 0.5));
                let mut travelled = Vec2::ZERO;
                while let Some(frame) = sim.scheduler_mut().next_frame() {
                    if let InertiaStep::Pan(delta) = sim.step(frame) {
                        travelled += delta;
                    }
                }
                black_box(travelled)
            });
        });
    }
    group.finish();
}

fn bench_navigator(c: &mut Criterion) {
    let mut group = c.benchmark_group("artboard_navigator");

    group.bench_function("fling_and_coast", |b| {
        b.iter_batched(
            || {
                Navigator::new(
                    NavigatorConfig::default(),
                    Size::new(1280.0, 800.0),
                    Size::new(4_000.0, 6_000.0),
                    ManualScheduler::new(),
                    NoScene,
                )
                .unwrap()
            },
            |mut nav| {
                nav.on_pan_start(&TouchContext::fingers(2, false));
                for _ in 0..8 {
                    nav.on_pan(Vec2::new(-25.0, -40.0));
                }
                nav.on_pan_end();
                while let Some(frame) = nav.scheduler_mut().next_frame() {
                    nav.on_animation_frame(frame);
                }
                black_box(nav.view().pan_offset())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_simulator, bench_navigator);
criterion_main!(benches);
