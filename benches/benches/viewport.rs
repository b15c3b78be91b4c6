// Copyright 2026 the Artboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use artboard_view::{ClampPolicy, ViewportController};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }

    fn signed(&mut self, scale: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * scale
    }
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("artboard_view/clamp");
    let policy = ClampPolicy::default();
    let view = Size::new(1280.0, 800.0);

    let mut rng = Lcg::new(0xC1A3_0000_0000_0001);
    let proposals: Vec<Vec2> = (0..1_024)
        .map(|_| Vec2::new(rng.signed(10_000.0), rng.signed(10_000.0)))
        .collect();

    for &(label, content) in &[
        ("smaller", Size::new(600.0, 400.0)),
        ("larger", Size::new(4_000.0, 6_000.0)),
        ("mixed", Size::new(600.0, 6_000.0)),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                for &p in &proposals {
                    black_box(policy.clamp(black_box(p), view, content));
                }
            });
        });
    }
    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("artboard_view/controller");

    group.bench_function("wheel_zoom_sequence", |b| {
        let mut rng = Lcg::new(0x200A_0000_0000_0002);
        let steps: Vec<(f64, Point)> = (0..256)
            .map(|_| {
                let factor = 0.999_f64.powf(rng.signed(240.0));
                let anchor = Point::new(rng.next_f64() * 1280.0, rng.next_f64() * 800.0);
                (factor, anchor)
            })
            .collect();
        let mut view = ViewportController::new(Size::new(1280.0, 800.0), Size::new(744.0, 1052.0));
        b.iter(|| {
            for &(factor, anchor) in &steps {
                view.zoom_by(factor, Some(anchor));
            }
            black_box(view.transform());
        });
    });

    group.bench_function("pan_with_listener", |b| {
        let mut view = ViewportController::new(Size::new(1280.0, 800.0), Size::new(4_000.0, 6_000.0));
        view.subscribe(|t| {
            black_box(t.translate);
        });
        b.iter(|| {
            view.pan(Vec2::new(3.0, -2.0));
            view.pan(Vec2::new(-3.0, 2.0));
        });
    });

    group.bench_function("fit_and_visible_rect", |b| {
        let mut view = ViewportController::new(Size::new(1280.0, 800.0), Size::new(744.0, 1052.0));
        b.iter(|| {
            view.fit_to_viewport();
            black_box(view.visible_artboard_rect());
            view.zoom_to(2.0, Some(Point::new(640.0, 400.0)));
            black_box(view.suggest_ruler_spacing(1.0));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_clamp, bench_controller);
criterion_main!(benches);
