//! Benchmarks for the effect core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use page_flip::{
    BubbleField, BubbleRanges, Direction, EffectConfig, Gradient, PageSurface, Pager,
    PaginationController, RandomSource, ScrollMetrics,
};

struct NullSurface;

impl PageSurface for NullSurface {
    fn show_page_number(&mut self, number: usize) {
        black_box(number);
    }

    fn scroll_to_page(&mut self, index: usize) {
        black_box(index);
    }
}

/// Deterministic stand-in for `Math.random`
struct Lcg(u64);

impl RandomSource for Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn bench_pager_step(c: &mut Criterion) {
    c.bench_function("pager_step", |b| {
        let mut pager = Pager::new(12).unwrap();
        b.iter(|| {
            black_box(pager.step(black_box(Direction::Advance)));
        });
    });
}

fn bench_swipe_cycle(c: &mut Criterion) {
    c.bench_function("swipe_cycle", |b| {
        let mut controller = PaginationController::new(Pager::new(8).unwrap(), NullSurface);
        b.iter(|| {
            controller.touch_start(black_box(640.0));
            for y in [600.0, 520.0, 410.0, 300.0] {
                controller.touch_move(y);
            }
            black_box(controller.touch_end());
        });
    });
}

fn bench_gradient_css(c: &mut Criterion) {
    c.bench_function("gradient_css", |b| {
        let config = EffectConfig::default();
        let metrics = ScrollMetrics {
            scroll_y: 1234.0,
            viewport_height: 800.0,
            scroll_height: 6000.0,
        };
        b.iter(|| {
            let gradient =
                Gradient::for_scroll(&config.gradient_start, &config.gradient_end, black_box(&metrics));
            black_box(gradient.css());
        });
    });
}

fn bench_bubble_spawn_retire(c: &mut Criterion) {
    c.bench_function("bubble_spawn_retire", |b| {
        let mut field = BubbleField::new(BubbleRanges::default(), None);
        let mut rng = Lcg(7);
        let mut now = 0.0;
        b.iter(|| {
            now += 500.0;
            if let Some(bubble) = field.spawn(now, &mut rng) {
                field.mark_animating(bubble.id);
                black_box(field.retire(bubble.id));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_pager_step,
    bench_swipe_cycle,
    bench_gradient_css,
    bench_bubble_spawn_retire,
);

criterion_main!(benches);
