// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_drag::{
    DragController, DragHost, DragOptions, ElementRef, Geometry, Position, clamp_offset,
};
use understory_pointer::{Pointer, PointerId};

#[derive(Clone)]
struct Fixed(Rect);

impl ElementRef for Fixed {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.0)
    }
}

struct Page {
    updates: u64,
}

impl DragHost<Fixed> for Page {
    fn request_update(&mut self) {
        self.updates += 1;
    }

    fn viewport_size(&self) -> Size {
        Size::new(1920.0, 1080.0)
    }
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/clamp_offset");
    let geometry = Geometry {
        handle: Rect::new(100.0, 100.0, 400.0, 130.0),
        panel: Rect::new(100.0, 100.0, 400.0, 500.0),
        bounds: Rect::new(0.0, 0.0, 1920.0, 1080.0),
    };

    let cases = [
        ("inside", Position::new(3, -2)),
        ("top", Position::new(0, -200)),
        ("right", Position::new(1700, 0)),
    ];
    for (name, delta) in cases {
        group.bench_with_input(BenchmarkId::new("edge", name), &delta, |b, delta| {
            b.iter(|| clamp_offset(black_box(Position::new(100, 100)), *delta, &geometry));
        });
    }
    group.finish();
}

fn bench_pointer_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/pointer_move");
    let id = PointerId(1);

    for steps in [16_u32, 256, 4_096] {
        group.bench_with_input(BenchmarkId::new("zigzag", steps), &steps, |b, &steps| {
            b.iter_batched(
                || {
                    let mut page = Page { updates: 0 };
                    let panel = Fixed(Rect::new(0.0, 0.0, 300.0, 400.0));
                    let handle = Fixed(Rect::new(0.0, 0.0, 300.0, 30.0));
                    let mut drag = DragController::new();
                    drag.attach(&mut page, Some(handle), Some(panel), DragOptions::new())
                        .expect("fixed elements");
                    drag.pointer_down(&mut page, Pointer::new(id, Point::new(10.0, 10.0)));
                    (drag, page)
                },
                |(mut drag, mut page)| {
                    for step in 0..steps {
                        let x = f64::from(10 + step % 64);
                        let y = f64::from(10 + (step * 3) % 48);
                        black_box(drag.pointer_move(&mut page, Pointer::new(id, Point::new(x, y))));
                    }
                    black_box(page.updates);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clamp, bench_pointer_moves);
criterion_main!(benches);
