// Copyright 2025 the Tumbler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use tumbler_layout::{Metrics, SwitchFrames};
use tumbler_switch::{Side, Switch, ThumbWidth};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 50.0, 30.0);

fn bench_gesture_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("switch/gesture");

    // A full drag with a wiggly pointer: start, many updates oscillating
    // across the midpoint, end. Updates dominate real event streams.
    for moves in [8usize, 64, 512] {
        let positions: Vec<Point> = (0..moves)
            .map(|i| {
                let x = if i % 3 == 0 { 40.0 } else { 10.0 };
                Point::new(x, 15.0)
            })
            .collect();
        group.throughput(Throughput::Elements(moves as u64));

        group.bench_with_input(
            BenchmarkId::new("drag", moves),
            &positions,
            |b, positions| {
                b.iter_batched(
                    || Switch::new(BOUNDS),
                    |mut switch| {
                        switch.start(Point::new(10.0, 15.0));
                        for pos in positions {
                            black_box(switch.update(*pos));
                        }
                        black_box(switch.end());
                        switch
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    c.bench_function("layout/frames", |b| {
        b.iter(|| {
            for side in [Side::Off, Side::On] {
                for width in [ThumbWidth::Resting, ThumbWidth::Tracking] {
                    black_box(SwitchFrames::compute(
                        black_box(BOUNDS),
                        side,
                        width,
                        true,
                        &Metrics::DEFAULT,
                    ));
                }
            }
        });
    });
}

criterion_group!(benches, bench_gesture_cycle, bench_frames);
criterion_main!(benches);
