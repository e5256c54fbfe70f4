// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use sortable_state::{OrderTable, SortState};

/// A measured strip with a gesture already pressed on slot 0.
fn pressed_strip(len: usize) -> SortState<usize> {
    let mut state = SortState::new((0..len).collect());
    state.set_container_width(100.0 * len as f64);
    for slot in 0..len {
        let left = 100.0 * slot as f64;
        state.report_slot(slot, Rect::new(left, 0.0, left + 100.0, 40.0));
    }
    let _ = state.on_press(0, Point::new(10.0, 10.0), Point::ZERO);
    state
}

fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("order/apply_move");

    // List-moves are slice rotations; cost scales with the span crossed.
    for len in [16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("full_span", len), &len, |b, &len| {
            b.iter_batched(
                || OrderTable::new(len),
                |mut order| {
                    order.apply_move(0, len - 1);
                    order.apply_move(len - 1, 0);
                    black_box(order);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_drag_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/drag_sweep");

    // One whole gesture: press on slot 0, a midpoint-crossing move per
    // neighbor, release. Every move reorders, so this exercises resolution
    // and the lockstep list-moves together.
    for len in [8usize, 64, 512] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("press_to_release", len), &len, |b, &len| {
            b.iter_batched(
                || pressed_strip(len),
                |mut state| {
                    for slot in 1..len {
                        let x = 100.0 * slot as f64 - 15.0;
                        state.on_move(Point::new(x, 10.0));
                    }
                    black_box(state.on_release());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apply_move, bench_drag_sweep);
criterion_main!(benches);
