// Copyright 2026 the Sortable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use sortable_state::{Direction, GeometryStore, resolve_target};

/// A fully measured strip of uniform 100x40 slots.
fn store(len: usize) -> GeometryStore {
    let mut geometry = GeometryStore::new(len);
    for slot in 0..len {
        let left = 100.0 * slot as f64;
        geometry.report(slot, Rect::new(left, 0.0, left + 100.0, 40.0));
    }
    geometry
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve/target");

    for len in [8usize, 64, 512] {
        let geometry = store(len);
        let width = 100.0 * len as f64;
        group.throughput(Throughput::Elements(len as u64));

        // A decisive hit halfway along the strip: scans half the slots.
        let mid_hit = Point::new(width / 2.0 + 75.0, 10.0);
        group.bench_with_input(BenchmarkId::new("mid_hit", len), &geometry, |b, geometry| {
            b.iter(|| {
                black_box(resolve_target(
                    black_box(mid_hit),
                    Direction::Right,
                    geometry,
                    width,
                ));
            });
        });

        // The worst case: every slot lands in the dead zone, so the scan
        // walks the whole strip and declines to decide.
        let dead = Point::new(25.0, 10.0);
        group.bench_with_input(
            BenchmarkId::new("full_scan_miss", len),
            &geometry,
            |b, geometry| {
                b.iter(|| {
                    black_box(resolve_target(
                        black_box(dead),
                        Direction::Right,
                        geometry,
                        width,
                    ));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
