// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_click_pos::{bounding_box, centroid};

fn points(len: usize) -> Vec<Point> {
    // Deterministic spread without pulling in an RNG.
    (0..len)
        .map(|i| {
            let t = i as f64;
            Point::new((t * 37.0) % 1024.0 - 512.0, (t * 91.0) % 768.0 - 384.0)
        })
        .collect()
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    for len in [2_usize, 10, 1_000, 100_000] {
        let pts = points(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("bounding_box", len), &pts, |b, pts| {
            b.iter(|| black_box(bounding_box(black_box(pts))));
        });
        group.bench_with_input(BenchmarkId::new("centroid", len), &pts, |b, pts| {
            b.iter(|| black_box(centroid(black_box(pts))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bounds);
criterion_main!(benches);
