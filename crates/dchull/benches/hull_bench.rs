//! Criterion benchmarks for the divide-and-conquer hull.
//! Focus sizes: n in {16, 256, 4096, 65536}; box clouds (few hull vertices)
//! and ring clouds (most points on the hull, long tangent walks).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p dchull

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dchull::cloud::{draw_cloud_shaped, CloudBounds, CloudCfg, CloudShape, ReplayToken};
use dchull::hull2::{build_hull, merge, Point};

fn cloud(n: usize, shape: CloudShape, seed: u64) -> Vec<Point> {
    let cfg = CloudCfg {
        count: n,
        bounds: CloudBounds::square(1 << 20),
    };
    draw_cloud_shaped(cfg, shape, ReplayToken { seed, index: 0 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull2");
    for &n in &[16usize, 256, 4096, 65536] {
        let boxed = cloud(n, CloudShape::Box, 43);
        group.bench_with_input(BenchmarkId::new("build_hull_box", n), &boxed, |b, pts| {
            b.iter(|| build_hull(pts).unwrap())
        });

        let ring = cloud(n, CloudShape::Ring, 44);
        group.bench_with_input(BenchmarkId::new("build_hull_ring", n), &ring, |b, pts| {
            b.iter(|| build_hull(pts).unwrap())
        });

        // one top-level merge of two large ring halves
        if ring.len() >= 4 {
            let mid = (ring.len() - 1) / 2;
            let left = build_hull(&ring[..=mid]).unwrap();
            let right = build_hull(&ring[mid + 1..]).unwrap();
            group.bench_with_input(
                BenchmarkId::new("merge_ring_halves", n),
                &(left, right),
                |b, (l, r)| b.iter(|| merge(l, r)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
