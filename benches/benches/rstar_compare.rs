// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_area_tree::{Aabb2D, AreaTree, AreaTreeConfig, Query};
use understory_area_tree_benches::{boxed, gen_grid_rects};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn to_rstar_rects(v: &[Aabb2D<f64>]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.min_x, r.min_y], [r.max_x, r.max_y]))
        .collect()
}

fn bench_rstar_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare_f64");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = Aabb2D::<f64>::from_xywh(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("area_tree_build_query_n{}", n), |b| {
            b.iter_batched(
                || boxed(&rects),
                |items| {
                    let mut tree = AreaTree::new();
                    for it in items {
                        tree.insert(it).unwrap();
                    }
                    black_box(tree.search_count(Query::rect(query, false)));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("area_tree_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || boxed(&rects),
                |items| {
                    let tree = AreaTree::from_objects(items, AreaTreeConfig::default()).unwrap();
                    black_box(tree.search_count(Query::rect(query, false)));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(
                        [query.min_x, query.min_y],
                        [query.max_x, query.max_y],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare_f64);
criterion_main!(benches);
