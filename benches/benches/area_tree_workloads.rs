// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_area_tree::{Aabb2D, AreaTree, AreaTreeConfig, Query};
use understory_area_tree_benches::{
    Boxed, boxed, gen_clustered_rects, gen_grid_rects, gen_grid_rects_i32,
    gen_overlap_grid_rects, gen_random_rects, gen_rows_and_chips,
};

fn build(items: &[Boxed<f64>]) -> AreaTree<Boxed<f64>> {
    let mut tree = AreaTree::new();
    for it in items {
        tree.insert(*it).unwrap();
    }
    tree
}

/// Linear scan baseline.
fn scan_count(items: &[Boxed<f64>], q: Aabb2D<f64>) -> usize {
    items.iter().filter(|b| b.bounds.intersects(&q)).count()
}

fn bench_insert_then_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_query");
    for &n in &[32usize, 64, 128] {
        let items = boxed(&gen_grid_rects(n, 10.0));
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter(|| {
                let tree = build(&items);
                let hits = tree.search_count(Query::rect(
                    Aabb2D::<f64>::from_xywh(100.0, 100.0, 400.0, 400.0),
                    false,
                ));
                black_box(hits);
            })
        });
    }
    let items = boxed(&gen_overlap_grid_rects(64, 10.0, 3.0));
    group.bench_function("grid_overlap", |b| {
        b.iter(|| {
            let tree = build(&items);
            black_box(tree.search_count(Query::rect(
                Aabb2D::<f64>::from_xywh(100.0, 100.0, 400.0, 400.0),
                false,
            )));
        })
    });
    let items = boxed(&gen_clustered_rects(16, 256, 128.0));
    group.bench_function("clustered", |b| {
        b.iter(|| {
            let tree = build(&items);
            black_box(tree.search_count(Query::rect(
                Aabb2D::<f64>::from_xywh(800.0, 800.0, 400.0, 400.0),
                false,
            )));
        })
    });
    let items = boxed(&gen_rows_and_chips(200, 4000, 2000.0));
    group.bench_function("rows_and_chips", |b| {
        b.iter(|| {
            let tree = build(&items);
            black_box(tree.search_count(Query::point(1000.0, 1000.0)));
        })
    });
    group.finish();
}

fn bench_bulk_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_build");
    let items = boxed(&gen_random_rects(4096, 2000.0, 2000.0, 12.0, 12.0));
    group.throughput(Throughput::Elements(items.len() as u64));
    group.bench_function("from_objects_random", |b| {
        b.iter(|| {
            let tree =
                AreaTree::from_objects(items.iter().copied(), AreaTreeConfig::default()).unwrap();
            black_box(tree.depth());
        })
    });
    group.bench_function("incremental_random", |b| {
        b.iter(|| black_box(build(&items).depth()))
    });
    group.finish();
}

fn bench_leaf_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_capacity");
    let items = boxed(&gen_random_rects(4096, 2000.0, 2000.0, 12.0, 12.0));
    for &cap in &[2usize, 8, 32] {
        let config = AreaTreeConfig::new().with_leaf_capacity(cap);
        let tree = AreaTree::from_objects(items.iter().copied(), config).unwrap();
        group.bench_function(format!("queries_cap{}", cap), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for q in 0..256 {
                    let x = (q % 16) as f64 * 120.0;
                    let y = (q / 16) as f64 * 120.0;
                    total +=
                        tree.search_count(Query::rect(Aabb2D::from_xywh(x, y, 64.0, 64.0), false));
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy");
    let items = boxed(&gen_grid_rects(128, 8.0));
    let tree = build(&items);
    group.bench_function("tree_many_queries", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 64) as f64 * 8.0;
                let y = (q / 64) as f64 * 8.0;
                total += tree.search_count(Query::rect(Aabb2D::from_xywh(x, y, 64.0, 64.0), false));
            }
            black_box(total);
        })
    });
    group.bench_function("linear_scan_many_queries", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 64) as f64 * 8.0;
                let y = (q / 64) as f64 * 8.0;
                total += scan_count(&items, Aabb2D::from_xywh(x, y, 64.0, 64.0));
            }
            black_box(total);
        })
    });
    group.bench_function("tree_point_hits", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for q in 0..1024 {
                let x = (q % 32) as f64 * 31.0 + 0.5;
                let y = (q / 32) as f64 * 31.0 + 0.5;
                hits += usize::from(tree.search_hit(Query::point(x, y)));
            }
            black_box(hits);
        })
    });
    group.finish();
}

fn bench_churn_i32(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn_i32");
    let rects = gen_grid_rects_i32(64, 10);
    group.bench_function("remove_reinsert_shifted", |b| {
        b.iter_batched(
            || {
                let items: Vec<_> = rects
                    .iter()
                    .zip(0_u32..)
                    .map(|(r, id)| Boxed { bounds: *r, id })
                    .collect();
                let mut tree = AreaTree::new();
                for it in &items {
                    tree.insert(*it).unwrap();
                }
                (tree, items)
            },
            |(mut tree, items)| {
                for (j, it) in items.into_iter().enumerate() {
                    let dx = (j as i32 % 5) - 2;
                    let dy = ((j * 7) as i32 % 5) - 2;
                    tree.remove(&it);
                    let moved = Aabb2D::from_xywh(it.bounds.min_x + dx, it.bounds.min_y + dy, 10, 10);
                    tree.insert(Boxed { bounds: moved, id: it.id }).unwrap();
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_then_query,
    bench_bulk_build,
    bench_leaf_capacity,
    bench_query_heavy,
    bench_churn_i32,
);
criterion_main!(benches);
