// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the area tree benchmarks.

use understory_area_tree::{Aabb2D, AreaObject, Scalar};

/// A benchmark object: bounds plus a unique id that serves as its identity.
#[derive(Copy, Clone, Debug)]
pub struct Boxed<T> {
    /// Bounds.
    pub bounds: Aabb2D<T>,
    /// Identity.
    pub id: u32,
}

impl<T: Scalar> AreaObject for Boxed<T> {
    type Scalar = T;

    fn bounds(&self) -> Aabb2D<T> {
        self.bounds
    }

    fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Tag each rectangle with its position as id.
pub fn boxed<T: Copy>(rects: &[Aabb2D<T>]) -> Vec<Boxed<T>> {
    rects
        .iter()
        .zip(0_u32..)
        .map(|(r, id)| Boxed { bounds: *r, id })
        .collect()
}

/// Xorshift generator so fixtures are identical across runs.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seeded generator.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

/// `n × n` grid of touching cells.
pub fn gen_grid_rects(n: usize, cell: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Aabb2D::<f64>::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

/// `n × n` grid of integer cells.
pub fn gen_grid_rects_i32(n: usize, cell: i32) -> Vec<Aabb2D<i32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n as i32 {
        for x in 0..n as i32 {
            out.push(Aabb2D::<i32>::from_xywh(x * cell, y * cell, cell, cell));
        }
    }
    out
}

/// Grid of cells scaled up so each overlaps its neighbors.
pub fn gen_overlap_grid_rects(n: usize, cell: f64, scale: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Aabb2D::<f64>::from_xywh(x0, y0, cell * scale, cell * scale));
        }
    }
    out
}

/// `count` equal-sized boxes scattered over a `max_w × max_h` field.
pub fn gen_random_rects(
    count: usize,
    max_w: f64,
    max_h: f64,
    rect_w: f64,
    rect_h: f64,
) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (max_w - rect_w).max(1.0);
        let y0 = rng.next_f64() * (max_h - rect_h).max(1.0);
        out.push(Aabb2D::<f64>::from_xywh(x0, y0, rect_w, rect_h));
    }
    out
}

/// Boxes gathered around a few random centers.
pub fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Aabb2D::<f64>::from_xywh(cx + dx, cy + dy, 12.0, 12.0));
        }
    }
    out
}

/// Full-width rows plus small boxes: the rows straddle every vertical split.
pub fn gen_rows_and_chips(rows: usize, chips: usize, width: f64) -> Vec<Aabb2D<f64>> {
    let mut out = Vec::with_capacity(rows + chips);
    for r in 0..rows {
        out.push(Aabb2D::<f64>::from_xywh(0.0, r as f64 * 20.0, width, 20.0));
    }
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for _ in 0..chips {
        let x0 = rng.next_f64() * (width - 8.0);
        let y0 = rng.next_f64() * (rows as f64 * 20.0 - 8.0);
        out.push(Aabb2D::<f64>::from_xywh(x0, y0, 8.0, 8.0));
    }
    out
}
