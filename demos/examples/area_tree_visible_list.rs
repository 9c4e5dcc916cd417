// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-window example using rectangle intersection.
//!
//! Rows of a long list live in the tree; each scroll position asks for the
//! rows under the viewport, reusing one result buffer.
//!
//! Run:
//! - `cargo run -p understory_area_tree_demos --example area_tree_visible_list`

use understory_area_tree::{Aabb2D, AreaObject, AreaTree, Query};

const ROW_H: i32 = 20;
const WIDTH: i32 = 200;

#[derive(Copy, Clone, Debug)]
struct Row {
    index: usize,
}

impl AreaObject for Row {
    type Scalar = i32;

    fn bounds(&self) -> Aabb2D<i32> {
        let y0 = self.index as i32 * ROW_H;
        Aabb2D::from_xywh(0, y0, WIDTH, ROW_H)
    }

    fn is_same(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

fn main() {
    let rows = 1000_usize;
    let mut tree = AreaTree::new();
    for index in 0..rows {
        tree.insert(Row { index }).expect("rows have area");
    }
    println!(
        "{} rows, depth {}, {} nodes",
        tree.len(),
        tree.depth(),
        tree.node_count()
    );

    let mut visible = Vec::new();
    // Simulate a few scroll positions by changing the viewport rectangle
    for scroll in [0, 30, 200, 600] {
        let viewport = Aabb2D::from_xywh(0, scroll, WIDTH, 100);
        tree.search_into(Query::rect(viewport, false), &mut visible);
        let mut indices: Vec<_> = visible.iter().map(|r| r.index).collect();
        indices.sort_unstable();
        println!("scroll {scroll:>4}: rows {indices:?}");
    }

    // Drop every other row and look again.
    let odd: Vec<_> = (1..rows).step_by(2).map(|index| Row { index }).collect();
    let removed = tree.remove_all(&odd);
    println!("removed {removed} rows");
    let viewport = Aabb2D::from_xywh(0, 0, WIDTH, 100);
    println!(
        "rows in first viewport now: {}",
        tree.search_count(Query::rect(viewport, false))
    );
}
