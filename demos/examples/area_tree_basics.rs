// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area tree basics.
//!
//! Insert a few shapes, query by point and rectangle, remove one, and watch
//! the bounds shrink.
//!
//! Run:
//! - `RUST_LOG=understory_area_tree=trace cargo run -p understory_area_tree_demos --example area_tree_basics`

use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use understory_area_tree::{Aabb2D, AreaObject, AreaTree, AreaTreeConfig, Query};

#[derive(Debug)]
struct Shape {
    name: String,
    bounds: Aabb2D<i32>,
}

impl AreaObject for Shape {
    type Scalar = i32;

    fn bounds(&self) -> Aabb2D<i32> {
        self.bounds
    }

    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

fn shape(name: &str, x: i32, y: i32, w: i32, h: i32) -> Rc<Shape> {
    Rc::new(Shape {
        name: name.to_owned(),
        bounds: Aabb2D::from_xywh(x, y, w, h),
    })
}

fn names(found: &[&Rc<Shape>]) -> Vec<String> {
    let mut v: Vec<_> = found.iter().map(|s| s.name.clone()).collect();
    v.sort();
    v
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A small capacity makes the splits visible with few objects.
    let mut tree = AreaTree::with_config(AreaTreeConfig::new().with_leaf_capacity(2));

    let a = shape("a", 0, 0, 10, 10);
    let b = shape("b", 5, 5, 10, 10);
    let c = shape("c", 20, 20, 5, 5);
    let d = shape("d", 40, 0, 8, 8);
    let e = shape("e", 0, 40, 8, 8);
    tree.insert_all([a.clone(), b.clone(), c.clone(), d.clone(), e.clone()])
        .expect("all shapes have area");

    println!("bounds: {:?}", tree.bounds());
    println!("depth: {}, nodes: {}", tree.depth(), tree.node_count());

    println!("at (7, 7): {:?}", names(&tree.search_point(7, 7)));
    println!(
        "in (0, 0)-(30, 30): {:?}",
        names(&tree.search_rect(Aabb2D::new(0, 0, 30, 30), false))
    );
    println!(
        "exactly (0, 0)-(10, 10): {:?}",
        names(&tree.search_rect(Aabb2D::new(0, 0, 10, 10), true))
    );
    println!(
        "anything at (30, 30)? {}",
        tree.search_hit(Query::point(30, 30))
    );

    // Empty rectangles are refused.
    let flat = shape("flat", 0, 0, 0, 10);
    match tree.insert(flat) {
        Ok(()) => println!("inserted flat shape"),
        Err(err) => println!("refused flat shape: {err}"),
    }

    tree.remove(&d);
    tree.remove(&e);
    println!("after removing d and e, bounds: {:?}", tree.bounds());

    tree.rebuild();
    println!(
        "after rebuild: {} objects, depth {}",
        tree.count(),
        tree.depth()
    );
}
