// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas hit testing over a heterogeneous scene.
//!
//! Items of several kinds share one tree; pointer lookups use Kurbo points
//! and a tag matcher picks out only the kind the tool cares about.
//!
//! Run:
//! - `cargo run -p understory_area_tree_demos --example area_tree_canvas_hit`

use std::rc::Rc;

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_area_tree::{Aabb2D, AreaObject, AreaTree, AreaTreeConfig, OfTag, Query, Tagged};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Kind {
    Frame,
    Handle,
    Label,
}

#[derive(Debug)]
struct Item {
    kind: Kind,
    name: &'static str,
    rect: Rect,
}

impl AreaObject for Item {
    type Scalar = f64;

    fn bounds(&self) -> Aabb2D<f64> {
        self.rect.into()
    }

    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Tagged for Item {
    type Tag = Kind;

    fn tag(&self) -> Kind {
        self.kind
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scene: Vec<Rc<Item>> = Vec::new();
    for i in 0..4 {
        let x0 = 20.0 + i as f64 * 150.0;
        let frame = Rect::new(x0, 20.0, x0 + 120.0, 140.0);
        scene.push(Rc::new(Item {
            kind: Kind::Frame,
            name: ["alpha", "beta", "gamma", "delta"][i],
            rect: frame,
        }));
        // Corner handles straddle the frame edge.
        for corner in [frame.origin(), Point::new(frame.x1, frame.y1)] {
            scene.push(Rc::new(Item {
                kind: Kind::Handle,
                name: "handle",
                rect: Rect::from_center_size(corner, (8.0, 8.0)),
            }));
        }
        scene.push(Rc::new(Item {
            kind: Kind::Label,
            name: "label",
            rect: Rect::new(x0, 145.0, x0 + 80.0, 160.0),
        }));
    }

    let tree = AreaTree::from_objects(scene.iter().cloned(), AreaTreeConfig::default())
        .expect("scene items have area");
    println!(
        "{} items, scene bounds {:?}",
        tree.len(),
        Rect::from(tree.bounds())
    );

    for pointer in [
        Point::new(21.0, 21.0),
        Point::new(80.0, 80.0),
        Point::new(140.0, 140.0),
        Point::new(500.0, 150.0),
        Point::new(1000.0, 1000.0),
    ] {
        let under: Vec<_> = tree
            .search_kurbo_point(pointer)
            .iter()
            .map(|it| (it.kind, it.name))
            .collect();
        let query = Query::point(pointer.x, pointer.y);
        let handle = tree.search_hit_matching(query, &OfTag(Kind::Handle));
        let frames = tree.search_count_matching(query, &OfTag(Kind::Frame));
        println!("{pointer:?}: {under:?} (handle: {handle}, frames: {frames})");
    }

    // Rubber-band selection only picks frames fully inside the band.
    let band = Rect::new(0.0, 0.0, 320.0, 200.0);
    let selected: Vec<_> = tree
        .search_matching(Query::rect(Aabb2D::from(band), false), &|it: &Rc<Item>| {
            it.kind == Kind::Frame && band.union(it.rect) == band
        })
        .iter()
        .map(|it| it.name)
        .collect();
    println!("band selects {selected:?}");
}
