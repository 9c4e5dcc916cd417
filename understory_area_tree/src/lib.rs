// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_area_tree --heading-base-level=0

//! Understory Area Tree: storage and quick retrieval of 2D objects by area.
//!
//! An [`AreaTree`] holds objects that each occupy an axis-aligned rectangle and
//! answers point and rectangle queries without scanning every object.
//!
//! - Insert and remove objects; objects are told apart by identity, so the same
//!   value may be stored more than once.
//! - Search by point, by intersecting rectangle, or by exact bounds.
//! - Count matches or stop at the first hit without collecting results.
//! - Narrow any search with a [`Matcher`], for example to one kind of object in
//!   a heterogeneous tree ([`OfTag`]).
//!
//! It is generic over the scalar type (`i32`, `i64`, `f32`, `f64`) and does not
//! depend on any geometry crate; the `kurbo` feature adds conversions for
//! [Kurbo](https://docs.rs/kurbo) rectangles and points.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use understory_area_tree::{Aabb2D, AreaObject, AreaTree, Query};
//!
//! #[derive(Debug)]
//! struct Shape {
//!     name: &'static str,
//!     bounds: Aabb2D<i32>,
//! }
//!
//! impl AreaObject for Shape {
//!     type Scalar = i32;
//!     fn bounds(&self) -> Aabb2D<i32> { self.bounds }
//!     fn is_same(&self, other: &Self) -> bool { core::ptr::eq(self, other) }
//! }
//!
//! let shape = |name, x, y, w, h| Rc::new(Shape { name, bounds: Aabb2D::from_xywh(x, y, w, h) });
//! let a = shape("a", 0, 0, 10, 10);
//! let b = shape("b", 5, 5, 10, 10);
//! let c = shape("c", 20, 20, 5, 5);
//!
//! let mut tree = AreaTree::new();
//! tree.insert_all([a.clone(), b.clone(), c.clone()]).unwrap();
//!
//! let mut names: Vec<_> = tree.search_point(7, 7).iter().map(|s| s.name).collect();
//! names.sort();
//! assert_eq!(names, ["a", "b"]);
//!
//! // Exact matches only report equal bounds.
//! let exact = tree.search_rect(Aabb2D::from_xywh(0, 0, 10, 10), true);
//! assert_eq!(exact.len(), 1);
//! assert_eq!(tree.search_count(Query::rect(Aabb2D::from_xywh(0, 0, 30, 30), false)), 3);
//!
//! assert!(tree.remove(&a));
//! assert!(!tree.contains(&a));
//! assert_eq!(tree.bounds(), Aabb2D::new(5, 5, 25, 25));
//! ```
//!
//! ## Geometry
//!
//! Rectangles are half-open, `[min, max)` on both axes, like pixel rectangles:
//! boxes that only share an edge do not intersect, and a point on a right or
//! bottom edge is outside. Rectangles without area are never stored and never
//! match. Floating point coordinates are assumed to be free of NaN; a NaN
//! makes a rectangle count as empty.
//!
//! ## Structure
//!
//! The tree is a binary partition of space in the spirit of a k-d tree. A node
//! holds objects until it exceeds [`AreaTreeConfig::leaf_capacity`], then picks
//! the axis along which its objects' centers spread the most and splits at the
//! median center. Objects crossing the split line stay at the node; the rest
//! move to the child on their side. Every node tracks the union of everything
//! below it, which is what searches prune with. Nodes live in an arena and
//! refer to each other by index, so swapping the root is cheap and dropping a
//! deep tree does not recurse.
//!
//! Removal never rebalances. After heavy churn, [`AreaTree::rebuild`]
//! re-partitions the surviving objects.
//!
//! ## Concurrency
//!
//! The tree does no locking. Mutation needs `&mut AreaTree`; readers may share
//! `&AreaTree` freely. Wrap it in a lock of your choosing to mutate it from
//! several threads.
//!
//! ## Diagnostics
//!
//! Node splits and root replacements are reported as `tracing` events at
//! `trace` level; clears, rebuilds and rejected inserts at `debug` level.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod matcher;
pub mod object;
pub mod query;
pub mod tree;
pub mod types;

mod node;

pub use config::AreaTreeConfig;
pub use error::Error;
pub use matcher::{MatchAll, Matcher, OfTag, Tagged};
pub use object::AreaObject;
pub use query::Query;
pub use tree::AreaTree;
pub use types::{Aabb2D, Scalar};
