// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public [`AreaTree`] API.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::ControlFlow;

use tracing::debug;

use crate::config::AreaTreeConfig;
use crate::error::Error;
use crate::matcher::{MatchAll, Matcher};
use crate::node::{Arena, Entry, NodeIdx};
use crate::object::AreaObject;
use crate::query::Query;
use crate::types::Aabb2D;

/// Shorthand for an object's coordinate type.
type Coord<O> = <O as AreaObject>::Scalar;

/// Storage and quick retrieval of 2D objects by the rectangle they occupy.
///
/// Objects are kept in a binary partition of space. Each node covers the union
/// of everything below it; objects that cross a node's split line stay at that
/// node, everything else moves down into the child on its side. Searches skip
/// every subtree whose region cannot match.
///
/// Once an object has been added, its bounds should not change. To change
/// them, remove the object, make the change, then insert it again.
///
/// The tree is not synchronized. Mutation takes `&mut self`; share it across
/// threads behind whatever lock suits the host.
pub struct AreaTree<O: AreaObject> {
    arena: Arena<O, Coord<O>>,
    root: NodeIdx,
    len: usize,
    config: AreaTreeConfig,
}

impl<O: AreaObject> Debug for AreaTree<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AreaTree")
            .field("len", &self.len)
            .field("bounds", &self.bounds())
            .field("nodes", &self.arena.live())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<O: AreaObject> Default for AreaTree<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: AreaObject> AreaTree<O> {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AreaTreeConfig::default())
    }

    /// Create an empty tree with the given configuration.
    pub fn with_config(config: AreaTreeConfig) -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc();
        Self {
            arena,
            root,
            len: 0,
            config,
        }
    }

    /// Build a tree holding every object of `objects`.
    ///
    /// This partitions all objects in one pass instead of inserting them one by
    /// one. Fails without building anything if any object has degenerate
    /// bounds.
    pub fn from_objects<I>(objects: I, config: AreaTreeConfig) -> Result<Self, Error>
    where
        I: IntoIterator<Item = O>,
    {
        let entries = objects
            .into_iter()
            .map(checked_entry)
            .collect::<Result<Vec<_>, _>>()?;
        let mut tree = Self::with_config(config);
        tree.len = entries.len();
        tree.arena
            .load(tree.root, entries, config.effective_leaf_capacity());
        Ok(tree)
    }

    /// The active configuration.
    pub fn config(&self) -> &AreaTreeConfig {
        &self.config
    }

    /// Remove every object.
    pub fn clear(&mut self) {
        debug!(dropped = self.len, "clear area tree");
        self.arena.clear();
        self.root = self.arena.alloc();
        self.len = 0;
    }

    /// Insert an object.
    ///
    /// The same object may be inserted more than once; each insertion is a
    /// separate occurrence. Objects whose bounds have no area (or do not order,
    /// as with NaN) are rejected and the tree is left unchanged.
    pub fn insert(&mut self, object: O) -> Result<(), Error> {
        let entry = checked_entry(object)?;
        self.arena
            .insert(self.root, entry, self.config.effective_leaf_capacity());
        self.len += 1;
        Ok(())
    }

    /// Insert each object in iteration order.
    ///
    /// Stops at the first object that cannot be inserted; the objects before
    /// it stay in the tree.
    pub fn insert_all<I>(&mut self, objects: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = O>,
    {
        for object in objects {
            self.insert(object)?;
        }
        Ok(())
    }

    /// Remove one occurrence of `object`, matched by identity.
    ///
    /// Returns whether an occurrence was removed. Removing an object that is
    /// not in the tree does nothing.
    pub fn remove(&mut self, object: &O) -> bool {
        let bounds = object.bounds();
        if bounds.is_empty() || !self.arena.remove(self.root, object, &bounds) {
            return false;
        }
        self.root = self.arena.settle_root(self.root);
        self.len -= 1;
        true
    }

    /// Remove one occurrence of each object; objects not in the tree are
    /// skipped. Returns how many occurrences were removed.
    pub fn remove_all<'a, I>(&mut self, objects: I) -> usize
    where
        I: IntoIterator<Item = &'a O>,
        O: 'a,
    {
        objects
            .into_iter()
            .filter(|object| self.remove(object))
            .count()
    }

    /// Whether at least one occurrence of this exact object is in the tree.
    pub fn contains(&self, object: &O) -> bool {
        self.search_hit_matching(Query::Exact(object.bounds()), &|o: &O| {
            o.is_same(object)
        })
    }

    /// Number of stored occurrences, counting duplicates.
    pub fn count(&self) -> usize {
        self.len
    }

    /// Same as [`AreaTree::count`].
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every stored occurrence.
    ///
    /// The order is unspecified, but stable as long as the tree is not
    /// modified.
    pub fn all_objects(&self) -> Vec<&O> {
        self.search(Query::All)
    }

    /// The bounds covering every stored object, or the zero rectangle when the
    /// tree is empty.
    pub fn bounds(&self) -> Aabb2D<Coord<O>> {
        self.arena
            .node(self.root)
            .region
            .unwrap_or_else(Aabb2D::zero)
    }

    /// Re-partition every stored object from scratch.
    ///
    /// Removal never rebalances, so a tree that has seen heavy churn can end up
    /// deeper than needed. Results of later queries are unaffected.
    pub fn rebuild(&mut self) {
        let entries = self.arena.drain_entries();
        debug!(objects = entries.len(), "rebuild area tree");
        self.root = self.arena.alloc();
        self.arena
            .load(self.root, entries, self.config.effective_leaf_capacity());
    }

    /// Number of nodes on the longest path from the root.
    pub fn depth(&self) -> usize {
        self.arena.depth(self.root)
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Objects whose bounds contain the point.
    pub fn search_point(&self, x: Coord<O>, y: Coord<O>) -> Vec<&O> {
        self.search(Query::point(x, y))
    }

    /// Objects whose bounds intersect `rect`, or, with `exact_match`, whose
    /// bounds equal `rect`.
    pub fn search_rect(&self, rect: Aabb2D<Coord<O>>, exact_match: bool) -> Vec<&O> {
        self.search(Query::rect(rect, exact_match))
    }

    /// Every object matching `query`.
    pub fn search(&self, query: Query<Coord<O>>) -> Vec<&O> {
        self.search_matching(query, &MatchAll)
    }

    /// Every object matching `query` and accepted by `matcher`.
    pub fn search_matching<M>(&self, query: Query<Coord<O>>, matcher: &M) -> Vec<&O>
    where
        M: Matcher<O> + ?Sized,
    {
        let mut out = Vec::new();
        self.search_into_matching(query, matcher, &mut out);
        out
    }

    /// Clear `out`, then fill it with every object matching `query`.
    ///
    /// Returns `false` if nothing matched. Reusing the buffer avoids an
    /// allocation per search in hot loops.
    pub fn search_into<'a>(&'a self, query: Query<Coord<O>>, out: &mut Vec<&'a O>) -> bool {
        self.search_into_matching(query, &MatchAll, out)
    }

    /// Clear `out`, then fill it with every object matching `query` and
    /// accepted by `matcher`. Returns `false` if nothing matched.
    pub fn search_into_matching<'a, M>(
        &'a self,
        query: Query<Coord<O>>,
        matcher: &M,
        out: &mut Vec<&'a O>,
    ) -> bool
    where
        M: Matcher<O> + ?Sized,
    {
        out.clear();
        self.visit(&query, matcher, |o| {
            out.push(o);
            ControlFlow::Continue(())
        });
        !out.is_empty()
    }

    /// Number of objects matching `query`.
    pub fn search_count(&self, query: Query<Coord<O>>) -> usize {
        self.search_count_matching(query, &MatchAll)
    }

    /// Number of objects matching `query` and accepted by `matcher`.
    pub fn search_count_matching<M>(&self, query: Query<Coord<O>>, matcher: &M) -> usize
    where
        M: Matcher<O> + ?Sized,
    {
        let mut n = 0;
        self.visit(&query, matcher, |_| {
            n += 1;
            ControlFlow::Continue(())
        });
        n
    }

    /// Whether any object matches `query`. Stops at the first match.
    pub fn search_hit(&self, query: Query<Coord<O>>) -> bool {
        self.search_hit_matching(query, &MatchAll)
    }

    /// Whether any object matches `query` and is accepted by `matcher`.
    pub fn search_hit_matching<M>(&self, query: Query<Coord<O>>, matcher: &M) -> bool
    where
        M: Matcher<O> + ?Sized,
    {
        let mut hit = false;
        self.visit(&query, matcher, |_| {
            hit = true;
            ControlFlow::Break(())
        });
        hit
    }

    /// Depth-first traversal shared by every search.
    ///
    /// Subtrees whose region cannot match are skipped. Objects are tested
    /// geometrically first and only then handed to `matcher`.
    fn visit<'a, M, F>(&'a self, query: &Query<Coord<O>>, matcher: &M, mut f: F)
    where
        M: Matcher<O> + ?Sized,
        F: FnMut(&'a O) -> ControlFlow<()>,
    {
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            let node = self.arena.node(idx);
            let Some(region) = node.region.as_ref() else {
                continue;
            };
            if !query.may_overlap(region) {
                continue;
            }
            for entry in &node.direct {
                if query.accepts(&entry.bounds)
                    && matcher.matches(&entry.object)
                    && f(&entry.object).is_break()
                {
                    return;
                }
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }
}

#[cfg(feature = "kurbo")]
impl<O> AreaTree<O>
where
    O: AreaObject<Scalar = f64>,
{
    /// Objects whose bounds contain a Kurbo point.
    pub fn search_kurbo_point(&self, point: kurbo::Point) -> Vec<&O> {
        self.search_point(point.x, point.y)
    }
}

fn checked_entry<O: AreaObject>(object: O) -> Result<Entry<O, Coord<O>>, Error> {
    let bounds = object.bounds();
    if bounds.is_empty() {
        debug!(?bounds, "rejected object with degenerate bounds");
        return Err(Error::DEGENERATE_BOUNDS);
    }
    Ok(Entry { bounds, object })
}
