// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed nodes: storage, bound bookkeeping, insertion, splitting and removal.
//!
//! Nodes never own each other directly. Each node refers to its children by
//! [`NodeIdx`] into the arena, so replacing a subtree (or the root) is an index
//! swap and dropping a tree never recurses.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem;

use tracing::trace;

use crate::object::AreaObject;
use crate::types::{Aabb2D, Axis, Scalar, grow, max_t, min_t, union_aabb};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

/// A stored object with the bounds it had when inserted.
#[derive(Clone, Debug)]
pub(crate) struct Entry<O, T> {
    pub(crate) bounds: Aabb2D<T>,
    pub(crate) object: O,
}

/// Partition line of a split node, kept in doubled widened coordinates.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Split<A> {
    axis: Axis,
    at2: A,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Straddle,
}

impl<A: Copy + PartialOrd> Split<A> {
    fn side<T: Scalar<Acc = A>>(&self, bounds: &Aabb2D<T>) -> Side {
        let (lo2, hi2) = bounds.extent2(self.axis);
        if hi2 <= self.at2 {
            Side::Left
        } else if lo2 >= self.at2 {
            Side::Right
        } else {
            Side::Straddle
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node<O, T: Scalar> {
    /// Union of everything stored here and below; `None` when empty.
    pub(crate) region: Option<Aabb2D<T>>,
    pub(crate) direct: Vec<Entry<O, T>>,
    pub(crate) split: Option<Split<T::Acc>>,
    pub(crate) left: Option<NodeIdx>,
    pub(crate) right: Option<NodeIdx>,
    /// Entry count a leaf must exceed before splitting is tried again after
    /// a split that would have moved everything to one side.
    retry_above: usize,
}

impl<O, T: Scalar> Node<O, T> {
    const fn new() -> Self {
        Self {
            region: None,
            direct: Vec::new(),
            split: None,
            left: None,
            right: None,
            retry_above: 0,
        }
    }

    fn wants_split(&self, capacity: usize) -> bool {
        self.split.is_none() && self.direct.len() > capacity.max(self.retry_above)
    }

    fn is_vacant(&self) -> bool {
        self.direct.is_empty() && self.left.is_none() && self.right.is_none()
    }

    fn only_child(&self) -> Option<NodeIdx> {
        match (self.left, self.right) {
            (Some(c), None) | (None, Some(c)) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = NodeIdx> + use<O, T> {
        self.left.into_iter().chain(self.right)
    }
}

/// Node storage with slot reuse.
#[derive(Debug)]
pub(crate) struct Arena<O, T: Scalar> {
    nodes: Vec<Node<O, T>>,
    free_list: Vec<NodeIdx>,
}

impl<O, T: Scalar> Arena<O, T> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
        }
    }

    pub(crate) fn node(&self, idx: NodeIdx) -> &Node<O, T> {
        &self.nodes[idx.get()]
    }

    /// Number of live nodes.
    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    pub(crate) fn alloc(&mut self) -> NodeIdx {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx.get()] = Node::new();
            idx
        } else {
            self.nodes.push(Node::new());
            NodeIdx::new(self.nodes.len() - 1)
        }
    }

    fn release(&mut self, idx: NodeIdx) {
        self.nodes[idx.get()] = Node::new();
        self.free_list.push(idx);
    }

    /// Drop every node and every stored object.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
    }

    /// Take every stored entry out of the arena, leaving it empty.
    pub(crate) fn drain_entries(&mut self) -> Vec<Entry<O, T>> {
        let mut out = Vec::new();
        for node in &mut self.nodes {
            out.append(&mut node.direct);
        }
        self.clear();
        out
    }

    fn recompute_region(&mut self, idx: NodeIdx) {
        let node = &self.nodes[idx.get()];
        let mut region = node
            .direct
            .iter()
            .map(|e| e.bounds)
            .reduce(union_aabb);
        for child in node.children() {
            if let Some(r) = self.nodes[child.get()].region {
                region = Some(grow(region, r));
            }
        }
        self.nodes[idx.get()].region = region;
    }

    /// Insert an entry below `root`.
    ///
    /// Regions grow on the way down. The entry stops at the first split node it
    /// straddles, or at the unsplit leaf it reaches, which splits once it holds
    /// more than `capacity` entries.
    pub(crate) fn insert(&mut self, root: NodeIdx, entry: Entry<O, T>, capacity: usize) {
        let mut at = root;
        loop {
            let node = &mut self.nodes[at.get()];
            node.region = Some(grow(node.region, entry.bounds));
            let Some(split) = node.split else {
                node.direct.push(entry);
                if node.wants_split(capacity) {
                    self.split_cascade(at, capacity);
                }
                return;
            };
            let side = split.side(&entry.bounds);
            let existing = match side {
                Side::Straddle => {
                    node.direct.push(entry);
                    return;
                }
                Side::Left => node.left,
                Side::Right => node.right,
            };
            at = match existing {
                Some(child) => child,
                None => {
                    let child = self.alloc();
                    let node = &mut self.nodes[at.get()];
                    if side == Side::Left {
                        node.left = Some(child);
                    } else {
                        node.right = Some(child);
                    }
                    child
                }
            };
        }
    }

    /// Place `entries` under a fresh root, splitting as needed.
    pub(crate) fn load(&mut self, root: NodeIdx, entries: Vec<Entry<O, T>>, capacity: usize) {
        let node = &mut self.nodes[root.get()];
        node.region = entries.iter().map(|e| e.bounds).reduce(union_aabb);
        node.direct = entries;
        self.split_cascade(root, capacity);
    }

    /// Split `start` if it is an overfull leaf, then split any child that
    /// ends up overfull, and so on.
    fn split_cascade(&mut self, start: NodeIdx, capacity: usize) {
        let mut pending = vec![start];
        while let Some(at) = pending.pop() {
            let node = &mut self.nodes[at.get()];
            if !node.wants_split(capacity) {
                continue;
            }
            let Some(split) = choose_split(&node.direct) else {
                continue;
            };
            let total = node.direct.len();
            let mut keep = Vec::new();
            let mut left = Vec::new();
            let mut right = Vec::new();
            for entry in mem::take(&mut node.direct) {
                match split.side(&entry.bounds) {
                    Side::Left => left.push(entry),
                    Side::Right => right.push(entry),
                    Side::Straddle => keep.push(entry),
                }
            }
            // Only reachable through float rounding of the median center.
            // Backing off geometrically keeps inserts into such a leaf from
            // rescanning it every time.
            if left.len() == total || right.len() == total {
                node.direct = if left.is_empty() { right } else { left };
                node.retry_above = total.saturating_mul(2);
                trace!(node = at.get(), entries = total, "postpone one-sided split");
                continue;
            }
            trace!(
                node = at.get(),
                axis = ?split.axis,
                left = left.len(),
                right = right.len(),
                straddling = keep.len(),
                "split area node"
            );
            node.direct = keep;
            node.split = Some(split);
            for (side, entries) in [(Side::Left, left), (Side::Right, right)] {
                if entries.is_empty() {
                    continue;
                }
                let child = self.alloc();
                let overfull = entries.len() > capacity;
                let c = &mut self.nodes[child.get()];
                c.region = entries.iter().map(|e| e.bounds).reduce(union_aabb);
                c.direct = entries;
                let parent = &mut self.nodes[at.get()];
                if side == Side::Left {
                    parent.left = Some(child);
                } else {
                    parent.right = Some(child);
                }
                if overfull {
                    pending.push(child);
                }
            }
        }
    }

    /// Remove one occurrence of `target` (with the given bounds) below `root`.
    ///
    /// Returns whether an occurrence was found. Emptied nodes below `root` are
    /// pruned and regions along the path are recomputed; nothing is re-split.
    pub(crate) fn remove(&mut self, root: NodeIdx, target: &O, bounds: &Aabb2D<T>) -> bool
    where
        O: AreaObject<Scalar = T>,
    {
        let mut path = Vec::new();
        let mut at = Some(root);
        let mut found = false;
        while let Some(idx) = at {
            let node = &mut self.nodes[idx.get()];
            if !node.region.is_some_and(|r| r.contains_rect(bounds)) {
                break;
            }
            path.push(idx);
            if let Some(pos) = node.direct.iter().position(|e| e.object.is_same(target)) {
                node.direct.swap_remove(pos);
                found = true;
                break;
            }
            at = match node.split.map(|s| s.side(bounds)) {
                Some(Side::Left) => node.left,
                Some(Side::Right) => node.right,
                _ => None,
            };
        }
        if !found {
            return false;
        }
        for &idx in path.iter().rev() {
            let node = &self.nodes[idx.get()];
            let (left, right) = (node.left, node.right);
            if let Some(c) = left
                && self.nodes[c.get()].is_vacant()
            {
                self.release(c);
                self.nodes[idx.get()].left = None;
            }
            if let Some(c) = right
                && self.nodes[c.get()].is_vacant()
            {
                self.release(c);
                self.nodes[idx.get()].right = None;
            }
            self.recompute_region(idx);
        }
        true
    }

    /// Shed pass-through roots after a removal and return the root to keep.
    ///
    /// A root with no objects of its own and a single child is replaced by that
    /// child; an empty root goes back to being an unsplit leaf.
    pub(crate) fn settle_root(&mut self, mut root: NodeIdx) -> NodeIdx {
        loop {
            let node = &mut self.nodes[root.get()];
            if node.is_vacant() {
                node.split = None;
                node.region = None;
                return root;
            }
            if !node.direct.is_empty() {
                return root;
            }
            let Some(child) = node.only_child() else {
                return root;
            };
            trace!(old = root.get(), new = child.get(), "replace area tree root");
            self.release(root);
            root = child;
        }
    }

    /// Length of the longest root-to-node path, counting nodes.
    pub(crate) fn depth(&self, root: NodeIdx) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(root, 1_usize)];
        while let Some((idx, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(self.node(idx).children().map(|c| (c, level + 1)));
        }
        deepest
    }
}

/// Pick the axis along which entry centers spread the most, split at the
/// median center.
///
/// The median entry straddles its own line (its doubled center lies strictly
/// between its doubled edges), so in exact arithmetic no split can send every
/// entry to the same child.
fn choose_split<O, T: Scalar>(entries: &[Entry<O, T>]) -> Option<Split<T::Acc>> {
    let first = entries.first()?;
    let mut best: Option<(Axis, T::Acc)> = None;
    for axis in [Axis::X, Axis::Y] {
        let c0 = first.bounds.center2(axis);
        let (lo, hi) = entries.iter().fold((c0, c0), |(lo, hi), e| {
            let c = e.bounds.center2(axis);
            (min_t(lo, c), max_t(hi, c))
        });
        let spread = hi - lo;
        if best.is_none_or(|(_, s)| spread > s) {
            best = Some((axis, spread));
        }
    }
    let (axis, _) = best?;
    let mut centers: Vec<T::Acc> = entries.iter().map(|e| e.bounds.center2(axis)).collect();
    let mid = centers.len() / 2;
    let (_, at2, _) = centers.select_nth_unstable_by(mid, |a, b| {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    });
    Some(Split { axis, at2: *at2 })
}
