// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query descriptions shared by every search flavor.

use crate::types::Aabb2D;

/// What a search looks for.
///
/// Every variant prunes the traversal with the same test it applies to objects,
/// except [`Query::Exact`], which descends into every region covering the
/// rectangle and only then requires equal bounds, so equal boxes are found
/// through ancestors whose regions differ from the query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Query<T> {
    /// Every stored object.
    All,
    /// Objects whose bounds contain the point.
    Point {
        /// X coordinate.
        x: T,
        /// Y coordinate.
        y: T,
    },
    /// Objects whose bounds intersect the rectangle.
    Intersects(Aabb2D<T>),
    /// Objects whose bounds equal the rectangle, coordinate for coordinate.
    Exact(Aabb2D<T>),
}

impl<T: Copy + PartialOrd> Query<T> {
    /// A point query.
    pub const fn point(x: T, y: T) -> Self {
        Self::Point { x, y }
    }

    /// A rectangle query; `exact_match` selects [`Query::Exact`] over
    /// [`Query::Intersects`].
    pub const fn rect(rect: Aabb2D<T>, exact_match: bool) -> Self {
        if exact_match {
            Self::Exact(rect)
        } else {
            Self::Intersects(rect)
        }
    }

    /// Whether a subtree with this region may hold matches.
    #[inline]
    pub(crate) fn may_overlap(&self, region: &Aabb2D<T>) -> bool {
        match self {
            Self::All => true,
            Self::Point { x, y } => region.contains_point(*x, *y),
            Self::Intersects(r) => region.intersects(r),
            Self::Exact(r) => region.contains_rect(r) && region.intersects(r),
        }
    }

    /// Whether an object with these bounds matches geometrically.
    #[inline]
    pub(crate) fn accepts(&self, bounds: &Aabb2D<T>) -> bool {
        match self {
            Self::All => true,
            Self::Point { x, y } => bounds.contains_point(*x, *y),
            Self::Intersects(r) => bounds.intersects(r),
            Self::Exact(r) => bounds == r && !r.is_empty(),
        }
    }
}
