// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract for values stored in an [`AreaTree`](crate::AreaTree).

use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::types::{Aabb2D, Scalar};

/// A value that occupies an axis-aligned rectangle.
///
/// Once an object has been inserted, its bounds must not change. To move it,
/// remove it from the tree, change it, then insert it again. The tree caches
/// the bounds it saw at insertion, so a violation cannot corrupt the tree's
/// regions, but the object will be found at its old place.
///
/// Objects are told apart by identity, not by value: [`AreaObject::is_same`]
/// decides which stored occurrence [`AreaTree::remove`](crate::AreaTree::remove)
/// and [`AreaTree::contains`](crate::AreaTree::contains) refer to. The `Rc` and
/// `Arc` impls use pointer identity, which is usually what you want:
///
/// ```
/// use std::rc::Rc;
/// use understory_area_tree::{Aabb2D, AreaObject};
///
/// struct Label(Aabb2D<i32>);
///
/// impl AreaObject for Label {
///     type Scalar = i32;
///     fn bounds(&self) -> Aabb2D<i32> { self.0 }
///     fn is_same(&self, other: &Self) -> bool { core::ptr::eq(self, other) }
/// }
///
/// let a = Rc::new(Label(Aabb2D::from_xywh(0, 0, 4, 4)));
/// let b = Rc::new(Label(Aabb2D::from_xywh(0, 0, 4, 4)));
/// assert!(a.is_same(&a.clone()));
/// assert!(!a.is_same(&b));
/// ```
pub trait AreaObject {
    /// Coordinate type of the bounds.
    type Scalar: Scalar;

    /// The rectangle this object occupies.
    fn bounds(&self) -> Aabb2D<Self::Scalar>;

    /// Whether `self` and `other` are the same object.
    fn is_same(&self, other: &Self) -> bool;
}

impl<O: AreaObject + ?Sized> AreaObject for Rc<O> {
    type Scalar = O::Scalar;

    fn bounds(&self) -> Aabb2D<Self::Scalar> {
        (**self).bounds()
    }

    fn is_same(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<O: AreaObject + ?Sized> AreaObject for Arc<O> {
    type Scalar = O::Scalar;

    fn bounds(&self) -> Aabb2D<Self::Scalar> {
        (**self).bounds()
    }

    fn is_same(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}
