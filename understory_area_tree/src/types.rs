// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.
//!
//! Rectangles are half-open: a box covers `[min_x, max_x) × [min_y, max_y)`.
//! This is the raster convention, so two boxes that merely share an edge do not
//! intersect, and a point on the right or bottom edge is outside.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Axis-aligned bounding box in 2D.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right, exclusive)
    pub max_x: T,
    /// Maximum y (bottom, exclusive)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// Create an AABB from origin and size.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self::new(x, y, T::add(x, w), T::add(y, h))
    }

    /// The all-zero box, reported as the bounds of an empty tree.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Width, clamped at zero.
    pub fn width(&self) -> T {
        T::max_zero(T::sub(self.max_x, self.min_x))
    }

    /// Height, clamped at zero.
    pub fn height(&self) -> T {
        T::max_zero(T::sub(self.max_y, self.min_y))
    }

    /// Twice the center along `axis`, in the widened accumulator.
    ///
    /// Doubling keeps integer centers exact.
    #[inline]
    pub(crate) fn center2(&self, axis: Axis) -> T::Acc {
        match axis {
            Axis::X => T::widen(self.min_x) + T::widen(self.max_x),
            Axis::Y => T::widen(self.min_y) + T::widen(self.max_y),
        }
    }

    /// Twice the `(min, max)` extent along `axis`, in the widened accumulator.
    #[inline]
    pub(crate) fn extent2(&self, axis: Axis) -> (T::Acc, T::Acc) {
        let (lo, hi) = match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        };
        (T::widen(lo) + T::widen(lo), T::widen(hi) + T::widen(hi))
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// Whether this AABB contains the point.
    ///
    /// The minimum edges are inside, the maximum edges are not.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        le(self.min_x, x) && le(self.min_y, y) && lt(x, self.max_x) && lt(y, self.max_y)
    }

    /// Whether the two AABBs share any area.
    ///
    /// Empty boxes intersect nothing, including themselves.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && lt(self.min_x, other.max_x)
            && lt(other.min_x, self.max_x)
            && lt(self.min_y, other.max_y)
            && lt(other.min_y, self.max_y)
    }

    /// Whether `other` lies entirely inside this AABB.
    pub fn contains_rect(&self, other: &Self) -> bool {
        le(self.min_x, other.min_x)
            && le(self.min_y, other.min_y)
            && le(other.max_x, self.max_x)
            && le(other.max_y, self.max_y)
    }

    /// The smallest AABB covering both.
    pub fn union(&self, other: &Self) -> Self {
        union_aabb(*self, *other)
    }

    /// Return true if the AABB has no area: zero or negative extent, or
    /// coordinates that do not order (NaN).
    pub fn is_empty(&self) -> bool {
        !(lt(self.min_x, self.max_x) && lt(self.min_y, self.max_y))
    }
}

/// Split axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

/// Numeric scalar abstraction for 2D AABBs.
///
/// This trait provides the handful of operations the tree needs to pick split
/// lines, and an associated widened accumulator type (e.g., i32→i64, f32→f64)
/// so that doubled centers and spreads never overflow or lose precision.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type suitable for center/spread computations.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + Debug;

    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Max of the scalar value and zero.
    fn max_zero(v: Self) -> Self;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;
}

impl Scalar for i32 {
    type Acc = i64;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v.into()
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v.into()
    }
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0.0)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v.into()
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0.0)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

pub(crate) fn union_aabb<T: PartialOrd + Copy>(a: Aabb2D<T>, b: Aabb2D<T>) -> Aabb2D<T> {
    Aabb2D {
        min_x: min_t(a.min_x, b.min_x),
        min_y: min_t(a.min_y, b.min_y),
        max_x: max_t(a.max_x, b.max_x),
        max_y: max_t(a.max_y, b.max_y),
    }
}

/// Union of an optional accumulated region with another box.
pub(crate) fn grow<T: PartialOrd + Copy>(acc: Option<Aabb2D<T>>, b: Aabb2D<T>) -> Aabb2D<T> {
    match acc {
        Some(a) => union_aabb(a, b),
        None => b,
    }
}

#[cfg(feature = "kurbo")]
mod kurbo_interop {
    use super::Aabb2D;

    impl From<kurbo::Rect> for Aabb2D<f64> {
        fn from(r: kurbo::Rect) -> Self {
            // Kurbo rects may be stored with swapped corners.
            let r = r.abs();
            Self::new(r.x0, r.y0, r.x1, r.y1)
        }
    }

    impl From<Aabb2D<f64>> for kurbo::Rect {
        fn from(a: Aabb2D<f64>) -> Self {
            Self::new(a.min_x, a.min_y, a.max_x, a.max_y)
        }
    }
}
