// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predicates that narrow a search to objects of interest.
//!
//! A matcher runs after the geometric test has passed, once per candidate.
//! Use [`MatchAll`] for no filtering, any `Fn(&O) -> bool` closure for ad hoc
//! filters, or [`OfTag`] to select one kind out of a heterogeneous tree.

use alloc::rc::Rc;
use alloc::sync::Arc;

/// Decides whether a candidate object should be reported.
pub trait Matcher<O: ?Sized> {
    /// Whether `obj` matches.
    fn matches(&self, obj: &O) -> bool;
}

impl<O: ?Sized, F> Matcher<O> for F
where
    F: Fn(&O) -> bool,
{
    #[inline]
    fn matches(&self, obj: &O) -> bool {
        self(obj)
    }
}

/// Matches every object.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchAll;

impl<O: ?Sized> Matcher<O> for MatchAll {
    #[inline]
    fn matches(&self, _obj: &O) -> bool {
        true
    }
}

/// Objects that carry a kind tag.
///
/// Trees that hold several kinds of object (usually an enum or a trait object)
/// implement this so searches can be restricted to one kind with [`OfTag`].
pub trait Tagged {
    /// The tag type, typically a fieldless enum.
    type Tag: PartialEq;

    /// This object's kind.
    fn tag(&self) -> Self::Tag;
}

impl<O: Tagged + ?Sized> Tagged for Rc<O> {
    type Tag = O::Tag;

    fn tag(&self) -> Self::Tag {
        (**self).tag()
    }
}

impl<O: Tagged + ?Sized> Tagged for Arc<O> {
    type Tag = O::Tag;

    fn tag(&self) -> Self::Tag {
        (**self).tag()
    }
}

/// Matches objects whose [`Tagged::tag`] equals the wrapped tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OfTag<K>(pub K);

impl<O, K> Matcher<O> for OfTag<K>
where
    O: Tagged<Tag = K> + ?Sized,
    K: PartialEq,
{
    #[inline]
    fn matches(&self, obj: &O) -> bool {
        obj.tag() == self.0
    }
}
