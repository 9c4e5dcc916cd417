// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants for [`AreaTree`](crate::AreaTree).

/// Tree configuration.
///
/// The defaults suit most interactive workloads; the values only affect
/// performance, never query results.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AreaTreeConfig {
    /// Number of objects an unsplit node holds before it splits.
    pub leaf_capacity: usize,
}

impl AreaTreeConfig {
    /// Leaf capacity used by [`AreaTreeConfig::default`].
    pub const DEFAULT_LEAF_CAPACITY: usize = 8;

    /// Create the default configuration.
    pub const fn new() -> Self {
        Self {
            leaf_capacity: Self::DEFAULT_LEAF_CAPACITY,
        }
    }

    /// Set the leaf capacity. Values below 1 are treated as 1.
    #[must_use]
    pub const fn with_leaf_capacity(mut self, leaf_capacity: usize) -> Self {
        self.leaf_capacity = leaf_capacity;
        self
    }

    pub(crate) fn effective_leaf_capacity(&self) -> usize {
        self.leaf_capacity.max(1)
    }
}

impl Default for AreaTreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
