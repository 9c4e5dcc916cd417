// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for tree mutations.

use thiserror::Error;

/// Errors reported by [`AreaTree`](crate::AreaTree) mutations.
///
/// Searching an empty tree, removing an object that is not stored, and querying
/// with an empty rectangle are not errors; they yield empty or `false` results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The object cannot be indexed, for example because its bounds have no area.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: &'static str,
    },
}

impl Error {
    pub(crate) const DEGENERATE_BOUNDS: Self = Self::InvalidArgument {
        reason: "object bounds are empty, inverted, or not ordered",
    };
}
