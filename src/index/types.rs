//! Types for the generalized suffix tree
//!
//! Nodes are stored in a flat arena (`Vec<Node>`) and referenced by
//! `NodeId` handles rather than nested ownership. Handles stay valid while
//! the construction algorithm splits edges and rewires children, which a
//! borrow over a nested structure would not.

use serde::{Deserialize, Serialize};

/// Caller-chosen identifier of an inserted string
pub type StringId = u32;

/// Stable handle into the tree's node arena
pub type NodeId = u32;

/// The arena slot of the root node
pub const ROOT: NodeId = 0;

/// Bound on the number of ids a search returns.
///
/// Replaces the usual "non-positive count means everything" convention with
/// an explicit variant, so the bound is unambiguous at the API surface.
/// `AtMost(0)` is honored literally and yields an empty result; callers
/// holding a signed count should go through [`Limit::from_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Limit {
    /// Return every id in the matched subtree
    #[default]
    Unbounded,
    /// Return at most this many ids
    AtMost(usize),
}

impl Limit {
    /// Convert a signed count using the conventional sentinel: zero or
    /// negative means unbounded.
    pub fn from_count(count: i64) -> Self {
        if count <= 0 {
            Limit::Unbounded
        } else {
            Limit::AtMost(count as usize)
        }
    }

    /// Remaining capacity as an option; `None` never runs out.
    pub(crate) fn cap(self) -> Option<usize> {
        match self {
            Limit::Unbounded => None,
            Limit::AtMost(n) => Some(n),
        }
    }
}
