//! Result collection over a matched subtree
//!
//! The ids for a matched node come from its own payload first (already
//! sorted and unique), then from each child subtree in edge order. Ids
//! seen earlier are skipped, and the remaining budget shrinks only when
//! an id is actually appended, so a bounded search returns exactly
//! `min(limit, distinct ids below the node)` results.

use crate::index::tree::GeneralizedSuffixTree;
use crate::index::types::{Limit, NodeId, StringId};

/// Collect up to `limit` distinct string ids from `node`'s subtree.
///
/// Ordering: the node's own payload before descendant payloads, children
/// visited in edge-sort order. Recursion depth is bounded by the longest
/// inserted string.
pub(crate) fn subtree_ids(
    tree: &GeneralizedSuffixTree,
    node: NodeId,
    limit: Limit,
) -> Vec<StringId> {
    let own = &tree.node(node).payload;

    let mut remaining = limit.cap();
    let mut ids = match remaining {
        Some(cap) if cap <= own.len() => return own[..cap].to_vec(),
        Some(cap) => {
            remaining = Some(cap - own.len());
            own.clone()
        }
        None => own.clone(),
    };

    for edge in &tree.node(node).edges {
        let child_limit = match remaining {
            Some(cap) => Limit::AtMost(cap),
            None => Limit::Unbounded,
        };
        for id in subtree_ids(tree, edge.target, child_limit) {
            if ids.contains(&id) {
                continue;
            }
            if let Some(cap) = remaining.as_mut() {
                *cap -= 1;
            }
            ids.push(id);
        }
        if remaining == Some(0) {
            break;
        }
    }

    ids
}
