//! Tree structure statistics
//!
//! Diagnostics over a built tree: how many nodes and edges it holds, how
//! deep it runs, and how many id references the payload sets carry. The
//! numbers are computed by a single iterative walk over the arena and can
//! be rendered as a text report or as JSON.

use crate::index::tree::GeneralizedSuffixTree;
use crate::index::types::{StringId, ROOT};
use anyhow::Result;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Aggregate statistics of one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total nodes in the arena, root included
    pub nodes: u64,
    /// Total edges (equals nodes - 1 in a tree)
    pub edges: u64,
    /// Nodes without outgoing edges
    pub leaves: u64,
    /// Sum of all edge label lengths, in characters
    pub label_chars: u64,
    /// Total id references across all payload sets
    pub payload_refs: u64,
    /// Distinct string ids recorded anywhere in the tree
    pub distinct_ids: u64,
    /// Longest root-to-node path, counted in edges
    pub max_depth: u64,
}

impl TreeStats {
    /// Walk the tree and compute its statistics.
    #[must_use]
    pub fn compute(tree: &GeneralizedSuffixTree) -> Self {
        let mut stats = TreeStats {
            nodes: tree.node_count() as u64,
            ..TreeStats::default()
        };

        let mut distinct: FxHashSet<StringId> = FxHashSet::default();

        // Explicit stack: depth is bounded by the longest inserted
        // string, but the walk should not depend on that.
        let mut stack = vec![(ROOT, 0u64)];
        while let Some((id, depth)) = stack.pop() {
            let node = tree.node(id);
            stats.max_depth = stats.max_depth.max(depth);
            stats.payload_refs += node.payload.len() as u64;
            distinct.extend(node.payload.iter().copied());

            if node.is_leaf() {
                stats.leaves += 1;
            }
            for edge in &node.edges {
                stats.edges += 1;
                stats.label_chars += edge.label.len() as u64;
                stack.push((edge.target, depth + 1));
            }
        }

        stats.distinct_ids = distinct.len() as u64;
        stats
    }
}

/// Print a statistics report for `tree`, as text or JSON.
pub fn show_stats(tree: &GeneralizedSuffixTree, json: bool) -> Result<()> {
    let stats = TreeStats::compute(tree);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Tree Statistics");
    println!("===============");
    println!();
    println!("Nodes:            {}", stats.nodes);
    println!("Edges:            {}", stats.edges);
    println!("Leaves:           {}", stats.leaves);
    println!("Label chars:      {}", stats.label_chars);
    println!("Payload refs:     {}", stats.payload_refs);
    println!("Distinct strings: {}", stats.distinct_ids);
    println!("Max depth:        {}", stats.max_depth);

    Ok(())
}
