//! Generalized suffix tree construction
//!
//! This module owns the tree structure and its online construction:
//!
//! - `types`: Core type definitions and the result `Limit`
//! - `node`: Arena nodes and their labeled edges
//! - `tree`: The tree itself and Ukkonen-style insertion
//! - `stats`: Structure statistics for diagnostics

pub mod node;
pub mod stats;
pub mod tree;
pub mod types;

// Re-exports for convenience
pub use stats::TreeStats;
pub use tree::GeneralizedSuffixTree;
pub use types::{Limit, NodeId, StringId, ROOT};
