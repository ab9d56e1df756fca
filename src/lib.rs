//! # sufx - Generalized Suffix Tree Substring Search
//!
//! sufx is an in-memory generalized suffix tree: an index over a growing
//! collection of strings that answers, for any query substring, which of
//! the inserted strings contain it. Construction is online (Ukkonen's
//! algorithm, one character at a time) and amortized linear per inserted
//! character; lookups walk a single root-to-node path.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Tree structure and online construction
//! - [`query`] - Pattern matching and result collection
//! - [`output`] - Terminal result formatting
//! - [`utils`] - Corpus loading and progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use sufx::index::{GeneralizedSuffixTree, Limit};
//!
//! let mut tree = GeneralizedSuffixTree::new();
//! tree.put("banana", 0);
//! tree.put("apple", 1);
//!
//! // Every string containing "an" as a substring
//! let ids = tree.search("an", Limit::Unbounded);
//! assert_eq!(ids, vec![0]);
//!
//! // Every string containing "a"
//! let mut ids = tree.search("a", Limit::Unbounded);
//! ids.sort_unstable();
//! assert_eq!(ids, vec![0, 1]);
//! ```
//!
//! ## Design
//!
//! Nodes live in an arena owned by the tree and are addressed by stable
//! `NodeId` handles, so the construction algorithm can hold several
//! references into the structure while edges are being split. Suffix links
//! are plain handles outside the ownership tree: ownership stays a strict
//! tree even though the links form a more general graph over it.

pub mod index;
pub mod output;
pub mod query;
pub mod utils;
