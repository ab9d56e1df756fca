//! Read-only queries over a built tree
//!
//! Searching is two separate walks:
//!
//! - `matcher`: follow the pattern down from the root, edge by edge, to
//!   the node whose path spells a superstring of the pattern
//! - `collect`: gather the string ids recorded in that node's subtree,
//!   bounded by a [`Limit`](crate::index::Limit)
//!
//! Both walks only read the arena; mutation stays in [`crate::index`].

pub mod collect;
pub mod matcher;
