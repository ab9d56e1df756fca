//! Utility functions shared by the CLI front end.
//!
//! - [`corpus`] - Line-oriented corpus loading with deduplication
//! - [`progress`] - Progress bar shim (no-op without the `progress` feature)

pub mod corpus;
pub mod progress;

pub use corpus::*;
pub use progress::*;
