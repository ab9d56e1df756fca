//! Corpus loading
//!
//! A corpus file holds one string per line. Blank lines are skipped and
//! repeated lines are kept once (first occurrence wins), so the position
//! of a string in the returned vector is its id in the tree.

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Read a corpus file into distinct, non-empty lines.
pub fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;
    Ok(dedup_lines(content.lines()))
}

/// Drop blank lines and duplicates, preserving first-seen order.
pub fn dedup_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::new();

    for line in lines {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        if seen.insert(line) {
            out.push(line.to_string());
        }
    }

    out
}
