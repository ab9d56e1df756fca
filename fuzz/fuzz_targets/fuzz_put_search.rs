#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::index::{GeneralizedSuffixTree, Limit};

fuzz_target!(|input: (Vec<String>, String)| {
    // Build a tree from arbitrary strings and cross-check search against
    // a naive substring scan. This should never panic or disagree.
    let (words, pattern) = input;
    let words: Vec<&str> = words
        .iter()
        .map(|w| w.as_str())
        .filter(|w| !w.is_empty())
        .take(8)
        .collect();

    let mut tree = GeneralizedSuffixTree::new();
    for (id, word) in words.iter().enumerate() {
        tree.put(word, id as u32);
    }

    let ids = tree.search(&pattern, Limit::Unbounded);

    for &id in &ids {
        assert!(
            words[id as usize].contains(&pattern),
            "id {id} does not contain {pattern:?}"
        );
    }
    if !pattern.is_empty() {
        for (id, word) in words.iter().enumerate() {
            if word.contains(&pattern) {
                assert!(ids.contains(&(id as u32)), "missing id {id} for {pattern:?}");
            }
        }
    }
});
