//! Construction and query benchmarks on generated corpora.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use sufx::index::{GeneralizedSuffixTree, Limit};

/// Deterministic corpus over a small alphabet, so words share plenty of
/// substrings and the tree gets real branching.
fn generate_words(count: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"abcdef";

    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|_| {
            let len = 5 + (next() % 11) as usize;
            (0..len)
                .map(|_| ALPHABET[(next() % ALPHABET.len() as u64) as usize] as char)
                .collect()
        })
        .collect()
}

fn build_tree(words: &[String]) -> GeneralizedSuffixTree {
    let mut tree = GeneralizedSuffixTree::new();
    for (id, word) in words.iter().enumerate() {
        tree.put(word, id as u32);
    }
    tree
}

fn bench_put(c: &mut Criterion) {
    let words = generate_words(500);

    c.bench_function("put_500_words", |b| {
        b.iter(|| build_tree(black_box(&words)))
    });
}

fn bench_search(c: &mut Criterion) {
    let words = generate_words(500);
    let tree = build_tree(&words);

    c.bench_function("search_hit_unbounded", |b| {
        b.iter(|| tree.search(black_box("abc"), Limit::Unbounded))
    });

    c.bench_function("search_hit_limited", |b| {
        b.iter(|| tree.search(black_box("abc"), Limit::AtMost(10)))
    });

    c.bench_function("search_miss", |b| {
        // 'z' is outside the corpus alphabet, so the walk fails at the root.
        b.iter(|| tree.search(black_box("zzz"), Limit::Unbounded))
    });
}

criterion_group!(benches, bench_put, bench_search);
criterion_main!(benches);
