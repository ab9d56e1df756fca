//! Online generalized suffix tree construction
//!
//! The construction follows Ukkonen's algorithm ("On-line construction of
//! suffix trees"), generalized to hold several strings in one tree: every
//! inserted string is tagged with a caller-chosen id, and an insertion can
//! terminate early where it rejoins structure left behind by an earlier
//! string.
//!
//! The algorithm advances one character at a time and keeps an *active
//! point*: the pair of a node and the pending run of characters that has
//! been read but not yet mapped to explicit structure. Three cooperating
//! steps drive each character:
//!
//! 1. `update` performs the suffix extensions the new character requires,
//!    creating leaves and splitting edges until it hits an *endpoint* (a
//!    position where the character is already represented).
//! 2. `canonize` renormalizes the active point to the farthest node
//!    reachable by consuming whole edge labels, which is what bounds the
//!    total work to amortized linear time.
//! 3. `test_and_split` decides whether the active point already has the
//!    required transition, splitting an edge into two when the insertion
//!    point falls inside a label.
//!
//! Suffix links are threaded through the same loop: each split node is
//! linked to the node found for the next-shorter suffix, and the chain of
//! leaves created for one insertion is linked left to right.

use crate::index::node::{Edge, Node};
use crate::index::types::{Limit, NodeId, StringId, ROOT};
use crate::query::{collect, matcher};

/// A generalized suffix tree over `char` sequences.
///
/// `put` inserts every suffix of a string under an id; `search` returns
/// the ids of all strings containing a pattern. The tree is append-only:
/// nodes and edges are created by `put` and never removed.
///
/// Mutation requires `&mut self`, so the exclusive-writer discipline the
/// structure needs is enforced by the borrow checker: any number of
/// concurrent `search` calls may share the tree as long as no `put` is in
/// flight.
#[derive(Debug)]
pub struct GeneralizedSuffixTree {
    /// Node arena; `ROOT` is slot 0.
    nodes: Vec<Node>,
    /// The most recently created leaf during the current insertion; used
    /// to close the suffix-link chain between consecutive leaves.
    active_leaf: NodeId,
}

impl Default for GeneralizedSuffixTree {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
            active_leaf: ROOT,
        }
    }
}

impl GeneralizedSuffixTree {
    /// Create an empty tree: a single root node with no edges.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert `key` under `index`, registering every suffix of `key`.
    ///
    /// An empty `key` has no suffixes and inserts nothing. Inserting the
    /// same `key` again with a different index tags all of its suffixes
    /// with that index as well; re-inserting the same `(key, index)` pair
    /// is a no-op by construction (payload sets deduplicate).
    pub fn put(&mut self, key: &str, index: StringId) {
        let runes: Vec<char> = key.chars().collect();
        if runes.is_empty() {
            return;
        }

        self.active_leaf = ROOT;
        let mut s = ROOT;

        // The prefix of `key` read so far that is not yet explicit
        // structure, tracked alongside the active node `s`.
        let mut text: Vec<char> = Vec::with_capacity(runes.len());
        for k in 0..runes.len() {
            text.push(runes[k]);
            let (node, part) = self.update(s, &text, &runes[k..], index);
            let (node, part) = self.canonize(node, &part);
            s = node;
            text = part;
        }

        // Close the last open suffix-link chain for this insertion.
        let leaf = self.active_leaf;
        if self.node(leaf).suffix.is_none() && leaf != ROOT && leaf != s {
            self.node_mut(leaf).suffix = Some(s);
        }
    }

    /// Return the ids of all inserted strings containing `pattern` as a
    /// substring, at most `limit` of them.
    ///
    /// Ids come from the matched node's own payload first, then from its
    /// subtree in edge order, deduplicated. An empty pattern matches the
    /// root and therefore every inserted id. A pattern with no matching
    /// path yields an empty vector; that is a normal outcome, not an
    /// error.
    #[must_use]
    pub fn search(&self, pattern: &str, limit: Limit) -> Vec<StringId> {
        let pattern: Vec<char> = pattern.chars().collect();
        match matcher::locate(self, &pattern) {
            Some(node) => collect::subtree_ids(self, node, limit),
            None => Vec::new(),
        }
    }

    /// Perform all suffix extensions required by the latest character of
    /// `string_part` (its last element), starting from `input_node`.
    ///
    /// `rest` is the remaining suffix of the inserted string from the
    /// current position; it becomes the label of any leaf edge created
    /// here. Returns the new active pair: the node reachable by the
    /// longest proper path for the text read so far, plus the character
    /// run that still has to be appended to it.
    fn update(
        &mut self,
        input_node: NodeId,
        string_part: &[char],
        rest: &[char],
        index: StringId,
    ) -> (NodeId, Vec<char>) {
        let mut s = input_node;
        let mut part: Vec<char> = string_part.to_vec();
        let new_ch = *part.last().expect("update is driven one character at a time");

        // Tracks the previously split node within this extension pass so
        // its suffix link can be closed when the next node is found.
        let mut oldroot = ROOT;

        let (mut endpoint, mut r) =
            self.test_and_split(s, cut_last(&part), new_ch, rest, index);

        while !endpoint {
            // A transition for this character can already exist here when
            // an earlier string left deeper structure behind; reuse its
            // target instead of growing a parallel leaf.
            let existing = self.node(r).edge(new_ch).map(|e| e.target);
            let leaf = match existing {
                Some(target) => target,
                None => {
                    let leaf = self.new_node();
                    self.add_ref(leaf, index);
                    self.node_mut(r).add_edge(Edge::new(rest.to_vec(), leaf));
                    leaf
                }
            };

            // Thread the suffix-link chain of leaves created by this
            // insertion. Links are assigned at most once.
            let prev = self.active_leaf;
            if prev != ROOT && self.node(prev).suffix.is_none() {
                self.node_mut(prev).suffix = Some(leaf);
            }
            self.active_leaf = leaf;

            if oldroot != ROOT && self.node(oldroot).suffix.is_none() {
                self.node_mut(oldroot).suffix = Some(r);
            }
            oldroot = r;

            match self.node(s).suffix {
                // The root plays its own suffix target: drop the first
                // character of the pending run instead of following a link.
                None => {
                    if !part.is_empty() {
                        part.remove(0);
                    }
                }
                Some(link) => {
                    let last = *part.last().expect("pending run ends with the new character");
                    let (node, mut run) = self.canonize(link, cut_last(&part));
                    s = node;
                    run.push(last);
                    part = run;
                }
            }

            let (e, next) = self.test_and_split(s, cut_last(&part), new_ch, rest, index);
            endpoint = e;
            r = next;
        }

        if oldroot != ROOT && self.node(oldroot).suffix.is_none() {
            self.node_mut(oldroot).suffix = Some(r);
        }

        (s, part)
    }

    /// Normalize an active pair: follow edges from `s` while whole labels
    /// are prefixes of `run`, returning the farthest node reached and the
    /// unconsumed remainder.
    fn canonize(&self, s: NodeId, run: &[char]) -> (NodeId, Vec<char>) {
        let mut node = s;
        let mut rest = run;

        if !rest.is_empty() {
            let mut edge = self.node(node).edge(rest[0]);
            while let Some(e) = edge {
                if rest.len() < e.label.len() || rest[..e.label.len()] != e.label[..] {
                    break;
                }
                rest = &rest[e.label.len()..];
                node = e.target;
                edge = match rest.first() {
                    Some(&ch) => self.node(node).edge(ch),
                    None => None,
                };
            }
        }

        (node, rest.to_vec())
    }

    /// Decide whether the active point `(input, string_part)` already has
    /// a transition for `ch`, splitting an edge when the required
    /// insertion point falls inside a label.
    ///
    /// Returns `(endpoint, node)`: `endpoint` is true when the character
    /// is already represented and the extension pass can stop; `node` is
    /// where the caller should attach a new leaf otherwise.
    fn test_and_split(
        &mut self,
        input: NodeId,
        string_part: &[char],
        ch: char,
        remainder: &[char],
        index: StringId,
    ) -> (bool, NodeId) {
        let (s, leftover) = self.canonize(input, string_part);

        if !leftover.is_empty() {
            // The active point is inside the edge starting with
            // leftover[0]; canonization guarantees that edge exists.
            let ix = self
                .node(s)
                .edge_position(leftover[0])
                .expect("canonized active point keeps a pending edge");

            let e = &self.node(s).edges[ix];
            if e.label.len() > leftover.len() && e.label[leftover.len()] == ch {
                // The label continues with `ch`: already represented.
                return (true, s);
            }

            // Split the edge at the end of `leftover`: a new node `w`
            // takes the matched half, the old edge keeps the tail.
            let target = e.target;
            let tail: Vec<char> = e.label[leftover.len()..].to_vec();
            let w = self.new_node();
            {
                let e = &mut self.node_mut(s).edges[ix];
                e.label = leftover.clone();
                e.target = w;
            }
            self.node_mut(w).add_edge(Edge::new(tail, target));
            return (false, w);
        }

        // The active point is exactly at `s`.
        let Some(ix) = self.node(s).edge_position(ch) else {
            return (false, s);
        };

        let label: Vec<char> = self.node(s).edges[ix].label.clone();
        let target = self.node(s).edges[ix].target;

        if remainder == label.as_slice() {
            // The whole remaining suffix is this edge: just tag it.
            self.add_ref(target, index);
            (true, s)
        } else if remainder.len() > label.len() && remainder.starts_with(&label) {
            (true, s)
        } else if label.len() > remainder.len() && label.starts_with(remainder) {
            // The remaining suffix stops inside the label: split and tag
            // the new intermediate node.
            let tail: Vec<char> = label[remainder.len()..].to_vec();
            let w = self.new_node();
            self.add_ref(w, index);
            {
                let e = &mut self.node_mut(s).edges[ix];
                e.label = remainder.to_vec();
                e.target = w;
            }
            self.node_mut(w).add_edge(Edge::new(tail, target));
            (false, s)
        } else {
            // The label and the remaining suffix share their first
            // character but diverge before either ends. The walk is
            // already inside the existing edge; the character where they
            // disagree splits it on a later iteration.
            (true, s)
        }
    }

    /// Record that string `index` passes through `node`, and propagate
    /// the fact along the suffix-link chain.
    ///
    /// Propagation stops at the first node that already carries the id
    /// (or at the end of the chain), which is what keeps total tagging
    /// cost linear: every suffix of the inserted string gets credit
    /// without a fresh walk from the root.
    fn add_ref(&mut self, node: NodeId, index: StringId) {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let n = self.node_mut(id);
            if !n.insert_payload(index) {
                break;
            }
            cursor = n.suffix;
        }
    }

    fn new_node(&mut self) -> NodeId {
        self.nodes.push(Node::default());
        (self.nodes.len() - 1) as NodeId
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }
}

/// The run without its final character; empty stays empty.
fn cut_last(run: &[char]) -> &[char] {
    match run.split_last() {
        Some((_, head)) => head,
        None => run,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_key_inserts_nothing() {
        let mut tree = GeneralizedSuffixTree::new();
        tree.put("", 0);
        assert_eq!(tree.node_count(), 1);
        assert!(tree.search("", Limit::Unbounded).is_empty());
    }

    #[test]
    fn test_single_string_suffixes() {
        let mut tree = GeneralizedSuffixTree::new();
        tree.put("banana", 0);

        for sub in ["banana", "anana", "nana", "ana", "na", "a", "ban", "nan"] {
            assert_eq!(tree.search(sub, Limit::Unbounded), vec![0], "pattern {sub:?}");
        }
        assert!(tree.search("ab", Limit::Unbounded).is_empty());
    }

    #[test]
    fn test_canonize_consumes_whole_labels_only() {
        let mut tree = GeneralizedSuffixTree::new();
        tree.put("banana", 0);

        let (node, rest) = tree.canonize(ROOT, &[]);
        assert_eq!(node, ROOT);
        assert!(rest.is_empty());

        // No edge starts with 'x': nothing is consumed.
        let (node, rest) = tree.canonize(ROOT, &chars("x"));
        assert_eq!(node, ROOT);
        assert_eq!(rest, chars("x"));

        // "ba" stops inside the "banana" label, short of a node, so the
        // pair is already canonical.
        let (node, rest) = tree.canonize(ROOT, &chars("ba"));
        assert_eq!(node, ROOT);
        assert_eq!(rest, chars("ba"));

        // A full root edge label is consumed and the walk descends.
        let (node, rest) = tree.canonize(ROOT, &chars("a"));
        assert_ne!(node, ROOT);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_split_preserves_edge_invariants() {
        let mut tree = GeneralizedSuffixTree::new();
        tree.put("banana", 0);
        tree.put("bandana", 1);

        for node in &tree.nodes {
            let mut prev: Option<char> = None;
            for edge in &node.edges {
                assert!(!edge.label.is_empty(), "empty edge label");
                if let Some(p) = prev {
                    assert!(p < edge.first_char(), "unsorted or duplicate first chars");
                }
                prev = Some(edge.first_char());
            }
        }
    }

    #[test]
    fn test_suffix_links_never_self() {
        let mut tree = GeneralizedSuffixTree::new();
        for (i, word) in ["banana", "bandana", "ananas", "中文app"].iter().enumerate() {
            tree.put(word, i as StringId);
        }
        for (id, node) in tree.nodes.iter().enumerate() {
            if let Some(link) = node.suffix {
                assert_ne!(link as usize, id, "suffix link points to its own node");
            }
        }
        assert!(tree.node(ROOT).suffix.is_none());
    }

    #[test]
    fn test_payloads_sorted_unique() {
        let mut tree = GeneralizedSuffixTree::new();
        tree.put("abcab", 3);
        tree.put("bcabc", 1);
        tree.put("cabca", 2);

        for node in &tree.nodes {
            for pair in node.payload.windows(2) {
                assert!(pair[0] < pair[1], "payload not sorted/unique: {:?}", node.payload);
            }
        }
    }

    #[test]
    fn test_divergent_labels_report_endpoint_without_mutation() {
        // With "abd" inserted, extending the very first character of
        // "abc" finds an 'a'-edge labeled "abd" while the remaining
        // suffix is "abc": same first character, neither a prefix of the
        // other. That must report an endpoint and leave the tree alone.
        let mut tree = GeneralizedSuffixTree::new();
        tree.put("abd", 0);
        let before = tree.node_count();

        let (endpoint, node) = tree.test_and_split(ROOT, &[], 'a', &chars("abc"), 1);
        assert!(endpoint);
        assert_eq!(node, ROOT);
        assert_eq!(tree.node_count(), before, "no structural change expected");
    }

    #[test]
    fn test_divergent_labels_end_to_end() {
        // The corpus that reaches the branch above; both strings must
        // remain fully searchable afterwards.
        let mut tree = GeneralizedSuffixTree::new();
        tree.put("abd", 0);
        tree.put("abc", 1);

        let mut both = tree.search("ab", Limit::Unbounded);
        both.sort_unstable();
        assert_eq!(both, vec![0, 1]);
        assert_eq!(tree.search("abc", Limit::Unbounded), vec![1]);
        assert_eq!(tree.search("abd", Limit::Unbounded), vec![0]);
        assert_eq!(tree.search("c", Limit::Unbounded), vec![1]);
        assert_eq!(tree.search("d", Limit::Unbounded), vec![0]);
    }

    #[test]
    fn test_shared_structure_reused_across_strings() {
        let mut tree = GeneralizedSuffixTree::new();
        tree.put("cacao", 0);
        let nodes_after_first = tree.node_count();
        tree.put("cacao", 1);

        // A repeated key adds tags, not structure.
        assert_eq!(tree.node_count(), nodes_after_first);
        let mut ids = tree.search("cacao", Limit::Unbounded);
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1]);
    }
}
