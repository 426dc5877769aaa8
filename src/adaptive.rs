//! Adaptive Huffman coding (FGK).
//!
//! One-pass entropy coder: both sides grow the same code tree from the
//! symbols processed so far, so no frequency table or tree is ever
//! transmitted. The tree keeps the sibling property (every internal
//! node's weight is the sum of its children's, and all nodes admit a
//! single weight-non-decreasing ordering), which guarantees the shape a
//! from-scratch Huffman build would produce over the same weights.
//!
//! Unseen symbols are escaped through the NYT ("not yet transmitted")
//! leaf: its current root path is emitted, followed by the raw 8-bit
//! symbol. The first symbol of a session is therefore always exactly
//! 8 raw bits, since the tree starts as the lone NYT node.
//!
//! A single flipped bit desynchronizes the decoder's tree from the
//! encoder's and makes all subsequent output undefined; the format has
//! no resynchronization mechanism by design.

use crate::bitstream::{push_bits, BitReader};
use crate::error::{Error, Result};

/// One tree node in the arena. Parent/child links are indices into the
/// arena to keep the bidirectional graph free of ownership cycles.
#[derive(Debug)]
struct Node {
    weight: u64,
    /// Present on symbol leaves only; internal nodes and the NYT leaf
    /// carry no symbol.
    symbol: Option<u8>,
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

impl Node {
    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The adaptive code tree, shared verbatim by encoder and decoder.
struct Tree {
    nodes: Vec<Node>,
    /// Node ids ordered by non-decreasing weight; index 0 is the lowest
    /// rank. The NYT leaf never enters this sequence (weight 0, never a
    /// swap candidate).
    order: Vec<usize>,
    root: usize,
    nyt: usize,
    /// Symbol value -> its leaf, once seen.
    seen: [Option<usize>; 256],
}

impl Tree {
    fn new() -> Self {
        let nyt = Node {
            weight: 0,
            symbol: None,
            parent: None,
            left: None,
            right: None,
        };
        Self {
            nodes: vec![nyt],
            order: Vec::new(),
            root: 0,
            nyt: 0,
            seen: [None; 256],
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Root-to-node path as bit text, left = '0', right = '1'. Computed
    /// by walking the parent links upward and reversing.
    fn code_of(&self, id: usize) -> String {
        let mut bits = Vec::new();
        let mut cur = id;
        while let Some(parent) = self.nodes[cur].parent {
            bits.push(if self.nodes[parent].left == Some(cur) {
                '0'
            } else {
                '1'
            });
            cur = parent;
        }
        bits.iter().rev().collect()
    }

    /// The highest-ranked node currently holding `weight`.
    fn leader(&self, weight: u64) -> Option<usize> {
        self.order
            .iter()
            .rev()
            .find(|&&id| self.nodes[id].weight == weight)
            .copied()
    }

    /// Exchange two nodes: swap their order ranks, their parent links and
    /// the corresponding child slots, so the subtrees physically trade
    /// places while each keeps its own weight.
    fn swap(&mut self, a: usize, b: usize) {
        let pos_a = self.order.iter().position(|&id| id == a);
        let pos_b = self.order.iter().position(|&id| id == b);
        if let (Some(pos_a), Some(pos_b)) = (pos_a, pos_b) {
            self.order.swap(pos_a, pos_b);
        }

        let parent_a = self.nodes[a].parent;
        let parent_b = self.nodes[b].parent;
        self.nodes[a].parent = parent_b;
        self.nodes[b].parent = parent_a;

        match self.nodes[a].parent {
            Some(p) => {
                if self.nodes[p].left == Some(b) {
                    self.nodes[p].left = Some(a);
                } else {
                    self.nodes[p].right = Some(a);
                }
            }
            None => self.root = a,
        }
        match self.nodes[b].parent {
            Some(p) => {
                if self.nodes[p].left == Some(a) {
                    self.nodes[p].left = Some(b);
                } else {
                    self.nodes[p].right = Some(b);
                }
            }
            None => self.root = b,
        }
    }

    /// Account for one occurrence of `symbol`, restoring the sibling
    /// property after every single weight increment.
    fn insert(&mut self, symbol: u8) {
        let mut cur = match self.seen[symbol as usize] {
            Some(leaf) => Some(leaf),
            None => {
                // Split the NYT leaf: a fresh internal node takes its
                // place, keeping the old NYT on the left and a weight-1
                // leaf for the new symbol on the right.
                let nyt_parent = self.nodes[self.nyt].parent;
                let leaf = self.alloc(Node {
                    weight: 1,
                    symbol: Some(symbol),
                    parent: None,
                    left: None,
                    right: None,
                });
                let internal = self.alloc(Node {
                    weight: 1,
                    symbol: None,
                    parent: nyt_parent,
                    left: Some(self.nyt),
                    right: Some(leaf),
                });
                self.nodes[leaf].parent = Some(internal);
                self.nodes[self.nyt].parent = Some(internal);
                match nyt_parent {
                    // The NYT leaf is always its parent's left child.
                    Some(p) => self.nodes[p].left = Some(internal),
                    None => self.root = internal,
                }
                // Both newcomers take the lowest ranks, leaf below the
                // internal node.
                self.order.insert(0, internal);
                self.order.insert(0, leaf);
                self.seen[symbol as usize] = Some(leaf);
                // The split already accounts for the new nodes' weights;
                // only pre-existing ancestors still need incrementing.
                nyt_parent
            }
        };

        while let Some(node) = cur {
            let weight = self.nodes[node].weight;
            let leader = self.leader(weight).unwrap_or(node);
            // Never swap a node with itself, its parent, or its child:
            // the first is a no-op, the others would detach a subtree
            // into a cycle.
            if leader != node
                && self.nodes[node].parent != Some(leader)
                && self.nodes[leader].parent != Some(node)
            {
                self.swap(node, leader);
            }
            self.nodes[node].weight += 1;
            cur = self.nodes[node].parent;
        }
    }
}

/// One-shot adaptive Huffman encoder. The tree is a per-session
/// structure, so `encode` consumes the encoder.
pub struct AdaptiveEncoder {
    tree: Tree,
}

impl AdaptiveEncoder {
    /// Create an encoder with an empty tree (root = NYT).
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Encode a byte sequence into `'0'`/`'1'` bit text.
    ///
    /// Seen symbols emit their current root-to-leaf path; unseen ones
    /// emit the root-to-NYT path followed by the raw 8-bit value. The
    /// tree is updated after every symbol.
    pub fn encode(mut self, data: &[u8]) -> String {
        let mut out = String::new();
        for &byte in data {
            match self.tree.seen[byte as usize] {
                Some(leaf) => out.push_str(&self.tree.code_of(leaf)),
                None => {
                    out.push_str(&self.tree.code_of(self.tree.nyt));
                    push_bits(&mut out, byte as u64, 8);
                }
            }
            self.tree.insert(byte);
        }
        out
    }
}

impl Default for AdaptiveEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot adaptive Huffman decoder, the exact mirror of
/// [`AdaptiveEncoder`].
pub struct AdaptiveDecoder {
    tree: Tree,
}

impl AdaptiveDecoder {
    /// Create a decoder with an empty tree (root = NYT).
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Decode `'0'`/`'1'` bit text back into the original bytes.
    ///
    /// # Errors
    /// Returns [`Error::UnexpectedEof`] if the stream ends mid-walk or
    /// mid-literal and [`Error::InvalidBit`] on a non-bit character. An
    /// empty stream decodes to an empty vector.
    pub fn decode(mut self, bits: &str) -> Result<Vec<u8>> {
        let mut reader = BitReader::new(bits);
        let mut out = Vec::new();
        if reader.is_empty() {
            return Ok(out);
        }

        // First symbol: the root-to-NYT path has length 0, so the stream
        // opens with a bare 8-bit literal.
        let first = reader.read_u8()?;
        out.push(first);
        self.tree.insert(first);

        while !reader.is_empty() {
            let mut node = self.tree.root;
            while !self.tree.nodes[node].is_leaf() {
                let bit = reader.expect_bit()?;
                let next = if bit {
                    self.tree.nodes[node].right
                } else {
                    self.tree.nodes[node].left
                };
                node = next.ok_or(Error::UnexpectedEof)?;
            }
            let symbol = if node == self.tree.nyt {
                reader.read_u8()?
            } else {
                match self.tree.nodes[node].symbol {
                    Some(symbol) => symbol,
                    None => unreachable!("non-NYT leaf always carries a symbol"),
                }
            };
            out.push(symbol);
            self.tree.insert(symbol);
        }
        Ok(out)
    }
}

impl Default for AdaptiveDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Walk the whole tree and assert the structural invariants: every
    /// internal node's weight is the sum of its children's, the order
    /// sequence is non-decreasing, and the symbol index agrees with the
    /// leaves.
    fn check_invariants(tree: &Tree) {
        for node in &tree.nodes {
            if let (Some(l), Some(r)) = (node.left, node.right) {
                assert_eq!(
                    node.weight,
                    tree.nodes[l].weight + tree.nodes[r].weight,
                    "sibling property violated"
                );
            }
        }
        for pair in tree.order.windows(2) {
            assert!(
                tree.nodes[pair[0]].weight <= tree.nodes[pair[1]].weight,
                "order sequence not non-decreasing"
            );
        }
        assert!(tree.nodes[tree.nyt].is_leaf());
        assert_eq!(tree.nodes[tree.nyt].weight, 0);
        for (symbol, slot) in tree.seen.iter().enumerate() {
            if let Some(leaf) = *slot {
                assert_eq!(tree.nodes[leaf].symbol, Some(symbol as u8));
            }
        }
    }

    #[test]
    fn test_golden_aaab() {
        let bits = AdaptiveEncoder::new().encode(b"aaab");
        assert_eq!(bits, "0110000111001100010");
        let decoded = AdaptiveDecoder::new().decode(&bits).unwrap();
        assert_eq!(decoded, b"aaab");
    }

    #[test]
    fn test_first_symbol_is_raw_literal() {
        for &byte in &[0u8, b'a', 255] {
            let bits = AdaptiveEncoder::new().encode(&[byte]);
            let mut expected = String::new();
            push_bits(&mut expected, byte as u64, 8);
            assert_eq!(bits, expected);
        }
    }

    #[test]
    fn test_boundary_symbols_roundtrip() {
        let data = [0u8, 255, 0, 255, 255, 0];
        let bits = AdaptiveEncoder::new().encode(&data);
        assert_eq!(AdaptiveDecoder::new().decode(&bits).unwrap(), data);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(AdaptiveEncoder::new().encode(b""), "");
        assert_eq!(AdaptiveDecoder::new().decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_truncated_stream_fails() {
        let bits = AdaptiveEncoder::new().encode(b"abcabc");
        let truncated = &bits[..bits.len() - 1];
        assert!(matches!(
            AdaptiveDecoder::new().decode(truncated),
            Err(Error::UnexpectedEof)
        ));
        assert!(matches!(
            AdaptiveDecoder::new().decode("0110"),
            Err(Error::UnexpectedEof)
        ));
    }

    #[test]
    fn test_invalid_character_fails() {
        assert!(matches!(
            AdaptiveDecoder::new().decode("01100001z"),
            Err(Error::InvalidBit('z'))
        ));
    }

    #[test]
    fn test_invariants_after_every_insert() {
        let mut tree = Tree::new();
        for &byte in b"this is an example of an adaptive huffman tree" {
            tree.insert(byte);
            check_invariants(&tree);
        }
    }

    #[test]
    fn test_weight_count_law() {
        let data = b"abracadabra";
        let mut tree = Tree::new();
        let mut counts = [0u64; 256];
        for &byte in data {
            tree.insert(byte);
            counts[byte as usize] += 1;
            for (symbol, &count) in counts.iter().enumerate() {
                if count > 0 {
                    let leaf = tree.seen[symbol].unwrap();
                    assert_eq!(tree.nodes[leaf].weight, count);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 1..300)) {
            let bits = AdaptiveEncoder::new().encode(&data);
            let decoded = AdaptiveDecoder::new().decode(&bits).unwrap();
            prop_assert_eq!(decoded, data);
        }

        #[test]
        fn prop_first_symbol_law(data in prop::collection::vec(any::<u8>(), 1..50)) {
            let bits = AdaptiveEncoder::new().encode(&data);
            let mut expected = String::new();
            push_bits(&mut expected, data[0] as u64, 8);
            prop_assert_eq!(&bits[..8], expected.as_str());
        }

        #[test]
        fn prop_invariants_hold(data in prop::collection::vec(any::<u8>(), 1..150)) {
            let mut tree = Tree::new();
            for &byte in &data {
                tree.insert(byte);
                check_invariants(&tree);
            }
        }
    }
}
