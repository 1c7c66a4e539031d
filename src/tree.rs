//! Huffman tree construction.
//!
//! The tree is built greedily: every distinct symbol starts as a leaf in a
//! min-priority queue, and the two lightest nodes are merged until one
//! node (the root) remains.
//!
//! # Tie-break
//!
//! Frequency alone is not a total order, so every queued node also carries
//! a sequence number. Leaves are numbered in frequency-table order (first
//! appearance in the input) and each merged node takes the next unused
//! number. The queue pops the smallest `(frequency, sequence)` pair; the
//! first node popped becomes the left child. The same table therefore
//! always yields the same tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Huffman tree node.
///
/// Each node owns its subtrees outright; the root is owned by whoever
/// holds the tree for the encode/decode session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A symbol with its occurrence count.
    Leaf {
        /// The symbol this leaf decodes to.
        symbol: S,
        /// Occurrence count of `symbol`.
        frequency: usize,
    },
    /// A merge of two lighter subtrees.
    Internal {
        /// Sum of both children's frequencies.
        frequency: usize,
        /// Subtree reached by a `0` bit.
        left: Box<Node<S>>,
        /// Subtree reached by a `1` bit.
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    /// Merge two nodes; `left` takes the `0` branch.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the combined frequency overflows.
    pub fn merge(left: Self, right: Self) -> Result<Self> {
        let frequency = left
            .frequency()
            .checked_add(right.frequency())
            .ok_or(Error::InvalidInput("frequency overflow"))?;
        Ok(Node::Internal {
            frequency,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Total frequency of the symbols under this node.
    pub fn frequency(&self) -> usize {
        match self {
            Node::Leaf { frequency, .. } => *frequency,
            Node::Internal { frequency, .. } => *frequency,
        }
    }

    /// True for a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol held by a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// `(left, right)` children of an internal node, `None` for leaves.
    pub fn children(&self) -> Option<(&Node<S>, &Node<S>)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// Number of leaves, i.e. distinct symbols.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path (0 for a lone leaf).
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Sum of `frequency * depth` over all leaves: the number of bits the
    /// counted input encodes to. `None` if that does not fit in a `usize`.
    ///
    /// A lone leaf root counts at depth 1, matching its one-bit code.
    pub fn weighted_path_length(&self) -> Option<usize> {
        match self {
            Node::Leaf { frequency, .. } => Some(*frequency),
            Node::Internal { .. } => self.path_weight(0),
        }
    }

    fn path_weight(&self, depth: usize) -> Option<usize> {
        match self {
            Node::Leaf { frequency, .. } => frequency.checked_mul(depth),
            Node::Internal { left, right, .. } => left
                .path_weight(depth + 1)?
                .checked_add(right.path_weight(depth + 1)?),
        }
    }
}

/// A node waiting in the priority queue.
struct Queued<S> {
    sequence: usize,
    node: Node<S>,
}

impl<S> Queued<S> {
    fn key(&self) -> (usize, usize) {
        (self.node.frequency(), self.sequence)
    }
}

impl<S> PartialEq for Queued<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for Queued<S> {}

impl<S> Ord for Queued<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key()) // Min-priority queue
    }
}

impl<S> PartialOrd for Queued<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table.
///
/// With a single distinct symbol the root is that symbol's leaf.
///
/// # Errors
/// Returns `Error::InvalidInput` if the table is empty or a merged
/// frequency overflows.
pub fn build_tree<S: Clone>(freq: &FrequencyTable<S>) -> Result<Node<S>> {
    if freq.is_empty() {
        return Err(Error::InvalidInput("empty frequency table"));
    }

    let mut heap: BinaryHeap<Queued<S>> = freq
        .iter()
        .enumerate()
        .map(|(sequence, (symbol, frequency))| Queued {
            sequence,
            node: Node::Leaf {
                symbol: symbol.clone(),
                frequency,
            },
        })
        .collect();
    let mut next_sequence = heap.len();

    loop {
        let Some(left) = heap.pop() else {
            return Err(Error::InvalidInput("empty frequency table"));
        };
        let Some(right) = heap.pop() else {
            let root = left.node;
            debug!(
                leaves = root.leaf_count(),
                weight = root.frequency(),
                depth = root.depth(),
                "built huffman tree"
            );
            return Ok(root);
        };

        heap.push(Queued {
            sequence: next_sequence,
            node: Node::merge(left.node, right.node)?,
        });
        next_sequence += 1;
    }
}
