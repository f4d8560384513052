use log::{debug, trace};

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FreqTable;
use crate::Symbol;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// A huffman tree node. Every internal node owns exactly two children, and its weight
/// is the sum of the weights of the leaves beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        weight: u64,
        symbol: Symbol,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Join two subtrees under a new internal node.
    pub fn join(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of levels below this node. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Write an indented dump of the tree, two spaces per level.
    pub fn write_tree<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.write_level(out, 0)
    }

    fn write_level<W: fmt::Write>(&self, out: &mut W, level: usize) -> fmt::Result {
        match self {
            Node::Leaf { weight, symbol } => writeln!(out, "{} {}", weight, symbol),
            Node::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(out, "NODE {}", weight)?;
                write!(out, "{:indent$}left: ", "", indent = level * 2)?;
                left.write_level(out, level + 1)?;
                write!(out, "{:indent$}right: ", "", indent = level * 2)?;
                right.write_level(out, level + 1)
            }
        }
    }
}

/// A node waiting in the build queue. `seq` is its insertion number and breaks weight
/// ties, so the same table always gives the same tree.
#[derive(Debug)]
struct Queued {
    seq: usize,
    node: Node,
}

impl Ord for Queued {
    /// BinaryHeap is a max-heap: reverse (weight, seq) so the lightest, oldest node wins.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.node.weight(), other.seq).cmp(&(self.node.weight(), self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

/// Build the huffman tree for `freqs` by repeatedly merging the two lightest nodes.
///
/// Leaves enter the queue in ascending symbol order and each merged node is queued
/// after everything already in it. Of the two nodes pulled for a merge, the first
/// becomes the left child. A table with a single symbol gives a tree that is just that
/// leaf.
pub fn build_tree(freqs: &FreqTable) -> Result<Node> {
    if freqs.is_empty() {
        return Err(HuffError::EmptyInput);
    }

    let mut heap: BinaryHeap<Queued> = freqs
        .iter()
        .enumerate()
        .map(|(seq, (symbol, weight))| Queued {
            seq,
            node: Node::Leaf { weight, symbol },
        })
        .collect();
    debug!("Building huffman tree from {} distinct symbols", heap.len());

    let mut next_seq = heap.len();
    loop {
        let left = heap.pop().ok_or(HuffError::EmptyInput)?;
        // The last node standing is the root
        let right = match heap.pop() {
            Some(right) => right,
            None => return Ok(left.node),
        };
        let node = Node::join(left.node, right.node);
        trace!(
            "merge #{} and #{} into #{} (weight {})",
            left.seq,
            right.seq,
            next_seq,
            node.weight()
        );
        heap.push(Queued {
            seq: next_seq,
            node,
        });
        next_seq += 1;
    }
}
