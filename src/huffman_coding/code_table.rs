use log::trace;
use rustc_hash::FxHashMap;

use super::huffman::Node;
use crate::bitstream::bit_code::BitCode;
use crate::Symbol;

/// Maps each symbol of a huffman tree to its code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeTable {
    codes: FxHashMap<Symbol, BitCode>,
}

impl CodeTable {
    /// Walk the tree and record the path to every leaf. A tree that is a lone leaf
    /// gives its symbol the zero-length code.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = FxHashMap::default();
        collect_codes(root, BitCode::new(), &mut codes);
        Self { codes }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&BitCode> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries sorted by symbol.
    pub fn sorted(&self) -> Vec<(Symbol, BitCode)> {
        let mut entries: Vec<(Symbol, BitCode)> =
            self.codes.iter().map(|(&s, &c)| (s, c)).collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries
    }
}

impl FromIterator<(Symbol, BitCode)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, BitCode)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Recursively walk the tree. Each child gets its own copy of the path so far.
fn collect_codes(node: &Node, prefix: BitCode, codes: &mut FxHashMap<Symbol, BitCode>) {
    match node {
        Node::Internal { left, right, .. } => {
            collect_codes(left, prefix.with_bit(false), codes);
            collect_codes(right, prefix.with_bit(true), codes);
        }
        Node::Leaf { symbol, .. } => {
            trace!("symbol {} -> {}", symbol, prefix);
            codes.insert(*symbol, prefix);
        }
    };
}
