//! The huffman module builds the code tree and derives the code of every symbol from it.
//!
//! The tree is built with the classic greedy merge: every symbol starts as a leaf
//! weighted by how often it occurs, and the two lightest nodes are joined under a new
//! node until one root is left. A symbol's code is its path from the root, 0 for each
//! left turn and 1 for each right turn. Since symbols only sit at leaves, no code is a
//! prefix of another.
//!
//! Weight ties are broken by queue insertion order, so the same input always produces
//! the same tree and the same codes.
//!

pub mod code_table;
pub mod huffman;
