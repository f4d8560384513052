//! Huffman code builder.
//!
//! Counts the symbols (bytes) of an input, builds a minimum-weight prefix-free code
//! for them with Huffman's greedy merge, and renders the input as the concatenation
//! of each symbol's code.
//!
//! The pipeline runs in four stages, each consuming all of the previous stage's output:
//!
//! 1. [`tools::freq_count::FreqTable`] counts each distinct symbol.
//! 2. [`huffman_coding::huffman::build_tree`] merges the two lightest nodes until one
//!    root is left.
//! 3. [`huffman_coding::code_table::CodeTable`] walks the tree, 0 for left and 1 for right.
//! 4. [`bitstream::bit_sequence::render`] looks up and concatenates the codes in input order.
//!
//! [`compression::encode::encode`] runs all four.
//!
//! Basic usage from the command line:
//!
//! `$> huffcode test.txt`
//!
//! This prints the code of every byte in test.txt, then the file as a string of bits.
//! Nothing is written to disk, and there is no decoder.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

/// One input symbol: a byte.
pub type Symbol = u8;

pub use compression::encode::{encode, Encoded};
pub use error::{HuffError, Result};
