//! The tools module provides helper functions for the huffman coder.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Frequency count of the input symbols.
//!
pub mod cli;
pub mod freq_count;
