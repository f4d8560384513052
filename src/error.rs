//! Error types for the huffman coding pipeline.

use thiserror::Error;

use crate::Symbol;

/// Everything that can go wrong between reading the input and rendering the bits.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The frequency table had no entries, so there is nothing to build a tree from.
    #[error("no symbols to encode: the input is empty")]
    EmptyInput,

    /// A symbol in the input has no entry in the code table it is being rendered with.
    #[error("symbol {0} has no code in the code table")]
    UnknownSymbol(Symbol),

    /// The input file could not be opened or read.
    #[error("can't read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for huffman coding operations.
pub type Result<T> = std::result::Result<T, HuffError>;
