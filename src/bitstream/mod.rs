//! The bitstream module holds the bit-level types of the coder.
//!
//! A BitCode is a single symbol's code. A BitSequence is the logical bit string made by
//! concatenating codes in input order. Bits are kept one per entry and are never
//! packed into bytes; there is no compressed file format here.
//!
pub mod bit_code;
pub mod bit_sequence;
