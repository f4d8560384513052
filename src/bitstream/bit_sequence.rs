use std::fmt::{self, Display, Formatter};

use log::debug;

use super::bit_code::BitCode;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::Symbol;

/// A logical sequence of bits, one entry per bit. Nothing is packed into bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn with_capacity(size: usize) -> Self {
        Self {
            bits: Vec::with_capacity(size),
        }
    }

    /// Append every bit of `code`, root end first.
    pub fn push_code(&mut self, code: &BitCode) {
        self.bits.extend(code.iter());
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl Display for BitSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Concatenate the code of every symbol in `data`, in input order.
pub fn render(table: &CodeTable, data: &[Symbol]) -> Result<BitSequence> {
    // First pass sizes the output and catches symbols the table doesn't know.
    let mut total = 0;
    for &sym in data {
        total += table.get(sym).ok_or(HuffError::UnknownSymbol(sym))?.len();
    }

    let mut out = BitSequence::with_capacity(total);
    for &sym in data {
        if let Some(code) = table.get(sym) {
            out.push_code(code);
        }
    }
    debug!("Rendered {} symbols into {} bits", data.len(), out.len());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::render;
    use crate::bitstream::bit_code::BitCode;
    use crate::error::HuffError;
    use crate::huffman_coding::code_table::CodeTable;

    fn table() -> CodeTable {
        [
            (3, BitCode::from_bits(0b0, 1)),
            (1, BitCode::from_bits(0b10, 2)),
            (2, BitCode::from_bits(0b11, 2)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn concatenates_in_input_order() {
        let bits = render(&table(), &[3, 3, 3, 1, 2]).unwrap();
        assert_eq!(bits.to_string(), "0001011");
        assert_eq!(bits.len(), 7);
    }

    #[test]
    fn empty_input_renders_nothing() {
        let bits = render(&table(), &[]).unwrap();
        assert!(bits.is_empty());
        assert_eq!(bits.to_string(), "");
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let result = render(&table(), &[3, 9, 1]);
        assert!(matches!(result, Err(HuffError::UnknownSymbol(9))));
    }

    #[test]
    fn zero_length_codes_add_no_bits() {
        let table: CodeTable = [(5, BitCode::new())].into_iter().collect();
        let bits = render(&table, &[5, 5, 5]).unwrap();
        assert!(bits.is_empty());
    }
}
