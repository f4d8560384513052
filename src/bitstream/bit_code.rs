use std::fmt::{self, Display, Formatter};

/// A root-to-leaf path in a huffman tree: 0 for each left turn, 1 for each right turn.
///
/// The code is a plain value. Appending a bit returns a new code and leaves the original
/// untouched, so the two children of a node can each extend the same prefix.
///
/// Bits are kept right-aligned in a u128, the most significant valid bit being the turn
/// made nearest the root. A huffman tree of depth d needs a total weight of at least
/// Fib(d + 2), so no tree built from u64 weights gets anywhere near 128 levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitCode {
    bits: u128,
    len: u8,
}

impl BitCode {
    pub const MAX_LEN: u8 = 128;

    /// The zero-length code.
    pub fn new() -> Self {
        Self { bits: 0, len: 0 }
    }

    /// Build a code from the `len` least significant bits of `bits`.
    pub fn from_bits(bits: u128, len: u8) -> Self {
        debug_assert!(len <= Self::MAX_LEN);
        let mask = if len == 0 {
            0
        } else {
            u128::MAX >> (Self::MAX_LEN - len)
        };
        Self {
            bits: bits & mask,
            len,
        }
    }

    /// Return this code with `bit` appended on the leaf side.
    pub fn with_bit(self, bit: bool) -> Self {
        debug_assert!(self.len < Self::MAX_LEN, "code longer than 128 bits");
        Self {
            bits: (self.bits << 1) | bit as u128,
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The code right-aligned in an integer.
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Bit `i`, counted from the root end of the path.
    pub fn bit(&self, i: usize) -> bool {
        debug_assert!(i < self.len());
        (self.bits >> (self.len() - 1 - i)) & 1 == 1
    }

    /// Bits from the root end to the leaf end.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.bit(i))
    }

    /// True if `self` is a prefix of `other` (every code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &BitCode) -> bool {
        if self.len > other.len {
            return false;
        }
        if self.len == 0 {
            return true;
        }
        (other.bits >> (other.len - self.len)) == self.bits
    }
}

impl Display for BitCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // `{:0w$b}` would still print a lone "0" for the empty code
        if self.len == 0 {
            return Ok(());
        }
        write!(f, "{:0width$b}", self.bits, width = self.len())
    }
}

#[cfg(test)]
mod test {
    use super::BitCode;

    fn code(s: &str) -> BitCode {
        s.chars().fold(BitCode::new(), |c, ch| c.with_bit(ch == '1'))
    }

    #[test]
    fn display_pads_to_length() {
        assert_eq!(BitCode::from_bits(0, 3).to_string(), "000");
        assert_eq!(BitCode::from_bits(0b10, 4).to_string(), "0010");
        assert_eq!(code("1011").to_string(), "1011");
    }

    #[test]
    fn empty_code_prints_nothing() {
        assert_eq!(BitCode::new().to_string(), "");
        assert!(BitCode::new().is_empty());
    }

    #[test]
    fn with_bit_leaves_parent_alone() {
        let parent = code("10");
        let left = parent.with_bit(false);
        let right = parent.with_bit(true);
        assert_eq!(parent.to_string(), "10");
        assert_eq!(left.to_string(), "100");
        assert_eq!(right.to_string(), "101");
    }

    #[test]
    fn iter_runs_root_to_leaf() {
        let bits: Vec<bool> = code("110").iter().collect();
        assert_eq!(bits, vec![true, true, false]);
    }

    #[test]
    fn prefix_checks() {
        assert!(code("10").is_prefix_of(&code("101")));
        assert!(code("101").is_prefix_of(&code("101")));
        assert!(!code("11").is_prefix_of(&code("101")));
        assert!(!code("101").is_prefix_of(&code("10")));
        assert!(BitCode::new().is_prefix_of(&code("0")));
    }

    #[test]
    fn long_codes() {
        let c = (0..100).fold(BitCode::new(), |c, i| c.with_bit(i % 2 == 0));
        assert_eq!(c.len(), 100);
        assert!(c.to_string().starts_with("1010"));
        assert_eq!(c.to_string().len(), 100);
    }
}
