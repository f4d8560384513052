use rayon::prelude::*;

use crate::Symbol;

/// Number of distinct values a symbol can take.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence count of every symbol seen in the input. Symbols that never occur are
/// not part of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: Vec<u64>,
}

impl FreqTable {
    /// Count the symbols in `data`. Uses parallelism when the data set is over 64k.
    pub fn from_symbols(data: &[Symbol]) -> Self {
        Self {
            counts: freqs(data),
        }
    }

    /// Occurrence count for `symbol`, or None if it never occurs.
    pub fn get(&self, symbol: Symbol) -> Option<u64> {
        match self.counts[symbol as usize] {
            0 => None,
            n => Some(n),
        }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Sum of all counts, which is the length of the input.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Present symbols with their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &n)| n > 0)
            .map(|(sym, &n)| (sym as Symbol, n))
    }
}

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
fn freqs(data: &[Symbol]) -> Vec<u64> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u64; ALPHABET_SIZE],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; ALPHABET_SIZE],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut freqs = vec![0_u64; ALPHABET_SIZE];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}
