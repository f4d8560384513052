use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};

use log::{debug, info, warn};

use crate::bitstream::bit_sequence::{render, BitSequence};
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::{build_tree, Node};
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::FreqTable;
use crate::Symbol;

/*
    Each stage consumes all of the previous stage's output before the next one runs:
    count the symbols, build the tree, walk it for codes, then render the input.
*/

/// Everything the pipeline produces for one input.
#[derive(Debug, Clone)]
pub struct Encoded {
    pub freqs: FreqTable,
    pub tree: Node,
    pub table: CodeTable,
    pub bits: BitSequence,
}

impl Encoded {
    /// Mean code length per input symbol, weighted by frequency.
    pub fn mean_code_len(&self) -> f64 {
        match self.freqs.total() {
            0 => 0.0,
            n => self.bits.len() as f64 / n as f64,
        }
    }
}

/// Run the whole pipeline on `data`. Fails with EmptyInput if there is nothing to encode.
pub fn encode(data: &[Symbol]) -> Result<Encoded> {
    let freqs = FreqTable::from_symbols(data);
    debug!(
        "Counted {} symbols, {} distinct",
        freqs.total(),
        freqs.len()
    );

    let tree = build_tree(&freqs)?;
    debug!("Tree built: weight {}, depth {}", tree.weight(), tree.depth());
    if tree.is_leaf() {
        warn!("Only one distinct symbol: its code has zero length and renders no bits");
    }

    let table = CodeTable::from_tree(&tree);
    let bits = render(&table, data)?;

    Ok(Encoded {
        freqs,
        tree,
        table,
        bits,
    })
}

/// Read the file named in `opts`, encode it, and print the results to stdout.
pub fn encode_file(opts: &HuffOpts) -> Result<()> {
    let data = fs::read(&opts.file).map_err(|source| HuffError::Io {
        path: opts.file.clone(),
        source,
    })?;
    info!("Read {} bytes from {}", data.len(), opts.file);

    let encoded = encode(&data)?;
    info!(
        "Encoded {} bytes into {} bits, {:.3} bits per symbol ({:.1}% of original)",
        data.len(),
        encoded.bits.len(),
        encoded.mean_code_len(),
        encoded.mean_code_len() * 100.0 / 8.0
    );

    let report = report(&encoded, opts);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(report.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|source| HuffError::Io {
            path: "<stdout>".to_string(),
            source,
        })
}

/// Format the tree (optional), the code table, and the bits (optional) for printing.
pub fn report(encoded: &Encoded, opts: &HuffOpts) -> String {
    let mut out = String::new();
    // Writing to a String can't fail
    if opts.show_tree {
        let _ = encoded.tree.write_tree(&mut out);
        out.push('\n');
    }
    for (sym, code) in encoded.table.sorted() {
        let weight = encoded.freqs.get(sym).unwrap_or(0);
        let _ = writeln!(
            out,
            "{:3} {:6} {:8} {}",
            sym,
            format!("{:?}", sym as char),
            weight,
            code
        );
    }
    if opts.show_bits {
        out.push('\n');
        let _ = writeln!(out, "{}", encoded.bits);
    }
    out
}

#[cfg(test)]
mod test {
    use super::{encode, encode_file, report};
    use crate::error::HuffError;
    use crate::tools::cli::HuffOpts;

    #[test]
    fn example_input() {
        let encoded = encode(&[3, 3, 3, 1, 2]).unwrap();
        assert_eq!(encoded.tree.weight(), 5);
        let lens: Vec<usize> = [3, 1, 2]
            .iter()
            .map(|&s| encoded.table.get(s).unwrap().len())
            .collect();
        assert_eq!(lens, vec![1, 2, 2]);
        assert_eq!(encoded.bits.len(), 7);
        assert_eq!(encoded.bits.to_string(), "1110001");
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(encode(&[]), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn single_symbol_does_not_crash() {
        let encoded = encode(&[5, 5, 5]).unwrap();
        assert!(encoded.tree.is_leaf());
        assert_eq!(encoded.tree.weight(), 3);
        assert!(encoded.table.get(5).unwrap().is_empty());
        assert!(encoded.bits.is_empty());
        assert_eq!(encoded.mean_code_len(), 0.0);
    }

    #[test]
    fn report_lists_table_then_bits() {
        let encoded = encode(b"aab").unwrap();
        let mut opts = HuffOpts::new("unused");
        let text = report(&encoded, &opts);
        assert_eq!(text, " 97 'a'           2 1\n 98 'b'           1 0\n\n110\n");

        opts.show_bits = false;
        opts.show_tree = true;
        let text = report(&encoded, &opts);
        assert!(text.starts_with("NODE 3\nleft: 1 98\nright: 2 97\n\n"));
        assert!(!text.ends_with("110\n"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let opts = HuffOpts::new("/definitely/not/a/real/file");
        match encode_file(&opts) {
            Err(HuffError::Io { path, .. }) => assert_eq!(path, "/definitely/not/a/real/file"),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
