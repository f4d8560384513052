use clap::Parser;
use log::info;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map a `-v` level onto a verbosity. Anything above 5 is as chatty as 5.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Build a huffman code for the bytes of a file",
    long_about = "
    Counts every byte value in the input file, builds a huffman tree from those counts,
    and prints the code of each byte followed by the whole file rendered as one string
    of 0s and 1s. Nothing is written to disk."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: String,

    /// Also print the huffman tree
    #[clap(short = 't', long = "tree")]
    tree: bool,

    /// Don't print the encoded bit sequence
    #[clap(short = 'n', long = "no-bits")]
    no_bits: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,
}

/// Define all user settable options to control program behavior
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Name of file to read for input
    pub file: String,
    /// Print the tree before the code table
    pub show_tree: bool,
    /// Print the rendered bits after the code table
    pub show_bits: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            show_tree: false,
            show_bits: true,
            verbose: Verbosity::Warnings,
        }
    }
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        Self {
            file: args.filename,
            show_tree: args.tree,
            show_bits: !args.no_bits,
            verbose: Verbosity::from_level(args.v),
        }
    }
}

/// Parse the command line and set the log level from it. Exits with a usage message
/// if the arguments don't parse (including a missing file name).
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Getting input from the file {}", opts.file);
    if opts.show_tree {
        info!("Printing the huffman tree")
    };
    if !opts.show_bits {
        info!("Not printing the encoded bits")
    };
    info!("---- Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::{Args, HuffOpts, Verbosity};
    use clap::Parser;

    #[test]
    fn defaults() {
        let opts = HuffOpts::from(Args::parse_from(["huffcode", "input.txt"]));
        assert_eq!(opts.file, "input.txt");
        assert!(!opts.show_tree);
        assert!(opts.show_bits);
        assert_eq!(opts.verbose, Verbosity::Warnings);
    }

    #[test]
    fn flags() {
        let opts = HuffOpts::from(Args::parse_from(["huffcode", "-t", "-n", "-v", "4", "f"]));
        assert!(opts.show_tree);
        assert!(!opts.show_bits);
        assert_eq!(opts.verbose, Verbosity::Debug);
    }

    #[test]
    fn missing_file_is_rejected() {
        assert!(Args::try_parse_from(["huffcode"]).is_err());
    }

    #[test]
    fn verbosity_saturates() {
        assert_eq!(Verbosity::from_level(9), Verbosity::Trace);
        assert_eq!(Verbosity::from_level(0).level_filter(), log::LevelFilter::Off);
    }
}
