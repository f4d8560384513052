//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::exit;

use huffcode::compression::encode::encode_file;
use huffcode::tools::cli::huffopts_init;

use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. Stdout carries the
    // results, so log to stderr.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Can't start logging: {}", e);
    }

    let options = huffopts_init();

    if let Err(e) = encode_file(&options) {
        eprintln!("huffcode: {}", e);
        exit(1);
    }

    info!("Done.\n");
}
