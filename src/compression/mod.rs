//! Drives the coder: frequency count, tree build, code derivation, and rendering,
//! plus the file and stdout glue used by the command line tool.
pub mod encode;
