//! faultsim netlist - structural Verilog front end
//!
//! This crate handles:
//! - The gate vocabulary shared by the parser and the simulator
//! - Tokenizing a structural Verilog subset with Logos
//! - Parsing one module into a [`NetlistDesc`]

pub mod error;
pub mod lexer;
pub mod netlist;
pub mod parse;

pub use error::{NetlistError, Result};
pub use netlist::{GateInstance, GateKind, NetlistDesc};
pub use parse::NetlistParser;

use std::path::Path;

/// Parse a netlist from a file path
pub fn from_path(path: impl AsRef<Path>) -> Result<NetlistDesc> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| NetlistError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_str(&contents)
}

/// Parse a netlist from source text
pub fn from_str(source: &str) -> Result<NetlistDesc> {
    NetlistParser::new(source).parse()
}
