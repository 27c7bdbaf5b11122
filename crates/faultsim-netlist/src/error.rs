//! Error types for netlist parsing

use thiserror::Error;

/// Result type for netlist operations
pub type Result<T> = std::result::Result<T, NetlistError>;

/// Errors that can occur while reading or parsing a netlist
#[derive(Debug, Error)]
pub enum NetlistError {
    /// The netlist file could not be read
    #[error("failed to read netlist '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A token that does not fit the grammar at this position
    #[error("line {line}: expected {expected}, found '{found}'")]
    UnexpectedToken {
        line: usize,
        expected: String,
        found: String,
    },

    /// Input ended in the middle of a statement
    #[error("unexpected end of netlist: expected {expected}")]
    UnexpectedEof { expected: String },

    /// A gate keyword outside the supported primitive set
    #[error("line {line}: unknown gate primitive '{keyword}'")]
    UnknownPrimitive { line: usize, keyword: String },

    /// A gate instance with the wrong number of inputs for its kind
    #[error("line {line}: gate '{instance}' ({kind}) takes {expected} input(s), found {found}")]
    Arity {
        line: usize,
        instance: String,
        kind: String,
        expected: usize,
        found: usize,
    },
}
