//! Error types for circuit construction, vector reading and simulation

use thiserror::Error;

/// Errors raised while building the circuit graph
#[derive(Debug, Error)]
pub enum CircuitError {
    /// Two nodes share a name or output alias
    #[error("duplicate signal or instance name '{0}'")]
    DuplicateName(String),

    /// A gate instance with more fanins than the data model allows
    #[error("gate '{node}' has {count} inputs, at most 2 are supported")]
    TooManyInputs { node: String, count: usize },
}

/// Errors raised while reading a test vector file
#[derive(Debug, Error)]
pub enum VectorError {
    /// The vector file could not be read
    #[error("failed to read test vectors '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A token that is not an integer
    #[error("line {line}, column {column}: invalid vector value '{token}'")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },
}

/// Fatal simulation preconditions
#[derive(Debug, Error)]
pub enum SimError {
    /// Vector width does not match the circuit's primary-input count
    #[error(
        "number of inputs in vector file ({found}) does not match circuit primary inputs ({expected})"
    )]
    ArityMismatch { expected: usize, found: usize },
}
