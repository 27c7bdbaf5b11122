//! Test vector file reader
//!
//! One vector per line, whitespace-separated integers, column `i` driving the
//! `i`-th primary input:
//!
//! ```text
//! # a b c
//! 0 1 1
//! 1 0 1
//! ```
//!
//! The width is taken from the first vector. Shorter rows are padded with
//! zeros and longer rows are truncated to that width. Any non-zero integer
//! is a logic one.

use crate::error::VectorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::warn;

/// One assignment of values to all primary inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    pub bits: Vec<bool>,
}

impl TestVector {
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

impl fmt::Display for TestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

/// A rectangular set of test vectors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorSet {
    /// Column count shared by every vector
    pub width: usize,
    pub vectors: Vec<TestVector>,
}

impl VectorSet {
    /// Build a set from rows of bits; the width comes from the first row
    pub fn from_rows(rows: impl IntoIterator<Item = Vec<bool>>) -> Self {
        let mut set = VectorSet::default();
        for row in rows {
            set.push_row(row, 0);
        }
        set
    }

    /// Read a vector file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VectorError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| VectorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse vector text
    pub fn parse(source: &str) -> Result<Self, VectorError> {
        let mut set = VectorSet::default();

        for (line_index, line) in source.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }

            let mut row = Vec::new();
            for (column, token) in trimmed.split_whitespace().enumerate() {
                let value: i64 = token.parse().map_err(|_| VectorError::InvalidToken {
                    line: line_index + 1,
                    column: column + 1,
                    token: token.to_string(),
                })?;
                row.push(value != 0);
            }
            set.push_row(row, line_index + 1);
        }

        Ok(set)
    }

    fn push_row(&mut self, mut row: Vec<bool>, line: usize) {
        if self.vectors.is_empty() {
            self.width = row.len();
        } else if row.len() != self.width {
            warn!(
                line,
                found = row.len(),
                width = self.width,
                "ragged vector row resized to the first row's width"
            );
            row.resize(self.width, false);
        }
        self.vectors.push(TestVector::new(row));
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestVector> {
        self.vectors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let set = VectorSet::parse("0 0\n1 1\n").unwrap();
        assert_eq!(set.width, 2);
        assert_eq!(set.len(), 2);
        assert_eq!(set.vectors[0].bits, vec![false, false]);
        assert_eq!(set.vectors[1].to_string(), "11");
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let set = VectorSet::parse("# a b\n\n// header\n1 0\n  \n0 1\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.vectors[1].bits, vec![false, true]);
    }

    #[test]
    fn test_nonzero_is_one() {
        let set = VectorSet::parse("2 0 -1\n").unwrap();
        assert_eq!(set.vectors[0].bits, vec![true, false, true]);
    }

    #[test]
    fn test_ragged_rows_take_first_width() {
        let set = VectorSet::parse("1 1 1\n1\n0 1 0 1\n").unwrap();
        assert_eq!(set.width, 3);
        assert_eq!(set.vectors[1].bits, vec![true, false, false]);
        assert_eq!(set.vectors[2].bits, vec![false, true, false]);
    }

    #[test]
    fn test_invalid_token() {
        let err = VectorSet::parse("0 1\n1 x\n").unwrap_err();
        match err {
            VectorError::InvalidToken {
                line,
                column,
                token,
            } => {
                assert_eq!((line, column), (2, 2));
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_file() {
        let set = VectorSet::parse("").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.width, 0);
    }

    #[test]
    fn test_from_rows() {
        let set = VectorSet::from_rows([vec![true, false], vec![true]]);
        assert_eq!(set.width, 2);
        assert_eq!(set.vectors[1].bits, vec![true, false]);
    }

    #[test]
    fn test_missing_file() {
        let err = VectorSet::from_path("/nonexistent/vectors.txt").unwrap_err();
        assert!(matches!(err, VectorError::Io { .. }));
    }
}
