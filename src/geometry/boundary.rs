// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Boundary conditions: which rows inject flow and which columns extract it.
//!
//! `inputs[row]` is true when a path originates at the column-0 edge of that
//! row; `outputs[col]` is true when a path leaves through the North edge of
//! the last row at that column.
//!
//! The search accepts any boundary, including malformed ones (wrong lengths,
//! unequal terminal counts), and simply finds no admissible lattice for them.
//! [`Boundary::checked`] reports malformation up front for callers that need
//! to tell "malformed" from "impossible".
//!
//! # Examples
//!
//! ```
//! use ice_lattice::geometry::Boundary;
//!
//! let boundary = Boundary::new(vec![true, false, true], vec![false, true, true]);
//! assert_eq!(boundary.terminal_pairs(), vec![(0, 1), (2, 2)]);
//!
//! let parsed = Boundary::parse("101", "011").unwrap();
//! assert_eq!(parsed, boundary);
//! ```

use thiserror::Error;

/// Why a boundary cannot describe a lattice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    #[error("expected {expected} input terminals (one per row), got {actual}")]
    InputLength { expected: usize, actual: usize },

    #[error("expected {expected} output terminals (one per column), got {actual}")]
    OutputLength { expected: usize, actual: usize },

    #[error("{inputs} paths enter but {outputs} paths leave")]
    UnbalancedTerminals { inputs: usize, outputs: usize },

    #[error("lattice must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("invalid terminal flag {found:?} at position {position} (use 0/1 or f/t)")]
    InvalidFlag { found: char, position: usize },
}

/// The `inputs` / `outputs` terminal declarations of a lattice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Boundary {
    /// One flag per row: does a path enter at this row?
    pub inputs: Vec<bool>,
    /// One flag per column: does a path leave at this column?
    pub outputs: Vec<bool>,
}

impl Boundary {
    /// Create a boundary without checking it against any grid.
    pub fn new(inputs: Vec<bool>, outputs: Vec<bool>) -> Self {
        Self { inputs, outputs }
    }

    /// A boundary with no terminals for a rows x columns grid.
    pub fn closed(rows: usize, columns: usize) -> Self {
        Self::new(vec![false; rows], vec![false; columns])
    }

    /// Create a boundary, checking that it fits a rows x columns grid.
    pub fn checked(
        rows: usize,
        columns: usize,
        inputs: Vec<bool>,
        outputs: Vec<bool>,
    ) -> Result<Self, BoundaryError> {
        if rows == 0 || columns == 0 {
            return Err(BoundaryError::EmptyGrid { rows, columns });
        }
        if inputs.len() != rows {
            return Err(BoundaryError::InputLength {
                expected: rows,
                actual: inputs.len(),
            });
        }
        if outputs.len() != columns {
            return Err(BoundaryError::OutputLength {
                expected: columns,
                actual: outputs.len(),
            });
        }
        let boundary = Self::new(inputs, outputs);
        if !boundary.is_balanced() {
            return Err(BoundaryError::UnbalancedTerminals {
                inputs: boundary.input_count(),
                outputs: boundary.output_count(),
            });
        }
        Ok(boundary)
    }

    /// Parse both sequences from flag strings such as `"001"` or `"fft"`.
    pub fn parse(inputs: &str, outputs: &str) -> Result<Self, BoundaryError> {
        Ok(Self::new(parse_flags(inputs)?, parse_flags(outputs)?))
    }

    /// Number of rows at which a path enters.
    pub fn input_count(&self) -> usize {
        self.inputs.iter().filter(|&&flag| flag).count()
    }

    /// Number of columns at which a path leaves.
    pub fn output_count(&self) -> usize {
        self.outputs.iter().filter(|&&flag| flag).count()
    }

    /// Equal numbers of entering and leaving paths.
    pub fn is_balanced(&self) -> bool {
        self.input_count() == self.output_count()
    }

    /// Pair the k-th active input row with the k-th active output column.
    ///
    /// Pairs are `(source_row, target_col)` in increasing order. Surplus
    /// terminals on either side stay unpaired.
    pub fn terminal_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::with_capacity(self.inputs.len() + self.outputs.len());
        let (mut i, mut j) = (0, 0);
        while i < self.inputs.len() && j < self.outputs.len() {
            if !self.inputs[i] {
                i += 1;
                continue;
            }
            if !self.outputs[j] {
                j += 1;
                continue;
            }
            pairs.push((i, j));
            i += 1;
            j += 1;
        }
        pairs
    }
}

/// Parse one flag string; `1`/`t`/`T` are true, `0`/`f`/`F` are false.
pub fn parse_flags(text: &str) -> Result<Vec<bool>, BoundaryError> {
    text.chars()
        .enumerate()
        .map(|(position, found)| match found {
            '1' | 't' | 'T' => Ok(true),
            '0' | 'f' | 'F' => Ok(false),
            _ => Err(BoundaryError::InvalidFlag { found, position }),
        })
        .collect()
}
