// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a completed lattice is rejected.

use crate::geometry::Direction;
use strum_macros::{EnumCount as EnumCountMacro, EnumDiscriminants};
use thiserror::Error;

/// A structural or connectivity check that a completed lattice failed.
///
/// [`ValidationFailureKind`] names the variant without its fields, and is
/// used to count rejections per kind.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumDiscriminants)]
#[strum_discriminants(name(ValidationFailureKind))]
#[strum_discriminants(derive(Hash, EnumCountMacro))]
pub enum ValidationFailure {
    #[error("lattice is {rows}x{columns} but the boundary has {inputs} inputs and {outputs} outputs")]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        inputs: usize,
        outputs: usize,
    },

    #[error("lattice has no cells")]
    EmptyGrid,

    #[error("{inputs} paths enter but {outputs} paths leave")]
    UnbalancedTerminals { inputs: usize, outputs: usize },

    /// Two neighbouring cells both claim (or both refuse) the shared edge.
    #[error("cell ({row}, {col}) disagrees with its {side:?} neighbour on the shared edge")]
    EdgeMismatch {
        row: usize,
        col: usize,
        side: Direction,
    },

    #[error("cell ({row}, {col}) has {exits} exits, expected 2")]
    WrongDegree { row: usize, col: usize, exits: usize },

    #[error("cell ({row}, {col}) has the forbidden North+West shape")]
    ForbiddenShape { row: usize, col: usize },

    #[error("row {row} does not match its input terminal")]
    InputDirection { row: usize },

    #[error("column {col} does not match its output terminal")]
    OutputDirection { col: usize },

    #[error("row {row} lets flow out through the last column")]
    OpenLastColumn { row: usize },

    #[error("column {col} takes flow in through the first row")]
    OpenFirstRow { col: usize },

    /// The path walk found a cell with neither a North nor a West exit.
    #[error("path from row {source_row} is stuck at cell ({row}, {col})")]
    StuckPath {
        source_row: usize,
        row: usize,
        col: usize,
    },

    #[error("path from row {source_row} ends at column {reached}, expected column {target_col}")]
    MisroutedPath {
        source_row: usize,
        target_col: usize,
        reached: usize,
    },
}

impl ValidationFailure {
    /// The fieldless kind of this failure.
    pub fn kind(&self) -> ValidationFailureKind {
        self.into()
    }
}
