// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Global validation of a completed lattice.
//!
//! The candidate generator already enforces every local rule while the grid
//! is filled, so on a well-formed boundary these checks only reject
//! malformed input. They are re-run independently so that a lattice built any
//! other way (e.g. a partially pre-filled grid) is held to the same rules.

use crate::config::PathCheck;
use crate::constraints::{check_paths, ValidationFailure};
use crate::geometry::{Boundary, Direction, Lattice};
use tracing::trace;

/// Check a completed lattice against its boundary.
///
/// Returns the first failed check. The terminal path walk is always run;
/// under [`PathCheck::Ignore`] its outcome is only logged.
pub fn validate(
    lattice: &Lattice,
    boundary: &Boundary,
    path_check: PathCheck,
) -> Result<(), ValidationFailure> {
    let rows = lattice.rows();
    let columns = lattice.columns();

    if boundary.inputs.len() != rows || boundary.outputs.len() != columns {
        return Err(ValidationFailure::DimensionMismatch {
            rows,
            columns,
            inputs: boundary.inputs.len(),
            outputs: boundary.outputs.len(),
        });
    }
    if lattice.is_empty() {
        return Err(ValidationFailure::EmptyGrid);
    }
    if !boundary.is_balanced() {
        return Err(ValidationFailure::UnbalancedTerminals {
            inputs: boundary.input_count(),
            outputs: boundary.output_count(),
        });
    }

    check_shared_edges(lattice)?;

    for (row, col, vertex) in lattice.iter() {
        if vertex.exit_count() != 2 {
            return Err(ValidationFailure::WrongDegree {
                row,
                col,
                exits: vertex.exit_count(),
            });
        }
        if vertex.is_forbidden() {
            return Err(ValidationFailure::ForbiddenShape { row, col });
        }
    }

    for (row, &input) in boundary.inputs.iter().enumerate() {
        if lattice.get(row, 0).east() == input {
            return Err(ValidationFailure::InputDirection { row });
        }
    }
    for (col, &output) in boundary.outputs.iter().enumerate() {
        if lattice.get(rows - 1, col).north() != output {
            return Err(ValidationFailure::OutputDirection { col });
        }
    }
    for row in 0..rows {
        if lattice.get(row, columns - 1).west() {
            return Err(ValidationFailure::OpenLastColumn { row });
        }
    }
    for col in 0..columns {
        if !lattice.get(0, col).south() {
            return Err(ValidationFailure::OpenFirstRow { col });
        }
    }

    match (check_paths(lattice, boundary), path_check) {
        (Ok(()), _) => Ok(()),
        (Err(failure), PathCheck::Enforce) => Err(failure),
        (Err(failure), PathCheck::Ignore) => {
            trace!(%failure, "ignoring terminal path failure");
            Ok(())
        }
    }
}

/// Boolean form of [`validate`].
pub fn is_valid(lattice: &Lattice, boundary: &Boundary, path_check: PathCheck) -> bool {
    validate(lattice, boundary, path_check).is_ok()
}

/// Adjacent cells must disagree on each shared edge.
fn check_shared_edges(lattice: &Lattice) -> Result<(), ValidationFailure> {
    for (row, col, vertex) in lattice.iter() {
        if row > 0 && lattice.get(row - 1, col).north() == vertex.south() {
            return Err(ValidationFailure::EdgeMismatch {
                row,
                col,
                side: Direction::South,
            });
        }
        if col > 0 && lattice.get(row, col - 1).west() == vertex.east() {
            return Err(ValidationFailure::EdgeMismatch {
                row,
                col,
                side: Direction::East,
            });
        }
    }
    Ok(())
}
