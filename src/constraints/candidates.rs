// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Local candidate generation for one cell.
//!
//! Cells are filled in row-major order, so when cell `(row, col)` is chosen
//! only the cell below it (`row - 1`) and the cell to its right in index
//! order (`col - 1`) are fixed. The generator keeps those shapes that agree
//! with the fixed neighbours and with any boundary the cell touches.

use crate::geometry::{Boundary, Lattice, ShapeSet};

/// Shapes that are locally consistent at `(row, col)`.
///
/// Only cells with a row-major index below `row * columns + col` are read.
/// A position outside the grid, or a boundary sequence too short to cover
/// this cell, yields no candidates.
pub fn candidates(lattice: &Lattice, row: usize, col: usize, boundary: &Boundary) -> ShapeSet {
    let rows = lattice.rows();
    let columns = lattice.columns();
    if row >= rows || col >= columns {
        return ShapeSet::empty();
    }
    let mut shapes = ShapeSet::all();

    // Shared edges must disagree: one side exits where the other enters.
    if row > 0 {
        let below = lattice.get(row - 1, col);
        shapes = shapes.filter(|v| v.south() != below.north());
    }
    if col > 0 {
        let beside = lattice.get(row, col - 1);
        shapes = shapes.filter(|v| v.east() != beside.west());
    }

    if col == columns - 1 {
        shapes = shapes.filter(|v| !v.west());
    }
    if row == 0 {
        shapes = shapes.filter(|v| v.south());
    }
    if col == 0 {
        let Some(&input) = boundary.inputs.get(row) else {
            return ShapeSet::empty();
        };
        shapes = shapes.filter(|v| v.east() != input);
    }
    if row == rows - 1 {
        let Some(&output) = boundary.outputs.get(col) else {
            return ShapeSet::empty();
        };
        shapes = shapes.filter(|v| v.north() == output);
    }
    shapes
}
