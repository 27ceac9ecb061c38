// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The rectangular grid of vertices.
//!
//! Cells are stored row-major in a single `Vec`, addressed either by
//! `(row, col)` or by the flat cell index `row * columns + col` that the
//! search walks through.

use crate::geometry::{Direction, Vertex};
use std::fmt;

/// A rows x columns grid of [`Vertex`] values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lattice {
    rows: usize,
    columns: usize,
    cells: Vec<Vertex>,
}

impl Lattice {
    /// Create a lattice with every cell set to [`Vertex::EMPTY`].
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Vertex::EMPTY; rows * columns],
        }
    }

    /// Build a lattice from explicit rows, row 0 first.
    ///
    /// Returns None if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Vertex>>) -> Option<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != columns) {
            return None;
        }
        let nrows = rows.len();
        Some(Self {
            rows: nrows,
            columns,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Split a flat cell index into `(row, col)`.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Get the vertex at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Vertex {
        assert!(
            row < self.rows && col < self.columns,
            "Cell ({}, {}) out of bounds",
            row,
            col
        );
        self.cells[row * self.columns + col]
    }

    /// Get the vertex at `(row, col)`, or None outside the grid.
    pub fn try_get(&self, row: usize, col: usize) -> Option<Vertex> {
        if row < self.rows && col < self.columns {
            Some(self.cells[row * self.columns + col])
        } else {
            None
        }
    }

    /// Overwrite the vertex at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, vertex: Vertex) {
        assert!(
            row < self.rows && col < self.columns,
            "Cell ({}, {}) out of bounds",
            row,
            col
        );
        self.cells[row * self.columns + col] = vertex;
    }

    /// The cells of one row, column 0 first.
    pub fn row(&self, row: usize) -> &[Vertex] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    /// Iterate over `(row, col, vertex)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Vertex)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &vertex)| (index / self.columns, index % self.columns, vertex))
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, row: usize) -> fmt::Result {
        let cells = self.row(row);
        for vertex in cells.iter().rev() {
            write!(f, "  {}", if vertex.north() { '^' } else { 'v' })?;
        }
        writeln!(f)?;

        write!(f, ">")?;
        for vertex in cells.iter().rev() {
            let west = if vertex.west() { '<' } else { '>' };
            let east = if vertex.enters(Direction::East) { '<' } else { '>' };
            write!(f, "{}x{}", west, east)?;
        }
        writeln!(f, " x{}", row)?;

        for vertex in cells.iter().rev() {
            write!(f, "  {}", if vertex.south() { 'v' } else { '^' })?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Lattice {
    /// Draw the lattice with the highest row at the top and the highest column
    /// at the left, one crossing `x` per cell with its four arrows around it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in (0..self.columns).rev() {
            write!(f, "  {}", col)?;
        }
        writeln!(f)?;
        for row in (0..self.rows).rev() {
            self.write_row(f, row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SHAPES;

    #[test]
    fn test_new_is_empty_cells() {
        let lattice = Lattice::new(2, 3);
        assert_eq!(lattice.rows(), 2);
        assert_eq!(lattice.columns(), 3);
        assert_eq!(lattice.len(), 6);
        assert!(lattice.iter().all(|(_, _, v)| v == Vertex::EMPTY));
    }

    #[test]
    fn test_set_and_get() {
        let mut lattice = Lattice::new(2, 2);
        lattice.set(1, 0, SHAPES[3]);
        assert_eq!(lattice.get(1, 0), SHAPES[3]);
        assert_eq!(lattice.get(0, 1), Vertex::EMPTY);
        assert_eq!(lattice.try_get(2, 0), None);
        assert_eq!(lattice.row(1), &[SHAPES[3], Vertex::EMPTY]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        Lattice::new(2, 2).get(0, 2);
    }

    #[test]
    fn test_position_is_row_major() {
        let lattice = Lattice::new(3, 4);
        assert_eq!(lattice.position(0), (0, 0));
        assert_eq!(lattice.position(5), (1, 1));
        assert_eq!(lattice.position(11), (2, 3));
    }

    #[test]
    fn test_from_rows() {
        let lattice = Lattice::from_rows(vec![vec![SHAPES[0], SHAPES[1]], vec![SHAPES[2], SHAPES[3]]])
            .unwrap();
        assert_eq!(lattice.get(0, 1), SHAPES[1]);
        assert_eq!(lattice.get(1, 0), SHAPES[2]);
        assert!(Lattice::from_rows(vec![vec![SHAPES[0]], vec![]]).is_none());
    }

    #[test]
    fn test_display_single_path() {
        // The only admissible 3x3 lattice with one terminal at row 2 / column 2.
        let sw = SHAPES[2];
        let se = SHAPES[4];
        let ns = SHAPES[0];
        let lattice = Lattice::from_rows(vec![
            vec![se, se, se],
            vec![se, se, se],
            vec![sw, sw, ns],
        ])
        .unwrap();
        let expected = "  2  1  0\n\
                        \x20 ^  v  v\n\
                        >>x<<x<<x< x2\n\
                        \x20 v  v  v\n\
                        \x20 v  v  v\n\
                        >>x>>x>>x> x1\n\
                        \x20 v  v  v\n\
                        \x20 v  v  v\n\
                        >>x>>x>>x> x0\n\
                        \x20 v  v  v\n";
        assert_eq!(format!("{}", lattice), expected);
    }
}
