// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compass direction naming one side of a lattice cell.
//!
//! Each vertex of the ice model has four sides. The lattice convention is:
//! - North points towards higher row indices (the output terminals sit above the last row)
//! - West points towards higher column indices
//! - South and East point back towards row 0 and column 0
//!
//! This matches the rendering, which draws the highest row at the top and the
//! highest column at the left.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One side of a lattice cell.
///
/// The discriminant doubles as the bit index used by [`Vertex`](crate::geometry::Vertex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// The side of the neighbouring cell that shares this edge.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Get the bit index of this side.
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Single-letter name, as used by the vertex `Display`.
    pub fn to_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}
