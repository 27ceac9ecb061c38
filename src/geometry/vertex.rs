// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex type for the per-cell flow state.
//!
//! A vertex records, for each of the four sides of a cell, whether flow exits
//! (flag set) or enters (flag clear) through that side. Legal ice-model
//! vertices have exactly two sides set, and the North+West shape is forbidden,
//! leaving five shapes.
//!
//! # Examples
//!
//! ```
//! use ice_lattice::geometry::{Direction, Vertex, SHAPES};
//!
//! let v = Vertex::from_flags(true, false, true, false);
//! assert!(v.exits(Direction::North));
//! assert!(v.enters(Direction::East));
//! assert_eq!(format!("{}", v), "|NS|");
//! assert_eq!(SHAPES[0], v);
//! ```

use crate::geometry::Direction;
use std::fmt;
use strum::IntoEnumIterator;

/// Number of legal vertex shapes.
pub const NSHAPES: usize = 5;

/// Flow state of one cell, stored as a 4-bit set indexed by [`Direction::bit`].
///
/// Construction does not enforce the two-flag invariant: partially filled
/// lattices hold [`Vertex::EMPTY`], and the validator rejects anything else
/// that is illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vertex(u8);

const N: u8 = 1 << 0;
const E: u8 = 1 << 1;
const S: u8 = 1 << 2;
const W: u8 = 1 << 3;

/// The five legal shapes in canonical search order.
pub const SHAPES: [Vertex; NSHAPES] = [
    Vertex(N | S),
    Vertex(N | E),
    Vertex(S | W),
    Vertex(E | W),
    Vertex(S | E),
];

impl Vertex {
    /// Vertex with every side entering (an unwritten cell).
    pub const EMPTY: Vertex = Vertex(0);

    /// Build a vertex from its four flags, `true` meaning flow exits that side.
    pub const fn from_flags(north: bool, east: bool, south: bool, west: bool) -> Self {
        Self((north as u8) | (east as u8) << 1 | (south as u8) << 2 | (west as u8) << 3)
    }

    /// Does flow exit through this side?
    pub fn exits(self, side: Direction) -> bool {
        (self.0 >> side.bit()) & 1 != 0
    }

    /// Does flow enter through this side?
    pub fn enters(self, side: Direction) -> bool {
        !self.exits(side)
    }

    pub fn north(self) -> bool {
        self.exits(Direction::North)
    }

    pub fn east(self) -> bool {
        self.exits(Direction::East)
    }

    pub fn south(self) -> bool {
        self.exits(Direction::South)
    }

    pub fn west(self) -> bool {
        self.exits(Direction::West)
    }

    /// Number of sides through which flow exits.
    pub fn exit_count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The North+West-only shape, which never appears in a valid lattice.
    pub fn is_forbidden(self) -> bool {
        self.0 == N | W
    }

    /// Two exits and not the forbidden shape.
    pub fn is_legal(self) -> bool {
        self.exit_count() == 2 && !self.is_forbidden()
    }

    /// Get the raw bits.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Vertex {
    /// Format the exiting sides as "|NS|".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for side in Direction::iter().filter(|&side| self.exits(side)) {
            write!(f, "{}", side.to_char())?;
        }
        write!(f, "|")
    }
}

/// A subset of [`SHAPES`], bit i meaning `SHAPES[i]` is present.
///
/// Iteration follows the canonical shape order, which fixes the order in
/// which the search discovers configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShapeSet(u8);

impl ShapeSet {
    /// Create an empty shape set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All five legal shapes.
    pub const fn all() -> Self {
        Self((1 << NSHAPES) - 1)
    }

    /// Keep only the shapes satisfying `keep`.
    pub fn filter(self, keep: impl Fn(Vertex) -> bool) -> Self {
        let mut bits = self.0;
        for (i, &shape) in SHAPES.iter().enumerate() {
            if !keep(shape) {
                bits &= !(1 << i);
            }
        }
        Self(bits)
    }

    pub fn contains(self, vertex: Vertex) -> bool {
        self.iter().any(|shape| shape == vertex)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The `choice`-th shape in canonical order.
    pub fn nth(self, choice: usize) -> Option<Vertex> {
        self.iter().nth(choice)
    }

    /// Iterate over the shapes in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Vertex> {
        SHAPES
            .into_iter()
            .enumerate()
            .filter(move |(i, _)| (self.0 >> i) & 1 != 0)
            .map(|(_, shape)| shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        let v = Vertex::from_flags(false, true, true, false);
        assert!(!v.north());
        assert!(v.east());
        assert!(v.south());
        assert!(!v.west());
        assert_eq!(v, SHAPES[4]);
    }

    #[test]
    fn test_empty_vertex_enters_everywhere() {
        for side in Direction::iter() {
            assert!(Vertex::EMPTY.enters(side));
        }
        assert_eq!(Vertex::default(), Vertex::EMPTY);
        assert!(!Vertex::EMPTY.is_legal());
    }

    #[test]
    fn test_shapes_are_the_legal_vertices() {
        let legal: Vec<Vertex> = (0u8..16).map(Vertex).filter(|v| v.is_legal()).collect();
        assert_eq!(legal.len(), NSHAPES);
        for shape in SHAPES {
            assert!(legal.contains(&shape));
            assert_eq!(shape.exit_count(), 2);
        }
    }

    #[test]
    fn test_forbidden_shape() {
        let nw = Vertex::from_flags(true, false, false, true);
        assert!(nw.is_forbidden());
        assert!(!nw.is_legal());
        assert!(!SHAPES.contains(&nw));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Vertex::EMPTY), "||");
        assert_eq!(format!("{}", SHAPES[2]), "|SW|");
        assert_eq!(format!("{}", SHAPES[3]), "|EW|");
    }

    #[test]
    fn test_shape_set_all() {
        let all = ShapeSet::all();
        assert_eq!(all.len(), NSHAPES);
        let shapes: Vec<Vertex> = all.iter().collect();
        assert_eq!(shapes, SHAPES.to_vec());
    }

    #[test]
    fn test_shape_set_filter_keeps_order() {
        let exits_south = ShapeSet::all().filter(|v| v.south());
        let shapes: Vec<Vertex> = exits_south.iter().collect();
        assert_eq!(shapes, vec![SHAPES[0], SHAPES[2], SHAPES[4]]);
        assert_eq!(exits_south.nth(1), Some(SHAPES[2]));
        assert_eq!(exits_south.nth(3), None);
        assert!(exits_south.contains(SHAPES[4]));
        assert!(!exits_south.contains(SHAPES[1]));
    }

    #[test]
    fn test_shape_set_empty() {
        let none = ShapeSet::all().filter(|_| false);
        assert!(none.is_empty());
        assert_eq!(none, ShapeSet::empty());
        assert_eq!(none.iter().count(), 0);
    }
}
