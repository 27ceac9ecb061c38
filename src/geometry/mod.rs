// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for ice-model lattices.
//!
//! This module contains type-safe representations of the lattice primitives:
//! - Direction: the four sides of a cell
//! - Vertex: per-cell flow state (bitset over directions)
//! - ShapeSet: bitset over the five legal vertex shapes
//! - Lattice: row-major grid of vertices
//! - Boundary: input/output terminal declarations

pub mod boundary;
pub mod direction;
pub mod lattice;
pub mod vertex;

// Re-export for convenience
pub use boundary::{Boundary, BoundaryError};
pub use direction::Direction;
pub use lattice::Lattice;
pub use vertex::{ShapeSet, Vertex, NSHAPES, SHAPES};
