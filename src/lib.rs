// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of six-vertex (square ice) lattice configurations.
//!
//! Given a rows x columns grid and a boundary declaring which rows inject a
//! flow on the left and which columns extract one at the top, the search
//! finds every assignment of in/out arrows to the cells that obeys the ice
//! rule, weighs each admissible lattice with a Boltzmann weight monomial,
//! and merges the weights into the partition function.
//!
//! # Architecture
//!
//! ## Geometry
//!
//! A [`Vertex`](geometry::Vertex) records, for each compass side, whether the
//! flow exits through it. Only the five shapes in
//! [`SHAPES`](geometry::SHAPES) are ever placed. The [`Lattice`](geometry::Lattice)
//! is a row-major grid of vertices and the [`Boundary`](geometry::Boundary)
//! holds the terminal declarations.
//!
//! ## Search
//!
//! The enumeration is a program for the non-deterministic [`engine`]:
//!
//! 1. **CellPredicate**: one round per cell; each round offers the locally
//!    consistent shapes as choices
//! 2. **ValidatePredicate**: re-checks the completed lattice globally
//! 3. **WeighPredicate** / **ReportPredicate**: record and report it
//! 4. **FailPredicate**: forces backtracking until every filling is tried
//!
//! Each cell is written by exactly one round and overwritten by the next
//! choice, so backtracking needs no trail.
//!
//! ## Polynomials
//!
//! A [`WeightVector`](polynomial::WeightVector) holds one monomial: a
//! coefficient and one exponent per row variable. Merging sums the
//! coefficients of equal monomials into a
//! [`PartitionFunction`](polynomial::PartitionFunction).
//!
//! # Example
//!
//! ```
//! use ice_lattice::geometry::Boundary;
//! use ice_lattice::PartitionSearch;
//!
//! let boundary = Boundary::parse("tf", "ft").unwrap();
//! let result = PartitionSearch::new(2, 2, boundary).run();
//! assert_eq!(result.partition_function().to_string(), "x1 + x0");
//! ```

pub mod config;
pub mod constraints;
pub mod context;
pub mod engine;
pub mod geometry;
pub mod partition;
pub mod polynomial;
pub mod predicates;
pub mod state;

// Re-export commonly used types
pub use config::{PathCheck, SearchConfig};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use partition::{enumerate, find_partition_function, Enumeration, PartitionSearch};
pub use polynomial::{PartitionFunction, WeightVector};
