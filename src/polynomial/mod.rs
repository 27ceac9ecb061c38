// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lattice weights and the partition function.
//!
//! - [`WeightVector`]: one monomial (coefficient + exponent per row)
//! - [`WeightRule`]: per-cell local weight, with [`BoltzmannWeight`] as the canonical rule
//! - [`lattice_weight`]: accumulate a rule over a lattice
//! - [`merge`] / [`PartitionFunction`]: combine equal monomials

pub mod accumulate;
pub mod merge;
pub mod rule;
pub mod vector;

pub use accumulate::lattice_weight;
pub use merge::{merge, PartitionFunction};
pub use rule::{BoltzmannWeight, WeightRule};
pub use vector::WeightVector;
