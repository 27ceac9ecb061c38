// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::geometry::Lattice;
use crate::polynomial::{WeightRule, WeightVector};

/// Total weight of a lattice: the local weights of all cells, accumulated.
///
/// The result has `lattice.rows() + 1` slots. Cell order does not matter.
pub fn lattice_weight(lattice: &Lattice, rule: &dyn WeightRule) -> WeightVector {
    let rows = lattice.rows();
    let mut weight = WeightVector::zero(rows);
    for (row, _col, vertex) in lattice.iter() {
        weight.accumulate(&rule.local_weight(vertex, row, rows));
    }
    weight
}
