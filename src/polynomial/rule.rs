// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Local weight rules: the contribution of one cell to its lattice's weight.

use crate::geometry::{Direction, Vertex};
use crate::polynomial::WeightVector;

/// Maps one cell to its local weight.
///
/// The returned vector must have `total_rows + 1` slots (see
/// [`WeightVector::zero`]). Any `Fn(Vertex, usize, usize) -> WeightVector`
/// is a rule.
pub trait WeightRule {
    /// Weight of `vertex` sitting in row `row` of a lattice with `total_rows` rows.
    fn local_weight(&self, vertex: Vertex, row: usize, total_rows: usize) -> WeightVector;
}

impl<F> WeightRule for F
where
    F: Fn(Vertex, usize, usize) -> WeightVector,
{
    fn local_weight(&self, vertex: Vertex, row: usize, total_rows: usize) -> WeightVector {
        self(vertex, row, total_rows)
    }
}

/// The six-vertex Boltzmann weight.
///
/// - East enters, West exits (horizontal pass-through): `x{row}`
/// - otherwise West exits, South enters (left turn): `x{row}`
/// - otherwise North exits, East enters: the constant term
/// - anything else contributes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct BoltzmannWeight;

impl WeightRule for BoltzmannWeight {
    fn local_weight(&self, vertex: Vertex, row: usize, total_rows: usize) -> WeightVector {
        let mut weight = WeightVector::zero(total_rows);
        if vertex.enters(Direction::East) && vertex.exits(Direction::West) {
            weight.add_exponent(row, 1);
        } else if vertex.exits(Direction::West) && vertex.enters(Direction::South) {
            weight.add_exponent(row, 1);
        } else if vertex.exits(Direction::North) && vertex.enters(Direction::East) {
            weight.set_coefficient(1);
        }
        weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SHAPES;

    #[test]
    fn test_boltzmann_weights_of_shapes() {
        let rule = BoltzmannWeight;
        let weights: Vec<Vec<i64>> = SHAPES
            .iter()
            .map(|&v| rule.local_weight(v, 1, 2).into())
            .collect();
        assert_eq!(
            weights,
            vec![
                vec![1, 0, 0], // N+S: North exits, East enters
                vec![0, 0, 0], // N+E
                vec![0, 0, 1], // S+W: pass-through
                vec![0, 0, 1], // E+W: left turn
                vec![0, 0, 0], // S+E
            ]
        );
    }

    #[test]
    fn test_closure_rule() {
        let rule = |_v: Vertex, row: usize, rows: usize| {
            let mut w = WeightVector::zero(rows);
            w.add_exponent(row, 2);
            w
        };
        assert_eq!(rule.local_weight(SHAPES[0], 0, 1).as_slice(), &[0, 2]);
    }
}
