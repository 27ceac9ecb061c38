// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CellPredicate - fills the lattice one cell per round.
//!
//! Round `r` fills cell `start + r` in row-major order. The candidate set for
//! a round is computed once in try_pred and kept so that retry_pred can map a
//! choice index back to a shape.

use crate::constraints::candidates;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::ShapeSet;
use crate::state::Counters;

/// The choice point of the enumeration.
///
/// # Choices
///
/// For each cell, choice `i` is the `i`-th locally consistent shape in the
/// canonical order (N+S, N+E, S+W, E+W, S+E). A cell with no consistent
/// shape is a dead branch: the predicate fails and counts it.
#[derive(Debug)]
pub struct CellPredicate {
    start: usize,
    choices: Vec<ShapeSet>,
}

impl CellPredicate {
    /// Fill cells `start..` of the context's lattice. Earlier cells are left
    /// as the caller set them.
    pub fn new(start: usize) -> Self {
        Self {
            start,
            choices: Vec::new(),
        }
    }
}

impl Predicate for CellPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let index = self.start + round;
        if index >= ctx.cell_count() {
            // Only reached when nothing was left to fill.
            return PredicateResult::Success;
        }

        let (row, col) = ctx.lattice().position(index);
        let shapes = candidates(ctx.lattice(), row, col, &ctx.boundary);
        if shapes.is_empty() {
            ctx.statistics.increment_counter(Counters::DeadBranches);
            return PredicateResult::Failure;
        }

        if self.choices.len() <= round {
            self.choices.resize(round + 1, ShapeSet::empty());
        }
        self.choices[round] = shapes;
        PredicateResult::Choices(shapes.len())
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let Some(vertex) = self.choices[round].nth(choice) else {
            return PredicateResult::Failure;
        };
        let index = self.start + round;
        let (row, col) = ctx.lattice().position(index);
        ctx.state.lattice.set(row, col, vertex);

        if index + 1 < ctx.cell_count() {
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Success
        }
    }

    fn name(&self) -> &str {
        "Cell"
    }
}
