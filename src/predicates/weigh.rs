// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! WeighPredicate - records the weight of an accepted lattice.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::polynomial::{lattice_weight, WeightRule};
use std::fmt;
use tracing::debug;

/// Pushes the lattice weight under its rule onto the context's weights.
pub struct WeighPredicate {
    rule: Box<dyn WeightRule>,
}

impl WeighPredicate {
    pub fn new(rule: Box<dyn WeightRule>) -> Self {
        Self { rule }
    }
}

impl fmt::Debug for WeighPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeighPredicate").finish_non_exhaustive()
    }
}

impl Predicate for WeighPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let weight = lattice_weight(ctx.lattice(), self.rule.as_ref());
        debug!(%weight, index = ctx.state.weights.len(), "accepted lattice");
        ctx.state.weights.push(weight);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Weigh"
    }
}
