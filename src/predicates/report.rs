// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ReportPredicate - passes each accepted lattice to an observer.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::Lattice;
use crate::polynomial::WeightVector;
use std::fmt;

/// Callback invoked with an accepted lattice and its weight.
pub type LeafObserver = Box<dyn FnMut(&Lattice, &WeightVector)>;

/// Calls the observer with the lattice and the most recently pushed weight.
///
/// Must follow [`WeighPredicate`](crate::predicates::WeighPredicate) in the
/// program; without a weight it does nothing.
pub struct ReportPredicate {
    observer: LeafObserver,
}

impl ReportPredicate {
    pub fn new(observer: LeafObserver) -> Self {
        Self { observer }
    }
}

impl fmt::Debug for ReportPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportPredicate").finish_non_exhaustive()
    }
}

impl Predicate for ReportPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if let Some(weight) = ctx.state.weights.last() {
            (self.observer)(&ctx.state.lattice, weight);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Report"
    }
}
