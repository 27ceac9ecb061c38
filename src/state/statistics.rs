// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods.

use crate::constraints::{ValidationFailure, ValidationFailureKind};
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Completely filled lattices reaching validation.
    Leaves,
    /// Lattices accepted by validation.
    ValidLattices,
    /// Cells for which no candidate shape remained.
    DeadBranches,
}

const COUNT: usize = Counters::COUNT + ValidationFailureKind::COUNT;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one rejected lattice under its failure kind.
    pub(crate) fn record_failure(&mut self, failure: &ValidationFailure) {
        self.stats[Counters::COUNT + failure.kind() as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of lattices rejected for the given reason.
    pub fn failures(&self, kind: ValidationFailureKind) -> u64 {
        self.stats[Counters::COUNT + kind as usize]
    }

    /// Number of lattices rejected for any reason.
    pub fn total_failures(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            let statistics = &mut ctx.statistics;
            statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
