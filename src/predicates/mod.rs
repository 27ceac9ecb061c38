// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The enumeration program is a fixed sequence of these predicates, see
//! [`crate::partition`].
//!
//! # Organization
//!
//! - `cells`: CellPredicate, the only choice point, fills the grid
//! - `validate`: ValidatePredicate, rejects completed lattices
//! - `weigh`: WeighPredicate, records the weight of an accepted lattice
//! - `report`: ReportPredicate, hands accepted lattices to an observer
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod cells;
pub mod report;
pub mod validate;
pub mod weigh;

pub use cells::CellPredicate;
pub use report::ReportPredicate;
pub use validate::ValidatePredicate;
pub use weigh::WeighPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing backtracking into the last choice point. Ending the
/// program with it makes the engine visit every lattice.
///
/// # Example
///
/// ```
/// use ice_lattice::context::SearchContext;
/// use ice_lattice::engine::EngineBuilder;
/// use ice_lattice::geometry::{Boundary, Lattice};
/// use ice_lattice::predicates::{CellPredicate, FailPredicate};
///
/// let mut ctx = SearchContext::new(Lattice::new(2, 2), Boundary::closed(2, 2));
/// let engine = EngineBuilder::new()
///     .add(Box::new(CellPredicate::new(0)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Every filling is tried, then the engine is consumed.
/// assert!(engine.search(&mut ctx).is_none());
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Hands control back to the caller with the engine state intact, e.g. to
/// inspect one lattice at a time.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_results() {
        let mut ctx = SearchContext::default();
        assert_eq!(FailPredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(SuspendPredicate.try_pred(&mut ctx, 3), PredicateResult::Suspend);
        assert_eq!(FailPredicate.name(), "Fail");
        assert_eq!(SuspendPredicate.name(), "Suspend");
    }
}
