// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ValidatePredicate - the global check on a completed lattice.

use crate::constraints::validate;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use tracing::trace;

/// Succeeds on a valid lattice, otherwise counts the failure kind and fails.
#[derive(Debug)]
pub struct ValidatePredicate;

impl Predicate for ValidatePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match validate(ctx.lattice(), &ctx.boundary, ctx.config.path_check) {
            Ok(()) => PredicateResult::Success,
            Err(failure) => {
                trace!(%failure, "rejected lattice");
                ctx.statistics.record_failure(&failure);
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "Validate"
    }
}
